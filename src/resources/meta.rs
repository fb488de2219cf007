//! Token metadata.
//!
//! Both endpoints return payloads whose shape depends on the kind of token,
//! so they are surfaced as dynamic JSON.

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};

/// Operations describing the current access token.
#[derive(Debug, Clone, Copy)]
pub struct MetaService<'a> {
    client: &'a HttpClient,
}

impl<'a> MetaService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Returns the grants and scope of the access token (`GET /info`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn authorization_info(&self) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/info").build()?;
        self.client.request_value(request).await
    }

    /// Returns the user who authorized the access token (`GET /user`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn authorized_user(&self) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/user").build()?;
        self.client.request_value(request).await
    }
}
