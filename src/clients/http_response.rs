//! HTTP response types for the Webflow API client.
//!
//! [`HttpResponse`] keeps the raw body bytes so that the caller decides the
//! destination shape: a typed model, a dynamic [`serde_json::Value`], or
//! nothing at all.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("60", "58").unwrap();
/// assert_eq!(limit.limit, 60);
/// assert_eq!(limit.remaining, 58);
/// assert!(!limit.is_exhausted());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the `X-RateLimit-Limit` and `X-RateLimit-Remaining` values.
    ///
    /// Returns `None` if either value is not a non-negative integer.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str) -> Option<Self> {
        Some(Self {
            limit: limit.trim().parse().ok()?,
            remaining: remaining.trim().parse().ok()?,
        })
    }

    /// Returns `true` when no requests are left in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// An HTTP response from the Webflow API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (a header may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Rate limit information, when the server sent it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());
        let rate_limit = first("x-ratelimit-limit")
            .zip(first("x-ratelimit-remaining"))
            .and_then(|(limit, remaining)| RateLimit::parse(limit, remaining));

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns `true` if the body is empty or whitespace only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Decodes the body into `T`.
    ///
    /// An empty body decodes to `T::default()` so that endpoints returning no
    /// content can share the typed path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is not valid JSON or does
    /// not match `T`.
    pub fn json<T>(&self) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
    {
        if self.is_empty() {
            return Ok(T::default());
        }
        serde_json::from_slice(&self.body).map_err(|source| HttpError::Decode {
            source,
            body: self.text().into_owned(),
        })
    }

    /// Decodes the body into a dynamic JSON value.
    ///
    /// An empty body decodes to [`serde_json::Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is not valid JSON.
    pub fn json_value(&self) -> Result<serde_json::Value, HttpError> {
        self.json()
    }
}
