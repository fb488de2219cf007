//! HTTP-specific error types for the Webflow API client.
//!
//! # Error Handling
//!
//! Each stage of a call has its own error type, and all of them fold into
//! [`HttpError`]:
//!
//! - [`EncodingError`]: options could not be turned into a query string
//! - [`InvalidHttpRequestError`]: the request could not be built
//! - [`HttpError::Transport`]: network, DNS or TLS failure
//! - [`HttpError::Timeout`] / [`HttpError::Cancelled`]: the call was aborted
//! - [`HttpError::Decode`]: a 2xx body did not match the expected shape
//! - [`ApiError`]: the API answered with a non-2xx status
//!
//! No layer retries; the first error is returned to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::HttpError;
//!
//! match client.sites().get("580e63e98c9a982ac9b8b741").await {
//!     Ok(site) => println!("Site: {}", site.name),
//!     Err(HttpError::Api(e)) if e.code == 404 => println!("No such site"),
//!     Err(HttpError::Timeout { timeout }) => println!("Gave up after {timeout:?}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Error returned when the API answers with a status outside 200-299.
///
/// `message` is taken from the structured error payload when the body decodes
/// as one; otherwise it is the raw body text.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::ApiError;
///
/// let error = ApiError {
///     code: 404,
///     message: "Requested resource not found".to_string(),
///     error_code: Some("404".to_string()),
///     name: Some("NotFound".to_string()),
///     body: String::new(),
///     request_id: None,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "Webflow API error 404: Requested resource not found"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Webflow API error {code}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message, decoded or raw.
    pub message: String,
    /// The `code` field of the error payload, if any.
    pub error_code: Option<String>,
    /// The `name` field of the error payload, if any.
    pub name: Option<String>,
    /// The raw response body.
    pub body: String,
    /// The `X-Request-Id` header value, if the server sent one.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx response.
    ///
    /// v1 endpoints put the text in `msg`; newer gateways use `message`.
    /// Each field is read on its own, so one field of an unexpected type
    /// does not discard the others.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let body = response.text().into_owned();
        let payload = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
        let text = |key: &str| payload.get(key).and_then(Value::as_str).map(String::from);

        let message = text("message")
            .or_else(|| text("msg"))
            .unwrap_or_else(|| body.clone());
        let error_code = payload.get("code").and_then(|code| match code {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });

        Self {
            code: response.code,
            message,
            error_code,
            name: text("name"),
            body,
            request_id: response.request_id().map(String::from),
        }
    }
}

/// Error returned when an options value cannot be encoded as a query string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The options value is not a struct or map.
    #[error("Query options must be a struct or map, got {kind}.")]
    NotARecord {
        /// The JSON kind the value serialized to.
        kind: &'static str,
    },

    /// A field holds a nested array or object.
    #[error("Query option '{field}' must be a scalar value.")]
    UnsupportedValue {
        /// The external name of the offending field.
        field: String,
    },

    /// The options value failed to serialize.
    #[error("Failed to serialize query options: {message}")]
    Serialize {
        /// The serializer's error message.
        message: String,
    },
}

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {message}")]
    BodySerialization {
        /// The serializer's error message.
        message: String,
    },

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// The outbound request could not be assembled (bad URL or header).
    #[error("Malformed request: {message}")]
    Malformed {
        /// A description of the problem.
        message: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Query options could not be encoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The deadline elapsed before a response arrived.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The deadline that elapsed.
        timeout: Duration,
    },

    /// The caller cancelled the request.
    #[error("Request was cancelled")]
    Cancelled,

    /// A 2xx body could not be decoded into the expected shape.
    #[error("Failed to decode response body: {source}")]
    Decode {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// The raw response body.
        body: String,
    },
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
