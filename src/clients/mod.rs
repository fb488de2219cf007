//! HTTP client types for Webflow API communication.
//!
//! This module is the shared plumbing every resource service goes through.
//!
//! # Overview
//!
//! - [`add_options`] / [`ListOptions`]: encode options as a query string
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: describe one request
//! - [`HttpClient`]: resolve, authenticate, send, and map the response
//! - [`HttpResponse`]: status, headers, raw body, typed or dynamic decode
//! - [`HttpError`] and friends: one error kind per stage
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::clients::{add_options, HttpClient, HttpMethod, HttpRequest, ListOptions};
//!
//! let path = add_options("/sites", Some(&ListOptions::new().limit(10)))?;
//! let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
//! let response = client.request(request).await?;
//! println!("Status {}: {}", response.code, response.text());
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call performs exactly one round trip and returns the first
//! error it meets.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod options;

pub use errors::{ApiError, EncodingError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ACCEPT_VERSION_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use options::{add_options, ListOptions};
