//! HTTP client for Webflow API communication.
//!
//! This module provides the [`HttpClient`] type, which resolves requests
//! against the configured base URL, attaches the authentication and version
//! headers, sends exactly one round trip, and maps the outcome to
//! [`HttpResponse`] or [`HttpError`].

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiError, HttpError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, WebflowConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the targeted API revision.
pub const ACCEPT_VERSION_HEADER: &str = "accept-version";

/// HTTP client for making requests to the Webflow API.
///
/// The client handles:
/// - Target URL construction from the configured base URL
/// - Default headers: `Authorization`, `accept-version`, `Accept`, `User-Agent`
/// - Deadlines and caller cancellation
/// - Mapping non-2xx responses to [`ApiError`]
///
/// It never retries. Resilience policy belongs to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; the configuration it holds is read-only, so
/// one instance can serve concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::{AccessToken, WebflowConfig};
/// use webflow_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = WebflowConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/info").build()?;
/// let info: serde_json::Value = client.request_value(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The transport.
    client: reqwest::Client,
    /// API origin (e.g., `https://api.webflow.com`).
    base_url: BaseUrl,
    /// Headers sent with every request.
    default_headers: HashMap<String, String>,
    /// Deadline applied when the request does not set one.
    timeout: Option<Duration>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with its own rustls-backed transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the transport cannot be
    /// initialized (e.g., TLS backend failure).
    pub fn new(config: &WebflowConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a new HTTP client on top of an existing transport.
    ///
    /// Use this to share a connection pool or to configure proxies.
    #[must_use]
    pub fn with_client(config: &WebflowConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Webflow API Rust Client v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer(),
        );
        default_headers.insert(
            ACCEPT_VERSION_HEADER.to_string(),
            config.api_version().to_string(),
        );

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            timeout: config.timeout(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the default deadline, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the outbound request without sending it.
    ///
    /// The result has the full target URL, every default header, any extra
    /// headers from `request`, and the JSON payload with
    /// `Content-Type: application/json` when a body is present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation or
    /// the URL/headers cannot be assembled.
    pub fn prepare(&self, request: &HttpRequest) -> Result<reqwest::Request, InvalidHttpRequestError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let payload = request.payload();

        let mut headers = HeaderMap::new();
        for (key, value) in &self.default_headers {
            insert_header(&mut headers, key, value)?;
        }
        if payload.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        // Extra headers go last so they replace defaults of the same name.
        for (key, value) in request.extra_headers.iter().flatten() {
            insert_header(&mut headers, key, value)?;
        }

        let mut builder = self
            .client
            .request(request.http_method.into(), url.as_str())
            .headers(headers);

        if let Some(payload) = payload {
            builder = builder.body(payload);
        }

        builder.build().map_err(malformed)
    }

    /// Sends a request and returns the response if its status is 2xx.
    ///
    /// The deadline is the request's own timeout, else the client default.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails (`Transport`)
    /// - The deadline elapses (`Timeout`)
    /// - A non-2xx response is received (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        match request.timeout.or(self.timeout) {
            Some(limit) => tokio::time::timeout(limit, self.execute(&request))
                .await
                .map_err(|_| {
                    tracing::debug!(
                        "Request {} {} timed out after {:?}",
                        request.http_method,
                        request.path,
                        limit
                    );
                    HttpError::Timeout { timeout: limit }
                })?,
            None => self.execute(&request).await,
        }
    }

    /// Sends a request, aborting as soon as `cancel` resolves.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Cancelled`] if `cancel` completes first, otherwise
    /// the same errors as [`request`](Self::request).
    pub async fn request_until<F>(
        &self,
        request: HttpRequest,
        cancel: F,
    ) -> Result<HttpResponse, HttpError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => Err(HttpError::Cancelled),
            result = self.request(request) => result,
        }
    }

    /// Sends a request and decodes the 2xx body into `T`.
    ///
    /// An empty body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request), plus [`HttpError::Decode`] if the
    /// body does not match `T`.
    pub async fn request_json<T>(&self, request: HttpRequest) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
    {
        self.request(request).await?.json()
    }

    /// Sends a request and decodes the 2xx body as a dynamic JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`request_json`](Self::request_json).
    pub async fn request_value(&self, request: HttpRequest) -> Result<serde_json::Value, HttpError> {
        self.request(request).await?.json_value()
    }

    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let outbound = self.prepare(request)?;

        tracing::debug!("Sending {} {}", request.http_method, outbound.url());

        let res = self.client.execute(outbound).await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();
        let response = HttpResponse::new(code, headers, body);

        tracing::debug!(
            "Received {} for {} {}",
            code,
            request.http_method,
            request.path
        );

        if let Some(limit) = response.rate_limit.filter(|limit| limit.is_exhausted()) {
            tracing::warn!(
                "Webflow rate limit exhausted ({} requests per window) after {} {}",
                limit.limit,
                request.http_method,
                request.path
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(ApiError::from_response(&response).into())
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

fn insert_header(
    headers: &mut HeaderMap,
    key: &str,
    value: &str,
) -> Result<(), InvalidHttpRequestError> {
    let name = HeaderName::from_bytes(key.as_bytes()).map_err(malformed)?;
    let value = HeaderValue::from_str(value).map_err(malformed)?;
    headers.insert(name, value);
    Ok(())
}

fn malformed(error: impl std::fmt::Display) -> InvalidHttpRequestError {
    InvalidHttpRequestError::Malformed {
        message: error.to_string(),
    }
}
