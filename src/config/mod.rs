//! Configuration types for the Webflow API client.
//!
//! # Overview
//!
//! - [`WebflowConfig`]: read-only settings shared by every request
//! - [`WebflowConfigBuilder`]: a builder for constructing [`WebflowConfig`]
//! - [`AccessToken`]: a validated API token with masked debug output
//! - [`BaseUrl`]: a validated API origin
//! - [`ApiVersion`]: the value of the `accept-version` header
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use webflow_api::{AccessToken, ApiVersion, WebflowConfig};
//!
//! let config = WebflowConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.webflow.com");
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{AccessToken, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for a Webflow API client.
///
/// Immutable once built. `Clone`, `Send` and `Sync`, so one configuration can
/// back any number of clients.
#[derive(Clone, Debug)]
pub struct WebflowConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl WebflowConfig {
    /// Creates a new builder for constructing a `WebflowConfig`.
    #[must_use]
    pub fn builder() -> WebflowConfigBuilder {
        WebflowConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API origin.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version sent in `accept-version`.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default deadline applied to every request, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WebflowConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebflowConfig>();
};

/// Builder for [`WebflowConfig`].
///
/// Only `access_token` is required.
///
/// # Defaults
///
/// - `base_url`: `https://api.webflow.com`
/// - `api_version`: [`ApiVersion::latest()`]
/// - `timeout`: `None` (no deadline unless the request sets one)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WebflowConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl WebflowConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API origin.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the default deadline for every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebflowConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<WebflowConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(WebflowConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
