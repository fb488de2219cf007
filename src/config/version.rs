//! Webflow API version definitions.
//!
//! The version is sent in the `accept-version` header on every request.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Webflow API revision targeted by the client.
///
/// The Data API v1 is selected with `accept-version: 1.0.0`. Any other
/// `MAJOR.MINOR.PATCH` string is accepted as [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use webflow_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "1.0.0");
///
/// let version: ApiVersion = "1.0.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Data API v1 (`1.0.0`).
    #[default]
    V1,
    /// Any other version string, sent verbatim.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version the resource models in this crate are written for.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns the header value for this version.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "1.0.0",
            Self::Custom(version) => version,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let parts: Vec<&str> = s.split('.').collect();
        parts.len() == 3
            && parts
                .iter()
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "1.0.0" => Ok(Self::V1),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
