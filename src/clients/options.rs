//! Query string encoding for request options.
//!
//! Any `Serialize` value that serializes to a struct or map can be appended
//! to a path. Fields are emitted under their serde name, in declaration
//! order; `None` fields are left out instead of being sent as zero.
//!
//! # Example
//!
//! ```rust
//! use webflow_api::clients::{add_options, ListOptions};
//!
//! let options = ListOptions::new().offset(5).limit(10);
//! let path = add_options("/sites", Some(&options)).unwrap();
//! assert_eq!(path, "/sites?offset=5&limit=10");
//!
//! let path = add_options("/sites", Some(&ListOptions::new())).unwrap();
//! assert_eq!(path, "/sites");
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::EncodingError;

/// Pagination options shared by every list endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Maximum number of records to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl ListOptions {
    /// Creates empty options (no query parameters).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: None,
            limit: None,
        }
    }

    /// Sets the offset.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the limit.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Appends the fields of `options` to `path` as a query string.
///
/// Returns `path` unchanged when `options` is `None` or has no present
/// fields. If `path` already carries a query string the new pairs are joined
/// with `&`.
///
/// # Errors
///
/// Returns [`EncodingError`] if `options` does not serialize to a struct or
/// map, or if a field holds a nested array or object.
pub fn add_options<T>(path: &str, options: Option<&T>) -> Result<String, EncodingError>
where
    T: Serialize + ?Sized,
{
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    let value = serde_json::to_value(options).map_err(|e| EncodingError::Serialize {
        message: e.to_string(),
    })?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(path.to_string()),
        other => {
            return Err(EncodingError::NotARecord {
                kind: kind_of(&other),
            })
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(EncodingError::UnsupportedValue { field: key })
            }
        };
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(&key),
            urlencoding::encode(&value)
        ));
    }

    if pairs.is_empty() {
        return Ok(path.to_string());
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{path}{separator}{}", pairs.join("&")))
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
