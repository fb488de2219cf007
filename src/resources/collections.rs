//! Collection resource.
//!
//! A collection is the schema of a CMS table; its items are served by
//! [`ItemsService`](crate::resources::ItemsService).
//!
//! # Endpoints
//!
//! - `GET /sites/{site_id}/collections` - list collections of a site
//! - `GET /collections/{collection_id}` - fetch a collection with its full schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{add_options, HttpClient, HttpError, HttpMethod, HttpRequest, ListOptions};
use crate::resources::segment;

/// A CMS collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collection {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// When the schema was last changed.
    pub last_updated: Option<DateTime<Utc>>,
    /// When the collection was created.
    pub created_on: Option<DateTime<Utc>>,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Name of a single item.
    pub singular_name: String,
    /// Field definitions. Only populated by the single-collection endpoint.
    pub fields: Vec<Field>,
}

/// A field definition in a collection schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    /// Unique identifier.
    pub id: String,
    /// Whether the field can be edited.
    pub editable: bool,
    /// Whether a value is required.
    pub required: bool,
    /// Field type (e.g., `PlainText`, `RichText`, `ItemRef`).
    #[serde(rename = "type")]
    pub field_type: String,
    /// Key of the field inside item payloads.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Type-specific constraints.
    pub validations: Option<FieldValidations>,
}

/// Type-specific constraints on a field. Which entries appear depends on the
/// field type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValidations {
    /// Whether plain text is limited to one line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_line: Option<bool>,
    /// Maximum text length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    /// Minimum text length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Smallest allowed number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Largest allowed number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Maximum file size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
    /// Digits kept after the decimal point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<i64>,
    /// Allowed values of an `Option` field.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<serde_json::Value>,
    /// Number or date format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Number precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<i64>,
    /// Whether negative numbers are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_negative: Option<bool>,
    /// Target collection of a reference field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

/// Operations on collections.
#[derive(Debug, Clone, Copy)]
pub struct CollectionsService<'a> {
    client: &'a HttpClient,
}

impl<'a> CollectionsService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the collections of a site.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the options cannot be encoded or the request fails.
    pub async fn list(
        &self,
        site_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Collection>, HttpError> {
        let path = add_options(&format!("/sites/{}/collections", segment(site_id)), options)?;
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request_json(request).await
    }

    /// Retrieves a collection with its full schema.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, collection_id: &str) -> Result<Collection, HttpError> {
        let path = format!("/collections/{}", segment(collection_id));
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request_json(request).await
    }
}
