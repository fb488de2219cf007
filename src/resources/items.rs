//! Collection item resource.
//!
//! Items are schemaless from the client's point of view: their fields are
//! whatever the collection defines, so an [`Item`] is a JSON object map.
//!
//! # Endpoints
//!
//! - `GET /collections/{collection_id}/items` - paginated listing
//! - `GET /collections/{collection_id}/items/{item_id}` - one item, wrapped in a listing
//! - `POST /collections/{collection_id}/items` - create
//! - `PUT /collections/{collection_id}/items/{item_id}` - replace
//! - `PATCH /collections/{collection_id}/items/{item_id}` - update selected fields
//! - `DELETE /collections/{collection_id}/items/{item_id}` - delete
//!
//! The `*_live` variants append `live=true` so the change is published
//! immediately.
//!
//! # Pagination
//!
//! ```rust,ignore
//! let mut options = ListOptions::new().limit(100);
//! loop {
//!     let page = client.items().list("collection-id", Some(&options)).await?;
//!     for item in &page.items {
//!         println!("{}", item["name"]);
//!     }
//!     match page.page_info.next_options() {
//!         Some(next) => options = next,
//!         None => break,
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{add_options, HttpClient, HttpError, HttpMethod, HttpRequest, ListOptions};
use crate::resources::segment;

/// A collection item: field slug to value.
pub type Item = Map<String, Value>;

/// Pagination metadata returned beside list results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    /// Number of records in this page.
    pub count: u64,
    /// Page size requested.
    pub limit: u64,
    /// Offset of the first record in this page.
    pub offset: u64,
    /// Total number of records.
    pub total: u64,
}

impl PageInfo {
    /// Returns `true` if records remain after this page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_offset().is_some()
    }

    /// Options requesting the page after this one, or `None` on the last page.
    #[must_use]
    pub fn next_options(&self) -> Option<ListOptions> {
        let next = ListOptions::new().offset(self.next_offset()?);
        Some(if self.limit > 0 {
            next.limit(self.limit)
        } else {
            next
        })
    }

    /// Offset of the first record after this page, if any remain.
    const fn next_offset(&self) -> Option<u64> {
        if self.count == 0 {
            return None;
        }
        match self.offset.checked_add(self.count) {
            Some(end) if end < self.total => Some(end),
            _ => None,
        }
    }
}

/// A page of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemResponse {
    /// Items in this page.
    pub items: Vec<Item>,
    /// Pagination metadata, sent beside `items` on the wire.
    #[serde(flatten)]
    pub page_info: PageInfo,
}

/// Result of deleting an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteItemResponse {
    /// Number of items deleted.
    pub deleted: u64,
}

#[derive(Serialize)]
struct LiveQuery {
    live: bool,
}

const LIVE: LiveQuery = LiveQuery { live: true };

/// Operations on collection items.
#[derive(Debug, Clone, Copy)]
pub struct ItemsService<'a> {
    client: &'a HttpClient,
}

impl<'a> ItemsService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists a page of items.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the options cannot be encoded or the request fails.
    pub async fn list(
        &self,
        collection_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<ItemResponse, HttpError> {
        let path = add_options(&collection_path(collection_id), options)?;
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request_json(request).await
    }

    /// Retrieves one item. The API answers with a single-entry listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, collection_id: &str, item_id: &str) -> Result<ItemResponse, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, item_path(collection_id, item_id)).build()?;
        self.client.request_json(request).await
    }

    /// Creates an item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, collection_id: &str, item: &Item) -> Result<Item, HttpError> {
        self.write(HttpMethod::Post, collection_path(collection_id), item, false)
            .await
    }

    /// Creates an item and publishes it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_live(&self, collection_id: &str, item: &Item) -> Result<Item, HttpError> {
        self.write(HttpMethod::Post, collection_path(collection_id), item, true)
            .await
    }

    /// Replaces an item with the given fields.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(
        &self,
        collection_id: &str,
        item_id: &str,
        item: &Item,
    ) -> Result<Item, HttpError> {
        self.write(HttpMethod::Put, item_path(collection_id, item_id), item, false)
            .await
    }

    /// Replaces an item and publishes the change.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_live(
        &self,
        collection_id: &str,
        item_id: &str,
        item: &Item,
    ) -> Result<Item, HttpError> {
        self.write(HttpMethod::Put, item_path(collection_id, item_id), item, true)
            .await
    }

    /// Updates only the given fields of an item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn patch(
        &self,
        collection_id: &str,
        item_id: &str,
        item: &Item,
    ) -> Result<Item, HttpError> {
        self.write(HttpMethod::Patch, item_path(collection_id, item_id), item, false)
            .await
    }

    /// Updates only the given fields of an item and publishes the change.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn patch_live(
        &self,
        collection_id: &str,
        item_id: &str,
        item: &Item,
    ) -> Result<Item, HttpError> {
        self.write(HttpMethod::Patch, item_path(collection_id, item_id), item, true)
            .await
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(
        &self,
        collection_id: &str,
        item_id: &str,
    ) -> Result<DeleteItemResponse, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, item_path(collection_id, item_id)).build()?;
        self.client.request_json(request).await
    }

    async fn write(
        &self,
        method: HttpMethod,
        path: String,
        item: &Item,
        live: bool,
    ) -> Result<Item, HttpError> {
        let path = if live {
            add_options(&path, Some(&LIVE))?
        } else {
            path
        };
        let request = HttpRequest::builder(method, path).json(item).build()?;
        self.client.request_json(request).await
    }
}

fn collection_path(collection_id: &str) -> String {
    format!("/collections/{}/items", segment(collection_id))
}

fn item_path(collection_id: &str, item_id: &str) -> String {
    format!(
        "/collections/{}/items/{}",
        segment(collection_id),
        segment(item_id)
    )
}
