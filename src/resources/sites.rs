//! Site resource.
//!
//! # Endpoints
//!
//! - `GET /sites` - list the sites the token can access
//! - `GET /sites/{site_id}` - fetch one site
//! - `POST /sites/{site_id}/publish` - queue a publish to the given domains
//!
//! # Example
//!
//! ```rust,ignore
//! let sites = client.sites().list(None).await?;
//! for site in &sites {
//!     println!("{} ({})", site.name, site.short_name);
//! }
//!
//! let queued = client
//!     .sites()
//!     .publish(&sites[0].id, &["example.com".to_string()])
//!     .await?;
//! assert!(queued.queued);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{add_options, HttpClient, HttpError, HttpMethod, HttpRequest, ListOptions};
use crate::resources::segment;

/// A Webflow site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// When the site was created.
    pub created_on: Option<DateTime<Utc>>,
    /// Display name.
    pub name: String,
    /// Slugified name.
    pub short_name: String,
    /// When the site was last published, if ever.
    pub last_published: Option<DateTime<Utc>>,
    /// URL of the preview image.
    pub preview_url: String,
    /// IANA time zone of the site.
    pub timezone: String,
    /// Identifier of the site's database.
    pub database: String,
}

/// Result of a publish request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSiteResponse {
    /// Whether the publish was queued.
    #[serde(default)]
    pub queued: bool,
}

#[derive(Serialize)]
struct PublishSiteRequest<'a> {
    domains: &'a [String],
}

/// Operations on sites.
#[derive(Debug, Clone, Copy)]
pub struct SitesService<'a> {
    client: &'a HttpClient,
}

impl<'a> SitesService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists all sites the access token can access.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the options cannot be encoded or the request fails.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Site>, HttpError> {
        let path = add_options("/sites", options)?;
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request_json(request).await
    }

    /// Retrieves a single site.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, site_id: &str) -> Result<Site, HttpError> {
        let path = format!("/sites/{}", segment(site_id));
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request_json(request).await
    }

    /// Publishes a site to the given domains.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn publish(
        &self,
        site_id: &str,
        domains: &[String],
    ) -> Result<PublishSiteResponse, HttpError> {
        let path = format!("/sites/{}/publish", segment(site_id));
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .json(&PublishSiteRequest { domains })
            .build()?;
        self.client.request_json(request).await
    }
}
