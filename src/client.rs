//! The [`Webflow`] client façade.
//!
//! Owns one [`HttpClient`] and hands out borrowed resource services.

use crate::clients::{HttpClient, HttpError};
use crate::config::WebflowConfig;
use crate::resources::{
    CollectionsService, DomainsService, ItemsService, MetaService, SitesService,
};

/// Client for the Webflow Data API.
///
/// # Thread Safety
///
/// `Webflow` is `Send + Sync`. Services borrow the client, so one instance
/// can drive concurrent calls from many tasks.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::{AccessToken, Webflow, WebflowConfig};
///
/// let config = WebflowConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = Webflow::new(&config)?;
///
/// let sites = client.sites().list(None).await?;
/// let collections = client.collections().list(&sites[0].id, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Webflow {
    http_client: HttpClient,
}

// Verify Webflow is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Webflow>();
};

impl Webflow {
    /// Creates a client with its own transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &WebflowConfig) -> Result<Self, HttpError> {
        Ok(Self::with_http_client(HttpClient::new(config)?))
    }

    /// Wraps an existing [`HttpClient`].
    #[must_use]
    pub const fn with_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// The underlying request executor, for endpoints without a service.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Site listing, lookup and publishing.
    #[must_use]
    pub const fn sites(&self) -> SitesService<'_> {
        SitesService::new(&self.http_client)
    }

    /// Custom domains of a site.
    #[must_use]
    pub const fn domains(&self) -> DomainsService<'_> {
        DomainsService::new(&self.http_client)
    }

    /// Collection schemas.
    #[must_use]
    pub const fn collections(&self) -> CollectionsService<'_> {
        CollectionsService::new(&self.http_client)
    }

    /// Collection items, including live writes.
    #[must_use]
    pub const fn items(&self) -> ItemsService<'_> {
        ItemsService::new(&self.http_client)
    }

    /// Metadata about the access token.
    #[must_use]
    pub const fn meta(&self) -> MetaService<'_> {
        MetaService::new(&self.http_client)
    }
}
