//! Webflow resource services.
//!
//! Each service borrows the [`HttpClient`](crate::clients::HttpClient) of a
//! [`Webflow`](crate::Webflow) client and maps one family of endpoints to
//! typed results.
//!
//! | Service | Endpoints |
//! |---------|-----------|
//! | [`SitesService`] | `/sites`, `/sites/{id}`, `/sites/{id}/publish` |
//! | [`DomainsService`] | `/sites/{id}/domains` |
//! | [`CollectionsService`] | `/sites/{id}/collections`, `/collections/{id}` |
//! | [`ItemsService`] | `/collections/{id}/items[/{item_id}]` |
//! | [`MetaService`] | `/info`, `/user` |

mod collections;
mod domains;
mod items;
mod meta;
mod sites;

use std::borrow::Cow;

pub use collections::{Collection, CollectionsService, Field, FieldValidations};
pub use domains::{Domain, DomainsService};
pub use items::{DeleteItemResponse, Item, ItemResponse, ItemsService, PageInfo};
pub use meta::MetaService;
pub use sites::{PublishSiteResponse, Site, SitesService};

/// Percent-encodes an identifier for use as one path segment.
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
