//! # Webflow API Rust Client
//!
//! An async client for the Webflow Data API: sites, domains, collections,
//! collection items and token metadata.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WebflowConfig`] and [`WebflowConfigBuilder`]
//! - Validated newtypes for the access token, base URL and API version
//! - A request executor ([`HttpClient`]) with deadlines and cancellation
//! - Typed resource services reached through the [`Webflow`] client
//! - Query string encoding for list and publish options
//!
//! ## Quick Start
//!
//! ```rust
//! use webflow_api::{AccessToken, ApiVersion, WebflowConfig};
//!
//! let config = WebflowConfig::builder()
//!     .access_token(AccessToken::new("your-api-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use serde_json::json;
//! use webflow_api::{Item, ListOptions, Webflow};
//!
//! let client = Webflow::new(&config)?;
//!
//! let sites = client.sites().list(None).await?;
//! let collections = client.collections().list(&sites[0].id, None).await?;
//!
//! let page = client
//!     .items()
//!     .list(&collections[0].id, Some(&ListOptions::new().limit(10)))
//!     .await?;
//! println!("{} of {} items", page.page_info.count, page.page_info.total);
//!
//! let item: Item = serde_json::from_value(json!({
//!     "fields": {"name": "Hello", "slug": "hello", "_archived": false, "_draft": false}
//! }))?;
//! let created: Item = client.items().create_live(&collections[0].id, &item).await?;
//! ```
//!
//! ## Errors
//!
//! Configuration problems surface as [`ConfigError`] when the configuration is
//! built. Everything after that is an [`HttpError`]; a non-2xx answer from
//! Webflow is [`HttpError::Api`] carrying an [`ApiError`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One round trip**: No retries, no partial results

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use client::Webflow;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, BaseUrl, WebflowConfig, WebflowConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    add_options, ApiError, EncodingError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError, ListOptions, RateLimit,
};

// Re-export resource types
pub use resources::{
    Collection, DeleteItemResponse, Domain, Field, FieldValidations, Item, ItemResponse,
    PageInfo, PublishSiteResponse, Site,
};
