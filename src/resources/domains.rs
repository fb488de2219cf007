//! Custom domains attached to a site.

use serde::{Deserialize, Serialize};

use crate::clients::{add_options, HttpClient, HttpError, HttpMethod, HttpRequest, ListOptions};
use crate::resources::segment;

/// A custom domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Host name, e.g. `example.com`.
    pub name: String,
}

/// Operations on domains.
#[derive(Debug, Clone, Copy)]
pub struct DomainsService<'a> {
    client: &'a HttpClient,
}

impl<'a> DomainsService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the custom domains of a site.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the options cannot be encoded or the request fails.
    pub async fn list(
        &self,
        site_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Domain>, HttpError> {
        let path = add_options(&format!("/sites/{}/domains", segment(site_id)), options)?;
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_domain_deserializes() {
        let domains: Vec<Domain> = serde_json::from_value(json!([
            {"_id": "589a331aa51e760df7ccb89d", "name": "test-api-domain.com"},
            {"_id": "589a331aa51e760df7ccb89e"}
        ]))
        .unwrap();

        assert_eq!(domains[0].name, "test-api-domain.com");
        assert_eq!(domains[1].id, "589a331aa51e760df7ccb89e");
        assert!(domains[1].name.is_empty());
    }
}
