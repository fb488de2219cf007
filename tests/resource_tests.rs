//! Integration tests for the resource services.
//!
//! Each test mounts the endpoint on a mock server and checks the method,
//! path, query string and body the service sends, and the typed result it
//! decodes.

use serde_json::json;
use webflow_api::{AccessToken, BaseUrl, HttpError, Item, ListOptions, Webflow, WebflowConfig};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Webflow {
    let config = WebflowConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Webflow::new(&config).unwrap()
}

fn item(value: serde_json::Value) -> Item {
    serde_json::from_value(value).unwrap()
}

async fn last_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    requests.last().unwrap().url.query().map(String::from)
}

// ============================================================================
// Sites
// ============================================================================

#[tokio::test]
async fn test_list_sites() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": "580e63e98c9a982ac9b8b741",
                "createdOn": "2016-10-24T19:41:29.156Z",
                "name": "api_docs_sample_json",
                "shortName": "api-docs-sample-json",
                "lastPublished": "2016-10-24T23:06:51.251Z",
                "previewUrl": "https://d1otoma47x30pg.cloudfront.net/580e63e98c9a982ac9b8b741/201610242306.png",
                "timezone": "America/Los_Angeles",
                "database": "580e63fc8c9a982ac9b8b744"
            },
            {"_id": "580ff8c3ba3e45ba9fe588bb", "name": "Copy of api_docs_sample_json"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let sites = client_for(&server).sites().list(None).await.unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].id, "580e63e98c9a982ac9b8b741");
    assert_eq!(sites[0].short_name, "api-docs-sample-json");
    assert!(sites[0].last_published.is_some());
    assert!(sites[1].last_published.is_none());
    assert_eq!(last_query(&server).await, None);
}

#[tokio::test]
async fn test_list_sites_with_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites"))
        .and(query_param("offset", "5"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions::new().offset(5).limit(10);
    let sites = client_for(&server)
        .sites()
        .list(Some(&options))
        .await
        .unwrap();

    assert!(sites.is_empty());
    assert_eq!(
        last_query(&server).await.as_deref(),
        Some("offset=5&limit=10")
    );
}

#[tokio::test]
async fn test_get_site() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "580e63e98c9a982ac9b8b741",
            "name": "api_docs_sample_json",
            "timezone": "America/Los_Angeles"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let site = client_for(&server)
        .sites()
        .get("580e63e98c9a982ac9b8b741")
        .await
        .unwrap();

    assert_eq!(site.name, "api_docs_sample_json");
    assert_eq!(site.timezone, "America/Los_Angeles");
}

#[tokio::test]
async fn test_get_missing_site_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "msg": "Requested resource not found",
            "code": 404,
            "name": "NotFound"
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).sites().get("nope").await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert!(matches!(
        error,
        HttpError::Api(ref api) if api.message == "Requested resource not found"
    ));
}

#[tokio::test]
async fn test_publish_site() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sites/s1/publish"))
        .and(body_json(json!({"domains": ["test-api-domain.com"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"queued": true})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .sites()
        .publish("s1", &["test-api-domain.com".to_string()])
        .await
        .unwrap();

    assert!(result.queued);
}

// ============================================================================
// Domains
// ============================================================================

#[tokio::test]
async fn test_list_domains() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/s1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "589a331aa51e760df7ccb89d", "name": "test-api-domain.com"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let domains = client_for(&server)
        .domains()
        .list("s1", None)
        .await
        .unwrap();

    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].name, "test-api-domain.com");
}

// ============================================================================
// Collections
// ============================================================================

#[tokio::test]
async fn test_list_collections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/s1/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": "580e63fc8c9a982ac9b8b745",
                "lastUpdated": "2016-10-24T19:42:38.929Z",
                "createdOn": "2016-10-24T19:41:48.349Z",
                "name": "Blog Posts",
                "slug": "post",
                "singularName": "Blog Post"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let collections = client_for(&server)
        .collections()
        .list("s1", None)
        .await
        .unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].slug, "post");
    assert!(collections[0].fields.is_empty());
}

#[tokio::test]
async fn test_get_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "c1",
            "name": "Blog Posts",
            "slug": "post",
            "singularName": "Blog Post",
            "fields": [
                {
                    "id": "f1",
                    "editable": true,
                    "required": true,
                    "type": "PlainText",
                    "slug": "name",
                    "name": "Name",
                    "validations": {"singleLine": true, "maxLength": 256}
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let collection = client_for(&server).collections().get("c1").await.unwrap();

    assert_eq!(collection.fields.len(), 1);
    assert_eq!(collection.fields[0].field_type, "PlainText");
    assert_eq!(
        collection.fields[0]
            .validations
            .as_ref()
            .and_then(|v| v.max_length),
        Some(256)
    );
}

// ============================================================================
// Items
// ============================================================================

fn page(ids: &[&str], offset: u64, total: u64) -> serde_json::Value {
    let items: Vec<_> = ids.iter().map(|id| json!({"_id": id})).collect();
    json!({
        "items": items,
        "count": ids.len(),
        "limit": 2,
        "offset": offset,
        "total": total
    })
}

#[tokio::test]
async fn test_list_items_follows_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections/c1/items"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["i1", "i2"], 0, 5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/collections/c1/items"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["i3", "i4"], 2, 5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/collections/c1/items"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["i5"], 4, 5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut options = ListOptions::new().offset(0).limit(2);
    let mut seen = Vec::new();

    loop {
        let response = client.items().list("c1", Some(&options)).await.unwrap();
        seen.extend(
            response
                .items
                .iter()
                .map(|item| item["_id"].as_str().unwrap().to_string()),
        );
        match response.page_info.next_options() {
            Some(next) => options = next,
            None => break,
        }
    }

    assert_eq!(seen, ["i1", "i2", "i3", "i4", "i5"]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("offset=0&limit=2"));
    assert_eq!(requests[1].url.query(), Some("offset=2&limit=2"));
}

#[tokio::test]
async fn test_get_item_returns_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections/c1/items/i1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"_id": "i1", "name": "Hello", "_archived": false}],
            "count": 1,
            "limit": 1,
            "offset": 0,
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).items().get("c1", "i1").await.unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0]["name"], "Hello");
    assert_eq!(response.page_info.total, 1);
    assert!(!response.page_info.has_next_page());
}

#[tokio::test]
async fn test_create_item() {
    let server = MockServer::start().await;
    let fields = json!({"fields": {"name": "Hello", "slug": "hello", "_archived": false, "_draft": false}});
    Mock::given(method("POST"))
        .and(path("/collections/c1/items"))
        .and(body_json(fields.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "i9",
            "name": "Hello",
            "slug": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .items()
        .create("c1", &item(fields))
        .await
        .unwrap();

    assert_eq!(created["_id"], "i9");
    assert_eq!(last_query(&server).await, None);
}

#[tokio::test]
async fn test_create_live_item_appends_live_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collections/c1/items"))
        .and(query_param("live", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "i9"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .items()
        .create_live("c1", &item(json!({"fields": {"name": "Hello"}})))
        .await
        .unwrap();

    assert_eq!(created["_id"], "i9");
    assert_eq!(last_query(&server).await.as_deref(), Some("live=true"));
}

#[tokio::test]
async fn test_update_item() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/collections/c1/items/i1"))
        .and(body_json(json!({"fields": {"name": "Renamed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "i1", "name": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .items()
        .update("c1", "i1", &item(json!({"fields": {"name": "Renamed"}})))
        .await
        .unwrap();

    assert_eq!(updated["name"], "Renamed");
}

#[tokio::test]
async fn test_update_live_item() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/collections/c1/items/i1"))
        .and(query_param("live", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "i1"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .items()
        .update_live("c1", "i1", &item(json!({"fields": {"name": "Renamed"}})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_patch_item() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/collections/c1/items/i1"))
        .and(body_json(json!({"fields": {"_draft": true}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "i1", "_draft": true})))
        .expect(1)
        .mount(&server)
        .await;

    let patched = client_for(&server)
        .items()
        .patch("c1", "i1", &item(json!({"fields": {"_draft": true}})))
        .await
        .unwrap();

    assert_eq!(patched["_draft"], true);
    assert_eq!(last_query(&server).await, None);
}

#[tokio::test]
async fn test_patch_live_item() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/collections/c1/items/i1"))
        .and(query_param("live", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "i1"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .items()
        .patch_live("c1", "i1", &item(json!({"fields": {"_draft": false}})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_item() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/collections/c1/items/i1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .items()
        .delete("c1", "i1")
        .await
        .unwrap();

    assert_eq!(result.deleted, 1);
}

#[tokio::test]
async fn test_item_ids_are_escaped_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 1})))
        .mount(&server)
        .await;

    client_for(&server)
        .items()
        .delete("c1", "a b")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/collections/c1/items/a%20b");
}

// ============================================================================
// Meta
// ============================================================================

#[tokio::test]
async fn test_authorization_info() {
    let server = MockServer::start().await;
    let info = json!({
        "_id": "55818d58616600637b9a5786",
        "createdOn": "2016-10-03T23:12:00.755Z",
        "grantType": "authorization_code",
        "lastUsed": "2016-10-10T21:41:12.736Z",
        "sites": [],
        "orgs": ["551ad253f0a9c0686f71ed08"],
        "users": ["545bbecb7bdd6769632504a7"],
        "rateLimit": 60,
        "status": "confirmed",
        "application": {"_id": "55131cd036c09f7d07883dfc", "name": "Test App"}
    });
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server).meta().authorization_info().await.unwrap();

    assert_eq!(value, info);
}

#[tokio::test]
async fn test_authorized_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "_id": "545bbecb7bdd6769632504a7",
                "email": "some@email.com",
                "firstName": "Some",
                "lastName": "One"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server).meta().authorized_user().await.unwrap();

    assert_eq!(value["user"]["email"], "some@email.com");
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_one_client_serves_concurrent_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_id": "s1"}])))
        .expect(8)
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(client_for(&server));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.sites().list(None).await })
        })
        .collect();

    for handle in handles {
        let sites = handle.await.unwrap().unwrap();
        assert_eq!(sites[0].id, "s1");
    }
}
