//! Mock bucket listing server for testing
//!
//! Serves the Google Cloud Storage JSON listing shape so the real
//! `BucketFetcher` can be exercised without network access.

use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const LISTING_PATH: &str = "/storage/v1/b/taraxa-snapshot/o";

/// Mock bucket that answers the listing endpoint
pub struct MockBucketServer {
    pub server: MockServer,
    pub listing_url: String,
}

impl MockBucketServer {
    /// Create a new mock bucket server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let listing_url = format!("{}{}", server.uri(), LISTING_PATH);
        Self {
            server,
            listing_url,
        }
    }

    /// Mock a successful listing of the given object names
    pub async fn mock_listing(&self, names: &[&str]) {
        let items: Vec<_> = names.iter().map(|name| json!({ "name": name })).collect();

        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "storage#objects",
                "items": items
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock the listing endpoint failing with the given status
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Drop every mounted response
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Number of listing requests received so far
    pub async fn listing_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
