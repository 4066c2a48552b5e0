#![allow(dead_code)]

use std::{fs, path::Path};

use hawkiz_rs::HawkizClient;
use httpmock::MockServer;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server.
pub fn test_client(server: &MockServer) -> HawkizClient {
    HawkizClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}
