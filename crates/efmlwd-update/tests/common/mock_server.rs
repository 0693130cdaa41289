//! Mock server helpers for the latest-release endpoint

use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::constants::*;

/// Serve a release body, asserting the endpoint is hit exactly `times` times
pub async fn mock_latest_release(server: &MockServer, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(LATEST_RELEASE_PATH))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Serve a raw body with an arbitrary status
pub async fn mock_latest_raw(server: &MockServer, status: u16, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(LATEST_RELEASE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Answer with a redirect to a path that would serve a valid newer release
pub async fn mock_latest_redirect(server: &MockServer, target_body: Value) {
    let target = format!("{}/moved", server.uri());

    Mock::given(method("GET"))
        .and(path(LATEST_RELEASE_PATH))
        .respond_with(ResponseTemplate::new(301).insert_header("location", target.as_str()))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(target_body))
        .expect(0)
        .mount(server)
        .await;
}
