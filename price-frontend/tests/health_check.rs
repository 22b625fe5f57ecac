mod common;

use common::{TestApp, TEST_VERSION, UNREACHABLE_API};
use service_core::middleware::REQUEST_ID_HEADER;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(UNREACHABLE_API).await;

    let response = app.get("/health").await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "price-frontend");
    assert_eq!(body["version"], TEST_VERSION);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn(UNREACHABLE_API).await;

    let response = app.get("/health").await;

    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = TestApp::spawn(UNREACHABLE_API).await;

    let response = app.get("/static/style.css").await;
    assert!(response.status().is_success());

    let missing = app.get("/static/does-not-exist.css").await;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}
