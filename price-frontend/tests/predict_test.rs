mod common;

use common::{
    model_answer, model_service, well_formed_house, TestApp, TEST_HOSTNAME, TEST_VERSION,
    UNREACHABLE_API,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn index_renders_defaults_without_prediction() {
    let app = TestApp::spawn(UNREACHABLE_API).await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"name="sqft" value="0""#));
    assert!(html.contains(r#"name="bedrooms" value="1""#));
    assert!(html.contains(r#"name="bathrooms" value="0""#));
    assert!(html.contains(r#"name="location" value="string""#));
    assert!(html.contains(r#"name="year_built" value="2023""#));
    assert!(html.contains(TEST_VERSION));
    assert!(html.contains(TEST_HOSTNAME));
    assert!(!html.contains(r#"id="prediction""#));
}

#[tokio::test]
async fn well_formed_submission_shows_service_prediction() {
    let server = model_service(ResponseTemplate::new(200).set_body_json(model_answer())).await;
    let app = TestApp::spawn(&format!("{}/latest", server.uri())).await;

    let response = app.post_form(&well_formed_house()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"id="prediction""#));
    assert!(html.contains("$845000"));
    assert!(html.contains("$760500.0"));
    assert!(html.contains("0.03 seconds"));
    assert!(html.contains("Prediction completed successfully!"));
    // The form echoes the submitted casing.
    assert!(html.contains(r#"name="location" value="Austin""#));
}

#[tokio::test]
async fn outbound_request_follows_the_service_contract() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/latest/predict"))
        .and(body_json(json!({
            "sqft": 2100,
            "bedrooms": 4,
            "bathrooms": 2.5,
            "location": "austin",
            "year_built": 2010,
            "condition": "Good"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_answer()))
        .expect(1)
        .mount(&server)
        .await;
    // Trailing slash on the configured address must not double up.
    let app = TestApp::spawn(&format!("{}/latest/", server.uri())).await;

    let response = app.post_form(&well_formed_house()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("$845000"));
}

#[tokio::test]
async fn unreachable_service_serves_fallback() {
    let app = TestApp::spawn(UNREACHABLE_API).await;

    let response = app.post_form(&well_formed_house()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"id="prediction""#));
    assert!(html.contains("$467145"));
    assert!(html.contains("$420430.5"));
    assert!(html.contains("$513859.5"));
    assert!(html.contains("0.12 seconds"));
}

#[tokio::test]
async fn failing_service_serves_fallback() {
    let server = model_service(ResponseTemplate::new(500)).await;
    let app = TestApp::spawn(&format!("{}/latest", server.uri())).await;

    let html = app.post_form(&well_formed_house()).await.text().await.unwrap();

    assert!(html.contains("$467145"));
}

#[tokio::test]
async fn garbled_service_answer_serves_fallback() {
    let server = model_service(
        ResponseTemplate::new(200).set_body_json(json!({"predicted_price": "a lot"})),
    )
    .await;
    let app = TestApp::spawn(&format!("{}/latest", server.uri())).await;

    let html = app.post_form(&well_formed_house()).await.text().await.unwrap();

    assert!(html.contains("$467145"));
}

#[tokio::test]
async fn malformed_submission_is_rejected_with_input_echoed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_answer()))
        .expect(0)
        .mount(&server)
        .await;
    let app = TestApp::spawn(&format!("{}/latest", server.uri())).await;

    let response = app
        .post_form(&[
            ("sqft", "huge"),
            ("bedrooms", "3"),
            ("bathrooms", "2"),
            ("location", "Boston"),
            ("year_built", "1990"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = response.text().await.unwrap();
    assert!(html.contains("Invalid form data"));
    assert!(html.contains(r#"name="location" value="Boston""#));
    assert!(html.contains(r#"name="bedrooms" value="3""#));
    assert!(!html.contains(r#"id="prediction""#));
}

#[tokio::test]
async fn repeated_submission_gives_identical_page() {
    let server = model_service(ResponseTemplate::new(200).set_body_json(model_answer())).await;
    let app = TestApp::spawn(&format!("{}/latest", server.uri())).await;

    let first = app.post_form(&well_formed_house()).await.text().await.unwrap();
    let second = app.post_form(&well_formed_house()).await.text().await.unwrap();

    assert_eq!(first, second);
}
