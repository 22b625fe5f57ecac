#![allow(dead_code)]

use price_frontend::config::Settings;
use price_frontend::startup::Application;
use reqwest::{Client, Response};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_VERSION: &str = "9.9.9";
pub const TEST_HOSTNAME: &str = "frontend-test";

/// Base address that nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/latest";

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn(api_url: &str) -> Self {
        let settings = Settings {
            host: "127.0.0.1".to_string(),
            port: 0,
            app_version: TEST_VERSION.to_string(),
            api_url: api_url.to_string(),
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
            hostname: Some(TEST_HOSTNAME.to_string()),
            ip_address: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        Self {
            address,
            client: Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(&self, fields: &[(&str, &str)]) -> Response {
        self.client
            .post(format!("{}/predict", self.address))
            .form(fields)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn model_answer() -> serde_json::Value {
    json!({
        "predicted_price": 845000.0,
        "confidence_interval": [760500.0, 929500.0],
        "features_importance": {"sqft": 0.5, "location": 0.3, "bathrooms": 0.2},
        "prediction_time": "0.03 seconds"
    })
}

/// Prediction service mounted under `/latest`, answering every request with `response`.
pub async fn model_service(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/latest/predict"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

pub fn well_formed_house() -> Vec<(&'static str, &'static str)> {
    vec![
        ("sqft", "2100"),
        ("bedrooms", "4"),
        ("bathrooms", "2.5"),
        ("location", "Austin"),
        ("year_built", "2010"),
    ]
}
