//! Outbound client for the remote prediction service.

use crate::models::{PredictionRequest, PredictionResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use service_core::observability::TracedClientExt;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on a single call to the prediction service.
pub const PREDICTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Reasons the prediction service did not produce a usable answer.
#[derive(Error, Debug)]
pub enum PredictionUnavailable {
    #[error("prediction service unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("prediction service returned status {0}")]
    Status(StatusCode),

    #[error("prediction response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("prediction request could not be encoded: {field} is not a finite number")]
    Encode { field: &'static str },
}

impl PredictionUnavailable {
    /// Short label for logs.
    pub fn reason(&self) -> &'static str {
        match self {
            PredictionUnavailable::Transport(e) if e.is_timeout() => "timeout",
            PredictionUnavailable::Transport(_) => "transport",
            PredictionUnavailable::Status(_) => "status",
            PredictionUnavailable::Decode(_) => "decode",
            PredictionUnavailable::Encode { .. } => "encode",
        }
    }
}

/// Something that can price a house.
#[async_trait]
pub trait PricePredictor: Send + Sync {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionUnavailable>;
}

/// Calls `POST {api_url}/predict` over HTTP.
pub struct HttpPricePredictor {
    client: Client,
    endpoint: String,
}

impl HttpPricePredictor {
    pub fn new(api_url: &str) -> Result<Self, reqwest::Error> {
        Self::with_timeout(api_url, PREDICTION_TIMEOUT)
    }

    pub fn with_timeout(api_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: predict_endpoint(api_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Join the configured base address and `/predict`, dropping one trailing slash.
pub fn predict_endpoint(api_url: &str) -> String {
    let base = api_url.strip_suffix('/').unwrap_or(api_url);
    format!("{}/predict", base)
}

#[async_trait]
impl PricePredictor for HttpPricePredictor {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionUnavailable> {
        // serde_json writes NaN and infinities as null.
        if !request.bathrooms.is_finite() {
            return Err(PredictionUnavailable::Encode { field: "bathrooms" });
        }

        let response = self
            .client
            .traced_post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(PredictionUnavailable::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionUnavailable::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(PredictionUnavailable::Transport)?;

        serde_json::from_slice(&body).map_err(PredictionUnavailable::Decode)
    }
}
