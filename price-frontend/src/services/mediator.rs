use crate::models::{FormInput, PredictionRequest, PredictionResponse};
use crate::services::predictor::PricePredictor;
use std::sync::Arc;

/// Turns a submitted form into a prediction, whatever the prediction service does.
pub struct PredictionMediator {
    predictor: Arc<dyn PricePredictor>,
}

impl PredictionMediator {
    pub fn new(predictor: Arc<dyn PricePredictor>) -> Self {
        Self { predictor }
    }

    /// Price the house described by `form`.
    ///
    /// Any failure of the remote call yields [`PredictionResponse::fallback`]; the cause is
    /// only logged, never returned.
    pub async fn predict(&self, form: &FormInput) -> PredictionResponse {
        let request = PredictionRequest::from(form);

        match self.predictor.predict(&request).await {
            Ok(response) => {
                tracing::info!(
                    location = %request.location,
                    predicted_price = response.predicted_price,
                    "Prediction received"
                );
                response
            }
            Err(e) => {
                tracing::warn!(
                    reason = e.reason(),
                    error = %e,
                    "Prediction service unavailable, serving fallback"
                );
                PredictionResponse::fallback()
            }
        }
    }
}
