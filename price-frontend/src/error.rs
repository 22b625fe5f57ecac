use crate::models::FormRejection;
use crate::services::RenderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors a request handler can surface.
///
/// An unavailable prediction service is not among them: `PredictionUnavailable` stays inside
/// the mediator, which substitutes the fallback prediction.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// Shown to the user as a 400 page with the input echoed back.
    #[error(transparent)]
    BadRequestForm(#[from] FormRejection),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl FrontendError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FrontendError::BadRequestForm(_) => StatusCode::BAD_REQUEST,
            FrontendError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FrontendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            FrontendError::BadRequestForm(rejection) => rejection.to_string(),
            FrontendError::Render(e) => {
                tracing::error!(error = %e, "Page rendering failed");
                "Internal server error".to_string()
            }
        };

        (status, message).into_response()
    }
}
