use crate::error::FrontendError;
use crate::handlers::render_page;
use crate::models::{FormInput, PageState};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Extension, State},
    http::StatusCode,
    response::Response,
};
use service_core::middleware::RequestId;

/// `POST /predict`: intake, prediction, then the result page.
///
/// The body is read as URL-encoded form data whatever its declared content type, so every
/// submission gets a rendered page. A malformed form is answered with 400 and the parsed values
/// echoed back. The prediction itself cannot fail; an unavailable service yields the fallback.
pub async fn predict_handler(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    body: Bytes,
) -> Result<Response, FrontendError> {
    let request_id = request_id.map(|Extension(id)| id.0).unwrap_or_default();

    let form = match FormInput::from_urlencoded(&body) {
        Ok(form) => form,
        Err(rejection) => {
            let page = PageState::rejected(
                state.meta.clone(),
                rejection.partial.clone(),
                &rejection.details(),
            );
            let error = FrontendError::from(rejection);
            tracing::warn!(request_id = %request_id, error = %error, "Rejected prediction form");
            return render_page(&state, error.status_code(), &page);
        }
    };

    let prediction = state.mediator.predict(&form).await;
    tracing::info!(
        request_id = %request_id,
        predicted_price = prediction.predicted_price,
        "Prediction page rendered"
    );
    let page = PageState::predicted(state.meta.clone(), form, prediction);

    render_page(&state, StatusCode::OK, &page)
}
