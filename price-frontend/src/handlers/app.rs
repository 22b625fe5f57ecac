use crate::error::FrontendError;
use crate::handlers::render_page;
use crate::models::PageState;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Response, Json};
use serde_json::{json, Value};

pub async fn index(State(state): State<AppState>) -> Result<Response, FrontendError> {
    let page = PageState::landing(state.meta.clone());
    render_page(&state, StatusCode::OK, &page)
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "price-frontend",
        "version": state.meta.version,
    }))
}
