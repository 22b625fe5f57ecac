pub mod app;
pub mod predict;

use crate::error::FrontendError;
use crate::models::PageState;
use crate::AppState;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

fn render_page(
    state: &AppState,
    status: StatusCode,
    page: &PageState,
) -> Result<Response, FrontendError> {
    let html = state.renderer.render(page)?;
    Ok((status, Html(html)).into_response())
}
