//! Page rendering.
//!
//! Handlers only see [`PageRenderer`], so the rest of the crate does not depend on askama.

use crate::models::PageState;
use askama::Template;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to render page: {0}")]
pub struct RenderError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl From<askama::Error> for RenderError {
    fn from(err: askama::Error) -> Self {
        RenderError(Box::new(err))
    }
}

/// Pure function from page state to markup.
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &PageState) -> Result<String, RenderError>;
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    page: &'a PageState,
}

/// Renders `templates/index.html`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AskamaRenderer;

impl PageRenderer for AskamaRenderer {
    fn render(&self, page: &PageState) -> Result<String, RenderError> {
        Ok(IndexTemplate { page }.render()?)
    }
}

mod filters {
    use std::fmt::Display;

    pub fn currency<T: Display>(amount: T) -> askama::Result<String> {
        Ok(format!("${:.0}", amount))
    }

    pub fn currency_precise<T: Display>(amount: T) -> askama::Result<String> {
        Ok(format!("${:.1}", amount))
    }
}
