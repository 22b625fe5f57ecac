pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use crate::config::AppMetadata;
use crate::services::{PageRenderer, PredictionMediator};
use std::sync::Arc;

/// Read-only state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub meta: Arc<AppMetadata>,
    pub mediator: Arc<PredictionMediator>,
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(
        meta: AppMetadata,
        mediator: PredictionMediator,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            meta: Arc::new(meta),
            mediator: Arc::new(mediator),
            renderer,
        }
    }
}
