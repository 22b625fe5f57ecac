pub mod mediator;
pub mod predictor;
pub mod renderer;

pub use mediator::PredictionMediator;
pub use predictor::{HttpPricePredictor, PredictionUnavailable, PricePredictor};
pub use renderer::{AskamaRenderer, PageRenderer, RenderError};
