pub mod form;
pub mod page;
pub mod prediction;

pub use form::{FieldError, FormInput, FormRejection};
pub use page::PageState;
pub use prediction::{ConfidenceInterval, FeatureWeight, PredictionRequest, PredictionResponse};
