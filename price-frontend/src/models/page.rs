use crate::config::AppMetadata;
use crate::models::form::FormInput;
use crate::models::prediction::PredictionResponse;
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Prediction completed successfully!";
pub const INVALID_FORM_MESSAGE: &str = "Invalid form data";

/// Everything the index page needs to render, built fresh for each request.
///
/// The prediction is private so that it can only be present on pages that show it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub meta: Arc<AppMetadata>,
    pub form: FormInput,
    prediction: Option<PredictionResponse>,
    error_message: Option<String>,
    success_message: Option<String>,
}

impl PageState {
    /// First load: default form values and no prediction.
    pub fn landing(meta: Arc<AppMetadata>) -> Self {
        Self {
            meta,
            form: FormInput::default(),
            prediction: None,
            error_message: None,
            success_message: None,
        }
    }

    /// A completed prediction for the submitted form.
    pub fn predicted(
        meta: Arc<AppMetadata>,
        form: FormInput,
        prediction: PredictionResponse,
    ) -> Self {
        Self {
            meta,
            form,
            prediction: Some(prediction),
            error_message: None,
            success_message: Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    /// A rejected submission, echoing whatever values could be parsed.
    pub fn rejected(meta: Arc<AppMetadata>, form: FormInput, details: &str) -> Self {
        let error_message = if details.is_empty() {
            INVALID_FORM_MESSAGE.to_string()
        } else {
            format!("{}: {}", INVALID_FORM_MESSAGE, details)
        };

        Self {
            meta,
            form,
            prediction: None,
            error_message: Some(error_message),
            success_message: None,
        }
    }

    pub fn show_prediction(&self) -> bool {
        self.prediction.is_some()
    }

    pub fn prediction(&self) -> Option<&PredictionResponse> {
        self.prediction.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }
}
