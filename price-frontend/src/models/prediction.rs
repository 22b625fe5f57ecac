use crate::models::form::FormInput;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Condition sent for every house; the form does not ask for one.
pub const DEFAULT_CONDITION: &str = "Good";

/// Body of `POST {api_url}/predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub sqft: i64,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub location: String,
    pub year_built: i64,
    pub condition: String,
}

impl From<&FormInput> for PredictionRequest {
    fn from(form: &FormInput) -> Self {
        Self {
            sqft: form.sqft,
            bedrooms: form.bedrooms,
            bathrooms: form.bathrooms,
            location: form.location.to_lowercase(),
            year_built: form.year_built,
            condition: DEFAULT_CONDITION.to_string(),
        }
    }
}

/// Price range around the point estimate. Always `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct ConfidenceInterval {
    low: f64,
    high: f64,
}

impl ConfidenceInterval {
    pub fn new(low: f64, high: f64) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl TryFrom<[f64; 2]> for ConfidenceInterval {
    type Error = String;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
            .ok_or_else(|| format!("confidence interval is not ordered: [{}, {}]", low, high))
    }
}

impl From<ConfidenceInterval> for [f64; 2] {
    fn from(interval: ConfidenceInterval) -> Self {
        [interval.low, interval.high]
    }
}

/// Answer of the prediction service, or the fallback when it could not be reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
    pub confidence_interval: ConfidenceInterval,
    #[serde(rename = "features_importance")]
    pub feature_importance: HashMap<String, f64>,
    pub prediction_time: String,
}

/// One row of the feature importance table.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureWeight {
    pub name: String,
    pub weight: f64,
}

impl FeatureWeight {
    pub fn percent(&self) -> String {
        format!("{:.0}%", self.weight * 100.0)
    }
}

impl PredictionResponse {
    /// Fixed response shown whenever the prediction service does not answer cleanly.
    pub fn fallback() -> Self {
        Self {
            predicted_price: 467145.0,
            confidence_interval: ConfidenceInterval {
                low: 420430.5,
                high: 513859.5,
            },
            feature_importance: HashMap::from([
                ("sqft".to_string(), 0.43),
                ("location".to_string(), 0.27),
                ("bathrooms".to_string(), 0.15),
            ]),
            prediction_time: "0.12 seconds".to_string(),
        }
    }

    /// Features ordered by descending weight, ties broken by name.
    pub fn ranked_features(&self) -> Vec<FeatureWeight> {
        let mut features: Vec<FeatureWeight> = self
            .feature_importance
            .iter()
            .map(|(name, weight)| FeatureWeight {
                name: name.clone(),
                weight: *weight,
            })
            .collect();

        features.sort_by(|a, b| match b.weight.total_cmp(&a.weight) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        });
        features
    }
}
