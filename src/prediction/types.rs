//! # Prediction Types
//!
//! Domain types shared by every prediction client, plus the wire format of the
//! prediction API and the mapping between the two.
//!
//! ## Response mapping
//!
//! The API has shipped under two deployments that disagree on details. Only one
//! normalized shape is accepted here:
//!
//! | JSON field     | Accepted values                          | Domain field            |
//! |----------------|------------------------------------------|-------------------------|
//! | `prediction`   | `1` / `0`, or `"stress"` / `"no_stress"` | `AnalysisResult::prediction` |
//! | `probability`  | finite number in `[0, 1]`                | `AnalysisResult::probability` |
//! | `confidence`   | finite number in `[0, 1]`                | `AnalysisResult::confidence`  |
//! | `cleaned_text` | string, optional                         | `AnalysisResult::cleaned_text` |
//! | `timestamp`    | string, optional                         | `AnalysisResult::timestamp`    |
//!
//! Unknown fields are ignored. Anything else is a malformed body.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The payload sent to the prediction endpoint.
///
/// Only `core::input::validate` builds one, so a request in hand is always
/// non-empty and within the length limit.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Classification returned by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    Stress,
    NoStress,
}

impl Prediction {
    pub fn is_stress(self) -> bool {
        matches!(self, Prediction::Stress)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Stress => write!(f, "stress"),
            Prediction::NoStress => write!(f, "no_stress"),
        }
    }
}

/// Normalized prediction response.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub prediction: Prediction,
    /// Probability of the positive (stress) class, in `[0, 1]`.
    pub probability: f64,
    /// Model-reported certainty, in `[0, 1]`.
    pub confidence: f64,
    pub cleaned_text: Option<String>,
    pub timestamp: Option<String>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// `prediction` as sent by either deployment.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum WireLabel {
    Numeric(i64),
    Named(String),
}

/// Raw response body of `POST /predict`.
#[derive(Deserialize, Debug)]
pub struct PredictResponse {
    prediction: WireLabel,
    probability: f64,
    confidence: f64,
    #[serde(default)]
    cleaned_text: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

fn label_to_prediction(label: WireLabel) -> Result<Prediction, String> {
    match label {
        WireLabel::Numeric(1) => Ok(Prediction::Stress),
        WireLabel::Numeric(0) => Ok(Prediction::NoStress),
        WireLabel::Numeric(n) => Err(format!("unknown prediction label {n}")),
        WireLabel::Named(name) => match name.to_ascii_lowercase().as_str() {
            "stress" => Ok(Prediction::Stress),
            "no_stress" => Ok(Prediction::NoStress),
            other => Err(format!("unknown prediction label \"{other}\"")),
        },
    }
}

fn unit_interval(name: &str, value: f64) -> Result<f64, String> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{name} out of range: {value}"))
    }
}

impl TryFrom<PredictResponse> for AnalysisResult {
    type Error = String;

    fn try_from(raw: PredictResponse) -> Result<Self, Self::Error> {
        Ok(AnalysisResult {
            prediction: label_to_prediction(raw.prediction)?,
            probability: unit_interval("probability", raw.probability)?,
            confidence: unit_interval("confidence", raw.confidence)?,
            cleaned_text: raw.cleaned_text,
            timestamp: raw.timestamp,
        })
    }
}

/// Parses a response body into a normalized result.
pub(crate) fn parse_response(body: &str) -> Result<AnalysisResult, String> {
    let raw: PredictResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    AnalysisResult::try_from(raw)
}
