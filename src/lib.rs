//! Stress detector library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod prediction;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which prediction path the backend exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiEndpoint {
    /// `POST /predict`
    #[default]
    Predict,
    /// `POST /api/predict`
    ApiPredict,
}

impl ApiEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            ApiEndpoint::Predict => "/predict",
            ApiEndpoint::ApiPredict => "/api/predict",
        }
    }
}
