//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::prediction::{
    AnalysisRequest, AnalysisResult, Prediction, PredictionClient, RequestError,
};

/// A client that answers every request with a canned outcome and counts calls.
pub struct StubClient {
    outcome: Result<AnalysisResult, RequestError>,
    pub calls: AtomicUsize,
}

impl StubClient {
    pub fn new(outcome: Result<AnalysisResult, RequestError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionClient for StubClient {
    fn endpoint(&self) -> String {
        "http://stub.invalid/predict".to_string()
    }

    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

pub fn sample_result(prediction: Prediction, probability: f64, confidence: f64) -> AnalysisResult {
    AnalysisResult {
        prediction,
        probability,
        confidence,
        cleaned_text: None,
        timestamp: None,
    }
}

/// Creates a test App with default settings.
pub fn test_app() -> App {
    App::new(&ResolvedConfig::default(), "http://stub.invalid/predict".to_string())
}
