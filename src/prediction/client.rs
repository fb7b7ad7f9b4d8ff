use std::fmt;

use async_trait::async_trait;

use super::types::{AnalysisRequest, AnalysisResult};

/// Errors that can occur while asking the prediction API for a verdict.
/// None of them are retried; the user resubmits.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The API answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body was not a well-formed prediction.
    Parse(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Network(msg) => write!(f, "network error: {msg}"),
            RequestError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            RequestError::Parse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}

#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Returns the full URL requests are sent to.
    fn endpoint(&self) -> String;

    /// Sends a single analysis request and waits for the verdict.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, RequestError>;
}
