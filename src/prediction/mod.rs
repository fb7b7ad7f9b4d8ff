pub mod client;
pub mod http;
pub mod types;

pub use client::{PredictionClient, RequestError};
pub use http::HttpPredictionClient;
pub use types::{AnalysisRequest, AnalysisResult, Prediction};
