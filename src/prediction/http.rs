//! HTTP prediction client.
//!
//! One `POST {base_url}{path}` per analysis with a JSON body. No retries and
//! no client-side timeout: a request runs until the transport gives up.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::client::{PredictionClient, RequestError};
use super::types::{AnalysisRequest, AnalysisResult, parse_response};

pub struct HttpPredictionClient {
    base_url: String,
    path: String,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        Self {
            base_url,
            path,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, RequestError> {
        let url = self.endpoint();
        info!(
            "Prediction request: url={}, text_chars={}",
            url,
            request.text.chars().count()
        );

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Prediction response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Prediction API error: {} - {}", status.as_u16(), message);
            return Err(RequestError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        parse_response(&body).map_err(|e| {
            warn!("Malformed prediction body: {} (body={:?})", e, body);
            RequestError::Parse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = HttpPredictionClient::new("https://example.test", "/predict");
        assert_eq!(client.endpoint(), "https://example.test/predict");
    }

    #[test]
    fn test_endpoint_normalizes_slashes() {
        let client = HttpPredictionClient::new("https://example.test/", "api/predict");
        assert_eq!(client.endpoint(), "https://example.test/api/predict");
    }
}
