use stress_detector::prediction::{
    AnalysisRequest, HttpPredictionClient, Prediction, PredictionClient, RequestError,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn request(text: &str) -> AnalysisRequest {
    AnalysisRequest {
        text: text.to_string(),
    }
}

fn prediction_body(prediction: serde_json::Value, probability: f64, confidence: f64) -> serde_json::Value {
    serde_json::json!({
        "prediction": prediction,
        "probability": probability,
        "confidence": confidence,
    })
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_posts_json_text_to_predict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "text": "I can't sleep before exams" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(prediction_body(1.into(), 0.8, 0.9)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/predict");
    let result = assert_ok!(client.analyze(&request("I can't sleep before exams")).await);

    assert_eq!(result.prediction, Prediction::Stress);
    assert_eq!(result.probability, 0.8);
    assert_eq!(result.confidence, 0.9);
}

#[tokio::test]
async fn test_alternate_api_predict_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(prediction_body("no_stress".into(), 0.1, 0.95)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/api/predict");
    let result = assert_ok!(client.analyze(&request("lovely day")).await);
    assert_eq!(result.prediction, Prediction::NoStress);
}

#[tokio::test]
async fn test_optional_fields_are_passed_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "prediction": 1,
            "probability": 0.66,
            "confidence": 0.52,
            "cleaned_text": "deadline tomorrow panic",
            "timestamp": "2024-05-01T10:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/predict");
    let result = assert_ok!(client.analyze(&request("Deadline tomorrow, panic!!")).await);
    assert_eq!(result.cleaned_text.as_deref(), Some("deadline tomorrow panic"));
    assert_eq!(result.timestamp.as_deref(), Some("2024-05-01T10:00:00Z"));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/predict");
    let err = assert_err!(client.analyze(&request("hello")).await);

    assert_eq!(
        err,
        RequestError::Api {
            status: 500,
            message: "model not loaded".to_string()
        }
    );
}

#[tokio::test]
async fn test_client_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(422).set_body_string("text too long"))
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/predict");
    let err = assert_err!(client.analyze(&request("hello")).await);
    assert!(matches!(err, RequestError::Api { status: 422, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/predict");
    let err = assert_err!(client.analyze(&request("hello")).await);
    assert!(matches!(err, RequestError::Parse(_)));
}

#[tokio::test]
async fn test_out_of_range_score_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(prediction_body(1.into(), 80.0, 0.9)),
        )
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/predict");
    let err = assert_err!(client.analyze(&request("hello")).await);
    assert!(matches!(err, RequestError::Parse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port, then close the server so nothing listens there
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = HttpPredictionClient::new(uri, "/predict");
    let err = assert_err!(client.analyze(&request("hello")).await);
    assert!(matches!(err, RequestError::Network(_)));
}

#[tokio::test]
async fn test_no_retry_after_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1) // verified when the server drops
        .mount(&mock_server)
        .await;

    let client = HttpPredictionClient::new(mock_server.uri(), "/predict");
    assert_err!(client.analyze(&request("hello")).await);
}
