//! Recognition service contract tests
//!
//! These tests verify the exact HTTP exchange of the remote recognizer:
//! - the form-encoded request body (`apiKey`, `equationInput`)
//! - the JSON carried in `equationInput`
//! - success, server error and malformed response handling

use scrawl_ipc::{EquationInput, InkComponent, ResultType};
use scrawl_recognition::{RecognitionError, Recognizer, RemoteRecognizer};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_input(result_type: ResultType) -> EquationInput {
    EquationInput::new(
        vec![
            InkComponent::Stroke {
                x: vec![0.0, 10.0],
                y: vec![0.0, 10.0],
            },
            InkComponent::Stroke {
                x: vec![20.0],
                y: vec![5.0],
            },
        ],
        result_type,
    )
}

/// Decode an `application/x-www-form-urlencoded` body into key/value pairs
fn decode_form(body: &[u8]) -> Vec<(String, String)> {
    let body = std::str::from_utf8(body).unwrap();
    body.split('&')
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap();
            let decode = |s: &str| urlencoding::decode(&s.replace('+', " ")).unwrap().into_owned();
            (decode(key), decode(value))
        })
        .collect()
}

#[tokio::test]
async fn test_request_is_form_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/equation/doSimpleRecognition.json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("apiKey=test-key"))
        .and(body_string_contains("equationInput="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"results": [{"type": "LATEX", "value": "x=1"}]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let recognizer = RemoteRecognizer::new(
        format!("{}/equation/doSimpleRecognition.json", mock_server.uri()),
        "test-key",
    );
    let result = recognizer.recognize(sample_input(ResultType::LaTeX)).await;

    assert!(result.is_ok(), "Request should succeed: {result:?}");
}

#[tokio::test]
async fn test_equation_input_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"results": []}
        })))
        .mount(&mock_server)
        .await;

    let recognizer = RemoteRecognizer::new(mock_server.uri(), "k");
    recognizer
        .recognize(sample_input(ResultType::MathML))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let form = decode_form(&requests[0].body);
    let keys: Vec<&str> = form.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["apiKey", "equationInput"]);

    let input: serde_json::Value = serde_json::from_str(&form[1].1).unwrap();
    assert_eq!(
        input,
        json!({
            "components": [
                {"type": "stroke", "x": [0.0, 10.0], "y": [0.0, 10.0]},
                {"type": "stroke", "x": [20.0], "y": [5.0]}
            ],
            "resultTypes": ["MATHML"]
        })
    );
}

#[tokio::test]
async fn test_success_response_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "results": [
                    {"type": "LATEX", "value": "\\frac{1}{2}"},
                    {"type": "LATEX", "value": "+x"}
                ]
            },
            "instanceId": "abc"
        })))
        .mount(&mock_server)
        .await;

    let recognizer = RemoteRecognizer::new(mock_server.uri(), "k");
    let response = recognizer
        .recognize(sample_input(ResultType::LaTeX))
        .await
        .unwrap();

    assert_eq!(response.result.results.len(), 2);
    assert_eq!(response.formula(), "\\frac{1}{2}+x");
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid api key"))
        .mount(&mock_server)
        .await;

    let recognizer = RemoteRecognizer::new(mock_server.uri(), "wrong");
    let err = recognizer
        .recognize(sample_input(ResultType::LaTeX))
        .await
        .unwrap_err();

    match &err {
        RecognitionError::Server { status, body } => {
            assert!(status.starts_with("403"), "status was {status}");
            assert_eq!(body, "invalid api key");
        }
        other => panic!("Expected Server error, got {other:?}"),
    }
    assert_eq!(err.status_and_body().1, "invalid api key");
}

#[tokio::test]
async fn test_malformed_success_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let recognizer = RemoteRecognizer::new(mock_server.uri(), "k");
    let err = recognizer
        .recognize(sample_input(ResultType::LaTeX))
        .await
        .unwrap_err();

    match err {
        RecognitionError::MalformedResponse { body, .. } => {
            assert_eq!(body, "<html>maintenance</html>");
        }
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 1 on loopback has no listener.
    let recognizer = RemoteRecognizer::new("http://127.0.0.1:1/rec", "k");
    let err = recognizer
        .recognize(sample_input(ResultType::LaTeX))
        .await
        .unwrap_err();

    assert!(matches!(err, RecognitionError::Transport(_)), "got {err:?}");
}
