use serde_json::{Value, json};
use ship_note_client::{ClientConfig, GenerateRequest, ReleaseNoteClient, ShipNoteError};

use test_utils::{spawn_one_shot_server, spawn_stalled_server};

fn config_for(endpoint: String, timeout_seconds: u64) -> ClientConfig {
    ClientConfig {
        endpoint,
        timeout_seconds,
        ..ClientConfig::default()
    }
}

fn sample_request() -> GenerateRequest {
    GenerateRequest::new(
        "alex-builds-source/ship-note",
        "standard",
        "internal",
        true,
        "v0.1.10",
        "v0.1.11",
    )
}

#[tokio::test]
async fn generate_decodes_a_successful_response() {
    let body = json!({
        "ok": true,
        "schema_version": "1.0",
        "sections": { "what_shipped": "Added X" }
    })
    .to_string();
    let (endpoint, _request_rx) = spawn_one_shot_server("200 OK", body).await;

    let client = ReleaseNoteClient::new(&config_for(endpoint, 5)).expect("client");
    let response = client
        .generate(&sample_request())
        .await
        .expect("request should succeed");

    assert_eq!(response.schema_version().expect("schema"), "1.0");
    assert_eq!(response.what_shipped().expect("section"), "Added X");
}

#[tokio::test]
async fn posted_payload_round_trips_through_the_server() {
    let body = json!({ "ok": true, "schema_version": "1.0", "sections": {} }).to_string();
    let (endpoint, request_rx) = spawn_one_shot_server("200 OK", body).await;

    let request = sample_request();
    let client = ReleaseNoteClient::new(&config_for(endpoint, 5)).expect("client");
    client.generate(&request).await.expect("request");

    let captured = request_rx.await.expect("server captured the body");
    let decoded: Value = serde_json::from_str(&captured).expect("body is valid JSON");
    assert_eq!(
        decoded,
        serde_json::to_value(&request).expect("serialize request")
    );
}

#[tokio::test]
async fn server_error_surfaces_as_http_with_envelope_details() {
    let body = json!({
        "ok": false,
        "code": "NOT_FOUND",
        "error": "GitHub API 404: Not Found"
    })
    .to_string();
    let (endpoint, _request_rx) = spawn_one_shot_server("404 Not Found", body).await;

    let client = ReleaseNoteClient::new(&config_for(endpoint, 5)).expect("client");
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("404 must fail");

    match err {
        ShipNoteError::Http {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "NOT_FOUND");
            assert!(message.contains("GitHub API 404"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_500_surfaces_as_http() {
    let (endpoint, _request_rx) =
        spawn_one_shot_server("500 Internal Server Error", "oops".to_string()).await;

    let client = ReleaseNoteClient::new(&config_for(endpoint, 5)).expect("client");
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, ShipNoteError::Http { status: 500, .. }));
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let (endpoint, _request_rx) = spawn_one_shot_server("200 OK", "not json".to_string()).await;

    let client = ReleaseNoteClient::new(&config_for(endpoint, 5)).expect("client");
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("junk body must fail");

    assert!(matches!(err, ShipNoteError::Decode(_)));
}

#[tokio::test]
async fn silent_server_times_out() {
    let endpoint = spawn_stalled_server().await;

    let client = ReleaseNoteClient::new(&config_for(endpoint, 1)).expect("client");
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("stalled server must fail");

    match err {
        ShipNoteError::Timeout { seconds } => assert_eq!(seconds, 1),
        other => panic!("expected Timeout, got {other:?}"),
    }
}
