//! Integration tests for the analysis client against a mocked provider.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vprompt_analysis::{AnalysisError, AnalysisRequest, GeminiClient, GeminiConfig};
use vprompt_models::SegmentCursor;

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

fn client_for(server: &MockServer, timeout: Duration) -> GeminiClient {
    let config = GeminiConfig {
        base_url: server.uri(),
        model: MODEL.to_string(),
        timeout,
    };
    GeminiClient::new("test-key", config).unwrap()
}

/// Wrap a report body the way the provider does: one candidate carrying the
/// JSON as text.
fn provider_envelope(report: &Value) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": report.to_string() }]
            }
        }]
    })
}

fn car_segment() -> Value {
    json!({
        "timestamp": "00:00 - 00:03",
        "description": "A car drives past",
        "visualStyle": "noir",
        "lighting": "low-key",
        "cameraWork": "static wide",
        "generatedPrompts": {
            "midjourney": "noir car, cinematic",
            "stableDiffusion": "(noir:1.2) car at night",
            "veo": "a car driving past at night, noir grade"
        }
    })
}

async fn mount_report(server: &MockServer, report: Value) {
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_envelope(&report)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn analysis_copies_segments_verbatim_in_order() {
    let server = MockServer::start().await;
    let mut second = car_segment();
    second["timestamp"] = json!("00:03 - 00:07");
    second["description"] = json!("The car stops at a light");
    mount_report(
        &server,
        json!({
            "overallSummary": "A short drive.",
            "segments": [car_segment(), second]
        }),
    )
    .await;

    let client = client_for(&server, Duration::from_secs(5));
    let report = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap();

    assert_eq!(report.segment_count(), 2);
    assert_eq!(report.segments[0].timestamp, "00:00 - 00:03");
    assert_eq!(report.segments[1].timestamp, "00:03 - 00:07");
    assert_eq!(report.segments[0].visual_style, "noir");
    assert_eq!(
        report.segments[1].description,
        "The car stops at a light"
    );
    assert_eq!(report.overall_summary, "A short drive.");
    assert!(!report.id.is_empty());
}

#[tokio::test]
async fn three_second_clip_scenario() {
    let server = MockServer::start().await;
    mount_report(
        &server,
        json!({
            "overallSummary": "A car driving by at night.",
            "segments": [car_segment()]
        }),
    )
    .await;

    let client = client_for(&server, Duration::from_secs(5));
    let report = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap();

    assert_eq!(report.segment_count(), 1);
    assert_eq!(report.segments[0].timestamp, "00:00 - 00:03");

    // Active index defaults to 0 on a fresh report.
    let cursor = SegmentCursor::new();
    assert_eq!(cursor.index(), 0);
    assert_eq!(
        cursor.active(&report).unwrap().description,
        "A car drives past"
    );
}

#[tokio::test]
async fn missing_segment_field_is_schema_violation() {
    let server = MockServer::start().await;
    let mut segment = car_segment();
    segment.as_object_mut().unwrap().remove("lighting");
    mount_report(
        &server,
        json!({ "overallSummary": "s", "segments": [segment] }),
    )
    .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap_err();

    match err {
        AnalysisError::SchemaViolation { reason, raw } => {
            assert!(reason.contains("lighting"));
            assert!(raw.contains("generatedPrompts"));
        }
        other => panic!("expected SchemaViolation, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_payload_is_schema_violation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "not json" }] }
                }]
            })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::SchemaViolation { .. }));
    assert_eq!(err.raw_payload(), Some("not json"));
}

#[tokio::test]
async fn empty_segments_is_valid_degenerate_report() {
    let server = MockServer::start().await;
    mount_report(
        &server,
        json!({ "overallSummary": "Nothing notable.", "segments": [] }),
    )
    .await;

    let client = client_for(&server, Duration::from_secs(5));
    let report = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap();

    assert!(!report.has_segments());
    assert_eq!(report.overall_summary, "Nothing notable.");
}

#[tokio::test]
async fn consecutive_calls_yield_distinct_report_ids() {
    let server = MockServer::start().await;
    mount_report(
        &server,
        json!({ "overallSummary": "s", "segments": [car_segment()] }),
    )
    .await;

    let client = client_for(&server, Duration::from_secs(5));
    let video = [0u8; 16];
    let first = client
        .submit_video_for_analysis(&video, "video/mp4")
        .await
        .unwrap();
    let second = client
        .submit_video_for_analysis(&video, "video/mp4")
        .await
        .unwrap();

    // Identical input bytes, but no equality is promised between runs.
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn server_error_is_provider_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::ProviderUnavailable(_)));
}

#[tokio::test]
async fn rejected_credentials_are_provider_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(401).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::ProviderUnavailable(_)));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(provider_envelope(
                    &json!({ "overallSummary": "s", "segments": [] }),
                ))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_millis(250));
    let err = client
        .submit_video_for_analysis(&[0u8; 16], "video/mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Timeout(_)));
}

#[tokio::test]
async fn aborted_request_never_runs_success_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(provider_envelope(
                    &json!({ "overallSummary": "s", "segments": [car_segment()] }),
                ))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server, Duration::from_secs(30)));
    let completed = Arc::new(AtomicBool::new(false));

    let task = {
        let client = Arc::clone(&client);
        let completed = Arc::clone(&completed);
        tokio::spawn(async move {
            let request = AnalysisRequest::new(&[0u8; 16], "video/mp4").unwrap();
            let result = client.analyze(&request).await;
            if result.is_ok() {
                completed.store(true, Ordering::SeqCst);
            }
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    task.abort();
    let joined = task.await;
    assert!(joined.unwrap_err().is_cancelled());
    assert!(!completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn precondition_violations_never_reach_the_network() {
    let server = MockServer::start().await;
    // No mock mounted: any request hitting the server would 404 and map to
    // ProviderUnavailable, so a PreconditionViolation proves no I/O happened.
    let client = client_for(&server, Duration::from_secs(5));

    let err = client
        .submit_video_for_analysis(&[], "video/mp4")
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::PreconditionViolation(_)));
}
