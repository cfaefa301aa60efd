//! Transport client tests against a wiremock backend.
//!
//! Covers the three operations, the error taxonomy (unreachable vs bad
//! response), and best-effort body decoding (absent fields never fail).

use adrep::client::ReportClient;
use adrep::error::AdrepError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ReportClient {
    ReportClient::new(server.uri()).unwrap()
}

// =============================================================================
// SUBMIT
// =============================================================================

#[tokio::test]
async fn test_submit_sends_report_field_and_decodes_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process-report"))
        .and(body_json(json!({
            "report": "Patient took Drug X and developed rash"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drug": "Drug X",
            "adverse_events": ["rash"],
            "severity": "mild",
            "outcome": "recovered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let report = client
        .submit_report("Patient took Drug X and developed rash")
        .await
        .unwrap();

    assert_eq!(report.drug.as_deref(), Some("Drug X"));
    assert_eq!(report.adverse_events.as_deref(), Some(&["rash".to_string()][..]));
    assert_eq!(report.severity.as_deref(), Some("mild"));
    assert_eq!(report.outcome.as_deref(), Some("recovered"));
}

#[tokio::test]
async fn test_submit_forwards_empty_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process-report"))
        .and(body_json(json!({ "report": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    // The client does not pre-validate; the backend is the authority.
    let report = client.submit_report("").await.unwrap();
    assert!(report.drug.is_none());
}

#[tokio::test]
async fn test_submit_tolerates_sparse_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process-report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drug": "Drug Y"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let report = client.submit_report("anything").await.unwrap();

    assert_eq!(report.drug.as_deref(), Some("Drug Y"));
    assert!(report.adverse_events.is_none());
    assert!(report.severity.is_none());
    assert!(report.outcome.is_none());
}

#[tokio::test]
async fn test_submit_non_success_is_bad_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process-report"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.submit_report("text").await.unwrap_err();

    match err {
        AdrepError::BadResponse { status, .. } => assert_eq!(status, 500),
        other => panic!("expected BadResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_malformed_body_is_bad_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process-report"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.submit_report("text").await.unwrap_err();
    assert!(matches!(err, AdrepError::BadResponse { .. }), "{:?}", err);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_unreachable() {
    // Port 1 is never listening.
    let client = ReportClient::new("http://127.0.0.1:1").unwrap();
    let err = client.submit_report("text").await.unwrap_err();
    assert!(
        matches!(err, AdrepError::NetworkUnreachable { .. }),
        "{:?}",
        err
    );
}

// =============================================================================
// HISTORY
// =============================================================================

#[tokio::test]
async fn test_fetch_history_preserves_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "drug": "A", "adverse_events": ["rash"], "severity": "mild",
             "outcome": "recovered", "created_at": "2024-01-02"},
            {"id": 6, "drug": "B", "adverse_events": [], "severity": "severe",
             "outcome": "ongoing", "created_at": "2024-01-01"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let entries = client.fetch_history().await.unwrap();

    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![7, 6]);
    assert_eq!(entries[0].events_joined(), "rash");
    assert_eq!(entries[1].events_joined(), "");
}

#[tokio::test]
async fn test_fetch_history_tolerates_missing_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3},
            {"id": 2, "drug": null},
            {"id": 1, "created_at": "2024-01-01"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let entries = client.fetch_history().await.unwrap();

    assert_eq!(entries.len(), 3);
    assert!(entries[0].drug.is_none());
    assert!(entries[1].drug.is_none());
    assert_eq!(entries[2].created_at.as_deref(), Some("2024-01-01"));
}

#[tokio::test]
async fn test_fetch_history_returns_everything_the_backend_sends() {
    let server = MockServer::start().await;

    // Truncation to 10 is a view concern; the transport hands over all 25.
    let body: Vec<_> = (0..25).rev().map(|id| json!({"id": id})).collect();
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let entries = client.fetch_history().await.unwrap();
    assert_eq!(entries.len(), 25);
}

#[tokio::test]
async fn test_fetch_history_non_success_is_bad_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_history().await.unwrap_err();
    match err {
        AdrepError::BadResponse { status, .. } => assert_eq!(status, 503),
        other => panic!("expected BadResponse, got {:?}", other),
    }
}

// =============================================================================
// TRANSLATE
// =============================================================================

#[tokio::test]
async fn test_translate_sends_text_and_lang_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({ "text": "recovered", "lang": "fr" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original": "recovered",
            "lang": "fr",
            "translation": "rétabli"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let translation = client.translate("recovered", "fr").await.unwrap();
    assert_eq!(translation, "rétabli");
}

#[tokio::test]
async fn test_translate_forwards_unknown_lang() {
    let server = MockServer::start().await;

    // The lang enumeration is open; the client must not validate it.
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({ "text": "recovered", "lang": "de" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "translation": "recovered" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let translation = client.translate("recovered", "de").await.unwrap();
    assert_eq!(translation, "recovered");
}

#[tokio::test]
async fn test_translate_missing_field_is_bad_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lang": "fr" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.translate("recovered", "fr").await.unwrap_err();
    assert!(matches!(err, AdrepError::BadResponse { .. }), "{:?}", err);
}
