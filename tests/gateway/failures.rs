use crate::backend::{assignments, closed_port_url, gateway_for};
use asca::core::models::samples::sample_wellness_input;
use asca::ui::notify::{self, START_BACKEND_HINT};
use asca::{BackendGateway, FailureKind, GatewayError, RequestOptions};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run every typed operation and collect the errors.
async fn every_operation(gateway: &BackendGateway) -> Vec<(&'static str, GatewayError)> {
    let assignments = assignments();
    let wellness = sample_wellness_input();
    let mut failures = Vec::new();

    if let Err(e) = gateway.health_check().await {
        failures.push(("health_check", e));
    }
    if let Err(e) = gateway.analyze_assignment(&assignments[0]).await {
        failures.push(("analyze_assignment", e));
    }
    if let Err(e) = gateway.analyze_workload(&assignments).await {
        failures.push(("analyze_workload", e));
    }
    if let Err(e) = gateway.create_schedule(&assignments, None).await {
        failures.push(("create_schedule", e));
    }
    if let Err(e) = gateway
        .wellness_check(&assignments, None, Some(&wellness))
        .await
    {
        failures.push(("wellness_check", e));
    }
    if let Err(e) = gateway
        .full_analysis(&assignments, None, Some(&wellness))
        .await
    {
        failures.push(("full_analysis", e));
    }
    if let Err(e) = gateway.suggest_break("studying", 90).await {
        failures.push(("suggest_break", e));
    }
    failures
}

#[tokio::test]
async fn server_error_fails_every_operation_with_status() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let failures = every_operation(&gateway).await;
    assert_eq!(failures.len(), 7);
    for (op, err) in failures {
        assert_eq!(err.kind(), FailureKind::HttpStatus, "{op}");
        assert!(err.to_string().contains("500"), "{op}: {err}");
    }
}

#[tokio::test]
async fn unreachable_backend_fails_every_operation_with_transport() {
    let gateway = BackendGateway::new(&closed_port_url()).unwrap();
    let failures = every_operation(&gateway).await;
    assert_eq!(failures.len(), 7);
    for (op, err) in failures {
        assert!(
            matches!(err, GatewayError::Transport { .. }),
            "{op}: {err:?}"
        );
    }
}

#[tokio::test]
async fn transport_banner_tells_the_student_how_to_start_the_backend() {
    let base_url = closed_port_url();
    let gateway = BackendGateway::new(&base_url).unwrap();
    let err = gateway.health_check().await.unwrap_err();

    let note = notify::for_error(&err, gateway.base_url());
    assert!(note.is_error());
    assert!(note.message.contains(START_BACKEND_HINT));
    assert!(note.message.contains(&base_url));
}

#[tokio::test]
async fn html_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-workload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway.analyze_workload(&assignments()).await.unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse { .. }), "{err:?}");
    assert_eq!(err.kind(), FailureKind::Malformed);
}

#[tokio::test]
async fn raw_request_returns_malformed_for_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway
        .request("/", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse { .. }), "{err:?}");
}

#[tokio::test]
async fn success_false_is_rejected_with_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/full-analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Wellness Monitor unavailable"
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway
        .full_analysis(&assignments(), None, None)
        .await
        .unwrap_err();
    match &err {
        GatewayError::Rejected { endpoint, reason } => {
            assert_eq!(endpoint, "/api/full-analysis");
            assert_eq!(reason, "Wellness Monitor unavailable");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    let note = notify::for_error(&err, gateway.base_url());
    assert!(!note.is_error());
}

#[tokio::test]
async fn missing_data_field_is_a_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-workload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway.analyze_workload(&assignments()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Schema { .. }), "{err:?}");
}

#[tokio::test]
async fn out_of_range_wellness_score_is_a_schema_error() {
    let server = MockServer::start().await;
    let mut body = crate::backend::full_analysis_body();
    body["results"]["wellness_assessment"]["wellness_score"] = json!(140);
    Mock::given(method("POST"))
        .and(path("/api/full-analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway
        .full_analysis(&assignments(), None, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Malformed);
}

#[tokio::test]
async fn error_detail_is_surfaced_without_secrets() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-assignment"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "Gemini call failed for key AIzaSyD3adb33fCAFEbabe0123456789"
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let err = gateway
        .analyze_assignment(&assignments()[0])
        .await
        .unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("API Error: 500 Internal Server Error"), "{text}");
    assert!(text.contains("Gemini call failed"), "{text}");
    assert!(!text.contains("AIzaSyD3adb33f"), "{text}");
}

#[tokio::test]
async fn not_found_keeps_status() {
    let server = MockServer::start().await;

    let gateway = gateway_for(&server).await;
    let err = gateway.suggest_break("reading", 30).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(err.to_string().contains("404 Not Found"));
}
