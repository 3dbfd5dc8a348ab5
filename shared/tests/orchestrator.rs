mod common;

use futures::executor::block_on;
use serde_json::json;
use shared::api::IMAGE_FIELD;
use shared::render::{render_text, to_html};
use shared::{
    ClientError, Endpoint, ImageBlob, OperationError, RawResponse, RequestBody, Severity, Surface,
    TextVerdict, ValidationError,
};

use common::{MockTransport, harness};

fn png() -> ImageBlob {
    ImageBlob::new("moodboard.png", "image/png", vec![1, 2, 3, 4])
}

#[test]
fn validation_failures_never_reach_the_network() {
    let h = harness(MockTransport::default());

    assert_eq!(
        block_on(h.orchestrator.analyze_text()),
        Err(OperationError::Invalid(ValidationError::EmptyText))
    );
    assert_eq!(h.status_text().as_deref(), Some("Enter text to analyze"));

    assert_eq!(
        block_on(h.orchestrator.analyze_image()),
        Err(OperationError::Invalid(ValidationError::NoImage))
    );
    assert_eq!(h.status_text().as_deref(), Some("Select an image to analyze"));

    h.ui.update(|state| state.url.url = "   ".into());
    assert_eq!(
        block_on(h.orchestrator.parse_site()),
        Err(OperationError::Invalid(ValidationError::EmptyUrl))
    );
    assert!(!h.ui.state().progress_visible());

    assert!(h.transport.calls().is_empty());
    assert_eq!(h.ui.state().status.current().map(|m| m.severity), Some(Severity::Error));
}

#[test]
fn text_request_sends_null_competitor_name() {
    let h = harness(MockTransport::default().reply(200, r#"{"success": true, "analysis": {}}"#));
    h.ui.update(|state| state.text.text = "Great portfolio".into());

    block_on(h.orchestrator.analyze_text()).unwrap();

    let calls = h.transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].endpoint, Endpoint::AnalyzeText);
    assert_eq!(
        calls[0].body,
        RequestBody::Json(json!({"text": "Great portfolio", "competitor_name": null}))
    );
}

#[test]
fn text_success_renders_verdict_and_reports() {
    let body = r#"{"success": true, "analysis": {
        "design_score": 8, "animation_potential": 9, "strengths": ["Bold 3D work"],
        "summary": "Strong motion studio"
    }}"#;
    let h = harness(MockTransport::default().reply(200, body));
    h.ui.update(|state| {
        state.text.text = "Studio blurb".into();
        state.text.competitor_name = "MotionCraft Studio".into();
    });

    block_on(h.orchestrator.analyze_text()).unwrap();

    let verdict: TextVerdict = serde_json::from_value(json!({
        "design_score": 8, "animation_potential": 9, "strengths": ["Bold 3D work"],
        "summary": "Strong motion studio"
    }))
    .unwrap();
    let state = h.ui.state();
    assert_eq!(state.result(Surface::Text), Some(&render_text(&verdict)));
    let status = state.status.current().unwrap();
    assert_eq!(status.text, "Analysis complete!");
    assert_eq!(status.severity, Severity::Success);
    assert!(!state.is_busy(Surface::Text));
}

#[test]
fn backend_detail_is_shown_on_rejection() {
    let h = harness(
        MockTransport::default().reply(200, r#"{"success": false, "detail": "rate limited"}"#),
    );
    h.ui.update(|state| state.text.text = "Great portfolio".into());

    let result = block_on(h.orchestrator.analyze_text());

    assert_eq!(
        result,
        Err(OperationError::Failed(ClientError::Rejected { detail: Some("rate limited".into()) }))
    );
    assert_eq!(h.status_text().as_deref(), Some("Error: rate limited"));
    assert!(h.ui.state().result(Surface::Text).is_none());
}

#[test]
fn success_without_analysis_is_malformed() {
    let h = harness(MockTransport::default().reply(200, r#"{"success": true}"#));
    h.ui.update(|state| state.text.text = "x".into());

    let result = block_on(h.orchestrator.analyze_text());

    assert!(matches!(result, Err(OperationError::Failed(ClientError::Malformed(_)))));
    assert_eq!(h.status_text().as_deref(), Some("Error: Analysis error"));
}

#[test]
fn undecodable_success_body_uses_fallback() {
    let h = harness(MockTransport::default().reply(200, "<html>proxy error</html>"));
    h.ui.update(|state| state.text.text = "Great portfolio".into());

    let result = block_on(h.orchestrator.analyze_text());

    assert!(matches!(result, Err(OperationError::Failed(ClientError::Malformed(_)))));
    assert_eq!(h.status_text().as_deref(), Some("Error: Analysis error"));
    assert!(h.ui.state().result(Surface::Text).is_none());
}

#[test]
fn image_is_sent_as_multipart_file() {
    let body = r#"{"success": true,
        "analysis": {"description": "Neon poster", "visual_style_score": 7}}"#;
    let h = harness(MockTransport::default().reply(200, body));
    h.ui.select_image(png());

    block_on(h.orchestrator.analyze_image()).unwrap();

    let calls = h.transport.calls();
    assert_eq!(calls[0].endpoint, Endpoint::AnalyzeImage);
    assert_eq!(calls[0].body, RequestBody::Multipart { field: IMAGE_FIELD, file: png() });
    let html = to_html(h.ui.state().result(Surface::Image).unwrap());
    assert!(html.contains("7/10"));
    assert!(html.contains("Neon poster"));
    // The selection survives the submission.
    assert!(h.ui.state().image.ready());
}

#[test]
fn http_fault_without_detail_uses_fallback() {
    let h = harness(MockTransport::default().reply(500, "Internal Server Error"));
    h.ui.select_image(png());

    let _ = block_on(h.orchestrator.analyze_image());

    assert_eq!(h.status_text().as_deref(), Some("Error: Analysis error (HTTP 500)"));
}

#[test]
fn progress_is_hidden_after_network_failure() {
    let h = harness(MockTransport::default().fail(ClientError::Network("Failed to fetch".into())));
    h.ui.update(|state| state.url.url = "https://motion.example".into());

    let result = block_on(h.orchestrator.parse_site());

    assert!(matches!(result, Err(OperationError::Failed(ClientError::Network(_)))));
    assert_eq!(h.status_text().as_deref(), Some("Error: Parsing error"));
    let state = h.ui.state();
    assert!(!state.progress_visible());
    assert!(!state.is_busy(Surface::Site));
}

#[test]
fn site_rejection_reads_error_field() {
    let reply = r#"{"success": false, "error": "timeout"}"#;
    let h = harness(MockTransport::default().reply(200, reply));
    h.ui.update(|state| state.url.url = "https://motion.example".into());

    let _ = block_on(h.orchestrator.parse_site());

    assert_eq!(h.status_text().as_deref(), Some("Error: timeout"));
}

#[test]
fn bulk_parse_reports_total() {
    let h = harness(MockTransport::default().reply(200, r#"{"success": true, "total": 12}"#));

    block_on(h.orchestrator.parse_all_sites()).unwrap();

    assert_eq!(h.transport.calls()[0].endpoint, Endpoint::ParseAll);
    assert_eq!(h.transport.calls()[0].body, RequestBody::Empty);
    let state = h.ui.state();
    let fragment = state.result(Surface::Site).unwrap();
    assert!(common::has_block_text(fragment, "Total analyzed: 12 competitors"));
    assert_eq!(
        state.status.current().map(|m| m.text.as_str()),
        Some("Successfully analyzed 12 competitors!")
    );
    assert!(!state.progress_visible());
}

#[test]
fn bulk_failure_without_detail() {
    let h = harness(MockTransport::default().reply(200, r#"{"success": false}"#));

    let _ = block_on(h.orchestrator.parse_all_sites());

    assert_eq!(h.status_text().as_deref(), Some("Error: Bulk parsing error"));
}

#[test]
fn second_trigger_while_in_flight_is_ignored() {
    let (transport, gate) = MockTransport::default().gated();
    let h = harness(transport);
    h.ui.update(|state| state.url.url = "https://motion.example".into());

    let first = h.orchestrator.clone();
    let second = h.orchestrator.clone();
    let ui = h.ui.clone();
    let (first_result, second_result) = block_on(async move {
        futures::join!(first.parse_site(), async move {
            assert!(ui.state().progress_visible());
            assert!(ui.state().is_busy(Surface::Site));
            let repeated = second.parse_site().await;
            let bulk = second.parse_all_sites().await;
            let reply = r#"{"success": true, "url": "https://motion.example"}"#;
            gate.send(Ok(RawResponse::new(200, reply))).unwrap();
            (repeated, bulk)
        })
    });

    assert_eq!(first_result, Ok(()));
    assert_eq!(second_result.0, Err(OperationError::Busy(Surface::Site)));
    assert_eq!(second_result.1, Err(OperationError::Busy(Surface::Site)));
    assert_eq!(h.transport.calls().len(), 1);
    assert!(!h.ui.state().progress_visible());
    assert!(!h.ui.state().is_busy(Surface::Site));
}

#[test]
fn surfaces_do_not_block_each_other() {
    let h = harness(MockTransport::default().reply(200, r#"{"success": true, "analysis": {}}"#));
    h.ui.select_image(png());
    h.ui.update(|state| state.text.text = "Great portfolio".into());
    let _image_in_flight = h.ui.lease(Surface::Image).unwrap();

    assert_eq!(block_on(h.orchestrator.analyze_text()), Ok(()));
    assert_eq!(block_on(h.orchestrator.analyze_image()), Err(OperationError::Busy(Surface::Image)));
    assert_eq!(h.transport.calls().len(), 1);
}

#[test]
fn health_is_stored_without_status_message() {
    let body = r#"{"status": "healthy", "version": "1.0.0",
        "services": {"deepseek": true, "yandex_vision": false, "parser": false}}"#;
    let h = harness(MockTransport::default().reply(200, body).reply(503, ""));

    let report = block_on(h.orchestrator.refresh_health()).unwrap();
    assert_eq!(report.services.get("deepseek"), Some(&true));
    assert_eq!(h.ui.state().health.as_ref(), Some(&report));

    assert!(block_on(h.orchestrator.refresh_health()).is_err());
    assert_eq!(h.ui.state().health.as_ref(), Some(&report));
    assert!(h.status_text().is_none());
}
