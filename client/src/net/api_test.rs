use super::*;
use serde_json::json;

// --- endpoints ---

#[test]
fn endpoints_extend_the_service_base() {
    assert_eq!(query_endpoint(), format!("{}/query", api_base()));
    assert_eq!(health_endpoint(), format!("{}/health", api_base()));
}

#[test]
fn default_base_targets_the_local_service() {
    if option_env!("DEMANDBOARD_API_BASE").is_none() {
        assert_eq!(api_base(), "http://localhost:5001");
    }
}

// --- error messages ---

#[test]
fn body_message_field_wins() {
    let body = json!({ "message": "quota exceeded", "error": "ignored" });
    assert_eq!(error_message_from_body(&body, 500), "quota exceeded");
}

#[test]
fn body_error_field_is_the_fallback() {
    let body = json!({ "error": "unknown simulation id" });
    assert_eq!(error_message_from_body(&body, 422), "unknown simulation id");
}

#[test]
fn json_body_without_text_fields_reports_the_status() {
    assert_eq!(error_message_from_body(&json!({}), 503), "Server error: 503");
    assert_eq!(
        error_message_from_body(&json!({ "message": 42 }), 500),
        "Server error: 500"
    );
}

#[test]
fn non_json_body_falls_back_to_the_status_text() {
    assert_eq!(
        error_message_from_status(502, "Bad Gateway"),
        "Bad Gateway"
    );
    assert_eq!(error_message_from_status(502, ""), "Server error: 502");
}

#[test]
fn timeout_message_names_the_wait() {
    assert_eq!(timeout_message(), "no response after 30 seconds");
}
