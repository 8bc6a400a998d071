//! `AppError` rendering and wire format.
//!
//! Every test builds against its own `TranslatorSlot` so the process-wide
//! slot stays empty for this binary.

use std::error::Error;
use std::sync::Arc;

use propcore::*;

fn catalog(id: &str, params: Option<&Params>) -> String {
    match (id, params) {
        ("api.user.missing", Some(p)) => format!("User {} not found", p["name"].as_str().unwrap_or("?")),
        ("api.user.missing", None) => "User not found".to_string(),
        ("api.empty", _) => String::new(),
        _ => NO_TRANSLATION.to_string(),
    }
}

fn slot_with_catalog() -> TranslatorSlot {
    let slot = TranslatorSlot::new();
    slot.install(Arc::new(catalog));
    slot
}

fn name_params(name: &str) -> Params {
    let mut p = Params::new();
    p.insert("name".into(), serde_json::json!(name));
    p
}

// ── Rendering ───────────────────────────────────────────────

#[test]
fn message_equals_id_without_translator() {
    let slot = TranslatorSlot::new();
    let err = AppError::new_in(&slot, "Users::get", "api.user.missing", None, "", 404);
    assert_eq!(err.message, "api.user.missing");
}

#[test]
fn construction_renders_with_params() {
    let slot = slot_with_catalog();
    let err = AppError::new_in(
        &slot,
        "Users::get",
        "api.user.missing",
        Some(name_params("ana")),
        "",
        404,
    );
    assert_eq!(err.message, "User ana not found");
}

#[test]
fn empty_params_render_without_params() {
    let slot = slot_with_catalog();
    let err = AppError::new_in(&slot, "Users::get", "api.user.missing", Some(Params::new()), "", 404);
    assert_eq!(err.message, "User not found");
}

#[test]
fn translate_is_idempotent_and_resettable() {
    let slot = slot_with_catalog();
    let mut err = AppError::new_in(&slot, "Users::get", "api.user.missing", None, "", 404);
    let first = err.message.clone();
    err.translate(slot.get());
    assert_eq!(err.message, first);

    err.translate(None);
    assert_eq!(err.message, "api.user.missing");
}

#[test]
fn empty_translation_falls_back_to_id() {
    let slot = slot_with_catalog();
    let err = AppError::new_in(&slot, "X::y", "api.empty", None, "", 500);
    assert_eq!(err.message, "api.empty");
}

#[test]
fn system_message_does_not_mutate() {
    let slot = TranslatorSlot::new();
    let err = AppError::new_in(&slot, "Users::get", "api.user.missing", Some(name_params("li")), "", 404);
    let catalog_fn: &dyn Translator = &catalog;
    assert_eq!(err.system_message(Some(catalog_fn)), "User li not found");
    assert_eq!(err.message, "api.user.missing");
}

// ── Display ─────────────────────────────────────────────────

#[test]
fn display_omits_untranslated_message() {
    let slot = slot_with_catalog();
    let err = AppError::new_in(&slot, "X.Y", "unknown.id", None, "boom", 500);
    assert_eq!(err.message, NO_TRANSLATION);
    assert_eq!(err.to_string(), "X.Y: boom");
}

#[test]
fn display_recurses_through_chain() {
    let slot = TranslatorSlot::new();
    let inner = AppError::new_in(&slot, "Store::save", "store.save", None, "disk full", 500);
    let outer = AppError::new_in(&slot, "Api::post", "api.post", None, "", 500).wrap(inner);
    assert_eq!(outer.to_string(), "Api::post: api.post, Store::save: store.save, disk full");

    let source = outer.source().unwrap();
    assert_eq!(source.to_string(), "Store::save: store.save, disk full");
}

#[test]
fn display_truncates_to_limit() {
    let slot = TranslatorSlot::new();
    let err = AppError::new_in(&slot, "X.Y", "id", None, "d".repeat(3000), 500);
    let s = err.to_string();
    assert_eq!(s.len(), 1024 + 3);
    assert!(s.ends_with("..."));
}

// ── Wire format ─────────────────────────────────────────────

#[test]
fn wire_omits_empty_optional_fields() {
    let slot = TranslatorSlot::new();
    let mut err = AppError::new_in(&slot, "X.Y", "id", None, "detail", 0);
    err.message = "msg".into();
    assert_eq!(
        err.to_json(),
        r#"{"id":"id","message":"msg","detailed_error":"detail"}"#
    );
}

#[test]
fn wire_includes_set_fields_and_folds_cause() {
    let slot = TranslatorSlot::new();
    let cause = AppError::new_in(&slot, "Inner::op", "inner", None, "", 0);
    let err = AppError::new_in(&slot, "X.Y", "id", None, "detail", 403)
        .with_request_id("req-1")
        .with_oauth(true)
        .wrap(cause);

    let v: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
    assert_eq!(v["request_id"], "req-1");
    assert_eq!(v["status_code"], 403);
    assert_eq!(v["is_oauth"], true);
    assert_eq!(v["detailed_error"], "detail, Inner::op: inner");
    assert!(v.get("origin").is_none());

    // the error itself keeps its own detail
    assert_eq!(err.detailed_error, "detail");
    // Serialize goes through the same projection
    assert_eq!(serde_json::to_string(&err).unwrap(), err.to_json());
}

#[test]
fn wire_round_trip_keeps_message() {
    let slot = slot_with_catalog();
    let err = AppError::new_in(&slot, "Users::get", "api.user.missing", Some(name_params("bo")), "d", 404)
        .with_request_id("r");
    let back = AppError::from_json(err.to_json().as_bytes());
    assert_eq!(back.id, err.id);
    assert_eq!(back.message, "User bo not found");
    assert_eq!(back.detailed_error, "d");
    assert_eq!(back.request_id, "r");
    assert_eq!(back.status_code, 404);
    assert!(!back.is_oauth);
    assert!(back.origin.is_empty());
    assert!(back.cause().is_none());
}

#[test]
fn from_json_tolerates_missing_fields() {
    let back = AppError::from_json(br#"{"id":"only.id"}"#);
    assert_eq!(back.id, "only.id");
    assert_eq!(back.message, "");
    assert_eq!(back.status_code, 0);
}

#[test]
fn from_json_describes_decode_failure() {
    let back = AppError::from_json(b"<html>bad gateway</html>");
    assert_eq!(back.id, "model.utils.decode_json.app_error");
    assert_eq!(back.origin, "AppError::from_json");
    assert_eq!(back.detailed_error, "body: <html>bad gateway</html>");
    assert_eq!(back.status_code, STATUS_INTERNAL_SERVER_ERROR);
    assert!(back.cause().is_some());
    assert!(back.source().is_some());
}

#[test]
fn from_json_reads_first_value_only() {
    let back = AppError::from_json(br#"{"id":"api.x","message":"m"} {"id":"y"}"#);
    assert_eq!(back.id, "api.x");
    assert_eq!(back.message, "m");

    let back = AppError::from_json(b"{\"id\":\"api.x\"}\n<trailing text>");
    assert_eq!(back.id, "api.x");
}

#[test]
fn from_json_treats_null_fields_as_empty() {
    let back = AppError::from_json(
        br#"{"id":"api.x","message":null,"detailed_error":null,"request_id":null,"status_code":null,"is_oauth":null}"#,
    );
    assert_eq!(back.id, "api.x");
    assert_eq!(back.message, "");
    assert_eq!(back.detailed_error, "");
    assert_eq!(back.request_id, "");
    assert_eq!(back.status_code, 0);
    assert!(!back.is_oauth);
}

#[test]
fn from_json_saturates_out_of_range_status() {
    let back = AppError::from_json(br#"{"id":"api.x","status_code":70000}"#);
    assert_eq!(back.id, "api.x");
    assert_eq!(back.status_code, u16::MAX);

    let back = AppError::from_json(br#"{"id":"api.x","status_code":-1}"#);
    assert_eq!(back.id, "api.x");
    assert_eq!(back.status_code, 0);
}

#[test]
fn from_json_empty_body_is_decode_failure() {
    for body in [&b""[..], b"   "] {
        let back = AppError::from_json(body);
        assert_eq!(back.id, "model.utils.decode_json.app_error");
        assert!(back.cause().is_some());
    }
}
