//! Integration tests for the JSON round-trip helpers.
//!
//! Covers:
//! - Field-for-field round trips through typed values
//! - Arbitrary structured data via `serde_json::Value`
//! - Parse-error propagation for malformed text

use serde::{Deserialize, Serialize};
use serde_json::json;

use selkit::{Rectangle, SelkitError, from_json, to_json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Inventory {
    name: String,
    tags: Vec<String>,
    count: u32,
}

// ============================================================================
// ROUND TRIPS
// ============================================================================

#[test]
fn test_rectangle_round_trip() {
    let rect = Rectangle::new(10.0, 20.0);
    let text = to_json(&rect).unwrap();
    let back: Rectangle = from_json(&text).unwrap();

    assert_eq!(back, rect);
    assert_eq!(back.area(), 200.0);
}

#[test]
fn test_rectangle_parses_from_handwritten_text() {
    let back: Rectangle = from_json(r#"{"width":10,"height":20}"#).unwrap();
    assert_eq!(back, Rectangle::new(10.0, 20.0));
}

#[test]
fn test_nested_struct_round_trip() {
    let value = Inventory {
        name: "crate".to_string(),
        tags: vec!["wood".to_string(), "heavy".to_string()],
        count: 3,
    };
    let text = to_json(&value).unwrap();
    let back: Inventory = from_json(&text).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_arbitrary_value_round_trip() {
    let value = json!({
        "title": "inventory",
        "items": [1, 2, 3],
        "nested": { "ok": true, "missing": null }
    });
    let text = to_json(&value).unwrap();
    let back: serde_json::Value = from_json(&text).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_array_order_is_preserved() {
    let text = to_json(&json!(["c", "a", "b"])).unwrap();
    assert_eq!(text, r#"["c","a","b"]"#);
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = from_json::<Rectangle>("{not json at all").unwrap_err();
    assert!(matches!(err, SelkitError::Parse(_)));
}

#[test]
fn test_shape_mismatch_is_a_parse_error() {
    let err = from_json::<Rectangle>(r#"{"width":"wide"}"#).unwrap_err();
    assert!(matches!(err, SelkitError::Parse(_)));
}
