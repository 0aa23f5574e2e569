//! Tests for the decode module

use super::*;
use crate::error::Error;
use serde_json::json;

#[test]
fn test_json_decoder_default_path() {
    let decoder = JsonDecoder::new();
    assert_eq!(decoder.record_path(), "data");
}

#[test]
fn test_json_decoder_extracts_data() {
    let decoder = JsonDecoder::new();
    let body = r#"{"data": [{"id": "a"}, {"id": "b"}], "pagination": {"count": 2}}"#;

    let records = decoder.decode(body).unwrap();
    assert_eq!(records, vec![json!({"id": "a"}), json!({"id": "b"})]);
}

#[test]
fn test_json_decoder_empty_data() {
    let decoder = JsonDecoder::new();
    let records = decoder.decode(r#"{"data": []}"#).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_json_decoder_nested_path() {
    let decoder = JsonDecoder::with_path("$.result.items");
    let body = r#"{"result": {"items": [1, 2, 3]}}"#;

    let records = decoder.decode(body).unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn test_json_decoder_missing_data_is_malformed() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode(r#"{"error": "nope"}"#).unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert!(err.to_string().contains("no 'data' collection"));
}

#[test]
fn test_json_decoder_null_data_is_malformed() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode(r#"{"data": null}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_json_decoder_non_array_data_is_malformed() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode(r#"{"data": {"id": "x"}}"#).unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert!(err.to_string().contains("must be an array, found object"));
}

#[test]
fn test_json_decoder_invalid_json_is_malformed() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode("<html>oops</html>").unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert!(err.to_string().contains("not valid JSON"));
}

#[test]
fn test_json_decoder_top_level_array_is_malformed() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode("[1, 2]").unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}
