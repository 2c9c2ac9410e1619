use zci_core::decode_response;
use zci_core::error::{CoreError, DecodeError, SelectorError, ZciClientError};
use zci_core::resolver::Selector;

use serde_json::json;

use std::error::Error;

/// **VALUE**: Verifies decode errors carry the file and line they were raised at.
///
/// **WHY THIS MATTERS**: A decode failure in production comes with a payload we
/// usually can't see again. The location is what tells us which accessor rejected it.
///
/// **BUG THIS CATCHES**: Would catch a variant losing its `location` field or the
/// Display format dropping it.
#[test]
fn given_structural_decode_error_when_formatted_then_includes_field_and_location() {
    let err = decode_response(json!({"Results": "nope"})).unwrap_err();

    let message = err.to_string();

    assert!(message.contains("Structural Error"));
    assert!(message.contains("Results"));
    assert!(message.contains(".rs:"), "Missing location in: {message}");
}

#[test]
fn given_helper_constructor_when_called_then_location_points_at_caller() {
    let expected_line = line!() + 1;
    let err = DecodeError::structural("Heading", "expected string");

    match err {
        DecodeError::Structural { location, .. } => {
            assert_eq!(location.line, expected_line);
            assert!(location.file.ends_with("error.rs"));
        }
        other => panic!("Expected structural error, got {other:?}"),
    }
}

#[test]
fn given_selector_parse_failure_when_formatted_then_includes_name_and_location() {
    let err = "infobox".parse::<Selector>().unwrap_err();

    let message = err.to_string();

    assert!(matches!(err, SelectorError::UnknownField { .. }));
    assert!(message.contains("'infobox'"));
    assert!(message.contains('['));
}

#[test]
fn given_server_error_when_formatted_then_includes_status_and_message() {
    let err = ZciClientError::server(404u16, "not found");

    let message = err.to_string();

    assert!(message.contains("HTTP 404"));
    assert!(message.contains("not found"));
    assert!(message.contains("error.rs"));
}

/// **VALUE**: Verifies wrapping in `CoreError` keeps the inner message and source chain.
#[test]
fn given_wrapped_decode_error_when_formatted_then_message_is_transparent() {
    let inner = decode_response(json!([])).unwrap_err();
    let inner_message = inner.to_string();

    let client_err = ZciClientError::from(inner);
    assert_eq!(client_err.to_string(), inner_message);

    let core_err = CoreError::from(client_err);
    assert_eq!(core_err.to_string(), inner_message);
    assert!(core_err.source().is_none());
}
