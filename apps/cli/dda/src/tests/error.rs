// Unit tests for CLI error formatting and exit codes

use crate::error::DdaError;

use zci_core::error::ZciClientError;

#[test]
fn given_usage_error_then_exit_code_is_two() {
    let err = DdaError::usage("a query is required");

    assert_eq!(err.exit_status(), 2);
    assert!(err.to_string().contains("Usage Error"));
}

/// **VALUE**: Verifies runtime failures exit with 1 and keep the core message.
#[test]
fn given_core_error_then_exit_code_is_one_and_message_is_transparent() {
    let inner = ZciClientError::server(500u16, "boom");
    let inner_message = inner.to_string();

    let err = DdaError::from(inner);

    assert_eq!(err.exit_status(), 1);
    assert_eq!(err.to_string(), inner_message);
}

#[test]
fn given_logger_error_when_formatted_then_includes_location() {
    let err = DdaError::logger("cannot open file");

    let message = err.to_string();

    assert!(message.contains("Logger Error: cannot open file"));
    assert!(message.contains("error.rs:"));
    assert_eq!(err.exit_status(), 1);
}
