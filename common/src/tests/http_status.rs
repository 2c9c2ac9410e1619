use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_categorized_then_ranges_are_respected() {
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(200).is_client_error());
    assert!(!HttpStatusCode(200).is_server_error());
}

/// **VALUE**: The CLI prints a throttling hint only for these codes.
#[test]
fn given_throttling_status_when_checked_then_reports_rate_limited() {
    assert!(HttpStatusCode::from(429).is_rate_limited());
    assert!(HttpStatusCode::from(403).is_rate_limited());
    assert!(!HttpStatusCode::from(500).is_rate_limited());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode(502).to_string(), "502");
}
