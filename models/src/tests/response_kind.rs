use crate::ResponseKind;

/// **VALUE**: Verifies the fixed `Type` code table.
///
/// **WHY THIS MATTERS**: The code table is the only way a response without an
/// `AnswerType` gets a kind. A wrong mapping mislabels every disambiguation page.
///
/// **BUG THIS CATCHES**: Would catch a swapped or missing letter in `from_code`.
#[test]
fn given_known_type_codes_when_mapped_then_produce_named_kinds() {
    let table = [
        ("A", "answer"),
        ("D", "disambiguation"),
        ("C", "category"),
        ("N", "name"),
        ("E", "exclusive"),
        ("", "nothing"),
    ];

    for (code, expected) in table {
        let kind = ResponseKind::from_code(code);
        assert_eq!(
            kind.as_ref().map(ResponseKind::as_str),
            Some(expected),
            "Code {code:?} should map to {expected}"
        );
    }
}

#[test]
fn given_unknown_type_code_when_mapped_then_returns_none() {
    assert_eq!(ResponseKind::from_code("X"), None);
    assert_eq!(ResponseKind::from_code("a"), None);
    assert_eq!(ResponseKind::from_code("AA"), None);
}

/// **VALUE**: Verifies an answer type reads back as its own text.
///
/// **BUG THIS CATCHES**: Would catch if `AnswerType` kinds displayed as a fixed label.
#[test]
fn given_answer_type_kind_when_compared_with_str_then_matches_answer_type() {
    let kind = ResponseKind::AnswerType(String::from("calc"));

    assert_eq!(kind, "calc");
    assert_eq!(kind.to_string(), "calc");
    assert_ne!(kind, "answer");
}

#[test]
fn given_default_kind_then_is_nothing() {
    assert_eq!(ResponseKind::default(), ResponseKind::Nothing);
    assert_eq!(ResponseKind::default(), "nothing");
}
