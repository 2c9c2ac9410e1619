// Unit tests for priority selector parsing and lookup

use crate::error::SelectorError;
use crate::resolver::Selector;

use models::{Answer, Definition, Response, Topic};

#[test]
fn given_scalar_field_names_when_parsed_then_map_to_variants() {
    assert_eq!("answer".parse::<Selector>().unwrap(), Selector::Answer);
    assert_eq!("definition".parse::<Selector>().unwrap(), Selector::Definition);
    assert_eq!("abstract".parse::<Selector>().unwrap(), Selector::Abstract);
    assert_eq!("redirect".parse::<Selector>().unwrap(), Selector::Redirect);
}

/// **VALUE**: Verifies list fields accept an index and default to 0 without one.
///
/// **WHY THIS MATTERS**: `related.0` is the textual form users put in configs;
/// the legacy `related` alias must keep working.
#[test]
fn given_list_field_names_when_parsed_then_index_defaults_to_zero() {
    assert_eq!(
        "related_topics".parse::<Selector>().unwrap(),
        Selector::RelatedTopics(0)
    );
    assert_eq!(
        "related.0".parse::<Selector>().unwrap(),
        Selector::RelatedTopics(0)
    );
    assert_eq!(
        "related_topics.3".parse::<Selector>().unwrap(),
        Selector::RelatedTopics(3)
    );
    assert_eq!("results".parse::<Selector>().unwrap(), Selector::Results(0));
    assert_eq!("results.2".parse::<Selector>().unwrap(), Selector::Results(2));
}

#[test]
fn given_mixed_case_and_whitespace_when_parsed_then_accepted() {
    assert_eq!(" Answer ".parse::<Selector>().unwrap(), Selector::Answer);
    assert_eq!(
        "RELATED.1".parse::<Selector>().unwrap(),
        Selector::RelatedTopics(1)
    );
}

/// **VALUE**: Verifies caller mistakes are reported as selector errors.
///
/// **BUG THIS CATCHES**: Would catch a misspelled field silently resolving to
/// nothing, which would make every answer fall through to the sentinel.
#[test]
fn given_unknown_field_when_parsed_then_returns_unknown_field_error() {
    let err = "answr".parse::<Selector>().unwrap_err();
    match err {
        SelectorError::UnknownField { name, .. } => assert_eq!(name, "answr"),
        other => panic!("Expected UnknownField, got {other:?}"),
    }
}

#[test]
fn given_index_on_scalar_field_when_parsed_then_returns_not_indexable_error() {
    let err = "definition.0".parse::<Selector>().unwrap_err();
    assert!(matches!(err, SelectorError::NotIndexable { ref name, .. } if name == "definition"));
    assert!(err.to_string().contains("not indexable"));
}

#[test]
fn given_non_numeric_index_when_parsed_then_returns_invalid_index_error() {
    for text in ["related.first", "results.-1", "related_topics."] {
        let err = text.parse::<Selector>().unwrap_err();
        assert!(
            matches!(err, SelectorError::InvalidIndex { .. }),
            "{text} should be an invalid index"
        );
    }
}

#[test]
fn given_selectors_when_displayed_then_round_trip_through_parse() {
    let selectors = [
        Selector::Answer,
        Selector::Definition,
        Selector::Abstract,
        Selector::Redirect,
        Selector::Results(1),
        Selector::RelatedTopics(0),
    ];

    for selector in selectors {
        let text = selector.to_string();
        assert_eq!(text.parse::<Selector>().unwrap(), selector);
    }
    assert_eq!(Selector::RelatedTopics(0).to_string(), "related_topics.0");
}

#[test]
fn given_list_of_names_when_parsed_then_stops_at_first_bad_entry() {
    let parsed = Selector::parse_list(["answer", "related.1"]).unwrap();
    assert_eq!(parsed, vec![Selector::Answer, Selector::RelatedTopics(1)]);

    assert!(Selector::parse_list(["answer", "nope", "definition"]).is_err());
}

#[test]
fn given_response_when_candidate_taken_then_exposes_text_and_url() {
    let response = Response {
        answer: Answer::new("42", ""),
        definition: Definition {
            text: String::from("a number"),
            url: String::from("https://example.org/42"),
            source: String::from("Example"),
        },
        related_topics: vec![Topic {
            text: String::from("Forty-two"),
            url: String::from("https://duckduckgo.com/42"),
            ..Topic::default()
        }],
        ..Response::default()
    };

    let answer = Selector::Answer.candidate(&response).unwrap();
    assert_eq!(answer.text, "42");
    assert_eq!(answer.url, None);

    let definition = Selector::Definition.candidate(&response).unwrap();
    assert_eq!(definition.url, Some("https://example.org/42"));

    let topic = Selector::RelatedTopics(0).candidate(&response).unwrap();
    assert_eq!(topic.text, "Forty-two");

    assert_eq!(Selector::RelatedTopics(1).candidate(&response), None);
    assert_eq!(Selector::Results(0).candidate(&response), None);
}
