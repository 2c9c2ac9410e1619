// Unit tests for argument parsing and config overrides

use crate::cli::{Cli, OutputMode};
use crate::error::DdaError;

use zci_core::config::DdaConfig;

use std::path::Path;

use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("dda").chain(args.iter().copied())).unwrap()
}

#[test]
fn given_query_words_when_parsed_then_joined_with_single_spaces() {
    let cli = parse(&["what", "is", "  rust  "]);
    assert_eq!(cli.query_text().unwrap(), "what is rust");
}

/// **VALUE**: Verifies a missing query is a usage error, not a request for "".
///
/// **BUG THIS CATCHES**: Would catch an empty query being sent upstream and
/// printing the sentinel instead of usage with exit code 2.
#[test]
fn given_no_query_when_query_text_taken_then_returns_usage_error() {
    for args in [&[][..], &["   "][..]] {
        let err = parse(args).query_text().unwrap_err();
        assert!(matches!(err, DdaError::Usage { .. }));
    }
}

#[test]
fn given_mode_flags_when_parsed_then_output_mode_follows() {
    assert_eq!(parse(&["paris"]).output_mode(), OutputMode::Answer);
    assert_eq!(parse(&["--all", "paris"]).output_mode(), OutputMode::All);
    assert_eq!(parse(&["--json", "paris"]).output_mode(), OutputMode::Json);
}

#[test]
fn given_all_and_json_together_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["dda", "--all", "--json", "paris"]);
    assert!(result.is_err());
}

#[test]
fn given_repeated_verbose_flags_when_parsed_then_counted() {
    assert_eq!(parse(&["paris"]).verbose, 0);
    assert_eq!(parse(&["-vv", "paris"]).verbose, 2);
    assert_eq!(parse(&["-v", "-v", "-v", "paris"]).verbose, 3);
}

#[test]
fn given_log_file_when_parsed_then_path_is_kept() {
    let cli = parse(&["--log-file", "/tmp/dda.log", "paris"]);
    assert_eq!(cli.log_file.as_deref(), Some(Path::new("/tmp/dda.log")));
}

/// **VALUE**: Verifies every negative flag overrides the config.
///
/// **WHY THIS MATTERS**: The config file sets defaults; a one-off flag must win
/// for that invocation.
#[test]
fn given_override_flags_when_applied_then_config_is_updated() {
    let cli = parse(&[
        "--no-urls",
        "--no-web-fallback",
        "--html",
        "--no-safe-search",
        "--no-meanings",
        "paris",
    ]);
    let mut config = DdaConfig::default();

    cli.apply(&mut config).unwrap();

    assert!(!config.answer.urls);
    assert!(!config.answer.web_fallback);
    assert!(config.query.html);
    assert!(!config.query.safe_search);
    assert!(!config.query.meanings);
}

#[test]
fn given_no_flags_when_applied_then_config_is_unchanged() {
    let cli = parse(&["paris"]);
    let mut config = DdaConfig::default();

    cli.apply(&mut config).unwrap();

    assert_eq!(config, DdaConfig::default());
}

#[test]
fn given_comma_separated_priority_when_applied_then_replaces_config_priority() {
    let cli = parse(&["--priority", "definition, related.1", "paris"]);
    let mut config = DdaConfig::default();

    cli.apply(&mut config).unwrap();

    assert_eq!(config.answer.priority, vec!["definition", "related.1"]);
}

#[test]
fn given_bad_priority_when_applied_then_returns_error_and_keeps_config() {
    let cli = parse(&["--priority", "answer,infobox", "paris"]);
    let mut config = DdaConfig::default();

    let result = cli.apply(&mut config);

    assert!(matches!(result, Err(DdaError::Core(_))));
    assert_eq!(config.answer.priority, DdaConfig::default().answer.priority);
}
