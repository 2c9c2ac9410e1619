// End-to-end runs of the command against a local mock endpoint

use dda::cli::Cli;
use dda::error::DdaError;
use dda::{run, run_with_config};

use zci_core::config::paths::ENV_CONFIG_DIR;
use zci_core::config::{CONFIG_FILE_NAME, DdaConfig, ENV_BASE_URL};

use clap::Parser;
use serial_test::serial;
use tempfile::TempDir;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CALC_BODY: &str = r#"{"Type": "", "Answer": "1 + 1 = 2", "AnswerType": "calc", "Heading": "", "RelatedTopics": []}"#;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("dda").chain(args.iter().copied())).unwrap()
}

async fn mock_endpoint(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer) -> DdaConfig {
    let mut config = DdaConfig::default();
    config.api.base_url = server.uri();
    config
}

/// **VALUE**: `dda 1 + 1` prints the calculator answer.
#[tokio::test]
async fn given_calculator_query_when_run_then_prints_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "\\1 + 1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CALC_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_with_config(&cli(&["1", "+", "1"]), config_for(&server))
        .await
        .unwrap();

    assert_eq!(output, "1 + 1 = 2");
}

#[tokio::test]
async fn given_all_flag_when_run_then_prints_sorted_raw_fields_without_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "1 + 1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CALC_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_with_config(&cli(&["--all", "1 + 1"]), config_for(&server))
        .await
        .unwrap();

    assert_eq!(
        output,
        "Answer: 1 + 1 = 2\nAnswerType: calc\nHeading: \nRelatedTopics\nType: "
    );
}

#[tokio::test]
async fn given_json_flag_when_run_then_prints_decoded_response() {
    let server = mock_endpoint(CALC_BODY).await;

    let output = run_with_config(&cli(&["--json", "1 + 1"]), config_for(&server))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["kind"], "calc");
    assert_eq!(value["answer"]["text"], "1 + 1 = 2");
    assert!(value.get("raw").is_none());
}

/// **VALUE**: Verifies flags reach the resolver: no web fallback means sentinel.
#[tokio::test]
async fn given_no_web_fallback_flag_when_only_redirect_present_then_prints_sentinel() {
    let server = mock_endpoint(r#"{"Type": "", "Redirect": "https://www.rust-lang.org/"}"#).await;

    let with_fallback = run_with_config(&cli(&["rust"]), config_for(&server))
        .await
        .unwrap();
    let without_fallback =
        run_with_config(&cli(&["--no-web-fallback", "rust"]), config_for(&server))
            .await
            .unwrap();

    assert_eq!(with_fallback, "https://www.rust-lang.org/");
    assert_eq!(without_fallback, "Sorry, no results.");
}

#[tokio::test]
async fn given_no_query_when_run_then_returns_usage_error() {
    let err = run_with_config(&cli(&[]), DdaConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DdaError::Usage { .. }));
    assert_eq!(err.exit_status(), 2);
}

#[tokio::test]
async fn given_upstream_failure_when_run_then_returns_core_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = run_with_config(&cli(&["paris"]), config_for(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, DdaError::Core(_)));
    assert_eq!(err.exit_status(), 1);
}

/// **VALUE**: Full path: config directory from the environment, base URL
/// override, answer section from the file.
#[tokio::test]
#[serial]
async fn given_config_dir_and_base_url_env_when_run_then_loaded_config_is_used() {
    let server = mock_endpoint(
        r#"{"Type": "A", "Answer": "", "Definition": "a definition",
            "DefinitionURL": "https://dictionary.example/x"}"#,
    )
    .await;
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[answer]\nurls = false\n",
    )
    .unwrap();
    // SAFETY: #[serial]
    unsafe {
        std::env::set_var(ENV_CONFIG_DIR, dir.path());
        std::env::set_var(ENV_BASE_URL, server.uri());
    }

    let result = run(&cli(&["x"])).await;

    // SAFETY: #[serial]
    unsafe {
        std::env::remove_var(ENV_CONFIG_DIR);
        std::env::remove_var(ENV_BASE_URL);
    }
    assert_eq!(result.unwrap(), "a definition");
}
