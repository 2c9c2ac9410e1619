// Client tests against a local mock of the instant-answer endpoint

use zci_core::config::ApiConfig;
use zci_core::error::ZciClientError;
use zci_core::{QueryOptions, Resolver, ZciClient, ZciOptions};

use models::ResponseKind;

use std::time::Duration;

use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARIS_BODY: &str = r#"{
    "Type": "D",
    "Heading": "Paris",
    "AbstractText": "",
    "Answer": "",
    "Definition": "",
    "Redirect": "",
    "RelatedTopics": [
        {"Text": "Paris is the capital of France.", "FirstURL": "https://duckduckgo.com/Paris",
         "Result": "", "Icon": {"URL": "", "Height": "", "Width": ""}},
        {"Name": "People", "Topics": [
            {"Text": "Paris Hilton", "FirstURL": "https://duckduckgo.com/Paris_Hilton",
             "Result": "", "Icon": {"URL": "", "Height": "", "Width": ""}}
        ]}
    ],
    "Results": []
}"#;

/// **VALUE**: Verifies the wire request carries every fixed parameter.
///
/// **WHY THIS MATTERS**: The upstream defaults to HTML and redirects; without
/// `o=json` and `no_redirect=1` the body is not decodable at all.
#[tokio::test]
async fn given_mock_server_when_queried_then_sends_expected_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "paris"))
        .and(query_param("o", "json"))
        .and(query_param("kp", "1"))
        .and(query_param("no_redirect", "1"))
        .and(query_param("no_html", "1"))
        .and(query_param("d", "0"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARIS_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZciClient::new(&server.uri()).unwrap();
    let response = client.query("paris", &QueryOptions::default()).await.unwrap();

    assert_eq!(response.kind, ResponseKind::Disambiguation);
    assert_eq!(response.heading, "Paris");
    assert_eq!(response.related_topics.len(), 2);
    assert_eq!(response.related_topics[1].text, "Paris Hilton");
}

/// **VALUE**: End-to-end `zci` over HTTP: prefixed query, flattened topics,
/// resolved with the URL suffix.
#[tokio::test]
async fn given_disambiguation_response_when_zci_called_then_returns_first_topic_with_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "\\paris"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARIS_BODY))
        .mount(&server)
        .await;

    let client = ZciClient::new(&server.uri()).unwrap();
    let answer = client.zci("paris", &ZciOptions::default()).await.unwrap();

    assert_eq!(
        answer,
        "Paris is the capital of France. (https://duckduckgo.com/Paris)"
    );
}

#[tokio::test]
async fn given_custom_priority_when_zci_called_then_resolver_order_applies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARIS_BODY))
        .mount(&server)
        .await;

    let client = ZciClient::new(&server.uri()).unwrap();
    let options = ZciOptions {
        query: QueryOptions::default(),
        resolver: Resolver::from_names(["related.1"]).unwrap().with_urls(false),
    };

    let answer = client.zci("paris", &options).await.unwrap();

    assert_eq!(answer, "Paris Hilton");
}

/// **VALUE**: Verifies non-2xx responses surface as server errors with the status.
///
/// **BUG THIS CATCHES**: Would catch an error page being handed to the decoder
/// and reported as a confusing JSON error.
#[tokio::test]
async fn given_server_error_when_queried_then_returns_server_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = ZciClient::new(&server.uri()).unwrap();
    let err = client
        .query("paris", &QueryOptions::default())
        .await
        .unwrap_err();

    let status = err.status().expect("status should be set");
    assert_eq!(status.0, 500);
    assert!(status.is_server_error());
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn given_rate_limit_when_queried_then_status_reports_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = ZciClient::new(&server.uri()).unwrap();
    let err = client
        .zci("paris", &ZciOptions::default())
        .await
        .unwrap_err();

    assert!(err.status().is_some_and(|status| status.is_rate_limited()));
}

#[tokio::test]
async fn given_wrongly_shaped_body_when_queried_then_returns_decode_error_naming_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"Type": "A", "RelatedTopics": 7}"#),
        )
        .mount(&server)
        .await;

    let client = ZciClient::new(&server.uri()).unwrap();
    let err = client
        .query("paris", &QueryOptions::default())
        .await
        .unwrap_err();

    match err {
        ZciClientError::Decode(decode) => assert_eq!(decode.field(), Some("RelatedTopics")),
        other => panic!("Expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_slow_server_when_queried_then_returns_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PARIS_BODY)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 1,
        ..ApiConfig::default()
    };
    let client = ZciClient::from_config(&config).unwrap();

    let err = client
        .query("paris", &QueryOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ZciClientError::Http { is_timeout: true, .. }));
}

#[tokio::test]
async fn given_passthrough_param_when_queried_then_sent_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("t", "dda"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZciClient::new(&server.uri()).unwrap();
    let options = QueryOptions::default().with_param("t", "dda");

    let response = client.query("paris", &options).await.unwrap();

    assert_eq!(response.kind, ResponseKind::Nothing);
}
