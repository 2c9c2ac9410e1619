// Unit tests for the client over an in-memory transport

use crate::error::ZciClientError;
use crate::query::QueryOptions;
use crate::resolver::Resolver;
use crate::transport::Transport;
use crate::zci_client::{ZciClient, ZciOptions};

use std::sync::{Arc, Mutex};

use url::Url;

/// Returns a canned body and records every URL it was asked for.
#[derive(Clone, Default)]
struct StaticTransport {
    body: &'static str,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl StaticTransport {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            requests: Arc::default(),
        }
    }

    fn last_query(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let url = requests.last().expect("no request recorded");
        url.query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    }
}

impl Transport for StaticTransport {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ZciClientError> {
        self.requests.lock().unwrap().push(url.clone());
        Ok(self.body.as_bytes().to_vec())
    }
}

struct FailingTransport;

impl Transport for FailingTransport {
    async fn fetch(&self, _url: &Url) -> Result<Vec<u8>, ZciClientError> {
        Err(ZciClientError::server(503u16, "unavailable"))
    }
}

const CALC_BODY: &str = r#"{"Type": "", "Answer": "1 + 1 = 2", "AnswerType": "calc", "RelatedTopics": []}"#;

/// **VALUE**: End-to-end "1 + 1" through query, decode and kind override.
#[tokio::test]
async fn given_calculator_body_when_queried_then_kind_is_calc() {
    let transport = StaticTransport::new(CALC_BODY);
    let client = ZciClient::with_transport("https://api.duckduckgo.com/", transport.clone()).unwrap();

    let response = client.query("1 + 1", &QueryOptions::default()).await.unwrap();

    assert_eq!(response.kind, "calc");
    assert_eq!(response.answer.text, "1 + 1 = 2");
    assert_eq!(transport.last_query(), "1 + 1");
}

/// **VALUE**: Verifies `zci` sends the bang-redirect prefix and resolves one line.
///
/// **BUG THIS CATCHES**: Would catch the prefix being dropped, which silently
/// disables the web fallback upstream.
#[tokio::test]
async fn given_calculator_body_when_zci_called_then_prefixes_query_and_resolves_answer() {
    let transport = StaticTransport::new(CALC_BODY);
    let client = ZciClient::with_transport("https://api.duckduckgo.com/", transport.clone()).unwrap();

    let answer = client.zci("1 + 1", &ZciOptions::default()).await.unwrap();

    assert_eq!(answer, "1 + 1 = 2");
    assert_eq!(transport.last_query(), "\\1 + 1");
}

#[tokio::test]
async fn given_redirect_only_body_when_zci_called_then_falls_back_to_redirect() {
    let transport = StaticTransport::new(r#"{"Type": "", "Redirect": "https://www.rust-lang.org/"}"#);
    let client = ZciClient::with_transport("https://api.duckduckgo.com/", transport).unwrap();

    let answer = client.zci("rust", &ZciOptions::default()).await.unwrap();
    assert_eq!(answer, "https://www.rust-lang.org/");

    let options = ZciOptions {
        resolver: Resolver::default().with_web_fallback(false),
        ..ZciOptions::default()
    };
    let answer = client.zci("rust", &options).await.unwrap();
    assert_eq!(answer, "Sorry, no results.");
}

#[tokio::test]
async fn given_malformed_body_when_queried_then_returns_decode_error() {
    let client =
        ZciClient::with_transport("https://api.duckduckgo.com/", StaticTransport::new("<html>")).unwrap();

    let err = client.query("rust", &QueryOptions::default()).await.unwrap_err();

    assert!(matches!(err, ZciClientError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn given_failing_transport_when_queried_then_error_is_propagated() {
    let client = ZciClient::with_transport("https://api.duckduckgo.com/", FailingTransport).unwrap();

    let err = client.zci("rust", &ZciOptions::default()).await.unwrap_err();

    assert_eq!(err.status().map(|status| status.0), Some(503));
}

#[test]
fn given_invalid_base_url_when_client_built_then_returns_url_parse_error() {
    let result = ZciClient::with_transport("not a url", StaticTransport::default());
    assert!(matches!(result, Err(ZciClientError::UrlParse { .. })));
}

#[test]
fn given_client_when_building_url_then_uses_base_url() {
    let client =
        ZciClient::with_transport("http://127.0.0.1:9000/", StaticTransport::default()).unwrap();

    let url = client.build_url("rust", &QueryOptions::default());

    assert_eq!(url.host_str(), Some("127.0.0.1"));
    assert_eq!(url.port(), Some(9000));
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9000/");
}
