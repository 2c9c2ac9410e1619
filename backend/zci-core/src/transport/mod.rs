//! The network boundary.
//!
//! [`Transport`] is the only thing in the crate that performs I/O. Decoding and
//! resolution work on the bytes it returns.

use crate::error::zci_client::ZciClientError;

use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Performs an HTTP GET and hands back the raw body.
pub trait Transport {
    /// Fetch `url`. Non-2xx responses are errors.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, ZciClientError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ZciClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ZciClientError> {
        debug!("GET {url}");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZciClientError::server(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes (HTTP {})", body.len(), status.as_u16());

        Ok(body.to_vec())
    }
}
