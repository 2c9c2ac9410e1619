use crate::config::ApiConfig;
use crate::decode::decode_slice;
use crate::error::zci_client::ZciClientError;
use crate::query::{QueryOptions, build_url};
use crate::resolver::Resolver;
use crate::transport::{DEFAULT_TIMEOUT_DURATION, HttpTransport, Transport};
use crate::{BANG_REDIRECT_PREFIX, DDG_API_BASE_URL, USER_AGENT};

use models::Response;

use std::time::Duration;

use log::debug;
use url::Url;

/// Options for [`ZciClient::zci`]: what to ask for and how to pick the answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZciOptions {
    pub query: QueryOptions,
    pub resolver: Resolver,
}

/// Client for the DuckDuckGo instant-answer API.
#[derive(Debug, Clone)]
pub struct ZciClient<T = HttpTransport> {
    base_url: Url,
    transport: T,
}

impl ZciClient<HttpTransport> {
    /// Client for `base_url` with the default timeout.
    pub fn new(base_url_str: &str) -> Result<Self, ZciClientError> {
        let transport = HttpTransport::new(DEFAULT_TIMEOUT_DURATION, USER_AGENT)?;
        Self::with_transport(base_url_str, transport)
    }

    /// Client for the public endpoint.
    pub fn public() -> Result<Self, ZciClientError> {
        Self::new(DDG_API_BASE_URL)
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ZciClientError> {
        let transport = HttpTransport::new(
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )?;
        Self::with_transport(&config.base_url, transport)
    }
}

impl<T: Transport> ZciClient<T> {
    pub fn with_transport(base_url_str: &str, transport: T) -> Result<Self, ZciClientError> {
        let base_url = Url::parse(base_url_str)?;

        Ok(Self {
            base_url,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn build_url(&self, query: &str, options: &QueryOptions) -> Url {
        build_url(&self.base_url, query, options)
    }

    /// Query the API and decode the answer.
    pub async fn query(
        &self,
        query: &str,
        options: &QueryOptions,
    ) -> Result<Response, ZciClientError> {
        let url = self.build_url(query, options);
        let body = self.transport.fetch(&url).await?;
        let response = decode_slice(&body)?;

        debug!("Query '{query}' returned kind '{}'", response.kind);
        Ok(response)
    }

    /// Query with a bang-redirect prefix and reduce the response to one line.
    ///
    /// The prefix makes upstream fill `Redirect` with the first web result,
    /// which is what the resolver's web fallback reads.
    pub async fn zci(&self, query: &str, options: &ZciOptions) -> Result<String, ZciClientError> {
        let prefixed = format!("{BANG_REDIRECT_PREFIX}{query}");
        let response = self.query(&prefixed, &options.query).await?;

        Ok(options.resolver.resolve(&response))
    }
}
