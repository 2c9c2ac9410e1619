//! Request URL construction.
//!
//! Pure: turns a search string and options into the upstream URL. Sending the
//! request is the transport's job.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

const PARAM_QUERY: &str = "q";
const PARAM_OUTPUT: &str = "o";
const PARAM_SAFE_SEARCH: &str = "kp";
const PARAM_NO_REDIRECT: &str = "no_redirect";
const PARAM_NO_HTML: &str = "no_html";
const PARAM_NO_DISAMBIGUATION: &str = "d";

const OUTPUT_JSON: &str = "json";
const SAFE_SEARCH_ON: &str = "1";
const SAFE_SEARCH_OFF: &str = "-1";
const FLAG_SET: &str = "1";
const FLAG_UNSET: &str = "0";

/// Parameters owned by the builder. Passthrough params never replace these.
pub const FIXED_PARAMS: [&str; 6] = [
    PARAM_QUERY,
    PARAM_OUTPUT,
    PARAM_SAFE_SEARCH,
    PARAM_NO_REDIRECT,
    PARAM_NO_HTML,
    PARAM_NO_DISAMBIGUATION,
];

/// Per-request switches.
///
/// Also the `[query]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub safe_search: bool,
    /// Allow markup in `Abstract` and topic snippets.
    pub html: bool,
    /// Include disambiguation meanings.
    pub meanings: bool,
    /// Extra URL parameters sent as is.
    pub params: BTreeMap<String, String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            safe_search: true,
            html: false,
            meanings: true,
            params: BTreeMap::new(),
        }
    }
}

impl QueryOptions {
    pub fn with_safe_search(mut self, safe_search: bool) -> Self {
        self.safe_search = safe_search;
        self
    }

    pub fn with_html(mut self, html: bool) -> Self {
        self.html = html;
        self
    }

    pub fn with_meanings(mut self, meanings: bool) -> Self {
        self.meanings = meanings;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Ordered query parameters for `query`.
///
/// Fixed parameters come first in a stable order, then passthrough params
/// sorted by key. A passthrough param that names a fixed one is dropped.
pub fn build_params(query: &str, options: &QueryOptions) -> Vec<(String, String)> {
    let flag = |set: bool| if set { FLAG_SET } else { FLAG_UNSET };

    let mut params = vec![
        (PARAM_QUERY.to_string(), query.to_string()),
        (PARAM_OUTPUT.to_string(), OUTPUT_JSON.to_string()),
        (
            PARAM_SAFE_SEARCH.to_string(),
            if options.safe_search {
                SAFE_SEARCH_ON
            } else {
                SAFE_SEARCH_OFF
            }
            .to_string(),
        ),
        (PARAM_NO_REDIRECT.to_string(), FLAG_SET.to_string()),
        (PARAM_NO_HTML.to_string(), flag(!options.html).to_string()),
        (
            PARAM_NO_DISAMBIGUATION.to_string(),
            flag(!options.meanings).to_string(),
        ),
    ];

    for (key, value) in &options.params {
        if FIXED_PARAMS.contains(&key.as_str()) {
            warn!("Ignoring passthrough parameter '{key}': it is set by the query builder");
            continue;
        }
        params.push((key.clone(), value.clone()));
    }

    params
}

/// Full request URL: `base_url` with the encoded parameters as its query.
pub fn build_url(base_url: &Url, query: &str, options: &QueryOptions) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(build_params(query, options));
    url
}
