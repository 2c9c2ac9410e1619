//! Reduction of a decoded response to a single answer line.
//!
//! The resolver walks its priority list left to right and stops at the first
//! selector whose text is non-empty. Missing fields and short lists are not
//! errors here; they just move the walk on to the next selector.

pub mod selector;

pub use selector::{Candidate, Selector};

use crate::NO_RESULTS_SENTINEL;
use crate::error::selector::SelectorError;

use models::Response;

use log::{debug, trace};

/// Priority used when the caller does not supply one.
pub const DEFAULT_PRIORITY: [Selector; 4] = [
    Selector::Answer,
    Selector::Definition,
    Selector::Abstract,
    Selector::RelatedTopics(0),
];

/// Picks the best answer out of a [`Response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    priority: Vec<Selector>,
    include_urls: bool,
    web_fallback: bool,
    sentinel: String,
}

/// Where a resolved answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Selected { selector: Selector, text: String },
    WebFallback { text: String },
    NoResults { text: String },
}

impl Resolution {
    pub fn text(&self) -> &str {
        match self {
            Resolution::Selected { text, .. }
            | Resolution::WebFallback { text }
            | Resolution::NoResults { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Resolution::Selected { text, .. }
            | Resolution::WebFallback { text }
            | Resolution::NoResults { text } => text,
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY.to_vec(),
            include_urls: true,
            web_fallback: true,
            sentinel: NO_RESULTS_SENTINEL.to_string(),
        }
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from textual selectors such as `"related.0"`.
    pub fn from_names<I, S>(names: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::default().with_priority(Selector::parse_list(names)?))
    }

    pub fn with_priority(mut self, priority: impl IntoIterator<Item = Selector>) -> Self {
        self.priority = priority.into_iter().collect();
        self
    }

    /// Append ` (<url>)` to answers that come with a link.
    pub fn with_urls(mut self, include_urls: bool) -> Self {
        self.include_urls = include_urls;
        self
    }

    /// Fall back to the redirect target when no selector matched.
    pub fn with_web_fallback(mut self, web_fallback: bool) -> Self {
        self.web_fallback = web_fallback;
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn priority(&self) -> &[Selector] {
        &self.priority
    }

    pub fn include_urls(&self) -> bool {
        self.include_urls
    }

    pub fn web_fallback(&self) -> bool {
        self.web_fallback
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Resolve to the answer string; never fails.
    pub fn resolve(&self, response: &Response) -> String {
        self.resolve_detailed(response).into_text()
    }

    /// Resolve and report which rule produced the answer.
    pub fn resolve_detailed(&self, response: &Response) -> Resolution {
        for selector in &self.priority {
            let Some(candidate) = selector.candidate(response) else {
                trace!("Selector {selector} is out of range");
                continue;
            };

            if candidate.text.is_empty() {
                trace!("Selector {selector} has no text");
                continue;
            }

            debug!("Answer resolved by selector {selector}");
            return Resolution::Selected {
                selector: *selector,
                text: self.format_candidate(candidate),
            };
        }

        if self.web_fallback && !response.redirect.text.is_empty() {
            debug!("Answer resolved by web fallback");
            return Resolution::WebFallback {
                text: response.redirect.text.clone(),
            };
        }

        debug!("No answer found");
        Resolution::NoResults {
            text: self.sentinel.clone(),
        }
    }

    fn format_candidate(&self, candidate: Candidate<'_>) -> String {
        match candidate.url {
            Some(url) if self.include_urls && !url.is_empty() => {
                format!("{} ({url})", candidate.text)
            }
            _ => candidate.text.to_string(),
        }
    }
}
