//! Single-valued sections of a response.

use serde::Serialize;

/// Instant answer, e.g. the result of a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub text: String,
    /// Answer category such as `calc`; may be empty.
    pub kind: String,
}

/// Dictionary definition of the query term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub text: String,
    pub url: String,
    pub source: String,
}

/// Topic summary, usually taken from an encyclopedia.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Abstract {
    /// Summary as provided upstream. Contains markup only when HTML was allowed.
    pub html: String,
    pub text: String,
    pub url: String,
    pub source: String,
}

/// Image attached to the abstract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub height: u32,
    pub width: u32,
    pub is_logo: bool,
}

/// Bang-redirect target.
///
/// With `no_redirect=1` and a `\` prefixed query this holds the first web
/// result instead of an HTTP redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }
}

impl Redirect {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
