use serde::Serialize;

/// Icon shown next to a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub url: String,
    pub height: u32,
    pub width: u32,
}

/// One related-topic or primary-result entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Ready-to-render HTML snippet (`Result` upstream).
    pub html: String,
    pub text: String,
    /// Target of the entry (`FirstURL` upstream).
    pub url: String,
    pub icon: Icon,
}
