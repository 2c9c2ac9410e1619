use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Serialize, Serializer};

const KIND_ANSWER: &str = "answer";
const KIND_DISAMBIGUATION: &str = "disambiguation";
const KIND_CATEGORY: &str = "category";
const KIND_NAME: &str = "name";
const KIND_EXCLUSIVE: &str = "exclusive";
const KIND_NOTHING: &str = "nothing";

/// What sort of zero-click info a response carries.
///
/// Upstream encodes this as a one-letter `Type`. A non-empty `AnswerType`
/// is more specific and replaces the coded kind with [`ResponseKind::AnswerType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Answer,
    Disambiguation,
    Category,
    Name,
    Exclusive,
    #[default]
    Nothing,
    /// Concrete answer category reported by `AnswerType`, e.g. `calc`.
    AnswerType(String),
}

impl ResponseKind {
    /// Map the upstream one-letter `Type` code.
    ///
    /// Returns `None` for codes outside `A`, `D`, `C`, `N`, `E` and `""`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(ResponseKind::Answer),
            "D" => Some(ResponseKind::Disambiguation),
            "C" => Some(ResponseKind::Category),
            "N" => Some(ResponseKind::Name),
            "E" => Some(ResponseKind::Exclusive),
            "" => Some(ResponseKind::Nothing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResponseKind::Answer => KIND_ANSWER,
            ResponseKind::Disambiguation => KIND_DISAMBIGUATION,
            ResponseKind::Category => KIND_CATEGORY,
            ResponseKind::Name => KIND_NAME,
            ResponseKind::Exclusive => KIND_EXCLUSIVE,
            ResponseKind::Nothing => KIND_NOTHING,
            ResponseKind::AnswerType(answer_type) => answer_type,
        }
    }
}

impl Display for ResponseKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.as_str())
    }
}

impl PartialEq<str> for ResponseKind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ResponseKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for ResponseKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
