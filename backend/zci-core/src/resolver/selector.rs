use crate::error::selector::SelectorError;

use models::{Response, Topic};

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use once_cell::sync::Lazy;

const INDEX_SEPARATOR: char = '.';

const FIELD_ANSWER: &str = "answer";
const FIELD_DEFINITION: &str = "definition";
const FIELD_ABSTRACT: &str = "abstract";
const FIELD_REDIRECT: &str = "redirect";
const FIELD_RESULTS: &str = "results";
const FIELD_RELATED_TOPICS: &str = "related_topics";
const FIELD_RELATED_ALIAS: &str = "related";

/// One entry of an answer priority list.
///
/// List-valued fields carry the index to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Answer,
    Definition,
    Abstract,
    Redirect,
    Results(usize),
    RelatedTopics(usize),
}

/// Text and optional link picked out of a response by a [`Selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub url: Option<&'a str>,
}

#[derive(Clone, Copy)]
enum FieldShape {
    Single(Selector),
    List(fn(usize) -> Selector),
}

static FIELDS: Lazy<HashMap<&'static str, FieldShape>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(7);
    m.insert(FIELD_ANSWER, FieldShape::Single(Selector::Answer));
    m.insert(FIELD_DEFINITION, FieldShape::Single(Selector::Definition));
    m.insert(FIELD_ABSTRACT, FieldShape::Single(Selector::Abstract));
    m.insert(FIELD_REDIRECT, FieldShape::Single(Selector::Redirect));
    m.insert(FIELD_RESULTS, FieldShape::List(Selector::Results));
    m.insert(FIELD_RELATED_TOPICS, FieldShape::List(Selector::RelatedTopics));
    m.insert(FIELD_RELATED_ALIAS, FieldShape::List(Selector::RelatedTopics));
    m
});

impl Selector {
    /// Canonical field name, without index.
    pub fn field_name(&self) -> &'static str {
        match self {
            Selector::Answer => FIELD_ANSWER,
            Selector::Definition => FIELD_DEFINITION,
            Selector::Abstract => FIELD_ABSTRACT,
            Selector::Redirect => FIELD_REDIRECT,
            Selector::Results(_) => FIELD_RESULTS,
            Selector::RelatedTopics(_) => FIELD_RELATED_TOPICS,
        }
    }

    /// Pick the selected entry out of `response`.
    ///
    /// Returns `None` when a list is shorter than the index. Empty text is
    /// returned as is; deciding whether it counts is up to the resolver.
    pub fn candidate<'a>(&self, response: &'a Response) -> Option<Candidate<'a>> {
        match *self {
            Selector::Answer => Some(Candidate {
                text: &response.answer.text,
                url: None,
            }),
            Selector::Definition => Some(Candidate {
                text: &response.definition.text,
                url: Some(&response.definition.url),
            }),
            Selector::Abstract => Some(Candidate {
                text: &response.abstract_.text,
                url: Some(&response.abstract_.url),
            }),
            Selector::Redirect => Some(Candidate {
                text: &response.redirect.text,
                url: None,
            }),
            Selector::Results(index) => topic_candidate(&response.results, index),
            Selector::RelatedTopics(index) => topic_candidate(&response.related_topics, index),
        }
    }

    /// Parse every entry of a textual priority list.
    pub fn parse_list<I, S>(names: I) -> Result<Vec<Selector>, SelectorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect()
    }
}

fn topic_candidate(topics: &[Topic], index: usize) -> Option<Candidate<'_>> {
    topics.get(index).map(|topic| Candidate {
        text: &topic.text,
        url: Some(&topic.url),
    })
}

impl FromStr for Selector {
    type Err = SelectorError;

    /// Parse `name` or `name.<index>`, e.g. `answer` or `related.0`.
    #[track_caller]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let (name, index) = match trimmed.split_once(INDEX_SEPARATOR) {
            Some((name, index)) => (name, Some(index)),
            None => (trimmed, None),
        };

        let shape = FIELDS
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| SelectorError::unknown_field(name))?;

        match (shape, index) {
            (FieldShape::Single(selector), None) => Ok(selector),
            (FieldShape::Single(_), Some(_)) => Err(SelectorError::not_indexable(name)),
            (FieldShape::List(make), None) => Ok(make(0)),
            (FieldShape::List(make), Some(index)) => index
                .parse::<usize>()
                .map(make)
                .map_err(|_| SelectorError::invalid_index(trimmed)),
        }
    }
}

impl Display for Selector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            Selector::Results(index) | Selector::RelatedTopics(index) => {
                write!(formatter, "{}{INDEX_SEPARATOR}{index}", self.field_name())
            }
            _ => formatter.write_str(self.field_name()),
        }
    }
}
