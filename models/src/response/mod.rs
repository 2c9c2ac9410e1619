pub mod kind;

use crate::content::{Abstract, Answer, Definition, Image, Redirect};
use crate::response::kind::ResponseKind;
use crate::topic::Topic;

use serde::Serialize;
use serde_json::{Map, Value};

/// Root of a decoded instant-answer response.
///
/// Owns every nested section. `raw` keeps the complete payload for fields the
/// typed model does not cover (`Infobox`, `meta`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    pub kind: ResponseKind,
    pub heading: String,
    pub entity: String,
    pub results: Vec<Topic>,
    pub related_topics: Vec<Topic>,
    #[serde(rename = "abstract")]
    pub abstract_: Abstract,
    pub redirect: Redirect,
    pub definition: Definition,
    pub answer: Answer,
    pub image: Image,
    #[serde(skip)]
    pub raw: Map<String, Value>,
}

impl Response {
    /// Look up a top-level key of the original payload.
    pub fn raw_field(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }
}
