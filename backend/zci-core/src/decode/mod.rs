//! Mapping of the raw instant-answer payload onto [`models::Response`].
//!
//! The payload is loosely typed: fields come and go with the query type,
//! sizes arrive as `""`, and `RelatedTopics` may nest one grouping level.
//! Decoding is total over sparse payloads; only a field with the wrong shape
//! fails, and the error names that field.

pub mod fields;
pub mod flattener;
pub mod normalizer;

use crate::decode::fields::{
    array_field, child_path, flag_field, index_path, object_field, string_field, value_kind,
};
use crate::decode::flattener::flatten_topics;
use crate::decode::normalizer::normalize_size;
use crate::error::decode::DecodeError;

use models::{Abstract, Answer, Definition, Icon, Image, Redirect, Response, ResponseKind, Topic};

use log::trace;
use serde_json::{Map, Value};

const ROOT_PATH: &str = "";

const KEY_ABSTRACT: &str = "Abstract";
const KEY_ABSTRACT_SOURCE: &str = "AbstractSource";
const KEY_ABSTRACT_TEXT: &str = "AbstractText";
const KEY_ABSTRACT_URL: &str = "AbstractURL";
const KEY_ANSWER: &str = "Answer";
const KEY_ANSWER_TYPE: &str = "AnswerType";
const KEY_DEFINITION: &str = "Definition";
const KEY_DEFINITION_SOURCE: &str = "DefinitionSource";
const KEY_DEFINITION_URL: &str = "DefinitionURL";
const KEY_ENTITY: &str = "Entity";
const KEY_HEADING: &str = "Heading";
const KEY_IMAGE: &str = "Image";
const KEY_IMAGE_HEIGHT: &str = "ImageHeight";
const KEY_IMAGE_IS_LOGO: &str = "ImageIsLogo";
const KEY_IMAGE_WIDTH: &str = "ImageWidth";
const KEY_REDIRECT: &str = "Redirect";
const KEY_RELATED_TOPICS: &str = "RelatedTopics";
const KEY_RESULTS: &str = "Results";
const KEY_TYPE: &str = "Type";

const KEY_TOPIC_RESULT: &str = "Result";
const KEY_TOPIC_TEXT: &str = "Text";
const KEY_TOPIC_FIRST_URL: &str = "FirstURL";
const KEY_TOPIC_ICON: &str = "Icon";

const KEY_ICON_URL: &str = "URL";
const KEY_ICON_HEIGHT: &str = "Height";
const KEY_ICON_WIDTH: &str = "Width";

/// Parse an HTTP body and decode it.
#[track_caller]
pub fn decode_slice(bytes: &[u8]) -> Result<Response, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_response(value)
}

/// Decode an already parsed payload.
///
/// The payload must be a JSON object. Unknown keys are ignored and kept in
/// [`Response::raw`].
#[track_caller]
pub fn decode_response(value: Value) -> Result<Response, DecodeError> {
    match value {
        Value::Object(raw) => decode_object(raw),
        other => Err(DecodeError::structural(
            "$",
            format!("expected an object, found {}", value_kind(&other)),
        )),
    }
}

#[track_caller]
fn decode_object(raw: Map<String, Value>) -> Result<Response, DecodeError> {
    let answer = Answer {
        text: string_field(&raw, KEY_ANSWER, ROOT_PATH)?,
        kind: string_field(&raw, KEY_ANSWER_TYPE, ROOT_PATH)?,
    };
    let kind = decode_kind(&raw, &answer)?;

    let abstract_ = Abstract {
        html: string_field(&raw, KEY_ABSTRACT, ROOT_PATH)?,
        text: string_field(&raw, KEY_ABSTRACT_TEXT, ROOT_PATH)?,
        url: string_field(&raw, KEY_ABSTRACT_URL, ROOT_PATH)?,
        source: string_field(&raw, KEY_ABSTRACT_SOURCE, ROOT_PATH)?,
    };

    let definition = Definition {
        text: string_field(&raw, KEY_DEFINITION, ROOT_PATH)?,
        url: string_field(&raw, KEY_DEFINITION_URL, ROOT_PATH)?,
        source: string_field(&raw, KEY_DEFINITION_SOURCE, ROOT_PATH)?,
    };

    let image = Image {
        url: string_field(&raw, KEY_IMAGE, ROOT_PATH)?,
        height: normalize_size(raw.get(KEY_IMAGE_HEIGHT), KEY_IMAGE_HEIGHT)?,
        width: normalize_size(raw.get(KEY_IMAGE_WIDTH), KEY_IMAGE_WIDTH)?,
        is_logo: flag_field(&raw, KEY_IMAGE_IS_LOGO, ROOT_PATH)?,
    };

    let related_entries = array_field(&raw, KEY_RELATED_TOPICS, ROOT_PATH)?;
    let related_topics = flatten_topics(related_entries, KEY_RELATED_TOPICS)?
        .into_iter()
        .map(|flat| decode_topic(flat.entry, &flat.path))
        .collect::<Result<Vec<_>, _>>()?;

    // Results never carry groups, so they skip the flattener.
    let results = array_field(&raw, KEY_RESULTS, ROOT_PATH)?
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_topic(entry, &index_path(KEY_RESULTS, index)))
        .collect::<Result<Vec<_>, _>>()?;

    let heading = string_field(&raw, KEY_HEADING, ROOT_PATH)?;
    let entity = string_field(&raw, KEY_ENTITY, ROOT_PATH)?;
    let redirect = Redirect::new(string_field(&raw, KEY_REDIRECT, ROOT_PATH)?);

    trace!(
        "Decoded response: kind={kind}, {} related topics, {} results",
        related_topics.len(),
        results.len()
    );

    Ok(Response {
        kind,
        heading,
        entity,
        results,
        related_topics,
        abstract_,
        redirect,
        definition,
        answer,
        image,
        raw,
    })
}

/// A non-empty `AnswerType` wins over the coded `Type`.
#[track_caller]
fn decode_kind(raw: &Map<String, Value>, answer: &Answer) -> Result<ResponseKind, DecodeError> {
    if !answer.kind.is_empty() {
        return Ok(ResponseKind::AnswerType(answer.kind.clone()));
    }

    let code = string_field(raw, KEY_TYPE, ROOT_PATH)?;
    ResponseKind::from_code(&code).ok_or_else(|| {
        DecodeError::structural(KEY_TYPE, format!("unknown response type code {code:?}"))
    })
}

#[track_caller]
fn decode_topic(entry: &Value, path: &str) -> Result<Topic, DecodeError> {
    let Value::Object(object) = entry else {
        return Err(DecodeError::structural(
            path,
            format!("expected an object, found {}", value_kind(entry)),
        ));
    };

    let icon_path = child_path(path, KEY_TOPIC_ICON);
    let icon = match object_field(object, KEY_TOPIC_ICON, path)? {
        Some(icon) => decode_icon(icon, &icon_path)?,
        None => Icon::default(),
    };

    Ok(Topic {
        html: string_field(object, KEY_TOPIC_RESULT, path)?,
        text: string_field(object, KEY_TOPIC_TEXT, path)?,
        url: string_field(object, KEY_TOPIC_FIRST_URL, path)?,
        icon,
    })
}

#[track_caller]
fn decode_icon(object: &Map<String, Value>, path: &str) -> Result<Icon, DecodeError> {
    Ok(Icon {
        url: string_field(object, KEY_ICON_URL, path)?,
        height: normalize_size(
            object.get(KEY_ICON_HEIGHT),
            &child_path(path, KEY_ICON_HEIGHT),
        )?,
        width: normalize_size(object.get(KEY_ICON_WIDTH), &child_path(path, KEY_ICON_WIDTH))?,
    })
}
