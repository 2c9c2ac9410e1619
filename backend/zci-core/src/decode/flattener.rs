//! Expansion of grouped `RelatedTopics` entries.
//!
//! Categorized listings come back as
//! `{"Name": "People", "Topics": [leaf, leaf]}` next to ordinary leaves. The
//! typed model has no notion of a group, so groups are replaced in place by
//! their children and the group name is dropped.

use crate::decode::fields::{child_path, index_path, value_kind};
use crate::error::decode::DecodeError;

use serde_json::Value;

pub const GROUP_TOPICS_KEY: &str = "Topics";

/// A leaf entry together with the payload path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTopic<'a> {
    pub path: String,
    pub entry: &'a Value,
}

/// Flatten one level of grouping, keeping the original order.
///
/// An entry carrying the `Topics` key is a group even when it also has leaf
/// fields. Group children are taken as leaves; a flat list comes back as is.
#[track_caller]
pub fn flatten_topics<'a>(
    entries: &'a [Value],
    path: &str,
) -> Result<Vec<FlatTopic<'a>>, DecodeError> {
    let mut flat = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let entry_path = index_path(path, index);

        let group = entry
            .as_object()
            .and_then(|object| object.get(GROUP_TOPICS_KEY));

        match group {
            None => flat.push(FlatTopic {
                path: entry_path,
                entry,
            }),
            Some(Value::Null) => {}
            Some(Value::Array(children)) => {
                let group_path = child_path(&entry_path, GROUP_TOPICS_KEY);
                flat.extend(
                    children
                        .iter()
                        .enumerate()
                        .map(|(child_index, child)| FlatTopic {
                            path: index_path(&group_path, child_index),
                            entry: child,
                        }),
                );
            }
            Some(other) => {
                return Err(DecodeError::structural(
                    child_path(&entry_path, GROUP_TOPICS_KEY),
                    format!("expected an array, found {}", value_kind(other)),
                ));
            }
        }
    }

    Ok(flat)
}
