use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Misconfigured answer priority.
///
/// These describe a caller mistake in the priority list, not bad upstream data.
#[derive(Debug, ThisError)]
pub enum SelectorError {
    #[error("Unknown Field Error: '{name}' is not a response field {location}")]
    UnknownField {
        name: String,
        location: ErrorLocation,
    },

    #[error("Not Indexable Error: '{name}' field is not indexable {location}")]
    NotIndexable {
        name: String,
        location: ErrorLocation,
    },

    #[error("Invalid Index Error: '{selector}' must look like name or name.<index> {location}")]
    InvalidIndex {
        selector: String,
        location: ErrorLocation,
    },
}

impl SelectorError {
    #[track_caller]
    pub fn unknown_field(name: impl Into<String>) -> Self {
        SelectorError::UnknownField {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_indexable(name: impl Into<String>) -> Self {
        SelectorError::NotIndexable {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_index(selector: impl Into<String>) -> Self {
        SelectorError::InvalidIndex {
            selector: selector.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
