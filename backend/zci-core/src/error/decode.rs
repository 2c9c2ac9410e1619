use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failure to turn an upstream payload into a [`models::Response`].
///
/// Missing or empty fields never produce this error; only a field whose shape
/// contradicts the model does (a list that is a scalar, a size that is text).
#[derive(Debug, ThisError)]
pub enum DecodeError {
    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Structural Error: {field}: {message} {location}")]
    Structural {
        /// Path of the offending field, e.g. `RelatedTopics[2].Icon.Height`.
        field: String,
        message: String,
        location: ErrorLocation,
    },
}

impl DecodeError {
    #[track_caller]
    pub fn structural(field: impl Into<String>, message: impl Into<String>) -> Self {
        DecodeError::Structural {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Path of the offending field for structural errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::Structural { field, .. } => Some(field),
            DecodeError::Json { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        DecodeError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
