use crate::error::decode::DecodeError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ZciClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ZciClientError {
    #[track_caller]
    pub fn server(status: impl Into<HttpStatusCode>, message: impl Into<String>) -> Self {
        ZciClientError::Server {
            status: status.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Status code for upstream rejections, `None` for every other failure.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ZciClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ZciClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ZciClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ZciClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ZciClientError::Http {
            is_timeout: error.is_timeout(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
