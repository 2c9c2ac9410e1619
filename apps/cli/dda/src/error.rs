use common::ErrorLocation;

use zci_core::error::{ConfigError, CoreError, SelectorError, ZciClientError};

use std::panic::Location;
use std::process::ExitCode;

use thiserror::Error;

/// Exit status for runtime failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for command-line misuse.
pub const EXIT_USAGE: u8 = 2;

/// Errors surfaced by the `dda` binary.
#[derive(Debug, Error)]
pub enum DdaError {
    /// The command line itself was unusable
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    /// Logger could not be set up
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Output could not be rendered
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    /// Error from zci-core (config, request, decoding, priority)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DdaError {
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        DdaError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        DdaError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Numeric process status for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            DdaError::Usage { .. } => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl From<ZciClientError> for DdaError {
    fn from(error: ZciClientError) -> Self {
        DdaError::Core(CoreError::from(error))
    }
}

impl From<ConfigError> for DdaError {
    fn from(error: ConfigError) -> Self {
        DdaError::Core(CoreError::from(error))
    }
}

impl From<SelectorError> for DdaError {
    fn from(error: SelectorError) -> Self {
        DdaError::Core(CoreError::from(error))
    }
}

impl From<serde_json::Error> for DdaError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        DdaError::Output {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
