//! Logging for the `dda` binary.
//!
//! Log lines go to stderr with colored levels; stdout carries only the answer.
//! An optional plain-text file receives the same records.

use crate::error::DdaError;

use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Environment variable that overrides the verbosity flags.
pub const ENV_LOG_LEVEL: &str = "DDA_LOG";

/// Level used without `-v` or `DDA_LOG`.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Map repeated `-v` flags to a level: warn, info, debug, then trace.
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => DEFAULT_LOG_LEVEL,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Parse a `DDA_LOG` value. Unknown or blank values are ignored.
pub fn level_from_env(value: Option<&str>) -> Option<LevelFilter> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<LevelFilter>().ok())
}

/// Effective level: `DDA_LOG` when valid, otherwise the verbosity count.
pub fn effective_level(verbosity: u8) -> LevelFilter {
    let from_env = std::env::var(ENV_LOG_LEVEL).ok();
    level_from_env(from_env.as_deref()).unwrap_or_else(|| level_from_verbosity(verbosity))
}

/// Initialize the logger (stderr, plus `log_file` when given).
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns [`DdaError::Logger`] if the log file cannot be opened or a global
/// logger is already installed by someone else.
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<(), DdaError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level, log_file);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(level: LevelFilter, log_file: Option<&Path>) -> Result<(), DdaError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    let mut dispatch = Dispatch::new().level(level).chain(stderr_dispatch);

    if let Some(log_file_path) = log_file {
        let file = fern::log_file(log_file_path)
            .map_err(|e| DdaError::logger(format!("Failed to create log file: {e}")))?;

        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(file);

        dispatch = dispatch.chain(file_dispatch);
    }

    dispatch
        .apply()
        .map_err(|e| DdaError::logger(format!("Failed to initialize logger: {e}")))?;

    Ok(())
}
