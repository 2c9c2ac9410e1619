//! Command-line arguments.
//!
//! Flags only ever override the loaded config; anything left unset keeps the
//! value from `config.toml` (or its default).

use crate::error::DdaError;

use zci_core::config::DdaConfig;
use zci_core::resolver::Selector;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Output shape requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One resolved answer line.
    Answer,
    /// Every raw top-level field.
    All,
    /// The decoded response as JSON.
    Json,
}

/// Ask DuckDuckGo for an instant answer
#[derive(Debug, Parser)]
#[command(name = "dda")]
#[command(about = "DuckDuckGo instant answers on the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Search text; words are joined with spaces
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Print every field of the raw response instead of one answer
    #[arg(long, conflicts_with = "json")]
    pub all: bool,

    /// Print the decoded response as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not append source URLs to the answer
    #[arg(long)]
    pub no_urls: bool,

    /// Do not fall back to the first web result
    #[arg(long)]
    pub no_web_fallback: bool,

    /// Keep HTML markup in text fields
    #[arg(long)]
    pub html: bool,

    /// Turn safe search off
    #[arg(long)]
    pub no_safe_search: bool,

    /// Skip disambiguation meanings
    #[arg(long)]
    pub no_meanings: bool,

    /// Answer priority, e.g. "answer,definition,related.0"
    #[arg(long, value_name = "SELECTORS", value_delimiter = ',')]
    pub priority: Vec<String>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Query words joined with single spaces, or a usage error when empty.
    #[track_caller]
    pub fn query_text(&self) -> Result<String, DdaError> {
        let text = self
            .query
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() {
            return Err(DdaError::usage("a query is required"));
        }

        Ok(text)
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.all {
            OutputMode::All
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Answer
        }
    }

    /// Apply flags on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `--priority` names an unknown or malformed selector.
    pub fn apply(&self, config: &mut DdaConfig) -> Result<(), DdaError> {
        if self.no_urls {
            config.answer.urls = false;
        }
        if self.no_web_fallback {
            config.answer.web_fallback = false;
        }
        if self.html {
            config.query.html = true;
        }
        if self.no_safe_search {
            config.query.safe_search = false;
        }
        if self.no_meanings {
            config.query.meanings = false;
        }

        let priority: Vec<&str> = self
            .priority
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if !priority.is_empty() {
            Selector::parse_list(&priority)?;
            config.answer.priority = priority.into_iter().map(String::from).collect();
        }

        Ok(())
    }
}
