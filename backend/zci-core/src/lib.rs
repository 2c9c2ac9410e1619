pub mod config;
pub mod decode;
pub mod error;
pub mod query;
pub mod resolver;
pub mod show_all;
pub mod transport;
pub mod zci_client;

pub use decode::{decode_response, decode_slice};
pub use query::QueryOptions;
pub use resolver::{Resolution, Resolver, Selector};
pub use show_all::show_all;
pub use transport::{HttpTransport, Transport};
pub use zci_client::{ZciClient, ZciOptions};

#[cfg(test)]
mod tests;

pub const DDG_API_BASE_URL: &str = "https://api.duckduckgo.com/";
pub const USER_AGENT: &str = const_format::concatcp!("dda/", env!("CARGO_PKG_VERSION"));
pub const NO_RESULTS_SENTINEL: &str = "Sorry, no results.";

/// `\` asks upstream for the first web result ("I'm feeling ducky").
pub const BANG_REDIRECT_PREFIX: &str = "\\";
