//! Shared primitives for the dda workspace.
//!
//! Nothing in here knows about DuckDuckGo. The crate holds the pieces every
//! other crate reaches for when it builds an error:
//!
//! - [`ErrorLocation`]: the `[file:line:column]` suffix carried by every error variant
//! - [`HttpStatusCode`]: a typed upstream status for transport failures

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
