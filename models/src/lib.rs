//! Domain models for DuckDuckGo zero-click info.
//!
//! This crate contains pure data structures describing one instant-answer
//! response. Models have no decoding or network logic; they're just values
//! built once by the decoder in `zci-core` and never mutated afterwards.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **zci-core**: Decoding, answer resolution and the HTTP client
//! - **dda**: Command-line wiring
//!
//! Every string field defaults to `""` and every size to `0`, so a sparse
//! payload is always representable without `Option` noise at the call site.

pub mod content;
pub mod response;
pub mod topic;

pub use content::{Abstract, Answer, Definition, Image, Redirect};
pub use response::Response;
pub use response::kind::ResponseKind;
pub use topic::{Icon, Topic};

#[cfg(test)]
mod tests;
