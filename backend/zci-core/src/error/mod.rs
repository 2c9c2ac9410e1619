pub mod config;
pub mod decode;
pub mod selector;
pub mod zci_client;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use selector::SelectorError;
pub use zci_client::ZciClientError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] ZciClientError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
