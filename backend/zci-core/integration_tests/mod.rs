mod config;
mod error;
mod zci_client;
