mod query;
mod selector;
mod zci_client;
