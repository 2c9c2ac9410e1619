// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod error;
pub mod logger;

use crate::cli::{Cli, OutputMode};
use crate::error::DdaError;

use zci_core::config::DdaConfig;
use zci_core::{ZciClient, show_all};

use log::{debug, info};

#[cfg(test)]
mod tests;

/// Load config from its usual place and run the command.
pub async fn run(cli: &Cli) -> Result<String, DdaError> {
    cli.query_text()?;
    let config = DdaConfig::load_default()?;
    run_with_config(cli, config).await
}

/// Run the command against an already loaded config.
///
/// Returns what should be printed on stdout, without a trailing newline.
pub async fn run_with_config(cli: &Cli, mut config: DdaConfig) -> Result<String, DdaError> {
    let query = cli.query_text()?;

    cli.apply(&mut config)?;
    config.validate()?;

    let client = ZciClient::from_config(&config.api)?;
    info!("Querying {} for '{query}'", client.base_url());

    let output = match cli.output_mode() {
        OutputMode::Answer => {
            let options = config.zci_options()?;
            client.zci(&query, &options).await?
        }
        OutputMode::All => {
            let response = client.query(&query, &config.query).await?;
            show_all(&response).trim_end_matches('\n').to_string()
        }
        OutputMode::Json => {
            let response = client.query(&query, &config.query).await?;
            serde_json::to_string_pretty(&response)?
        }
    };

    debug!("Produced {} bytes of output", output.len());
    Ok(output)
}
