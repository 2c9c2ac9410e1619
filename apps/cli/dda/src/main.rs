use dda::cli::Cli;
use dda::error::DdaError;
use dda::logger::{effective_level, initialize as LoggerInitialize};
use dda::run;

use zci_core::config::env::load_dotenv;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env may carry DDA_LOG, so it goes before the logger
    load_dotenv();

    if let Err(e) = LoggerInitialize(effective_level(cli.verbose), cli.log_file.as_deref()) {
        eprintln!("{e}");
        return e.exit_code();
    }

    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e @ DdaError::Usage { .. }) => {
            eprintln!("{}", Cli::command().render_usage());
            e.exit_code()
        }
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}
