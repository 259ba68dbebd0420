pub mod cli;
pub mod config;
pub mod convert;
pub mod currency;
pub mod directory;
pub mod error;
pub mod log;
pub mod rates;

use anyhow::Result;
use tracing::debug;

use crate::convert::ConversionRequest;
use crate::rates::ExchangeRateApiProvider;

/// Commands the binary can run; the interactive shell is the default when no
/// subcommand is given.
#[derive(Debug)]
pub enum AppCommand {
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    List,
    Info {
        code: String,
    },
    Shell,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = ExchangeRateApiProvider::new(&config.provider.base_url);

    match command {
        AppCommand::Convert { amount, from, to } => {
            let request = ConversionRequest::new(amount, &from, &to)?;
            cli::convert::run(&request, &provider).await
        }
        AppCommand::List => {
            cli::list::run();
            Ok(())
        }
        AppCommand::Info { code } => {
            cli::info::run(&code);
            Ok(())
        }
        AppCommand::Shell => cli::shell::run(&provider).await,
    }
}
