use std::process::ExitCode;

use boring_assets::cli::{AssetTables, Cli, Commands};
use boring_assets::{fetch_assets, FetchConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "info,boring_assets=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Paths) => match AssetTables::current().to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to serialize asset tables: {}", e);
                ExitCode::FAILURE
            }
        },
        command => {
            let config = command
                .as_ref()
                .and_then(Commands::fetch_config)
                .unwrap_or_else(FetchConfig::default);

            // Errors are logged where they happen.
            match fetch_assets(config).await {
                Ok(_) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            }
        }
    }
}
