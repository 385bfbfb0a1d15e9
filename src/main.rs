//! Voicedrop CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voicedrop::cli::{
    app::{load_merged_config, run_recorder, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, RecordOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use voicedrop::domain::config::AppConfig;
use voicedrop::domain::recording::Duration;
use voicedrop::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        endpoint: cli.endpoint.clone(),
        max_duration: cli.max_duration.clone(),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Parse the optional auto-stop limit
    let max_duration = match config.max_duration.as_ref() {
        Some(s) => match s.parse::<Duration>() {
            Ok(d) => Some(d),
            Err(e) => {
                presenter.error(&format!("Invalid max-duration: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => None,
    };

    let options = RecordOptions {
        endpoint: config.endpoint_or_default(),
        max_duration,
        once: cli.once,
    };

    run_recorder(options).await
}
