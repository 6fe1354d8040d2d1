// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use match_calendar::config::Config;
use match_calendar::error::AppError;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let mut config = Config::load().await?;
    commands::apply_cli_overrides(&mut config, &args);
    config.validate()?;

    // Keep the guard in scope so buffered log lines are flushed on exit
    let (log_file_path, _guard) = logging::setup_logging(&args, Some(&config)).await?;
    info!("Logging to {log_file_path}");
    info!(
        "Showing schedule for {} ({})",
        config.team_name, config.team_slug
    );

    let result = commands::handle_schedule_command(&args, &config).await;
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}
