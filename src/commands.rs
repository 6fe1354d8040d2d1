use crate::cli::Args;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::SetTitle,
};
use match_calendar::calendar::{ExportOptions, download, export_calendar_with};
use match_calendar::config::Config;
use match_calendar::data_fetcher::{load_schedule, normalize_team_name};
use match_calendar::error::AppError;
use match_calendar::schedule_ui::{
    DisplayEnvironment, ScheduleView, ViewState, import_instructions, print_schedule,
};
use std::io::stdout;
use std::path::PathBuf;
use tracing::{error, info};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-relay, --clear-relay,
/// --set-log-file, --clear-log-file).
///
/// Starts from the saved config (or defaults when there is none), applies the
/// requested changes and saves the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_relay) = &args.new_relay_url {
        config.relay_url = Some(new_relay.clone());
    } else if args.clear_relay_url {
        config.relay_url = None;
        println!("Relay cleared. Fetching directly from the API domain.");
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies per-run overrides from the command line to the loaded config.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(slug) = &args.team_slug {
        config.team_slug = slug.clone();
    }
    if let Some(name) = &args.team_name {
        config.team_name = name.clone();
    }
}

/// Fetches the schedule once, prints it and optionally exports it.
pub async fn handle_schedule_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let team_label = normalize_team_name(&config.team_name);
    execute!(stdout(), SetTitle(format!("{team_label} - Matchs")))?;

    let environment = DisplayEnvironment::detect().with_overrides(
        config.display_locale.as_deref(),
        config.display_time_zone.as_deref(),
    );
    let mut view = ScheduleView::new(environment);

    let ticket = view.begin_load();
    let result = load_schedule(config).await;
    view.complete_load(ticket, result);

    if let Some(matches) = view.matches() {
        let ids: Vec<String> = if args.local {
            matches.iter().map(|m| m.id.clone()).collect()
        } else {
            Vec::new()
        };
        for id in ids.iter().chain(&args.local_for) {
            view.toggle_local(id);
        }
    }

    print_schedule(&mut stdout(), &view, &team_label, args.disable_links)?;

    let Some(export_path) = &args.export else {
        return Ok(());
    };

    let matches = match view.state() {
        ViewState::Ready(matches) => matches,
        ViewState::Failed(message) => {
            return Err(AppError::export_failure(format!(
                "schedule unavailable: {message}"
            )));
        }
        ViewState::Loading => {
            return Err(AppError::export_failure("schedule not loaded"));
        }
    };

    let path = if export_path.is_empty() {
        PathBuf::from(&config.calendar_file_name)
    } else {
        PathBuf::from(export_path)
    };

    // Calendar titles carry the full team name; the short label is for the terminal
    let options = ExportOptions::from_config(config);
    let written = match export_calendar_with(matches, &options) {
        Ok(payload) => download(&payload, &path).await?,
        Err(e) => {
            error!("Calendar export failed: {e}");
            return Err(e);
        }
    };
    info!("Exported {} matches", matches.len());

    let file_name = written
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| config.calendar_file_name.clone());

    match args.instructions {
        Some(target) => {
            for line in import_instructions(target, &file_name) {
                println!("{line}");
            }
        }
        None => {
            execute!(
                stdout(),
                SetForegroundColor(Color::AnsiValue(46)),
                Print(format!("Calendrier enregistré : {}\n", written.display())),
                ResetColor
            )?;
        }
    }

    Ok(())
}
