use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use match_calendar::schedule_ui::ImportTarget;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch the config file, so no
/// schedule needs to be fetched.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_relay_url.is_some()
        || args.clear_relay_url
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Upcoming matches of a team, with calendar export.
///
/// Shows every match that has not started yet (or started less than five hours
/// ago), with kickoff times in Paris time by default. Use --local or
/// --local-for to see times in your own time zone, and --export to write an
/// .ics file you can import into Google Calendar, Apple Calendar or Outlook.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Team slug as used by the results provider (e.g. "nyl").
    #[arg(long = "team", help_heading = "Team")]
    pub team_slug: Option<String>,

    /// Official team name as listed by the provider (e.g. "New York Liberty").
    #[arg(long = "team-name", help_heading = "Team")]
    pub team_name: Option<String>,

    /// Show every match in your local time zone.
    #[arg(long = "local", help_heading = "Display Options")]
    pub local: bool,

    /// Show a single match (by id) in your local time zone. Can be repeated.
    #[arg(long = "local-for", value_name = "ID", help_heading = "Display Options")]
    pub local_for: Vec<String>,

    /// Print links as plain URLs instead of terminal hyperlinks.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub disable_links: bool,

    /// Write the schedule to an .ics calendar file. Uses the configured
    /// file name when no path is given.
    #[arg(
        long = "export",
        short = 'e',
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "",
        help_heading = "Calendar"
    )]
    pub export: Option<String>,

    /// After exporting, print import steps for this calendar application.
    #[arg(long = "instructions", value_enum, requires = "export", help_heading = "Calendar")]
    pub instructions: Option<ImportTarget>,

    /// Update API domain in config.
    #[arg(long = "config", value_name = "API_DOMAIN", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// Fetch the schedule through this relay (it receives the target as ?url=).
    #[arg(long = "set-relay", value_name = "URL", help_heading = "Configuration")]
    pub new_relay_url: Option<String>,

    /// Remove the relay from config and fetch directly.
    #[arg(long = "clear-relay", help_heading = "Configuration")]
    pub clear_relay_url: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror logs to the terminal in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_export_without_path() {
        let args = Args::try_parse_from(["match_calendar", "--export"]).unwrap();
        assert_eq!(args.export.as_deref(), Some(""));
    }

    #[test]
    fn test_export_with_path_and_instructions() {
        let args = Args::try_parse_from([
            "match_calendar",
            "--export",
            "out.ics",
            "--instructions",
            "google",
        ])
        .unwrap();
        assert_eq!(args.export.as_deref(), Some("out.ics"));
        assert_eq!(args.instructions, Some(ImportTarget::Google));
    }

    #[test]
    fn test_instructions_require_export() {
        assert!(Args::try_parse_from(["match_calendar", "--instructions", "apple"]).is_err());
    }

    #[test]
    fn test_local_for_is_repeatable() {
        let args =
            Args::try_parse_from(["match_calendar", "--local-for", "1", "--local-for", "2"])
                .unwrap();
        assert_eq!(args.local_for, vec!["1", "2"]);
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_config_operations() {
        let args = Args::try_parse_from(["match_calendar", "--clear-relay"]).unwrap();
        assert!(is_config_operation(&args));
        let args = Args::try_parse_from(["match_calendar", "--set-relay", "https://r"]).unwrap();
        assert!(is_config_operation(&args));
    }
}
