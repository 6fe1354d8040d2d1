use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Domain of the sports results provider. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Sport and league segment of the schedule endpoint, e.g. `basketball/wnba`.
    #[serde(default = "default_sport_path")]
    pub sport_path: String,
    /// Relay endpoint that forwards requests to the provider. When unset the
    /// provider is requested directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_url: Option<String>,
    /// Provider slug of the subject team.
    #[serde(default = "default_team_slug")]
    pub team_slug: String,
    /// Official display name of the subject team, used to tell it apart
    /// from the opponent and to title exported events.
    #[serde(default = "default_team_name")]
    pub team_name: String,
    /// File name of the exported calendar.
    #[serde(default = "default_calendar_file_name")]
    pub calendar_file_name: String,
    /// LOCATION of every exported event.
    #[serde(default = "default_event_location")]
    pub event_location: String,
    /// IANA zone whose wall-clock the exported events are written in.
    #[serde(default = "default_export_time_zone")]
    pub export_time_zone: String,
    /// Overrides the detected environment locale (e.g. `en-GB`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_locale: Option<String>,
    /// Overrides the detected environment time zone (e.g. `America/New_York`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_time_zone: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_domain() -> String {
    constants::upstream::API_DOMAIN.to_string()
}

fn default_sport_path() -> String {
    constants::upstream::SPORT_PATH.to_string()
}

fn default_team_slug() -> String {
    constants::upstream::TEAM_SLUG.to_string()
}

fn default_team_name() -> String {
    constants::upstream::TEAM_NAME.to_string()
}

fn default_calendar_file_name() -> String {
    constants::calendar::FILE_NAME.to_string()
}

fn default_event_location() -> String {
    constants::calendar::EVENT_LOCATION.to_string()
}

fn default_export_time_zone() -> String {
    constants::reference::TIME_ZONE.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            sport_path: default_sport_path(),
            relay_url: None,
            team_slug: default_team_slug(),
            team_name: default_team_name(),
            calendar_file_name: default_calendar_file_name(),
            event_location: default_event_location(),
            export_time_zone: default_export_time_zone(),
            display_locale: None,
            display_time_zone: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the built-in defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MATCH_CALENDAR_API_DOMAIN` - Override API domain
    /// - `MATCH_CALENDAR_RELAY_URL` - Override relay URL
    /// - `MATCH_CALENDAR_LOG_FILE` - Override log file path
    /// - `MATCH_CALENDAR_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `MATCH_CALENDAR_*` environment overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(relay_url) = std::env::var(env_vars::RELAY_URL) {
            self.relay_url = Some(relay_url);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Built-in defaults are in use)");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("Relay:");
        println!("{}", config.relay_url.as_deref().unwrap_or("(direct)"));
        println!("────────────────────────────────────");
        println!("Team:");
        println!("{} ({})", config.team_name, config.team_slug);
        println!("────────────────────────────────────");
        println!("Calendar Export:");
        println!("{} in {}", config.calendar_file_name, config.export_time_zone);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/match_calendar.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has the https:// prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
