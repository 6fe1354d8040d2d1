use super::Config;
use crate::error::AppError;
use chrono_tz::Tz;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must look like a URL or domain name
/// - Relay URL, if set, must be an absolute http(s) URL
/// - Team slug and team name cannot be empty
/// - Export time zone must be a known IANA zone
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_domain = config.api_domain.as_str();
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if let Some(relay) = &config.relay_url {
        let parsed = url::Url::parse(relay)
            .map_err(|e| AppError::config_error(format!("Invalid relay URL '{relay}': {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::config_error(format!(
                "Relay URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
    }

    if config.team_slug.trim().is_empty() {
        return Err(AppError::config_error("Team slug cannot be empty"));
    }

    if config.team_name.trim().is_empty() {
        return Err(AppError::config_error("Team name cannot be empty"));
    }

    if config.calendar_file_name.trim().is_empty() {
        return Err(AppError::config_error("Calendar file name cannot be empty"));
    }

    config.export_time_zone.parse::<Tz>().map_err(|_| {
        AppError::config_error(format!(
            "Unknown export time zone '{}'",
            config.export_time_zone
        ))
    })?;

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_valid_api_domain_formats() {
        for domain in ["https://api.example.com", "api.example.com", "localhost:8080"] {
            let config = Config {
                api_domain: domain.to_string(),
                ..Config::default()
            };
            assert!(validate_config(&config).is_ok(), "{domain} should be valid");
        }
    }

    #[test]
    fn test_invalid_api_domain() {
        for domain in ["", "notadomain"] {
            let config = Config {
                api_domain: domain.to_string(),
                ..Config::default()
            };
            assert!(matches!(
                validate_config(&config),
                Err(AppError::Config(_))
            ));
        }
    }

    #[test]
    fn test_relay_url_must_be_http() {
        let config = Config {
            relay_url: Some("ftp://relay.example.com/proxy".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            relay_url: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            relay_url: Some("http://localhost:3000/api/proxy".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_export_time_zone() {
        let config = Config {
            export_time_zone: "Mars/Olympus_Mons".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn test_empty_team_fields() {
        let config = Config {
            team_slug: "  ".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            team_name: String::new(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_log_file_path() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
