//! Detection of the viewer's locale and time zone.

use crate::constants::{env_vars, reference};
use tracing::{debug, warn};

/// Locale and time zone of the environment the schedule is shown in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEnvironment {
    /// BCP 47 style tag, e.g. `en-US`
    pub locale: String,
    /// IANA zone name, e.g. `America/New_York`
    pub time_zone: String,
}

impl DisplayEnvironment {
    pub fn new(locale: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            time_zone: time_zone.into(),
        }
    }

    /// Resolves the environment from the process locale variables and the
    /// operating system's time zone.
    pub fn detect() -> Self {
        let locale = locale_from_vars(|name| std::env::var(name).ok());
        let time_zone = match iana_time_zone::get_timezone() {
            Ok(tz) => tz,
            Err(e) => {
                warn!("Could not determine the system time zone, using UTC: {e}");
                "UTC".to_string()
            }
        };
        debug!("Detected display environment: {locale} / {time_zone}");
        Self { locale, time_zone }
    }

    /// Replaces detected values with configured ones where present.
    pub fn with_overrides(mut self, locale: Option<&str>, time_zone: Option<&str>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale.to_string();
        }
        if let Some(time_zone) = time_zone {
            self.time_zone = time_zone.to_string();
        }
        self
    }

    pub fn is_english(&self) -> bool {
        self.locale.starts_with("en")
    }
}

/// Picks the first non-empty locale variable (`LC_ALL`, `LC_TIME`, `LANG`)
/// and converts it to a language tag. Unset, `C` and `POSIX` map to `en-US`.
pub fn locale_from_vars<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_vars::LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .map(|value| posix_locale_to_tag(&value))
        .unwrap_or_else(|| reference::ENGLISH_LOCALE.to_string())
}

/// Converts a POSIX locale name (`fr_FR.UTF-8@euro`) to a tag (`fr-FR`).
pub fn posix_locale_to_tag(posix: &str) -> String {
    let base = posix
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "C" || base == "POSIX" {
        return reference::ENGLISH_LOCALE.to_string();
    }

    base.replace('_', "-")
}
