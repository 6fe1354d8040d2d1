//! Day and hour labels for a match, following the display locale policy.
//!
//! Without local time every match is shown as in Paris, in French. With
//! local time the viewer's zone is used, and the language switches to
//! American English only when the environment is English.

use chrono::Locale;
use chrono_tz::Tz;
use tracing::warn;

use super::locale::DisplayEnvironment;
use crate::constants::reference;
use crate::data_fetcher::models::Match;

/// Everything the presentation layer needs to show one match's kickoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLabels {
    /// e.g. `DIMANCHE 1 JUIN` or `SUNDAY, JUNE 1`
    pub day_label: String,
    /// e.g. `21:00` or `3:00 PM`
    pub hour_label: String,
    /// Lower-case country code for the flag, e.g. `fr`
    pub flag_code: String,
    /// Locale the labels were rendered in
    pub locale: String,
    /// Zone the labels were rendered in, after any fallback
    pub time_zone: String,
}

/// Formats a match's kickoff for display.
///
/// Pure in its inputs; calling it twice with the same arguments yields the
/// same labels.
pub fn format_match(m: &Match, show_local: bool, env: &DisplayEnvironment) -> MatchLabels {
    let (locale, zone_name, flag_code) = if show_local {
        let locale = if env.is_english() {
            reference::ENGLISH_LOCALE
        } else {
            reference::LOCALE
        };
        (locale.to_string(), env.time_zone.clone(), flag_code_for(locale))
    } else {
        (
            reference::LOCALE.to_string(),
            reference::TIME_ZONE.to_string(),
            reference::FLAG_CODE.to_string(),
        )
    };

    let tz = resolve_time_zone(&zone_name);
    let local = m.date.with_timezone(&tz);
    let chrono_locale = chrono_locale_for(&locale);

    let day_label = local
        .format_localized(day_pattern(&locale), chrono_locale)
        .to_string()
        .to_uppercase();

    let hour_pattern = if uses_12_hour_clock(&locale) {
        "%-I:%M %p"
    } else {
        "%H:%M"
    };
    let hour_label = local.format_localized(hour_pattern, chrono_locale).to_string();

    MatchLabels {
        day_label,
        hour_label,
        flag_code,
        locale,
        time_zone: tz.name().to_string(),
    }
}

/// Region subtag of `locale`, lower-cased, or `us` when there is none.
pub fn flag_code_for(locale: &str) -> String {
    locale
        .split('-')
        .nth(1)
        .filter(|region| !region.is_empty())
        .map(|region| region.to_lowercase())
        .unwrap_or_else(|| reference::FALLBACK_FLAG_CODE.to_string())
}

pub fn uses_12_hour_clock(locale: &str) -> bool {
    reference::TWELVE_HOUR_LOCALES.contains(&locale)
}

/// Parses an IANA zone name, falling back to UTC for unknown names.
pub fn resolve_time_zone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("Unknown time zone '{name}', using UTC");
        Tz::UTC
    })
}

fn chrono_locale_for(locale: &str) -> Locale {
    match locale {
        "en-US" => Locale::en_US,
        "en-GB" => Locale::en_GB,
        _ => Locale::fr_FR,
    }
}

fn day_pattern(locale: &str) -> &'static str {
    match locale {
        "en-US" => "%A, %B %-d",
        _ => "%A %-d %B",
    }
}
