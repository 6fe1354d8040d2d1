//! ICS generation for a team's schedule.

use chrono::{LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike, Property};
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{MATCH_DURATION_HOURS, calendar};
use crate::data_fetcher::models::Match;
use crate::error::AppError;

/// Per-export settings that do not come from the matches themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Full team name opening every SUMMARY, e.g. `New York Liberty`
    pub team_name: String,
    /// IANA zone whose wall-clock is written in DTSTART
    pub time_zone: String,
    pub location: String,
}

impl ExportOptions {
    pub fn new(team_name: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            time_zone: time_zone.into(),
            location: calendar::EVENT_LOCATION.to_string(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Options for the configured team, export zone and event location.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.team_name, &config.export_time_zone).with_location(&config.event_location)
    }
}

/// Serializes `matches` into an iCalendar document with one VEVENT per match.
///
/// Uses the default event location; see [`export_calendar_with`] to change it.
pub fn export_calendar(
    matches: &[Match],
    team_name: &str,
    time_zone: &str,
) -> Result<String, AppError> {
    export_calendar_with(matches, &ExportOptions::new(team_name, time_zone))
}

pub fn export_calendar_with(matches: &[Match], options: &ExportOptions) -> Result<String, AppError> {
    if matches.is_empty() {
        return Err(AppError::export_failure("no matches to export"));
    }

    let tz: Tz = options.time_zone.parse().map_err(|_| {
        AppError::export_failure(format!("unknown time zone '{}'", options.time_zone))
    })?;

    let mut cal = Calendar::new();
    cal.name(calendar::CALENDAR_NAME);

    for m in matches {
        let start = wall_clock_start(m, &tz);

        let mut ev = icalendar::Event::new();
        ev.uid(&format!("{}@{}", m.id, calendar::UID_DOMAIN));
        ev.summary(&format!("{} vs {}", options.team_name, m.opponent));
        ev.description(&format!("Match contre {}", m.opponent));
        ev.location(&options.location);

        // Always a zoned wall-clock, never UTC
        let mut prop = Property::new("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());
        prop.add_parameter("TZID", tz.name());
        ev.append_property(prop);
        ev.add_property("DURATION", format!("PT{MATCH_DURATION_HOURS}H"));

        if m.has_link() {
            ev.add_property("URL", &m.link);
        }

        cal.push(ev.done());
    }

    let output = tidy_output(&cal.done().to_string());

    let event_count = output.lines().filter(|l| *l == "BEGIN:VEVENT").count();
    if event_count != matches.len() {
        return Err(AppError::export_failure(format!(
            "expected {} events in output, found {event_count}",
            matches.len()
        )));
    }

    debug!("Exported {event_count} events in {}", tz.name());
    Ok(output)
}

/// Kickoff as wall-clock time in `tz`.
///
/// A converted instant always exists in its zone; only a repeated hour at a
/// fall-back transition needs attention, since readers resolve it to the
/// earlier occurrence.
fn wall_clock_start(m: &Match, tz: &Tz) -> NaiveDateTime {
    let naive = m.date.with_timezone(tz).naive_local();

    if let LocalResult::Ambiguous(earliest, _) = tz.from_local_datetime(&naive)
        && earliest.naive_utc() != m.date.naive_utc()
    {
        warn!(
            "Match {} starts in a repeated hour of {}; calendars will read the earlier one",
            m.id,
            tz.name()
        );
    }

    naive
}

/// Replaces the generator's PRODID with ours and drops the default CALSCALE.
fn tidy_output(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(calendar::PRODUCT_ID);
            result.push_str("\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
