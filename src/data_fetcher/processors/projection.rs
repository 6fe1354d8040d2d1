//! Projection of raw schedule events into [`Match`] records.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_MATCH_LINK, DEFAULT_OPPONENT_LOGO, ELAPSED_GRACE_HOURS};
use crate::data_fetcher::models::{Competitor, Match, RawEvent};
use crate::data_fetcher::team_names::normalize_team_name;
use crate::error::AppError;

/// Parses an upstream kickoff time into an instant.
///
/// Accepts RFC 3339 (`2025-06-01T19:00:00Z`, `2025-06-01T21:00:00+02:00`)
/// and the minute-precision UTC form the provider uses (`2025-06-01T19:00Z`).
pub fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .map(|naive| naive.and_utc())
        .map_err(|e| AppError::datetime_parse_error(format!("'{raw}': {e}")))
}

/// Projects raw events into matches using the current time for the
/// elapsed-match filter. See [`project_at`].
pub fn project(events: &[RawEvent], subject_team: &str) -> Result<Vec<Match>, AppError> {
    project_at(events, subject_team, Utc::now())
}

/// Projects raw events into matches relative to `now`.
///
/// Every event is validated first; one malformed event fails the whole
/// batch. Events that kicked off more than the grace window before `now`
/// are dropped, as are repeated ids (first occurrence wins). Upstream order
/// is preserved.
pub fn project_at(
    events: &[RawEvent],
    subject_team: &str,
    now: DateTime<Utc>,
) -> Result<Vec<Match>, AppError> {
    let cutoff = now - Duration::hours(ELAPSED_GRACE_HOURS);
    let mut seen = HashSet::new();
    let mut matches = Vec::with_capacity(events.len());

    for event in events {
        let projected = project_event(event, subject_team)?;

        if projected.date <= cutoff {
            debug!("Dropping elapsed event {} ({})", projected.id, projected.date);
            continue;
        }

        if !seen.insert(projected.id.clone()) {
            warn!("Dropping duplicate event id {}", projected.id);
            continue;
        }

        matches.push(projected);
    }

    debug!(
        "Projected {} of {} events for {}",
        matches.len(),
        events.len(),
        subject_team
    );
    Ok(matches)
}

fn project_event(event: &RawEvent, subject_team: &str) -> Result<Match, AppError> {
    let date = parse_event_date(&event.date)
        .map_err(|e| AppError::malformed_event(&event.id, e.to_string()))?;

    let opponent = resolve_opponent(event, subject_team)?;

    Ok(Match {
        id: event.id.clone(),
        date,
        opponent: normalize_team_name(&opponent.team.display_name),
        opponent_logo: opponent
            .team
            .primary_logo()
            .unwrap_or(DEFAULT_OPPONENT_LOGO)
            .to_string(),
        link: event
            .primary_link()
            .unwrap_or(DEFAULT_MATCH_LINK)
            .to_string(),
    })
}

/// Picks the competitor that is not the subject team.
///
/// When neither of the first two competitors is the subject, the first one is
/// assumed to be the subject and the second is returned.
fn resolve_opponent<'a>(
    event: &'a RawEvent,
    subject_team: &str,
) -> Result<&'a Competitor, AppError> {
    let competitors = event.competitors();
    if event.competitions.is_empty() {
        return Err(AppError::malformed_event(&event.id, "event has no competition"));
    }
    let [first, second, ..] = competitors else {
        return Err(AppError::malformed_event(
            &event.id,
            format!("expected two competitors, found {}", competitors.len()),
        ));
    };

    if first.team.display_name == subject_team {
        Ok(second)
    } else if second.team.display_name == subject_team {
        Ok(first)
    } else {
        warn!(
            "Event {}: neither '{}' nor '{}' is '{}', assuming the first is the subject",
            event.id, first.team.display_name, second.team.display_name, subject_team
        );
        Ok(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Competition, CompetitorTeam, Link, Logo};
    use chrono::TimeZone;

    const LIBERTY: &str = "New York Liberty";

    fn competitor(name: &str, logo: Option<&str>) -> Competitor {
        Competitor {
            team: CompetitorTeam {
                display_name: name.to_string(),
                logos: logo
                    .map(|href| vec![Logo { href: href.to_string() }])
                    .unwrap_or_default(),
            },
        }
    }

    fn event(id: &str, date: &str, home: Competitor, away: Competitor, link: Option<&str>) -> RawEvent {
        RawEvent {
            id: id.to_string(),
            date: date.to_string(),
            competitions: vec![Competition {
                competitors: vec![home, away],
            }],
            links: link
                .map(|href| vec![Link { href: href.to_string() }])
                .unwrap_or_default(),
        }
    }

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_event_date_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 19, 0, 0).unwrap();
        assert_eq!(parse_event_date("2025-06-01T19:00:00Z").unwrap(), expected);
        assert_eq!(parse_event_date("2025-06-01T19:00Z").unwrap(), expected);
        assert_eq!(parse_event_date("2025-06-01T21:00:00+02:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_event_date_rejects_garbage() {
        assert!(parse_event_date("tomorrow evening").is_err());
        assert!(parse_event_date("").is_err());
        assert!(parse_event_date("2025-13-01T19:00Z").is_err());
    }

    #[test]
    fn test_home_subject_scenario() {
        let events = vec![event(
            "1",
            "2025-06-01T19:00:00Z",
            competitor(LIBERTY, None),
            competitor("Washington Mystics", None),
            Some("https://x"),
        )];

        let matches = project_at(&events, LIBERTY, reference_now()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0],
            Match {
                id: "1".to_string(),
                date: Utc.with_ymd_and_hms(2025, 6, 1, 19, 0, 0).unwrap(),
                opponent: "Washington".to_string(),
                opponent_logo: String::new(),
                link: "https://x".to_string(),
            }
        );
    }

    #[test]
    fn test_away_subject_uses_home_as_opponent() {
        let events = vec![event(
            "2",
            "2025-06-03T23:30Z",
            competitor("Phoenix Mercury", Some("https://logos/phx.png")),
            competitor(LIBERTY, Some("https://logos/nyl.png")),
            None,
        )];

        let matches = project_at(&events, LIBERTY, reference_now()).unwrap();
        assert_eq!(matches[0].opponent, "Phoenix");
        assert_eq!(matches[0].opponent_logo, "https://logos/phx.png");
        assert_eq!(matches[0].link, "#");
    }

    #[test]
    fn test_unknown_subject_falls_back_to_first_competitor() {
        let events = vec![event(
            "3",
            "2025-06-05T23:00Z",
            competitor("Seattle Storm", None),
            competitor("Los Angeles Sparks", None),
            None,
        )];

        let matches = project_at(&events, LIBERTY, reference_now()).unwrap();
        assert_eq!(matches[0].opponent, "L.A. Sparks");
    }

    #[test]
    fn test_year_old_event_is_excluded() {
        let events = vec![event(
            "old",
            "2024-05-20T12:00:00Z",
            competitor(LIBERTY, Some("https://logos/nyl.png")),
            competitor("Washington Mystics", Some("https://logos/wsh.png")),
            Some("https://x"),
        )];

        let matches = project_at(&events, LIBERTY, reference_now()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_grace_window_boundary() {
        let now = reference_now();
        let fmt = |dt: DateTime<Utc>| dt.to_rfc3339();
        let events = vec![
            // Exactly at the cutoff: dropped (filter is strict)
            event(
                "at-cutoff",
                &fmt(now - Duration::hours(5)),
                competitor(LIBERTY, None),
                competitor("Phoenix Mercury", None),
                None,
            ),
            // Started four hours ago: still shown
            event(
                "in-progress",
                &fmt(now - Duration::hours(4)),
                competitor(LIBERTY, None),
                competitor("Phoenix Mercury", None),
                None,
            ),
            event(
                "long-past",
                &fmt(now - Duration::hours(6)),
                competitor(LIBERTY, None),
                competitor("Phoenix Mercury", None),
                None,
            ),
        ];

        let matches = project_at(&events, LIBERTY, now).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["in-progress"]);
        assert!(matches.iter().all(|m| m.date > now - Duration::hours(5)));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let events = vec![
            event(
                "7",
                "2025-06-01T19:00Z",
                competitor(LIBERTY, None),
                competitor("Washington Mystics", None),
                Some("https://first"),
            ),
            event(
                "7",
                "2025-06-02T19:00Z",
                competitor(LIBERTY, None),
                competitor("Phoenix Mercury", None),
                Some("https://second"),
            ),
        ];

        let matches = project_at(&events, LIBERTY, reference_now()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].link, "https://first");
    }

    #[test]
    fn test_upstream_order_is_preserved() {
        let events = vec![
            event(
                "b",
                "2025-06-09T19:00Z",
                competitor(LIBERTY, None),
                competitor("Phoenix Mercury", None),
                None,
            ),
            event(
                "a",
                "2025-06-01T19:00Z",
                competitor(LIBERTY, None),
                competitor("Washington Mystics", None),
                None,
            ),
        ];

        let matches = project_at(&events, LIBERTY, reference_now()).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_bad_date_fails_whole_batch() {
        let events = vec![
            event(
                "good",
                "2025-06-01T19:00Z",
                competitor(LIBERTY, None),
                competitor("Washington Mystics", None),
                None,
            ),
            event(
                "bad",
                "someday",
                competitor(LIBERTY, None),
                competitor("Phoenix Mercury", None),
                None,
            ),
        ];

        let err = project_at(&events, LIBERTY, reference_now()).unwrap_err();
        match err {
            AppError::MalformedEvent { event_id, .. } => assert_eq!(event_id, "bad"),
            other => panic!("expected MalformedEvent, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_competitors_is_malformed() {
        let mut single = event(
            "solo",
            "2025-06-01T19:00Z",
            competitor(LIBERTY, None),
            competitor("Phoenix Mercury", None),
            None,
        );
        single.competitions[0].competitors.truncate(1);

        let mut no_competition = single.clone();
        no_competition.id = "empty".to_string();
        no_competition.competitions.clear();

        for events in [vec![single], vec![no_competition]] {
            assert!(matches!(
                project_at(&events, LIBERTY, reference_now()),
                Err(AppError::MalformedEvent { .. })
            ));
        }
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let events: Vec<RawEvent> = (0..10)
            .map(|i| {
                event(
                    &(i % 4).to_string(),
                    &format!("2025-05-{:02}T19:00Z", 15 + i),
                    competitor(LIBERTY, None),
                    competitor("Phoenix Mercury", None),
                    None,
                )
            })
            .collect();

        let now = reference_now();
        let matches = project_at(&events, LIBERTY, now).unwrap();
        assert!(matches.len() <= events.len());
        assert!(matches.iter().all(|m| m.date > now - Duration::hours(5)));
    }
}
