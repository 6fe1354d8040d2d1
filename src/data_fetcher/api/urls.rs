//! URL building utilities for the schedule endpoint and the relay

use crate::config::Config;
use crate::error::AppError;
use url::Url;

/// Builds the provider's team schedule URL.
///
/// # Example
/// ```
/// use match_calendar::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("https://site.api.espn.com", "basketball/wnba", "nyl");
/// assert_eq!(
///     url,
///     "https://site.api.espn.com/apis/site/v2/sports/basketball/wnba/teams/nyl/schedule"
/// );
/// ```
pub fn build_schedule_url(api_domain: &str, sport_path: &str, team_slug: &str) -> String {
    let domain = api_domain.trim_end_matches('/');
    let sport = sport_path.trim_matches('/');
    format!("{domain}/apis/site/v2/sports/{sport}/teams/{team_slug}/schedule")
}

/// Wraps a target URL into a relay request, `<relay>?url=<encoded target>`.
///
/// # Example
/// ```
/// use match_calendar::data_fetcher::api::build_relay_url;
///
/// let url = build_relay_url("http://localhost:3000/api/proxy", "https://x.test/a?b=c").unwrap();
/// assert_eq!(url, "http://localhost:3000/api/proxy?url=https%3A%2F%2Fx.test%2Fa%3Fb%3Dc");
/// ```
pub fn build_relay_url(relay_url: &str, target: &str) -> Result<String, AppError> {
    let url = Url::parse_with_params(relay_url, &[("url", target)])
        .map_err(|e| AppError::config_error(format!("Invalid relay URL '{relay_url}': {e}")))?;
    Ok(url.to_string())
}

/// Resolves the URL actually requested for a team: through the relay when
/// one is configured, otherwise the provider endpoint itself.
pub fn build_request_url(config: &Config, team_slug: &str) -> Result<String, AppError> {
    let target = build_schedule_url(&config.api_domain, &config.sport_path, team_slug);
    match &config.relay_url {
        Some(relay) => build_relay_url(relay, &target),
        None => Ok(target),
    }
}
