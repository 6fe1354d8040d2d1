use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_request_url;
use crate::config::Config;
use crate::data_fetcher::models::{Match, RawEvent, ScheduleResponse};
use crate::data_fetcher::processors::project;
use crate::error::AppError;

/// Fetches the raw event list of a team through the configured relay.
///
/// Transport failures, error statuses and undecodable bodies are returned
/// as errors; no partial event list is ever produced.
#[instrument(skip(client, config))]
pub async fn fetch_schedule(
    client: &Client,
    config: &Config,
    team_slug: &str,
) -> Result<Vec<RawEvent>, AppError> {
    let url = build_request_url(config, team_slug)?;
    let response: ScheduleResponse = fetch(client, &url).await?;
    info!(
        "Fetched {} events for team '{}'",
        response.events.len(),
        team_slug
    );
    Ok(response.events)
}

/// Fetches and projects the schedule of `team_slug`, whose official
/// display name is `team_name`.
pub async fn load_schedule_with_client(
    client: &Client,
    config: &Config,
    team_slug: &str,
    team_name: &str,
) -> Result<Vec<Match>, AppError> {
    let events = fetch_schedule(client, config, team_slug).await?;
    project(&events, team_name)
}

/// Loads the configured team's upcoming matches with a fresh HTTP client.
pub async fn load_schedule(config: &Config) -> Result<Vec<Match>, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    load_schedule_with_client(&client, config, &config.team_slug, &config.team_name).await
}
