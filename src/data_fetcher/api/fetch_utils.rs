//! Generic HTTP fetching with retry logic and error classification

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Fetches `url` and decodes the JSON body into `T`.
///
/// - Retries errors [`AppError::is_retryable`] accepts, with exponential backoff
/// - Respects Retry-After headers for rate limiting
/// - Maps non-success statuses to specific [`AppError`] variants
/// - Tells malformed JSON apart from JSON of the wrong shape
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        let (err, retry_after) = match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => break resp,
            Ok(resp) => {
                let retry_after = resp
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                (status_error(resp.status(), url), retry_after)
            }
            Err(e) => (transport_error(e, url), None),
        };

        if !err.is_retryable() || attempt >= retry::MAX_ATTEMPTS {
            error!("Request failed for URL {}: {}", url, err);
            return Err(err);
        }

        let wait = retry_after.unwrap_or(backoff);
        warn!(
            "Transient error from {}: {}. Retrying in {:?} (attempt {}/{})",
            url,
            err,
            wait,
            attempt + 1,
            retry::MAX_ATTEMPTS
        );
        tokio::time::sleep(wait).await;
        attempt += 1;
        backoff = backoff.saturating_mul(2);
    };

    debug!("Response status: {}", response.status());

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    decode_body(&response_text, url)
}

/// Maps a non-success status to its [`AppError`] variant.
fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Decodes a response body, classifying failures as empty, non-JSON, or
/// JSON with an unexpected structure.
pub(super) fn decode_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if e.is_syntax()
                || e.is_eof()
                || !(trimmed.starts_with('{') || trimmed.starts_with('['))
            {
                Err(AppError::api_malformed_json(e.to_string(), url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
