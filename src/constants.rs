//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default settings so the
//! fetcher, projector, formatter and exporter agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Matches that kicked off less than this many hours ago are still shown
pub const ELAPSED_GRACE_HOURS: i64 = 5;

/// Fixed duration of an exported calendar event
pub const MATCH_DURATION_HOURS: i64 = 2;

/// Placeholder link used when the upstream event has none
pub const DEFAULT_MATCH_LINK: &str = "#";

/// Placeholder logo used when the opponent has none
pub const DEFAULT_OPPONENT_LOGO: &str = "";

/// Upstream defaults
pub mod upstream {
    /// Sports results provider
    pub const API_DOMAIN: &str = "https://site.api.espn.com";

    /// Sport and league path segment of the schedule endpoint
    pub const SPORT_PATH: &str = "basketball/wnba";

    /// Team slug of the default subject team
    pub const TEAM_SLUG: &str = "nyl";

    /// Official display name of the default subject team
    pub const TEAM_NAME: &str = "New York Liberty";
}

/// Reference display settings, used whenever local time is not requested
pub mod reference {
    pub const LOCALE: &str = "fr-FR";

    pub const TIME_ZONE: &str = "Europe/Paris";

    pub const FLAG_CODE: &str = "fr";

    /// Locale chosen for local display when the environment is English
    pub const ENGLISH_LOCALE: &str = "en-US";

    /// Flag used when a locale carries no region subtag
    pub const FALLBACK_FLAG_CODE: &str = "us";

    /// Locales rendered with a 12-hour clock
    pub const TWELVE_HOUR_LOCALES: [&str; 2] = ["en-US", "en-GB"];
}

/// Calendar export defaults
pub mod calendar {
    pub const FILE_NAME: &str = "liberty_matchs.ics";

    pub const EVENT_LOCATION: &str = "Match WNBA";

    pub const CALENDAR_NAME: &str = "Matchs";

    pub const UID_DOMAIN: &str = "match-calendar";

    pub const PRODUCT_ID: &str = "-//match_calendar//EN";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "MATCH_CALENDAR_API_DOMAIN";

    /// Environment variable for relay URL override
    pub const RELAY_URL: &str = "MATCH_CALENDAR_RELAY_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "MATCH_CALENDAR_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "MATCH_CALENDAR_HTTP_TIMEOUT";

    /// Locale variables, in lookup precedence order
    pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];
}

/// Retry configuration
pub mod retry {
    /// Maximum number of retry attempts for transient fetch failures
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial backoff delay (milliseconds), doubled after every attempt
    pub const BASE_DELAY_MS: u64 = 250;
}
