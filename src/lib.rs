//! Upcoming matches of a team, with calendar export
//!
//! This library fetches a team's schedule from a sports results API (directly
//! or through a relay), projects it into upcoming [`Match`] values, formats
//! kickoff times for display and exports the schedule as an iCalendar file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use match_calendar::{Config, AppError, load_schedule, export_calendar};
//! use match_calendar::schedule_ui::{DisplayEnvironment, format_match};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let matches = load_schedule(&config).await?;
//!
//!     let env = DisplayEnvironment::detect();
//!     for m in &matches {
//!         let labels = format_match(m, false, &env);
//!         println!("{} {} vs {}", labels.day_label, labels.hour_label, m.opponent);
//!     }
//!
//!     let ics = export_calendar(&matches, &config.team_name, &config.export_time_zone)?;
//!     match_calendar::calendar::download(&ics, "liberty_matchs.ics").await?;
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod schedule_ui;

// Re-export commonly used types for convenience
pub use calendar::{download, export_calendar};
pub use config::Config;
pub use data_fetcher::models::{Match, RawEvent, ScheduleResponse};
pub use data_fetcher::{load_schedule, normalize_team_name, project};
pub use error::{AppError, ErrorKind};
pub use schedule_ui::{DisplayEnvironment, MatchLabels, ScheduleView, format_match};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
