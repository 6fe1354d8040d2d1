//! Presentation state for a schedule: load lifecycle and per-match
//! local-time toggles.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::formatting::{MatchLabels, format_match};
use super::locale::DisplayEnvironment;
use crate::data_fetcher::models::Match;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(Vec<Match>),
    /// The load failed; the view stays here until another load begins.
    Failed(String),
}

/// Identifies one load request. Results carrying an outdated ticket are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A match paired with its display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow<'a> {
    pub item: &'a Match,
    pub show_local: bool,
    pub labels: MatchLabels,
}

#[derive(Debug)]
pub struct ScheduleView {
    state: ViewState,
    generation: u64,
    local_toggles: HashMap<String, bool>,
    environment: DisplayEnvironment,
}

impl ScheduleView {
    pub fn new(environment: DisplayEnvironment) -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
            local_toggles: HashMap::new(),
            environment,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn environment(&self) -> &DisplayEnvironment {
        &self.environment
    }

    /// Matches currently shown, if a load has succeeded.
    pub fn matches(&self) -> Option<&[Match]> {
        match &self.state {
            ViewState::Ready(matches) => Some(matches),
            _ => None,
        }
    }

    /// Starts a new load and invalidates any in-flight one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        debug!("Schedule load {} started", self.generation);
        LoadTicket(self.generation)
    }

    /// Applies a load result. Returns `false` when the ticket is stale and the
    /// result was discarded.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Vec<Match>, AppError>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "Discarding schedule load {} (current is {})",
                ticket.0, self.generation
            );
            return false;
        }

        match result {
            Ok(matches) => {
                info!("Schedule ready with {} matches", matches.len());
                self.local_toggles
                    .retain(|id, _| matches.iter().any(|m| &m.id == id));
                self.state = ViewState::Ready(matches);
            }
            Err(e) => {
                warn!("Schedule load failed: {e}");
                self.state = ViewState::Failed(e.to_string());
            }
        }
        true
    }

    /// Invalidates outstanding loads and forgets all display state.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.local_toggles.clear();
        self.state = ViewState::Loading;
    }

    /// Flips local-time display for one match and returns the new setting.
    pub fn toggle_local(&mut self, match_id: &str) -> bool {
        let entry = self.local_toggles.entry(match_id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn set_local(&mut self, match_id: &str, show_local: bool) {
        self.local_toggles.insert(match_id.to_string(), show_local);
    }

    pub fn is_local(&self, match_id: &str) -> bool {
        self.local_toggles.get(match_id).copied().unwrap_or(false)
    }

    /// Labels for every shown match, in schedule order.
    pub fn rows(&self) -> Vec<MatchRow<'_>> {
        self.matches()
            .unwrap_or_default()
            .iter()
            .map(|item| {
                let show_local = self.is_local(&item.id);
                MatchRow {
                    item,
                    show_local,
                    labels: format_match(item, show_local, &self.environment),
                }
            })
            .collect()
    }
}
