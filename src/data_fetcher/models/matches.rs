use chrono::{DateTime, Utc};

/// One upcoming game of the subject team, ready for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// Upstream event id, unique within a schedule
    pub id: String,
    /// Kickoff instant
    pub date: DateTime<Utc>,
    /// Short display name of the opponent
    pub opponent: String,
    /// Opponent logo URL, empty when unknown
    pub opponent_logo: String,
    /// External details page, `#` when unknown
    pub link: String,
}

impl Match {
    pub fn has_link(&self) -> bool {
        !self.link.is_empty() && self.link != crate::constants::DEFAULT_MATCH_LINK
    }
}
