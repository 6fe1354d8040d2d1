//! Wire types of the team schedule endpoint.
//!
//! Fields the projector relies on are required, so a response that does not
//! carry them fails to decode instead of producing half-filled events.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    /// ISO-8601 kickoff time, e.g. `2025-06-01T19:00Z`
    pub date: String,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub team: CompetitorTeam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorTeam {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub logos: Vec<Logo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logo {
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl RawEvent {
    /// Competitors of the first competition, empty when there is none.
    pub fn competitors(&self) -> &[Competitor] {
        self.competitions
            .first()
            .map(|c| c.competitors.as_slice())
            .unwrap_or(&[])
    }

    /// First external link of the event.
    pub fn primary_link(&self) -> Option<&str> {
        self.links.first().map(|l| l.href.as_str())
    }
}

impl CompetitorTeam {
    /// First logo of the team.
    pub fn primary_logo(&self) -> Option<&str> {
        self.logos.first().map(|l| l.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_response_deserialization() {
        let json = r#"{
            "team": {"id": "9"},
            "events": [{
                "id": "401736200",
                "date": "2025-06-01T19:00Z",
                "name": "Washington Mystics at New York Liberty",
                "competitions": [{
                    "competitors": [
                        {"homeAway": "home", "team": {"displayName": "New York Liberty",
                            "logos": [{"href": "https://a.espncdn.com/nyl.png"}]}},
                        {"homeAway": "away", "team": {"displayName": "Washington Mystics",
                            "logos": [{"href": "https://a.espncdn.com/wsh.png"},
                                      {"href": "https://a.espncdn.com/wsh-dark.png"}]}}
                    ]
                }],
                "links": [{"href": "https://www.espn.com/wnba/game/_/gameId/401736200"}]
            }]
        }"#;

        let response: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.events.len(), 1);

        let event = &response.events[0];
        assert_eq!(event.id, "401736200");
        assert_eq!(event.competitors().len(), 2);
        assert_eq!(event.competitors()[0].team.display_name, "New York Liberty");
        assert_eq!(
            event.competitors()[1].team.primary_logo(),
            Some("https://a.espncdn.com/wsh.png")
        );
        assert_eq!(
            event.primary_link(),
            Some("https://www.espn.com/wnba/game/_/gameId/401736200")
        );
    }

    #[test]
    fn test_optional_collections_default_to_empty() {
        let json = r#"{"id": "1", "date": "2025-06-01T19:00:00Z"}"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();

        assert!(event.competitors().is_empty());
        assert_eq!(event.primary_link(), None);
    }

    #[test]
    fn test_missing_events_array_is_rejected() {
        let result = serde_json::from_str::<ScheduleResponse>(r#"{"team": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_display_name_is_rejected() {
        let json = r#"{"team": {"logos": []}}"#;
        assert!(serde_json::from_str::<Competitor>(json).is_err());
    }
}
