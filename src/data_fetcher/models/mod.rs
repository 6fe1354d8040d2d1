pub mod matches;
pub mod schedule;

pub use matches::Match;
pub use schedule::{
    Competition, Competitor, CompetitorTeam, Link, Logo, RawEvent, ScheduleResponse,
};
