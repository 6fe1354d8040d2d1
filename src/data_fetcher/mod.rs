pub mod api;
pub mod models;
pub mod processors;
pub mod team_names;

pub use api::{fetch_schedule, load_schedule, load_schedule_with_client};
pub use models::{Match, RawEvent, ScheduleResponse};
pub use processors::{project, project_at};
pub use team_names::normalize_team_name;
