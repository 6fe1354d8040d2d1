pub mod projection;

pub use projection::{parse_event_date, project, project_at};
