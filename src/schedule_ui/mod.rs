//! Terminal presentation of a team's upcoming matches.

pub mod colors;
pub mod formatting;
pub mod instructions;
pub mod locale;
pub mod rendering;
pub mod view;

pub use formatting::{MatchLabels, format_match, resolve_time_zone};
pub use instructions::{ImportTarget, import_instructions};
pub use locale::DisplayEnvironment;
pub use rendering::{print_schedule, render_schedule};
pub use view::{LoadTicket, MatchRow, ScheduleView, ViewState};
