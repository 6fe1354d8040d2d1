//! Calendar export: ICS serialization and writing the file.

pub mod file;
pub mod ics;

pub use file::download;
pub use ics::{ExportOptions, export_calendar, export_calendar_with};
