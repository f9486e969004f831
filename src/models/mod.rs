pub mod date;
pub mod language;
pub mod timesheet;
pub mod workday;

pub use date::CalendarDate;
pub use language::Language;
pub use timesheet::{TimesheetRow, TimesheetTable};
pub use workday::Workday;
