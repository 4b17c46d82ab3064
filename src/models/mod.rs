pub mod relation;
pub mod timesheet;
pub mod timesheet_date;

/// Model uid of the parent record.
pub const TIMESHEET_UID: &str = "api::timesheet.timesheet";

/// Model uid of the subordinate date record.
pub const TIMESHEET_DATE_UID: &str = "api::timesheet-date.timesheet-date";
