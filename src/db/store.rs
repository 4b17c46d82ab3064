//! Document-store port.
//!
//! Lifecycle hooks and the document service only talk to this trait; the
//! SQLite adapter (`DbPool`) implements it, and unit tests use the
//! in-memory `MemoryStore`.

use crate::errors::AppResult;
use crate::models::timesheet::{NewTimesheet, Timesheet};
use crate::models::timesheet_date::{DateFields, DocumentStatus, TimesheetDate};

/// Optional filters applied to the related date record when listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimesheetFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub week: Option<u32>,
}

impl TimesheetFilter {
    pub fn matches(&self, date: Option<&TimesheetDate>) -> bool {
        if self.year.is_none() && self.month.is_none() && self.week.is_none() {
            return true;
        }

        let Some(d) = date else {
            return false;
        };

        self.year.is_none_or(|y| d.year == y)
            && self.month.is_none_or(|m| d.month == m)
            && self.week.is_none_or(|w| d.week == w)
    }
}

pub trait DocumentStore {
    /// Persist a new date record; `Published` sets `published_at`.
    fn create_timesheet_date(
        &mut self,
        fields: &DateFields,
        status: DocumentStatus,
    ) -> AppResult<TimesheetDate>;

    /// Delete a date record by its stable document id.
    fn delete_timesheet_date(&mut self, document_id: &str) -> AppResult<()>;

    fn insert_timesheet(&mut self, data: &NewTimesheet) -> AppResult<Timesheet>;

    /// Find a timesheet; with `populate` the related date record is loaded too.
    fn find_timesheet(&mut self, id: i64, populate: bool) -> AppResult<Option<Timesheet>>;

    /// Returns false when no row matched `id`.
    fn delete_timesheet(&mut self, id: i64) -> AppResult<bool>;

    /// Timesheets ordered by id, relation populated.
    fn list_timesheets(&mut self, filter: &TimesheetFilter) -> AppResult<Vec<Timesheet>>;

    /// Append a line to the internal log.
    fn write_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
