//! In-memory adapter of the document-store port.
//!
//! Keeps every call it receives so tests can assert on side effects, and
//! can be told to fail specific operations.

use crate::db::store::{DocumentStore, TimesheetFilter};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{NewTimesheet, Timesheet};
use crate::models::timesheet_date::{DateFields, DocumentStatus, TimesheetDate};
use chrono::Local;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub dates: Vec<TimesheetDate>,
    pub timesheets: Vec<Timesheet>,
    pub log: Vec<(String, String, String)>,

    /// Document ids passed to `delete_timesheet_date`, in call order.
    pub date_deletes: Vec<String>,

    pub fail_date_create: bool,
    pub fail_date_delete: bool,
    pub fail_timesheet_insert: bool,
    pub fail_write_log: bool,

    next_date_id: i64,
    next_timesheet_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&self, document_id: &str) -> Option<&TimesheetDate> {
        self.dates.iter().find(|d| d.document_id == document_id)
    }

    fn date_by_id(&self, id: i64) -> Option<&TimesheetDate> {
        self.dates.iter().find(|d| d.id == id)
    }

    fn populated(&self, ts: &Timesheet, populate: bool) -> Timesheet {
        let mut out = ts.clone();
        out.timesheet_date = match (populate, ts.timesheet_date_id) {
            (true, Some(id)) => self.date_by_id(id).cloned(),
            _ => None,
        };
        out
    }
}

impl DocumentStore for MemoryStore {
    fn create_timesheet_date(
        &mut self,
        fields: &DateFields,
        status: DocumentStatus,
    ) -> AppResult<TimesheetDate> {
        if self.fail_date_create {
            return Err(AppError::Storage("timesheet-date store unavailable".into()));
        }

        self.next_date_id += 1;
        let published_at = match status {
            DocumentStatus::Published => Some(Local::now().to_rfc3339()),
            DocumentStatus::Draft => None,
        };
        let date = TimesheetDate::from_fields(
            self.next_date_id,
            format!("date-{}", self.next_date_id),
            fields,
            published_at,
        );

        self.dates.push(date.clone());
        Ok(date)
    }

    fn delete_timesheet_date(&mut self, document_id: &str) -> AppResult<()> {
        self.date_deletes.push(document_id.to_string());

        if self.fail_date_delete {
            return Err(AppError::Storage("timesheet-date store unavailable".into()));
        }

        let Some(pos) = self.dates.iter().position(|d| d.document_id == document_id) else {
            return Err(AppError::Storage(format!(
                "timesheet-date {} does not exist",
                document_id
            )));
        };
        let removed = self.dates.remove(pos);

        for ts in &mut self.timesheets {
            if ts.timesheet_date_id == Some(removed.id) {
                ts.timesheet_date_id = None;
            }
        }
        Ok(())
    }

    fn insert_timesheet(&mut self, data: &NewTimesheet) -> AppResult<Timesheet> {
        if self.fail_timesheet_insert {
            return Err(AppError::Storage("timesheet store unavailable".into()));
        }
        if self.date_by_id(data.timesheet_date_id).is_none() {
            return Err(AppError::Storage(format!(
                "timesheet-date {} does not exist",
                data.timesheet_date_id
            )));
        }

        self.next_timesheet_id += 1;
        let ts = Timesheet {
            id: self.next_timesheet_id,
            document_id: format!("timesheet-{}", self.next_timesheet_id),
            employee: data.employee.clone(),
            hours: data.hours,
            notes: data.notes.clone(),
            created_at: Local::now().to_rfc3339(),
            timesheet_date_id: Some(data.timesheet_date_id),
            timesheet_date: None,
        };

        self.timesheets.push(ts.clone());
        Ok(ts)
    }

    fn find_timesheet(&mut self, id: i64, populate: bool) -> AppResult<Option<Timesheet>> {
        Ok(self
            .timesheets
            .iter()
            .find(|t| t.id == id)
            .map(|t| self.populated(t, populate)))
    }

    fn delete_timesheet(&mut self, id: i64) -> AppResult<bool> {
        let before = self.timesheets.len();
        self.timesheets.retain(|t| t.id != id);
        Ok(self.timesheets.len() < before)
    }

    fn list_timesheets(&mut self, filter: &TimesheetFilter) -> AppResult<Vec<Timesheet>> {
        Ok(self
            .timesheets
            .iter()
            .map(|t| self.populated(t, true))
            .filter(|t| filter.matches(t.timesheet_date.as_ref()))
            .collect())
    }

    fn write_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        if self.fail_write_log {
            return Err(AppError::Storage("log table unavailable".into()));
        }
        self.log
            .push((operation.into(), target.into(), message.into()));
        Ok(())
    }
}
