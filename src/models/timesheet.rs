use super::relation::RelationInput;
use super::timesheet_date::TimesheetDate;
use serde::Serialize;

/// A persisted timesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timesheet {
    pub id: i64,
    pub document_id: String,
    pub employee: String,
    pub hours: f64,
    pub notes: Option<String>,
    pub created_at: String, // ISO 8601
    pub timesheet_date_id: Option<i64>,
    /// Filled only when the relation is populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timesheet_date: Option<TimesheetDate>,
}

/// In-flight create payload. Lifecycle hooks may rewrite `timesheet_date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetData {
    pub employee: String,
    pub hours: f64,
    pub notes: Option<String>,
    pub timesheet_date: Option<RelationInput>,
}

impl TimesheetData {
    pub fn new(employee: &str, hours: f64, timesheet_date: Option<RelationInput>) -> Self {
        Self {
            employee: employee.to_string(),
            hours,
            notes: None,
            timesheet_date,
        }
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// Row handed to the store once the relation is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimesheet {
    pub employee: String,
    pub hours: f64,
    pub notes: Option<String>,
    pub timesheet_date_id: i64,
}
