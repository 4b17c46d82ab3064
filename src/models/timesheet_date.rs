use crate::utils::date::{format_date_range, week_number};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Publication state requested when a document is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Published,
}

/// Fields derived from a timesheet's start/end dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateFields {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub week: u32,
    pub month: u32,
    pub year: i32,
    pub date_range: String,
}

impl DateFields {
    /// Week, month and year always come from `start`.
    pub fn derive(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: start,
            end_date: end,
            week: week_number(start),
            month: start.month(),
            year: start.year(),
            date_range: format_date_range(start, end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetDate {
    pub id: i64,
    pub document_id: String,
    pub start_date: NaiveDate, // ⇔ timesheet_dates.start_date (TEXT "YYYY-MM-DD")
    pub end_date: NaiveDate,   // ⇔ timesheet_dates.end_date
    pub week: u32,
    pub month: u32,
    pub year: i32,
    pub date_range: String,
    pub published_at: Option<String>, // None for drafts
}

impl TimesheetDate {
    pub fn from_fields(
        id: i64,
        document_id: String,
        fields: &DateFields,
        published_at: Option<String>,
    ) -> Self {
        Self {
            id,
            document_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
            week: fields.week,
            month: fields.month,
            year: fields.year,
            date_range: fields.date_range.clone(),
            published_at,
        }
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}
