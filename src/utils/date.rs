//! Date helpers used to derive the timesheet-date fields.

use chrono::{DateTime, Datelike, NaiveDate};

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp (its calendar date in its own offset).
///
/// Years outside `0..=9999` are rejected: dates are stored as text and
/// compared as strings, which only orders correctly with four-digit years.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.date_naive())
    })?;

    (0..=9999).contains(&parsed.year()).then_some(parsed)
}

/// Week of the year, counted from January 1st.
///
/// Whole days elapsed since January 1st, plus the weekday of January 1st
/// (0 = Sunday), plus one, divided by seven and rounded up. Weeks are not
/// ISO-8601 weeks: week 1 is the (partial) week containing January 1st.
pub fn week_number(date: NaiveDate) -> u32 {
    let days = date.ordinal0();
    let first_day_weekday = (date.weekday().num_days_from_sunday() + 7 - days % 7) % 7;

    (days + first_day_weekday + 1).div_ceil(7)
}

/// `"Jan 6 - Jan 12, 2025"`: the start side omits the year.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
}
