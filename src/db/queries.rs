use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::{DocumentStore, TimesheetFilter};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{NewTimesheet, Timesheet};
use crate::models::timesheet_date::{DateFields, DocumentStatus, TimesheetDate};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use uuid::Uuid;

const SELECT_TIMESHEET: &str = "SELECT t.id, t.document_id, t.employee, t.hours, t.notes,
            t.created_at, t.timesheet_date_id,
            d.id AS d_id, d.document_id AS d_document_id, d.start_date, d.end_date,
            d.week, d.month, d.year, d.date_range, d.published_at
     FROM timesheets t
     LEFT JOIN timesheet_dates d ON d.id = t.timesheet_date_id";

fn parse_db_date(raw: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Storage(format!("Invalid date in database: {}", raw))),
        )
    })
}

pub fn map_date_row(row: &Row) -> Result<TimesheetDate> {
    Ok(TimesheetDate {
        id: row.get("id")?,
        document_id: row.get("document_id")?,
        start_date: parse_db_date(row.get("start_date")?)?,
        end_date: parse_db_date(row.get("end_date")?)?,
        week: row.get("week")?,
        month: row.get("month")?,
        year: row.get("year")?,
        date_range: row.get("date_range")?,
        published_at: row.get("published_at")?,
    })
}

/// Map a `SELECT_TIMESHEET` row; the joined date is kept only when `populate`.
fn map_timesheet_row(row: &Row, populate: bool) -> Result<Timesheet> {
    let d_id: Option<i64> = row.get("d_id")?;

    let timesheet_date = match d_id {
        Some(id) if populate => Some(TimesheetDate {
            id,
            document_id: row.get("d_document_id")?,
            start_date: parse_db_date(row.get("start_date")?)?,
            end_date: parse_db_date(row.get("end_date")?)?,
            week: row.get("week")?,
            month: row.get("month")?,
            year: row.get("year")?,
            date_range: row.get("date_range")?,
            published_at: row.get("published_at")?,
        }),
        _ => None,
    };

    Ok(Timesheet {
        id: row.get("id")?,
        document_id: row.get("document_id")?,
        employee: row.get("employee")?,
        hours: row.get("hours")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
        timesheet_date_id: row.get("timesheet_date_id")?,
        timesheet_date,
    })
}

pub fn insert_timesheet_date(
    conn: &Connection,
    fields: &DateFields,
    status: DocumentStatus,
) -> Result<TimesheetDate> {
    let document_id = Uuid::new_v4().to_string();
    let now = Local::now().to_rfc3339();
    let published_at = match status {
        DocumentStatus::Published => Some(now.clone()),
        DocumentStatus::Draft => None,
    };

    conn.execute(
        "INSERT INTO timesheet_dates
            (document_id, start_date, end_date, week, month, year, date_range, published_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            document_id,
            fields.start_date.format("%Y-%m-%d").to_string(),
            fields.end_date.format("%Y-%m-%d").to_string(),
            fields.week,
            fields.month,
            fields.year,
            fields.date_range,
            published_at,
            now,
        ],
    )?;

    Ok(TimesheetDate::from_fields(
        conn.last_insert_rowid(),
        document_id,
        fields,
        published_at,
    ))
}

pub fn load_timesheet_date(conn: &Connection, document_id: &str) -> Result<Option<TimesheetDate>> {
    conn.query_row(
        "SELECT * FROM timesheet_dates WHERE document_id = ?1",
        [document_id],
        map_date_row,
    )
    .optional()
}

pub fn delete_timesheet_date(conn: &Connection, document_id: &str) -> Result<usize> {
    conn.execute(
        "DELETE FROM timesheet_dates WHERE document_id = ?1",
        [document_id],
    )
}

pub fn insert_timesheet(conn: &Connection, data: &NewTimesheet) -> Result<i64> {
    conn.execute(
        "INSERT INTO timesheets (document_id, employee, hours, notes, timesheet_date_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            Uuid::new_v4().to_string(),
            data.employee,
            data.hours,
            data.notes,
            data.timesheet_date_id,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_timesheet(conn: &Connection, id: i64, populate: bool) -> Result<Option<Timesheet>> {
    let sql = format!("{SELECT_TIMESHEET} WHERE t.id = ?1");
    conn.query_row(&sql, [id], |row| map_timesheet_row(row, populate))
        .optional()
}

pub fn load_timesheets(conn: &Connection, filter: &TimesheetFilter) -> Result<Vec<Timesheet>> {
    let mut conditions = Vec::new();
    let mut values: Vec<i64> = Vec::new();

    if let Some(y) = filter.year {
        conditions.push("d.year = ?");
        values.push(i64::from(y));
    }
    if let Some(m) = filter.month {
        conditions.push("d.month = ?");
        values.push(i64::from(m));
    }
    if let Some(w) = filter.week {
        conditions.push("d.week = ?");
        values.push(i64::from(w));
    }

    let mut sql = SELECT_TIMESHEET.to_string();
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY t.id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values), |row| {
        map_timesheet_row(row, true)
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_timesheet(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM timesheets WHERE id = ?1", [id])
}

/// SQLite adapter of the document-store port.
/// Every rusqlite failure surfaces as `AppError::Storage`.
impl DocumentStore for DbPool {
    fn create_timesheet_date(
        &mut self,
        fields: &DateFields,
        status: DocumentStatus,
    ) -> AppResult<TimesheetDate> {
        insert_timesheet_date(&self.conn, fields, status).map_err(AppError::storage)
    }

    fn delete_timesheet_date(&mut self, document_id: &str) -> AppResult<()> {
        let n = delete_timesheet_date(&self.conn, document_id).map_err(AppError::storage)?;
        if n == 0 {
            return Err(AppError::Storage(format!(
                "timesheet-date {} does not exist",
                document_id
            )));
        }
        Ok(())
    }

    fn insert_timesheet(&mut self, data: &NewTimesheet) -> AppResult<Timesheet> {
        let id = insert_timesheet(&self.conn, data).map_err(AppError::storage)?;
        load_timesheet(&self.conn, id, false)
            .map_err(AppError::storage)?
            .ok_or_else(|| AppError::Storage(format!("timesheet {} vanished after insert", id)))
    }

    fn find_timesheet(&mut self, id: i64, populate: bool) -> AppResult<Option<Timesheet>> {
        load_timesheet(&self.conn, id, populate).map_err(AppError::storage)
    }

    fn delete_timesheet(&mut self, id: i64) -> AppResult<bool> {
        let n = delete_timesheet(&self.conn, id).map_err(AppError::storage)?;
        Ok(n > 0)
    }

    fn list_timesheets(&mut self, filter: &TimesheetFilter) -> AppResult<Vec<Timesheet>> {
        load_timesheets(&self.conn, filter).map_err(AppError::storage)
    }

    fn write_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
