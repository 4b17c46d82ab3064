//! The internal `log` table: hook outcomes, command results and applied
//! migrations, newest last.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, Row, params};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    /// Model uid or document id the line is about; empty when none.
    pub target: String,
    pub message: String,
}

impl LogEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            operation: row.get("operation")?,
            target: row.get::<_, Option<String>>("target")?.unwrap_or_default(),
            message: row.get("message")?,
        })
    }

    pub fn is_failure(&self) -> bool {
        self.operation.ends_with("_failed")
    }
}

/// Append a line to the `log` table, stamped with the local time.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![now, operation, target, message])?;

    Ok(())
}

pub fn load_log(conn: &Connection) -> rusqlite::Result<Vec<LogEntry>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    stmt.query_map([], LogEntry::from_row)?.collect()
}
