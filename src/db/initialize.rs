use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const REQUIRED_TABLES: [&str; 3] = ["log", "timesheet_dates", "timesheets"];

/// Bring the schema up to date and make sure every table the store needs exists.
///
/// Returns the number of migrations applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    let applied = run_pending_migrations(conn)?;

    let mut stmt =
        conn.prepare_cached("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    for table in REQUIRED_TABLES {
        let n: i64 = stmt.query_row([table], |row| row.get(0))?;
        if n == 0 {
            return Err(AppError::Migration(format!(
                "table `{}` missing after migrations",
                table
            )));
        }
    }

    Ok(applied)
}
