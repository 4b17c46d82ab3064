use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250106_0001_create_timesheet_dates",
        description: "Created timesheet_dates table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS timesheet_dates (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            document_id  TEXT NOT NULL UNIQUE,
            start_date   TEXT NOT NULL,
            end_date     TEXT NOT NULL,
            week         INTEGER NOT NULL CHECK(week >= 1),
            month        INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            year         INTEGER NOT NULL,
            date_range   TEXT NOT NULL,
            published_at TEXT,
            created_at   TEXT NOT NULL,
            CHECK(end_date >= start_date)
        );
        "#,
    },
    Migration {
        version: "20250106_0002_create_timesheets",
        description: "Created timesheets table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS timesheets (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            document_id       TEXT NOT NULL UNIQUE,
            employee          TEXT NOT NULL,
            hours             REAL NOT NULL DEFAULT 0 CHECK(hours >= 0),
            notes             TEXT,
            timesheet_date_id INTEGER UNIQUE
                REFERENCES timesheet_dates(id) ON DELETE SET NULL,
            created_at        TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250113_0003_index_timesheet_dates_period",
        description: "Indexed timesheet_dates by year/month/week",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_timesheet_dates_year_month
            ON timesheet_dates(year, month);
        CREATE INDEX IF NOT EXISTS idx_timesheet_dates_year_week
            ON timesheet_dates(year, week);
        "#,
    },
];

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Idempotent; invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);

        let versions = applied_versions(&conn).unwrap();
        assert_eq!(versions.len(), MIGRATIONS.len());
        assert_eq!(versions[0], "20250106_0001_create_timesheet_dates");
    }

    #[test]
    fn schema_rejects_inverted_ranges() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let res = conn.execute(
            "INSERT INTO timesheet_dates
                (document_id, start_date, end_date, week, month, year, date_range, created_at)
             VALUES ('d1', '2025-01-12', '2025-01-06', 2, 1, 2025, 'x', 'now')",
            [],
        );
        assert!(res.is_err());
    }
}
