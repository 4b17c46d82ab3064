use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let timesheets: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM timesheets", [], |row| row.get(0))?;
    let dates: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM timesheet_dates", [], |row| row.get(0))?;
    let orphans: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM timesheet_dates d
         WHERE NOT EXISTS (SELECT 1 FROM timesheets t WHERE t.timesheet_date_id = d.id)",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Timesheets:{} {}{}{}", CYAN, RESET, GREEN, timesheets, RESET);
    println!("{}• Timesheet dates:{} {}{}{}", CYAN, RESET, GREEN, dates, RESET);
    println!("{}• Orphan dates:{} {}", CYAN, RESET, orphans);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_date FROM timesheet_dates ORDER BY start_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT end_date FROM timesheet_dates ORDER BY end_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
