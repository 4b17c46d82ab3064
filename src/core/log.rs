use crate::db::pool::DbPool;
use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::models::{TIMESHEET_DATE_UID, TIMESHEET_UID};
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI regex")
});

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "create" => Colour::Green,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Shorten model uids in the target column.
fn short_target(target: &str) -> &str {
    match target {
        TIMESHEET_UID => "timesheet",
        TIMESHEET_DATE_UID => "timesheet-date",
        other => other,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|e| e.date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let op_target = Self::op_target(entry);

            // pad on visible width, not on escape codes
            let padding = " ".repeat(40usize.saturating_sub(strip_ansi(&op_target).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                op_target,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }

    fn op_target(entry: &LogEntry) -> String {
        let colour = if entry.is_failure() {
            Colour::Red
        } else {
            color_for_operation(&entry.operation)
        };
        let colored = colour.bold().paint(entry.operation.as_str());

        if entry.target.is_empty() {
            colored.to_string()
        } else {
            format!("{} ({})", colored, short_target(&entry.target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_keeps_visible_text() {
        let painted = Colour::Red.bold().paint("del").to_string();
        assert_eq!(strip_ansi(&painted), "del");
    }

    #[test]
    fn model_uids_are_shortened() {
        assert_eq!(short_target(TIMESHEET_DATE_UID), "timesheet-date");
        assert_eq!(short_target("abc"), "abc");
    }
}
