use crate::db::store::{DocumentStore, TimesheetFilter};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    /// Reads dispatch no lifecycle events, so the store is queried directly.
    pub fn load(
        store: &mut dyn DocumentStore,
        filter: &TimesheetFilter,
    ) -> AppResult<Vec<Timesheet>> {
        store.list_timesheets(filter)
    }

    pub fn to_json(rows: &[Timesheet]) -> AppResult<String> {
        serde_json::to_string_pretty(rows).map_err(|e| AppError::Other(e.to_string()))
    }

    pub fn render(rows: &[Timesheet]) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 3),
            Column::new("Employee", 10),
            Column::new("Hours", 5),
            Column::new("Week", 4),
            Column::new("Month", 5),
            Column::new("Year", 4),
            Column::new("Range", 20),
        ]);

        for t in rows {
            let (week, month, year, range) = match &t.timesheet_date {
                Some(d) => (
                    d.week.to_string(),
                    d.month.to_string(),
                    d.year.to_string(),
                    d.date_range.clone(),
                ),
                None => ("--".into(), "--".into(), "--".into(), "--".into()),
            };

            table.add_row(vec![
                t.id.to_string(),
                t.employee.clone(),
                format!("{:.2}", t.hours),
                week,
                month,
                year,
                range,
            ]);
        }

        table.render()
    }

    pub fn print(rows: &[Timesheet]) {
        if rows.is_empty() {
            println!("No timesheets found.");
            return;
        }

        for line in Self::render(rows).lines() {
            // only the "--" placeholders get greyed
            let cells: Vec<String> = line
                .split(' ')
                .map(|c| if c == "--" { colorize_optional(c) } else { c.to_string() })
                .collect();
            println!("{}", cells.join(" "));
        }

        let total: f64 = rows.iter().map(|t| t.hours).sum();
        println!("\n{} timesheet(s), {:.2} h total", rows.len(), total);
    }
}
