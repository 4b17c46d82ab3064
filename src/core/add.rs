use crate::core::documents::Documents;
use crate::db::store::DocumentStore;
use crate::errors::{AppError, AppResult};
use crate::lifecycle::LifecycleRegistry;
use crate::models::relation::RelationInput;
use crate::models::timesheet::{Timesheet, TimesheetData};
use crate::ui::messages::{error, success};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &mut dyn DocumentStore,
        registry: &LifecycleRegistry,
        employee: &str,
        hours: f64,
        start: &str,
        end: &str,
        notes: Option<String>,
    ) -> AppResult<Timesheet> {
        let employee = employee.trim();
        if employee.is_empty() {
            return Err(AppError::validation("employee must not be empty"));
        }
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::Validation(format!(
                "hours must be a non-negative number, got {}",
                hours
            )));
        }

        let data = TimesheetData::new(employee, hours, Some(RelationInput::raw(start, end)))
            .with_notes(notes.filter(|n| !n.trim().is_empty()));

        let created = Documents::new(&mut *store, registry).create(data)?;

        let msg = format!(
            "Timesheet {} created for {} ({} h)",
            created.id, created.employee, created.hours
        );
        if let Err(e) = store.write_log("add", &created.document_id, &msg) {
            error(format!("Failed to write internal log: {}", e));
        }
        success(msg);

        Ok(created)
    }
}
