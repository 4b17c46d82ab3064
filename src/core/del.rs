use crate::core::documents::Documents;
use crate::db::store::DocumentStore;
use crate::errors::{AppError, AppResult};
use crate::lifecycle::LifecycleRegistry;
use crate::ui::messages::{error, info};

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(
        store: &mut dyn DocumentStore,
        registry: &LifecycleRegistry,
        id: i64,
    ) -> AppResult<()> {
        let Some(existing) = store.find_timesheet(id, true)? else {
            return Err(AppError::NotFound(id));
        };

        Documents::new(&mut *store, registry).delete(id)?;

        let range = existing
            .timesheet_date
            .map(|d| d.date_range)
            .unwrap_or_else(|| "no dates".to_string());
        let msg = format!("Deleted timesheet {} of {} ({})", id, existing.employee, range);
        if let Err(e) = store.write_log("del", &existing.document_id, &msg) {
            error(format!("Failed to write internal log: {}", e));
        }
        info(msg);

        Ok(())
    }
}
