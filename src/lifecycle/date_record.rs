use crate::db::store::DocumentStore;
use crate::errors::{AppError, AppResult};
use crate::models::TIMESHEET_DATE_UID;
use crate::models::relation::RelationRef;
use crate::models::timesheet_date::{DateFields, DocumentStatus};
use crate::ui::messages::{error, hook};

/// Create and publish the date record for a timesheet.
///
/// Returns the reference the parent relation must connect to. Store failures
/// are logged and re-raised as `AppError::Storage`.
pub fn create_timesheet_date(
    store: &mut dyn DocumentStore,
    fields: &DateFields,
) -> AppResult<RelationRef> {
    match store.create_timesheet_date(fields, DocumentStatus::Published) {
        Ok(created) => {
            let msg = format!(
                "Created timesheet-date {} ({}) for week {} of {}",
                created.id, created.date_range, created.week, created.year
            );
            hook(TIMESHEET_DATE_UID, &msg);
            if let Err(e) = store.write_log("create", TIMESHEET_DATE_UID, &msg) {
                error(format!("Failed to write internal log: {}", e));
            }

            Ok(RelationRef {
                id: created.id,
                document_id: created.document_id,
                is_temporary: false,
            })
        }
        Err(e) => {
            let msg = format!("Error creating timesheet-date ({}): {}", fields.date_range, e);
            error(&msg);
            if let Err(log_err) = store.write_log("create_failed", TIMESHEET_DATE_UID, &msg) {
                error(format!("Failed to write internal log: {}", log_err));
            }

            Err(match e {
                AppError::Storage(_) => e,
                other => AppError::storage(other),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use chrono::NaiveDate;

    fn fields() -> DateFields {
        DateFields::derive(
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
        )
    }

    #[test]
    fn returns_store_identifiers_unchanged() {
        let mut store = MemoryStore::new();

        let r = create_timesheet_date(&mut store, &fields()).unwrap();

        let stored = store.date(&r.document_id).unwrap();
        assert_eq!(r.id, stored.id);
        assert!(!r.is_temporary);
        assert!(stored.is_published());
        assert_eq!(store.log.last().map(|l| l.0.as_str()), Some("create"));
    }

    #[test]
    fn failure_is_logged_and_reraised() {
        let mut store = MemoryStore::new();
        store.fail_date_create = true;

        let err = create_timesheet_date(&mut store, &fields()).unwrap_err();

        assert!(err.is_storage());
        assert!(store.dates.is_empty());
        assert_eq!(
            store.log.last().map(|l| l.0.as_str()),
            Some("create_failed")
        );
    }

    #[test]
    fn log_failure_does_not_mask_the_store_error() {
        let mut store = MemoryStore::new();
        store.fail_date_create = true;
        store.fail_write_log = true;

        let err = create_timesheet_date(&mut store, &fields()).unwrap_err();

        assert!(matches!(err, AppError::Storage(ref m) if m.contains("timesheet-date store")));
        assert!(store.log.is_empty());
    }
}
