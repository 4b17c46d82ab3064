//! Hooks subscribed to `api::timesheet.timesheet`.
//!
//! `beforeCreate` turns raw start/end dates into a published timesheet-date
//! record and rewires the payload to connect it; `beforeDelete` removes that
//! record before the timesheet itself is deleted.

use super::date_record::create_timesheet_date;
use super::event::LifecycleEvent;
use super::registry::Subscriber;
use crate::db::store::DocumentStore;
use crate::errors::{AppError, AppResult};
use crate::models::TIMESHEET_DATE_UID;
use crate::models::relation::{RelationDirective, RelationInput};
use crate::models::timesheet_date::DateFields;
use crate::ui::messages::{error, hook};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

pub struct TimesheetLifecycle;

/// Check presence, format and ordering of the raw dates.
pub fn validate_dates(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    let (Some(start_raw), Some(end_raw)) = (
        start_date.filter(|s| !s.trim().is_empty()),
        end_date.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(AppError::validation(
            "startDate and endDate are required for timesheet",
        ));
    };

    let start = parse_date(start_raw)
        .ok_or_else(|| AppError::Validation(format!("Invalid startDate: {}", start_raw)))?;
    let end = parse_date(end_raw)
        .ok_or_else(|| AppError::Validation(format!("Invalid endDate: {}", end_raw)))?;

    if end < start {
        return Err(AppError::validation(
            "endDate must be after or equal to startDate",
        ));
    }

    Ok((start, end))
}

impl Subscriber for TimesheetLifecycle {
    fn before_create(
        &self,
        event: &mut LifecycleEvent,
        store: &mut dyn DocumentStore,
    ) -> AppResult<()> {
        let Some(data) = event.params.data.as_mut() else {
            return Ok(());
        };

        // absent, resolved id or directive: already processed
        let Some(RelationInput::RawInput {
            start_date,
            end_date,
        }) = &data.timesheet_date
        else {
            return Ok(());
        };

        let (start, end) = validate_dates(start_date.as_deref(), end_date.as_deref())?;
        let fields = DateFields::derive(start, end);

        let created = create_timesheet_date(store, &fields)?;

        data.timesheet_date = Some(RelationInput::RelationDirective(
            RelationDirective::connect_one(created.id, created.document_id),
        ));
        Ok(())
    }

    fn before_delete(
        &self,
        event: &mut LifecycleEvent,
        store: &mut dyn DocumentStore,
    ) -> AppResult<()> {
        let Some(id) = event.params.filters.id else {
            return Ok(());
        };

        let Some(timesheet) = store.find_timesheet(id, true)? else {
            return Ok(());
        };
        let Some(date) = timesheet.timesheet_date else {
            return Ok(());
        };

        match store.delete_timesheet_date(&date.document_id) {
            Ok(()) => {
                let msg = format!(
                    "Deleted timesheet-date {} ({}) of timesheet {}",
                    date.id, date.date_range, id
                );
                hook(&event.model, &msg);
                if let Err(e) = store.write_log("del", TIMESHEET_DATE_UID, &msg) {
                    error(format!("Failed to write internal log: {}", e));
                }
                Ok(())
            }
            Err(e) => {
                let msg = format!("Error deleting timesheet-date {}: {}", date.document_id, e);
                error(&msg);
                if let Err(log_err) = store.write_log("del_failed", TIMESHEET_DATE_UID, &msg) {
                    error(format!("Failed to write internal log: {}", log_err));
                }

                Err(match e {
                    AppError::Storage(_) => e,
                    other => AppError::storage(other),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::lifecycle::event::Action;
    use crate::models::TIMESHEET_UID;
    use crate::models::relation::RelationRef;
    use crate::models::timesheet::{NewTimesheet, TimesheetData};
    use crate::utils::date::{format_date_range, week_number};
    use chrono::Datelike;

    fn create_event(relation: Option<RelationInput>) -> LifecycleEvent {
        LifecycleEvent::create(
            Action::BeforeCreate,
            TIMESHEET_UID,
            TimesheetData::new("ada", 40.0, relation),
        )
    }

    fn relation_of(event: &LifecycleEvent) -> Option<&RelationInput> {
        event.params.data.as_ref().and_then(|d| d.timesheet_date.as_ref())
    }

    #[test]
    fn raw_dates_create_a_published_date_record() {
        let mut store = MemoryStore::new();
        let mut event = create_event(Some(RelationInput::raw("2025-01-06", "2025-01-12")));

        TimesheetLifecycle
            .before_create(&mut event, &mut store)
            .unwrap();

        assert_eq!(store.dates.len(), 1);
        let date = &store.dates[0];
        assert_eq!(date.week, 2);
        assert_eq!(date.month, 1);
        assert_eq!(date.year, 2025);
        assert_eq!(date.date_range, "Jan 6 - Jan 12, 2025");
        assert!(date.is_published());

        let expected = RelationInput::RelationDirective(RelationDirective {
            connect: vec![RelationRef {
                id: date.id,
                document_id: date.document_id.clone(),
                is_temporary: false,
            }],
            disconnect: vec![],
            set: vec![],
        });
        assert_eq!(relation_of(&event), Some(&expected));
    }

    #[test]
    fn derived_fields_match_direct_computation() {
        let cases = [
            ("2024-02-26", "2024-03-03"),
            ("2025-06-30", "2025-07-06"),
            ("2025-12-29", "2025-12-31"),
            ("2025-05-05", "2025-05-05"),
        ];

        for (start, end) in cases {
            let mut store = MemoryStore::new();
            let mut event = create_event(Some(RelationInput::raw(start, end)));
            TimesheetLifecycle
                .before_create(&mut event, &mut store)
                .unwrap();

            let s = parse_date(start).unwrap();
            let e = parse_date(end).unwrap();
            let date = &store.dates[0];
            assert_eq!(date.week, week_number(s), "{start}");
            assert_eq!(date.month, s.month(), "{start}");
            assert_eq!(date.year, s.year(), "{start}");
            assert_eq!(date.date_range, format_date_range(s, e), "{start}");
        }
    }

    #[test]
    fn inverted_range_is_rejected_before_any_write() {
        let mut store = MemoryStore::new();
        let raw = RelationInput::raw("2025-01-12", "2025-01-06");
        let mut event = create_event(Some(raw.clone()));

        let err = TimesheetLifecycle
            .before_create(&mut event, &mut store)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.dates.is_empty());
        assert_eq!(relation_of(&event), Some(&raw));
    }

    #[test]
    fn missing_or_malformed_dates_are_rejected() {
        let inputs = [
            RelationInput::RawInput {
                start_date: None,
                end_date: Some("2025-01-12".into()),
            },
            RelationInput::RawInput {
                start_date: Some("2025-01-06".into()),
                end_date: None,
            },
            RelationInput::RawInput {
                start_date: Some("  ".into()),
                end_date: Some("2025-01-12".into()),
            },
            RelationInput::raw("not-a-date", "2025-01-12"),
        ];

        for input in inputs {
            let mut store = MemoryStore::new();
            let mut event = create_event(Some(input));
            let err = TimesheetLifecycle
                .before_create(&mut event, &mut store)
                .unwrap_err();
            assert!(err.is_validation());
            assert!(store.dates.is_empty());
        }
    }

    #[test]
    fn years_beyond_four_digits_are_a_validation_error() {
        let raw = RelationInput::raw("9999-12-27", "+10000-01-02");
        let mut store = MemoryStore::new();
        let mut event = create_event(Some(raw.clone()));

        let err = TimesheetLifecycle
            .before_create(&mut event, &mut store)
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m.contains("endDate")));
        assert!(store.dates.is_empty());
        assert_eq!(relation_of(&event), Some(&raw));
    }

    #[test]
    fn resolved_payloads_are_left_untouched() {
        let inputs = [
            None,
            Some(RelationInput::AlreadyResolvedId(4)),
            Some(RelationInput::RelationDirective(RelationDirective::set(vec![
                RelationRef {
                    id: 4,
                    document_id: "date-4".into(),
                    is_temporary: false,
                },
            ]))),
        ];

        for input in inputs {
            let mut store = MemoryStore::new();
            let mut event = create_event(input.clone());
            TimesheetLifecycle
                .before_create(&mut event, &mut store)
                .unwrap();

            assert!(store.dates.is_empty());
            assert_eq!(relation_of(&event), input.as_ref());
        }
    }

    #[test]
    fn store_failure_leaves_payload_raw() {
        let mut store = MemoryStore::new();
        store.fail_date_create = true;
        let raw = RelationInput::raw("2025-01-06", "2025-01-12");
        let mut event = create_event(Some(raw.clone()));

        let err = TimesheetLifecycle
            .before_create(&mut event, &mut store)
            .unwrap_err();

        assert!(err.is_storage());
        assert_eq!(relation_of(&event), Some(&raw));
    }

    fn seed(store: &mut MemoryStore) -> i64 {
        let mut event = create_event(Some(RelationInput::raw("2025-01-06", "2025-01-12")));
        TimesheetLifecycle.before_create(&mut event, store).unwrap();
        let date_id = relation_of(&event).and_then(|r| r.resolved_id()).unwrap();

        store
            .insert_timesheet(&NewTimesheet {
                employee: "ada".into(),
                hours: 40.0,
                notes: None,
                timesheet_date_id: date_id,
            })
            .unwrap()
            .id
    }

    fn delete_event(id: Option<i64>) -> LifecycleEvent {
        let mut event = LifecycleEvent::delete(Action::BeforeDelete, TIMESHEET_UID, 0);
        event.params.filters.id = id;
        event
    }

    #[test]
    fn delete_removes_exactly_the_related_date() {
        let mut store = MemoryStore::new();
        let id = seed(&mut store);
        let document_id = store.dates[0].document_id.clone();

        TimesheetLifecycle
            .before_delete(&mut delete_event(Some(id)), &mut store)
            .unwrap();

        assert_eq!(store.date_deletes, vec![document_id]);
        assert!(store.dates.is_empty());
    }

    #[test]
    fn delete_without_related_date_is_a_noop() {
        let mut store = MemoryStore::new();
        let id = seed(&mut store);
        let document_id = store.dates[0].document_id.clone();
        store.delete_timesheet_date(&document_id).unwrap();
        store.date_deletes.clear();

        for filter in [None, Some(id), Some(id + 1)] {
            TimesheetLifecycle
                .before_delete(&mut delete_event(filter), &mut store)
                .unwrap();
        }

        assert!(store.date_deletes.is_empty());
    }

    #[test]
    fn delete_failure_survives_a_failing_log() {
        let mut store = MemoryStore::new();
        let id = seed(&mut store);
        store.fail_date_delete = true;
        store.fail_write_log = true;

        let err = TimesheetLifecycle
            .before_delete(&mut delete_event(Some(id)), &mut store)
            .unwrap_err();

        assert!(matches!(err, AppError::Storage(ref m) if m.contains("timesheet-date store")));
    }

    #[test]
    fn delete_failure_is_reraised_as_storage_error() {
        let mut store = MemoryStore::new();
        let id = seed(&mut store);
        store.fail_date_delete = true;

        let err = TimesheetLifecycle
            .before_delete(&mut delete_event(Some(id)), &mut store)
            .unwrap_err();

        assert!(err.is_storage());
        assert_eq!(store.dates.len(), 1);
        assert_eq!(store.log.last().map(|l| l.0.as_str()), Some("del_failed"));
    }
}
