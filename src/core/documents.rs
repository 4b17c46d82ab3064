//! Lifecycle-aware document API for timesheets.
//!
//! `create` and `delete` run the registered hooks around the store's own
//! write, the same way a content framework wraps its repository calls.

use crate::db::store::{DocumentStore, TimesheetFilter};
use crate::errors::{AppError, AppResult};
use crate::lifecycle::{Action, LifecycleEvent, LifecycleRegistry};
use crate::models::TIMESHEET_UID;
use crate::models::relation::RelationInput;
use crate::models::timesheet::{NewTimesheet, Timesheet, TimesheetData};
use crate::ui::messages::{error, warning};

pub struct Documents<'a> {
    store: &'a mut dyn DocumentStore,
    registry: &'a LifecycleRegistry,
}

impl<'a> Documents<'a> {
    pub fn new(store: &'a mut dyn DocumentStore, registry: &'a LifecycleRegistry) -> Self {
        Self { store, registry }
    }

    /// Create a timesheet.
    ///
    /// `beforeCreate` must leave the relation resolved; the date record is
    /// persisted before the timesheet. If the timesheet insert fails, a date
    /// record created by the hook is deleted again.
    pub fn create(&mut self, data: TimesheetData) -> AppResult<Timesheet> {
        let was_raw = data.timesheet_date.as_ref().is_some_and(RelationInput::is_raw);

        let mut event = LifecycleEvent::create(Action::BeforeCreate, TIMESHEET_UID, data);
        self.registry.run(&mut event, &mut *self.store)?;

        let Some(data) = event.params.data.take() else {
            return Err(AppError::Other("beforeCreate dropped the payload".into()));
        };

        let Some(date_id) = data
            .timesheet_date
            .as_ref()
            .and_then(RelationInput::resolved_id)
        else {
            return Err(AppError::validation(
                "timesheet_date relation is required",
            ));
        };

        let new = NewTimesheet {
            employee: data.employee.clone(),
            hours: data.hours,
            notes: data.notes.clone(),
            timesheet_date_id: date_id,
        };

        let created = match self.store.insert_timesheet(&new) {
            Ok(t) => t,
            Err(e) => {
                if was_raw {
                    self.compensate(&data);
                }
                return Err(e);
            }
        };

        let mut after = LifecycleEvent::create(Action::AfterCreate, TIMESHEET_UID, data);
        after.params.filters.id = Some(created.id);
        self.registry.run(&mut after, &mut *self.store)?;

        Ok(created)
    }

    /// Undo the date record a failed create left behind.
    fn compensate(&mut self, data: &TimesheetData) {
        let Some(RelationInput::RelationDirective(directive)) = &data.timesheet_date else {
            return;
        };
        let Some(target) = directive.target() else {
            return;
        };

        warning(format!(
            "Timesheet insert failed, removing timesheet-date {}",
            target.id
        ));
        if let Err(e) = self.store.delete_timesheet_date(&target.document_id) {
            error(format!(
                "Could not remove orphan timesheet-date {}: {}",
                target.document_id, e
            ));
        }
    }

    /// Delete a timesheet; `beforeDelete` cascades to its date record.
    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        let mut event = LifecycleEvent::delete(Action::BeforeDelete, TIMESHEET_UID, id);
        self.registry.run(&mut event, &mut *self.store)?;

        if !self.store.delete_timesheet(id)? {
            return Err(AppError::NotFound(id));
        }

        let mut after = LifecycleEvent::delete(Action::AfterDelete, TIMESHEET_UID, id);
        self.registry.run(&mut after, &mut *self.store)?;
        Ok(())
    }

    pub fn find_one(&mut self, id: i64) -> AppResult<Option<Timesheet>> {
        self.store.find_timesheet(id, true)
    }

    pub fn find_many(&mut self, filter: &TimesheetFilter) -> AppResult<Vec<Timesheet>> {
        self.store.list_timesheets(filter)
    }
}
