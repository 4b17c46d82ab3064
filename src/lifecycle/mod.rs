//! Lifecycle hooks for timesheet documents.
//!
//! A [`LifecycleRegistry`] is built once at startup ([`bootstrap`]) and passed
//! to the document service; subscribers receive the store explicitly.

pub mod date_record;
pub mod event;
pub mod registry;
pub mod timesheet;

pub use event::{Action, EventParams, Filters, LifecycleEvent};
pub use registry::{LifecycleRegistry, Subscriber};

use crate::models::TIMESHEET_UID;
use timesheet::TimesheetLifecycle;

/// Registry with the timesheet hooks subscribed.
pub fn bootstrap() -> LifecycleRegistry {
    let mut registry = LifecycleRegistry::new();
    registry.subscribe(&[TIMESHEET_UID], TimesheetLifecycle);
    registry
}
