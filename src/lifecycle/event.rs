use crate::models::timesheet::TimesheetData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    BeforeCreate,
    AfterCreate,
    BeforeDelete,
    AfterDelete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::BeforeCreate => "beforeCreate",
            Action::AfterCreate => "afterCreate",
            Action::BeforeDelete => "beforeDelete",
            Action::AfterDelete => "afterDelete",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventParams {
    /// Create payload, mutated in place by `beforeCreate` hooks.
    pub data: Option<TimesheetData>,
    pub filters: Filters,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleEvent {
    pub action: Action,
    pub model: String,
    pub params: EventParams,
}

impl LifecycleEvent {
    pub fn new(action: Action, model: &str, params: EventParams) -> Self {
        Self {
            action,
            model: model.to_string(),
            params,
        }
    }

    pub fn create(action: Action, model: &str, data: TimesheetData) -> Self {
        Self::new(
            action,
            model,
            EventParams {
                data: Some(data),
                ..Default::default()
            },
        )
    }

    pub fn delete(action: Action, model: &str, id: i64) -> Self {
        Self::new(
            action,
            model,
            EventParams {
                filters: Filters { id: Some(id) },
                ..Default::default()
            },
        )
    }
}
