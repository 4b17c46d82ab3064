use super::event::{Action, LifecycleEvent};
use crate::db::store::DocumentStore;
use crate::errors::AppResult;

/// Callbacks for one or more models. Every hook defaults to a no-op.
pub trait Subscriber {
    fn before_create(
        &self,
        _event: &mut LifecycleEvent,
        _store: &mut dyn DocumentStore,
    ) -> AppResult<()> {
        Ok(())
    }

    fn after_create(
        &self,
        _event: &mut LifecycleEvent,
        _store: &mut dyn DocumentStore,
    ) -> AppResult<()> {
        Ok(())
    }

    fn before_delete(
        &self,
        _event: &mut LifecycleEvent,
        _store: &mut dyn DocumentStore,
    ) -> AppResult<()> {
        Ok(())
    }

    fn after_delete(
        &self,
        _event: &mut LifecycleEvent,
        _store: &mut dyn DocumentStore,
    ) -> AppResult<()> {
        Ok(())
    }
}

struct Subscription {
    models: Vec<String>,
    subscriber: Box<dyn Subscriber>,
}

#[derive(Default)]
pub struct LifecycleRegistry {
    subscriptions: Vec<Subscription>,
}

impl LifecycleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<S: Subscriber + 'static>(&mut self, models: &[&str], subscriber: S) {
        self.subscriptions.push(Subscription {
            models: models.iter().map(|m| m.to_string()).collect(),
            subscriber: Box::new(subscriber),
        });
    }

    /// Dispatch `event` to every subscriber of its model, in subscription
    /// order. The first error aborts the dispatch and is returned.
    pub fn run(&self, event: &mut LifecycleEvent, store: &mut dyn DocumentStore) -> AppResult<()> {
        for sub in &self.subscriptions {
            if !sub.models.iter().any(|m| *m == event.model) {
                continue;
            }

            let s = sub.subscriber.as_ref();
            match event.action {
                Action::BeforeCreate => s.before_create(event, store)?,
                Action::AfterCreate => s.after_create(event, store)?,
                Action::BeforeDelete => s.before_delete(event, store)?,
                Action::AfterDelete => s.after_delete(event, store)?,
            }
        }
        Ok(())
    }
}
