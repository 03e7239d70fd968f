use super::{EngineEvent, EventHandler};
use verdant_core::Chromosome;
use std::sync::{Arc, Mutex};

type Subscriber<C> = Arc<Mutex<dyn EventHandler<C>>>;

/// Fans engine events out to the subscribed handlers. Dispatch is
/// synchronous on the engine thread, so handlers observe events in exactly
/// the order the engine produced them; a handler that panics aborts
/// evolution.
#[derive(Clone)]
pub struct EventBus<C: Chromosome> {
    handlers: Vec<Subscriber<C>>,
}

impl<C: Chromosome> EventBus<C> {
    pub fn new(handlers: Vec<Subscriber<C>>) -> Self {
        EventBus { handlers }
    }

    pub fn has_handlers(&self) -> bool {
        !self.handlers.is_empty()
    }

    pub fn emit(&self, event: EngineEvent<C>) {
        for handler in self.handlers.iter() {
            handler.lock().unwrap().on_event(&event);
        }
    }
}
