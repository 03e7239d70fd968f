use super::EngineEvent;
use verdant_core::Chromosome;

/// An observer of engine life-cycle events. Handlers receive immutable
/// snapshots and must not try to steer the engine; a handler that panics
/// aborts evolution like an evaluation failure would.
pub trait EventHandler<C: Chromosome> {
    fn on_event(&mut self, event: &EngineEvent<C>);
}

/// Closures are handlers.
impl<C: Chromosome, F> EventHandler<C> for F
where
    F: FnMut(&EngineEvent<C>),
{
    fn on_event(&mut self, event: &EngineEvent<C>) {
        self(event)
    }
}
