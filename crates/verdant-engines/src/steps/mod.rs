pub mod evaluate;
pub mod recombine;

pub use evaluate::*;
pub use recombine::*;

use crate::{Context, EventBus, Result};
use verdant_core::Chromosome;

/// One phase of the generation pipeline. Steps mutate the context's
/// population, record their metrics, and publish their bracket events on
/// the bus.
pub(crate) trait EngineStep<C: Chromosome> {
    fn name(&self) -> &'static str;

    fn execute(&mut self, context: &mut Context<C>, bus: &EventBus<C>) -> Result<()>;
}
