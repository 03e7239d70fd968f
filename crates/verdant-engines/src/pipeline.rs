use crate::{Context, EventBus, Result, steps::EngineStep};
use verdant_core::Chromosome;

/// A [Pipeline] is the fixed sequence of steps executed during each
/// generation. The pipeline runs the steps in order, timing each one into
/// the run metrics; a failing step aborts the generation.
pub(crate) struct Pipeline<C>
where
    C: Chromosome,
{
    steps: Vec<Box<dyn EngineStep<C>>>,
}

impl<C> Pipeline<C>
where
    C: Chromosome,
{
    pub fn add_step(&mut self, step: Box<dyn EngineStep<C>>) {
        self.steps.push(step);
    }

    #[inline]
    pub fn run(&mut self, context: &mut Context<C>, bus: &EventBus<C>) -> Result<()> {
        for step in self.steps.iter_mut() {
            let timer = std::time::Instant::now();
            step.execute(context, bus)?;
            context.metrics.upsert_time(step.name(), timer.elapsed());
        }

        Ok(())
    }
}

impl<C: Chromosome> Default for Pipeline<C> {
    fn default() -> Self {
        Pipeline { steps: Vec::new() }
    }
}

impl<C: Chromosome> From<Vec<Box<dyn EngineStep<C>>>> for Pipeline<C> {
    fn from(steps: Vec<Box<dyn EngineStep<C>>>) -> Self {
        Pipeline { steps }
    }
}
