use crate::steps::EngineStep;
use crate::{Context, EngineEvent, EventBus, Result};
use verdant_core::{Chromosome, Evaluator, Problem, metric_names};
use std::sync::Arc;

/// Scores the dirty part of the population through the configured
/// [Evaluator]. Runs twice per generation: once over the incoming
/// population, once over the merged population of survivors and offspring.
pub struct EvaluateStep<C: Chromosome> {
    pub(crate) evaluator: Arc<dyn Evaluator<C>>,
    pub(crate) problem: Arc<dyn Problem<C>>,
}

impl<C: Chromosome> EngineStep<C> for EvaluateStep<C> {
    fn name(&self) -> &'static str {
        metric_names::EVALUATION
    }

    #[inline]
    fn execute(&mut self, context: &mut Context<C>, bus: &EventBus<C>) -> Result<()> {
        bus.emit(EngineEvent::EvaluationStart(context.index));

        let timer = std::time::Instant::now();
        let count = self
            .evaluator
            .eval(&mut context.population, Arc::clone(&self.problem), false)?;
        let elapsed = timer.elapsed();

        if count > 0 {
            context
                .metrics
                .upsert_value(metric_names::EVALUATION_COUNT, count as f32);
        }

        bus.emit(EngineEvent::EvaluationEnd { count, elapsed });

        Ok(())
    }
}
