use crate::steps::EngineStep;
use crate::{Context, EngineEvent, EventBus, Result};
use verdant_core::{Alter, Chromosome, Population, Select, metric_names};
use verdant_error::ensure;
use std::sync::Arc;
use std::time::Duration;

/// The reproduction phase of a generation: select the parents of the next
/// generation, select the survivors, run the alterers over the parents to
/// produce offspring, and merge survivors and offspring back into a
/// population of the configured size.
pub struct RecombineStep<C: Chromosome> {
    pub(crate) survivor_selector: Arc<dyn Select<C>>,
    pub(crate) offspring_selector: Arc<dyn Select<C>>,
    pub(crate) alters: Vec<Arc<dyn Alter<C>>>,
    pub(crate) survivor_count: usize,
    pub(crate) offspring_count: usize,
}

impl<C: Chromosome> RecombineStep<C> {
    /// Selection with the engine-side contract applied: the source must be
    /// non-empty and the selector must return exactly `count` individuals.
    fn select(
        &self,
        selector: &Arc<dyn Select<C>>,
        context: &Context<C>,
        count: usize,
    ) -> Result<Population<C>> {
        ensure!(
            !context.population.is_empty(),
            Selection: "{} invoked on an empty population", selector.name()
        );

        let selected = selector.select(&context.population, &context.optimize, count)?;

        ensure!(
            selected.len() == count,
            Selection: "{} returned {} individuals, expected {}", selector.name(), selected.len(), count
        );

        Ok(selected)
    }

    #[inline]
    fn apply_alterations(
        &self,
        generation: usize,
        offspring: &mut Population<C>,
        context: &mut Context<C>,
    ) -> Result<()> {
        for alter in self.alters.iter() {
            let timer = std::time::Instant::now();
            let count = alter.alter(offspring, generation)?;

            context.metrics.upsert_time(alter.name(), timer.elapsed());
            context.metrics.upsert_value(alter.name(), count as f32);
        }

        Ok(())
    }
}

impl<C: Chromosome> EngineStep<C> for RecombineStep<C> {
    fn name(&self) -> &'static str {
        "recombination"
    }

    #[inline]
    fn execute(&mut self, context: &mut Context<C>, bus: &EventBus<C>) -> Result<()> {
        let generation = context.index;

        bus.emit(EngineEvent::ParentSelectionStart);
        let timer = std::time::Instant::now();
        let mut offspring = self.select(&self.offspring_selector, context, self.offspring_count)?;
        let parent_elapsed = timer.elapsed();
        context
            .metrics
            .upsert_time(metric_names::PARENT_SELECTION, parent_elapsed);
        bus.emit(EngineEvent::ParentSelectionEnd(parent_elapsed));

        bus.emit(EngineEvent::SurvivorSelectionStart);
        let timer = std::time::Instant::now();
        let survivors = self.select(&self.survivor_selector, context, self.survivor_count)?;
        let survivor_elapsed = timer.elapsed();
        context
            .metrics
            .upsert_time(metric_names::SURVIVOR_SELECTION, survivor_elapsed);
        bus.emit(EngineEvent::SurvivorSelectionEnd(survivor_elapsed));

        bus.emit(EngineEvent::AlterationStart);
        let timer = std::time::Instant::now();
        self.apply_alterations(generation, &mut offspring, context)?;
        let alter_elapsed: Duration = timer.elapsed();
        context
            .metrics
            .upsert_time(metric_names::ALTERATION, alter_elapsed);
        bus.emit(EngineEvent::AlterationEnd(alter_elapsed));

        context.population.clear();
        context.population.extend(survivors);
        context.population.extend(offspring);

        Ok(())
    }
}
