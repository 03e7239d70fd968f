use verdant_core::{Chromosome, MetricSet, Optimize, Phenotype, Population, Problem, Score};
use std::sync::Arc;

/// The state of the engine at any moment of a run:
/// * the current population,
/// * the number of completed generations,
/// * the best individual seen so far and its score,
/// * the number of consecutive generations without strict improvement,
/// * cumulative run metrics.
///
/// The context owns its population exclusively; epochs hand out clones.
pub struct Context<C: Chromosome> {
    pub(crate) population: Population<C>,
    pub(crate) best: Option<Phenotype<C>>,
    pub(crate) index: usize,
    pub(crate) metrics: MetricSet,
    pub(crate) score: Option<Score>,
    pub(crate) optimize: Optimize,
    pub(crate) problem: Arc<dyn Problem<C>>,
    pub(crate) steady_generations: usize,
}

impl<C: Chromosome> Context<C> {
    pub fn population(&self) -> &Population<C> {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut Population<C> {
        &mut self.population
    }

    /// The number of completed generations.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn best(&self) -> Option<&Phenotype<C>> {
        self.best.as_ref()
    }

    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    pub fn optimize(&self) -> &Optimize {
        &self.optimize
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    pub fn steady_generations(&self) -> usize {
        self.steady_generations
    }

    /// Fold the freshly evaluated population into the best-so-far
    /// bookkeeping. Returns true when the best score strictly improved.
    pub(crate) fn try_advance_one(&mut self) -> bool {
        let candidate = match self.population.best(&self.optimize) {
            Some(phenotype) => phenotype,
            None => return false,
        };

        let candidate_score = match candidate.score() {
            Some(score) => *score,
            None => return false,
        };

        let improved = match &self.score {
            None => true,
            Some(current) => self.optimize.is_better(&candidate_score, current),
        };

        if improved {
            self.best = Some(candidate.clone());
            self.score = Some(candidate_score);
            self.steady_generations = 0;
        } else {
            self.steady_generations += 1;
        }

        improved
    }
}
