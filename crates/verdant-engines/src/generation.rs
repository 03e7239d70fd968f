use crate::Context;
use verdant_core::{Chromosome, MetricSet, Optimize, Phenotype, Population, Score, Scored};
use std::fmt::Debug;
use std::time::Duration;

/// An immutable snapshot of the engine after one completed generation: the
/// population, the best individual and score so far, the generation index,
/// and the run metrics. This is what `next()` yields, what limits inspect,
/// and what `evolve()` finally returns.
#[derive(Clone)]
pub struct Generation<C>
where
    C: Chromosome,
{
    population: Population<C>,
    best: Phenotype<C>,
    index: usize,
    metrics: MetricSet,
    score: Score,
    optimize: Optimize,
    steady_generations: usize,
}

impl<C> Generation<C>
where
    C: Chromosome,
{
    /// The best score seen so far in the run.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The best individual seen so far in the run.
    pub fn best(&self) -> &Phenotype<C> {
        &self.best
    }

    /// The number of completed generations.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn population(&self) -> &Population<C> {
        &self.population
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    pub fn optimize(&self) -> &Optimize {
        &self.optimize
    }

    pub fn steady_generations(&self) -> usize {
        self.steady_generations
    }

    /// Total time spent in generations so far.
    pub fn time(&self) -> Duration {
        self.metrics()
            .get(verdant_core::metric_names::GENERATION_TIME)
            .map(|metric| metric.time().sum())
            .unwrap_or_default()
    }

    pub fn seconds(&self) -> f64 {
        self.time().as_secs_f64()
    }
}

impl<C: Chromosome> Scored for Generation<C> {
    fn score(&self) -> Option<&Score> {
        Some(&self.score)
    }
}

impl<C: Chromosome> From<&Context<C>> for Generation<C> {
    fn from(context: &Context<C>) -> Self {
        Generation {
            population: context.population.clone(),
            best: context
                .best
                .clone()
                .expect("a completed generation always has a best individual"),
            index: context.index,
            metrics: context.metrics.clone(),
            score: context
                .score
                .expect("a completed generation always has a best score"),
            optimize: context.optimize,
            steady_generations: context.steady_generations,
        }
    }
}

impl<C: Chromosome + Debug> Debug for Generation<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generation")
            .field("index", &self.index)
            .field("score", &self.score)
            .field("size", &self.population.len())
            .field("steady_generations", &self.steady_generations)
            .field("time", &self.time())
            .finish()
    }
}
