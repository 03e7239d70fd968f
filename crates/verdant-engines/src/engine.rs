use crate::builder::GeneticEngineBuilder;
use crate::context::Context;
use crate::interceptor::Interceptor;
use crate::iter::EngineIterator;
use crate::limit::Limit;
use crate::pipeline::Pipeline;
use crate::{EngineEvent, EventBus, Generation, Result};
use verdant_core::{Chromosome, Phenotype, Valid, metric_names};
use verdant_error::verdant_err;
use std::sync::Arc;

/// The life-cycle of an engine. An engine starts `Idle`, enters `Running`
/// at the first generation, and is `Terminated` once `evolve()` finished or
/// failed. A terminated engine is consumed and refuses further work.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    Terminated,
}

/// The [GeneticEngine] drives a population generation by generation toward
/// higher fitness under the configured genetic operators. It owns the
/// evolution state, the generation pipeline, the termination limits, and
/// the event bus feeding the listeners.
///
/// # Examples
/// ``` no_run
/// use verdant_engines::*;
///
/// let mut engine = GeneticEngine::builder()
///     .genotype_factory(GenotypeFactory::single(BitFactory::new(20, 0.5).unwrap()))
///     .fitness_fn(|genotype: &Genotype<BitChromosome>| {
///         genotype[0].iter().filter(|gene| *gene.allele()).count() as f32
///     })
///     .population_size(100)
///     .alter(alters![
///         UniformCrossover::new(0.6),
///         BitFlipMutator::new(0.5)
///     ])
///     .limit(Limit::score(20.0))
///     .limit(Limit::generations(500))
///     .build();
///
/// let result = engine.evolve().unwrap();
/// println!("best fitness {}", result.score());
/// ```
///
/// # Type Parameters
/// - `C`: The type of chromosome used in the genotype.
pub struct GeneticEngine<C>
where
    C: Chromosome,
{
    pub(crate) context: Context<C>,
    pub(crate) pipeline: Pipeline<C>,
    pub(crate) bus: EventBus<C>,
    pub(crate) limits: Vec<Limit<C>>,
    pub(crate) interceptor: Arc<dyn Interceptor<C>>,
    pub(crate) population_size: usize,
    pub(crate) state: EngineState,
}

impl<C> GeneticEngine<C>
where
    C: Chromosome + 'static,
{
    /// Creates a new builder for configuring and constructing an engine.
    pub fn builder() -> GeneticEngineBuilder<C> {
        GeneticEngineBuilder::default()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Advances the engine by exactly one generation: before-hook,
    /// initialize-if-empty, evaluate, select parents, select survivors,
    /// alter, merge, evaluate, after-hook, then advance the best-so-far
    /// bookkeeping and the generation counter. Limits are not consulted
    /// here - that is `evolve()`'s job.
    pub fn next(&mut self) -> Result<Generation<C>> {
        if self.state == EngineState::Terminated {
            return Err(verdant_err!(Engine: "engine is terminated and cannot advance"));
        }

        if self.state == EngineState::Idle {
            self.state = EngineState::Running;
            self.bus.emit(EngineEvent::Start);
        }

        self.bus.emit(EngineEvent::GenerationStart(self.context.index));

        let timer = std::time::Instant::now();

        self.interceptor
            .before(self.context.index, &mut self.context.population);

        if self.context.population.is_empty() {
            self.initialize().inspect_err(|_| {
                self.state = EngineState::Terminated;
            })?;
        }

        if let Err(e) = self.pipeline.run(&mut self.context, &self.bus) {
            self.state = EngineState::Terminated;
            return Err(e);
        }

        self.interceptor
            .after(self.context.index, &mut self.context.population);

        if self.context.try_advance_one() {
            self.bus.emit(EngineEvent::Improvement {
                generation: self.context.index,
                score: *self.context.score().unwrap(),
            });
        }

        self.context.index += 1;
        self.context
            .metrics
            .upsert_time(metric_names::GENERATION_TIME, timer.elapsed());
        if let Some(score) = self.context.score() {
            self.context
                .metrics
                .upsert_value(metric_names::SCORE, score.as_f32());
        }
        self.context.metrics.upsert_value(
            metric_names::STEADY_GENERATIONS,
            self.context.steady_generations as f32,
        );

        Ok(Generation::from(&self.context))
    }

    /// Runs the engine until any configured limit reports termination,
    /// firing the evolution and generation hooks along the way, and returns
    /// the final generation. The engine is consumed: a failed or finished
    /// run leaves it `Terminated`.
    pub fn evolve(&mut self) -> Result<Generation<C>> {
        if self.state == EngineState::Terminated {
            return Err(verdant_err!(Engine: "engine is terminated and cannot evolve"));
        }

        tracing::debug!(
            population_size = self.population_size,
            limits = self.limits.len(),
            "evolution started"
        );

        loop {
            let generation = self.next()?;

            self.bus.emit(EngineEvent::GenerationEnd {
                generation: generation.index(),
                score: Some(generation.score()),
            });

            let reached = self
                .limits
                .iter_mut()
                .any(|limit| limit.reached(&generation));

            if reached {
                self.state = EngineState::Terminated;
                self.bus.emit(EngineEvent::Stop {
                    generation: generation.index(),
                    score: Some(generation.score()),
                    best: Some(generation.best().clone()),
                    metrics: generation.metrics().clone(),
                });

                tracing::debug!(
                    generations = generation.index(),
                    score = generation.score().as_f32(),
                    "evolution ended"
                );

                return Ok(generation);
            }
        }
    }

    /// Runs the engine until the given predicate over the yielded
    /// generation reports true. A programmatic alternative to configuring
    /// limits.
    pub fn run<F>(&mut self, stop: F) -> Result<Generation<C>>
    where
        F: Fn(&Generation<C>) -> bool,
    {
        loop {
            let generation = self.next()?;

            self.bus.emit(EngineEvent::GenerationEnd {
                generation: generation.index(),
                score: Some(generation.score()),
            });

            if stop(&generation) {
                self.state = EngineState::Terminated;
                self.bus.emit(EngineEvent::Stop {
                    generation: generation.index(),
                    score: Some(generation.score()),
                    best: Some(generation.best().clone()),
                    metrics: generation.metrics().clone(),
                });

                return Ok(generation);
            }
        }
    }

    /// Converts the engine into an iterator over generations, for manual
    /// control of the evolutionary process. The iterator consumes the
    /// engine.
    pub fn iter(self) -> EngineIterator<C> {
        EngineIterator { engine: self }
    }

    fn initialize(&mut self) -> Result<()> {
        self.bus.emit(EngineEvent::InitializationStart);

        let timer = std::time::Instant::now();

        for _ in 0..self.population_size {
            let genotype = self.context.problem.encode();

            if !genotype.is_valid() {
                return Err(verdant_err!(
                    Engine: "genotype factory produced invalid genetic material"
                ));
            }

            self.context
                .population
                .push(Phenotype::from((genotype, self.context.index)));
        }

        let elapsed = timer.elapsed();
        self.context
            .metrics
            .upsert_time(metric_names::INITIALIZATION, elapsed);
        self.bus.emit(EngineEvent::InitializationEnd(elapsed));

        Ok(())
    }
}
