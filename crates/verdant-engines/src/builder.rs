use crate::context::Context;
use crate::engine::{EngineState, GeneticEngine};
use crate::interceptor::{IdentityInterceptor, Interceptor};
use crate::limit::Limit;
use crate::pipeline::Pipeline;
use crate::steps::{EngineStep, EvaluateStep, RecombineStep};
use crate::{EventBus, EventHandler, Result};
use verdant_alters::{RandomMutator, UniformCrossover};
use verdant_core::{
    Alter, Chromosome, Crossover, EngineProblem, Evaluator, FitnessEvaluator, Genotype,
    GenotypeFactory, MetricSet, Mutate, Optimize, Population, Problem, Select, random_provider,
};
use verdant_error::{ensure, verdant_err};
use verdant_selectors::TournamentSelector;
use std::sync::{Arc, Mutex};

/// Fluent configuration for a [GeneticEngine]. At a minimum a genotype
/// factory and a fitness function (or a full [Problem]) must be set;
/// everything else has defaults:
///
/// * population size 50, survival rate 0.4
/// * tournament selection (size 3) for both parents and survivors
/// * uniform crossover (0.5) plus random mutation (0.1)
/// * maximizing, no limits, no listeners, serial evaluation
///
/// All configuration errors are reported when the engine is built:
/// `try_build` returns them, `build` panics on them.
pub struct GeneticEngineBuilder<C>
where
    C: Chromosome,
{
    population_size: usize,
    survival_rate: f32,
    optimize: Optimize,
    survivor_selector: Arc<dyn Select<C>>,
    offspring_selector: Arc<dyn Select<C>>,
    alterers: Vec<Arc<dyn Alter<C>>>,
    limits: Vec<Limit<C>>,
    handlers: Vec<Arc<Mutex<dyn EventHandler<C>>>>,
    evaluator: Arc<dyn Evaluator<C>>,
    interceptor: Arc<dyn Interceptor<C>>,
    factory: Option<GenotypeFactory<C>>,
    fitness_fn: Option<Arc<dyn Fn(&Genotype<C>) -> f32 + Send + Sync>>,
    problem: Option<Arc<dyn Problem<C>>>,
    seed: Option<u64>,
}

impl<C> GeneticEngineBuilder<C>
where
    C: Chromosome + 'static,
{
    /// The invariant population size. Must be greater than zero.
    pub fn population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// The fraction of the population carried over as survivors each
    /// generation; the complement is bred from selected parents. Must lie
    /// in `[0, 1]`.
    pub fn survival_rate(mut self, survival_rate: f32) -> Self {
        self.survival_rate = survival_rate;
        self
    }

    pub fn maximizing(mut self) -> Self {
        self.optimize = Optimize::Maximize;
        self
    }

    pub fn minimizing(mut self) -> Self {
        self.optimize = Optimize::Minimize;
        self
    }

    pub fn survivor_selector<S: Select<C> + 'static>(mut self, selector: S) -> Self {
        self.survivor_selector = Arc::new(selector);
        self
    }

    pub fn offspring_selector<S: Select<C> + 'static>(mut self, selector: S) -> Self {
        self.offspring_selector = Arc::new(selector);
        self
    }

    /// The alterers applied - in the given order - to the offspring pool of
    /// every generation. Use the `alters![...]` macro to build the list.
    pub fn alter(mut self, alterers: Vec<Box<dyn Alter<C>>>) -> Self {
        self.alterers = alterers.into_iter().map(Arc::from).collect();
        self
    }

    /// Adds a termination limit; evolution stops when any limit is reached.
    pub fn limit(mut self, limit: Limit<C>) -> Self {
        self.limits.push(limit);
        self
    }

    /// Subscribe to engine events with the given event handler.
    pub fn subscribe<H>(mut self, handler: H) -> Self
    where
        H: EventHandler<C> + 'static,
    {
        self.handlers.push(Arc::new(Mutex::new(handler)));
        self
    }

    pub fn evaluator<E: Evaluator<C> + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Arc::new(evaluator);
        self
    }

    pub fn interceptor<I: Interceptor<C> + 'static>(mut self, interceptor: I) -> Self {
        self.interceptor = Arc::new(interceptor);
        self
    }

    /// The factory producing initial genetic material.
    pub fn genotype_factory(mut self, factory: GenotypeFactory<C>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// The fitness function: an opaque pure function from genotype to a
    /// finite number.
    pub fn fitness_fn<F>(mut self, fitness_fn: F) -> Self
    where
        F: Fn(&Genotype<C>) -> f32 + Send + Sync + 'static,
    {
        self.fitness_fn = Some(Arc::new(fitness_fn));
        self
    }

    /// Supply a complete [Problem] instead of a factory plus fitness
    /// function.
    pub fn problem<P: Problem<C> + 'static>(mut self, problem: P) -> Self {
        self.problem = Some(Arc::new(problem));
        self
    }

    /// Seed the process random source so the run is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine, panicking on configuration errors.
    pub fn build(self) -> GeneticEngine<C> {
        match self.try_build() {
            Ok(engine) => engine,
            Err(e) => panic!("{e}"),
        }
    }

    /// Build the engine, reporting configuration errors.
    pub fn try_build(mut self) -> Result<GeneticEngine<C>> {
        ensure!(
            self.population_size > 0,
            InvalidConfig: "population size must be > 0"
        );
        ensure!(
            (0.0..=1.0).contains(&self.survival_rate),
            InvalidConfig: "survival rate must be in [0, 1], got {}", self.survival_rate
        );

        let problem = self.build_problem()?;
        let alterers = self.build_alterers()?;

        if let Some(seed) = self.seed {
            random_provider::set_seed(seed);
        }

        let survivor_count = (self.population_size as f32 * self.survival_rate).round() as usize;
        let offspring_count = self.population_size - survivor_count;

        let mut pipeline = Pipeline::<C>::default();
        pipeline.add_step(Box::new(EvaluateStep {
            evaluator: Arc::clone(&self.evaluator),
            problem: Arc::clone(&problem),
        }) as Box<dyn EngineStep<C>>);
        pipeline.add_step(Box::new(RecombineStep {
            survivor_selector: Arc::clone(&self.survivor_selector),
            offspring_selector: Arc::clone(&self.offspring_selector),
            alters: alterers,
            survivor_count,
            offspring_count,
        }));
        pipeline.add_step(Box::new(EvaluateStep {
            evaluator: Arc::clone(&self.evaluator),
            problem: Arc::clone(&problem),
        }));

        let context = Context {
            population: Population::default(),
            best: None,
            index: 0,
            metrics: MetricSet::new(),
            score: None,
            optimize: self.optimize,
            problem,
            steady_generations: 0,
        };

        tracing::debug!(
            population_size = self.population_size,
            survivor_count,
            offspring_count,
            "engine built"
        );

        Ok(GeneticEngine {
            context,
            pipeline,
            bus: EventBus::new(self.handlers),
            limits: self.limits,
            interceptor: self.interceptor,
            population_size: self.population_size,
            state: EngineState::Idle,
        })
    }

    fn build_problem(&mut self) -> Result<Arc<dyn Problem<C>>> {
        if let Some(problem) = &self.problem {
            return Ok(Arc::clone(problem));
        }

        let factory = self
            .factory
            .take()
            .ok_or_else(|| verdant_err!(InvalidConfig: "genotype factory not set"))?;
        let fitness_fn = self
            .fitness_fn
            .take()
            .ok_or_else(|| verdant_err!(InvalidConfig: "fitness function not set"))?;

        Ok(Arc::new(EngineProblem {
            factory,
            fitness_fn,
        }))
    }

    fn build_alterers(&mut self) -> Result<Vec<Arc<dyn Alter<C>>>> {
        if self.alterers.is_empty() {
            let crossover = Arc::new(UniformCrossover::new(0.5).alterer()) as Arc<dyn Alter<C>>;
            let mutator = Arc::new(RandomMutator::new(0.1).alterer()) as Arc<dyn Alter<C>>;

            return Ok(vec![crossover, mutator]);
        }

        for alter in self.alterers.iter() {
            ensure!(
                (0.0..=1.0).contains(&alter.rate()),
                InvalidConfig: "alterer rate must be in [0, 1] - {} has {}", alter.name(), alter.rate()
            );
        }

        Ok(std::mem::take(&mut self.alterers))
    }
}

impl<C> Default for GeneticEngineBuilder<C>
where
    C: Chromosome + 'static,
{
    fn default() -> Self {
        GeneticEngineBuilder {
            population_size: 50,
            survival_rate: 0.4,
            optimize: Optimize::Maximize,
            survivor_selector: Arc::new(TournamentSelector::new(3)),
            offspring_selector: Arc::new(TournamentSelector::new(3)),
            alterers: Vec::new(),
            limits: Vec::new(),
            handlers: Vec::new(),
            evaluator: Arc::new(FitnessEvaluator),
            interceptor: Arc::new(IdentityInterceptor),
            factory: None,
            fitness_fn: None,
            problem: None,
            seed: None,
        }
    }
}
