pub mod alter;
pub mod evaluator;
pub mod factories;
pub mod genome;
pub mod objectives;
pub mod problem;
pub mod random_provider;
pub mod selector;
pub mod stats;

pub use alter::{Alter, AlterAction, Crossover, Mutate};
pub use evaluator::{Evaluator, FitnessEvaluator};
pub use factories::{
    BitFactory, CharFactory, ChromosomeFactory, FloatFactory, GenotypeFactory, IntFactory,
    PermutationFactory,
};
pub use genome::*;
pub use objectives::{Optimize, Score, Scored};
pub use problem::{EngineProblem, Problem};
pub use selector::Select;
pub use stats::{Metric, MetricSet, Statistic, TimeStatistic, metric_names};

pub use verdant_error::{ErrorCode, VerdantError, VerdantResult};
