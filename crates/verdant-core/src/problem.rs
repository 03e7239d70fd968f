use crate::factories::GenotypeFactory;
use crate::{Chromosome, Genotype, Score};
use verdant_error::{VerdantResult, verdant_err};
use std::sync::Arc;

/// The problem being optimized, as the engine consumes it: a way to produce
/// fresh genetic material and a way to score it. The fitness function itself
/// is an opaque pure function supplied by the caller.
///
/// # Generic Parameters
/// - `C`: The chromosome type that represents the genetic material
pub trait Problem<C: Chromosome>: Send + Sync {
    /// Creates a new [Genotype] - a valid, randomly drawn starting point for
    /// evolution.
    fn encode(&self) -> Genotype<C>;

    /// Evaluates the fitness of a single genotype.
    fn eval(&self, genotype: &Genotype<C>) -> VerdantResult<Score>;
}

/// The default [Problem]: a [GenotypeFactory] paired with the user's fitness
/// closure. The builder assembles this from `genotype_factory` and
/// `fitness_fn`.
///
/// A fitness value must be a finite number; anything else is an evaluation
/// error and aborts the run.
pub struct EngineProblem<C: Chromosome> {
    pub factory: GenotypeFactory<C>,
    pub fitness_fn: Arc<dyn Fn(&Genotype<C>) -> f32 + Send + Sync>,
}

impl<C: Chromosome> Problem<C> for EngineProblem<C> {
    fn encode(&self) -> Genotype<C> {
        self.factory.make()
    }

    fn eval(&self, genotype: &Genotype<C>) -> VerdantResult<Score> {
        let value = (self.fitness_fn)(genotype);

        if !value.is_finite() {
            return Err(verdant_err!(
                Evaluation: "fitness function produced a non-finite value: {}", value
            ));
        }

        Ok(Score::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::IntFactory;
    use crate::{Gene, IntChromosome};
    use verdant_error::ErrorCode;

    fn sum_problem() -> EngineProblem<IntChromosome<i32>> {
        EngineProblem {
            factory: GenotypeFactory::single(IntFactory::of_range(5, 0..10).unwrap()),
            fitness_fn: Arc::new(|genotype: &Genotype<IntChromosome<i32>>| {
                genotype
                    .iter()
                    .flat_map(|chromosome| chromosome.iter())
                    .map(|gene| *gene.allele() as f32)
                    .sum()
            }),
        }
    }

    #[test]
    fn test_encode_and_eval() {
        let problem = sum_problem();

        let genotype = problem.encode();
        assert_eq!(genotype.len(), 1);
        assert_eq!(genotype[0].len(), 5);

        let score = problem.eval(&genotype).unwrap();
        let expected = genotype[0]
            .iter()
            .map(|gene| *gene.allele() as f32)
            .sum::<f32>();
        assert_eq!(score.as_f32(), expected);
    }

    #[test]
    fn test_non_finite_fitness_is_an_error() {
        let problem = EngineProblem {
            factory: GenotypeFactory::single(IntFactory::of_range(1, 0..10).unwrap()),
            fitness_fn: Arc::new(|_: &Genotype<IntChromosome<i32>>| f32::NAN),
        };

        let genotype = problem.encode();
        let err = problem.eval(&genotype).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Evaluation);
    }
}
