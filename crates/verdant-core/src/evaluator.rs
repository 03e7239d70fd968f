use crate::{Chromosome, Population, Problem};
use verdant_error::VerdantResult;
use std::sync::Arc;

/// Fitness evaluation strategy. The evaluator walks the population and
/// assigns scores using the given [Problem].
///
/// With `force = false` only unevaluated (dirty) individuals are touched, so
/// applying evaluation twice is a no-op after the first pass. With
/// `force = true` every individual is re-scored.
///
/// Scores are written in place: every individual keeps its position in the
/// population.
pub trait Evaluator<C: Chromosome>: Send + Sync {
    /// Evaluates the population, returning how many individuals were scored
    /// during this call. A fitness error aborts the pass; the population is
    /// left with the scores assigned so far.
    fn eval(
        &self,
        population: &mut Population<C>,
        problem: Arc<dyn Problem<C>>,
        force: bool,
    ) -> VerdantResult<usize>;
}

/// The default serial evaluator: applies the fitness function to each chosen
/// individual on the calling thread, in population order.
#[derive(Debug, Clone, Default)]
pub struct FitnessEvaluator;

impl<C: Chromosome> Evaluator<C> for FitnessEvaluator {
    #[inline]
    fn eval(
        &self,
        population: &mut Population<C>,
        problem: Arc<dyn Problem<C>>,
        force: bool,
    ) -> VerdantResult<usize> {
        let mut count = 0;

        for individual in population.iter_mut() {
            if force || !individual.is_evaluated() {
                let score = problem.eval(individual.genotype())?;
                individual.set_score(Some(score));
                count += 1;
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::{GenotypeFactory, IntFactory};
    use crate::{EngineProblem, Gene, Genotype, IntChromosome, Phenotype};

    fn problem() -> Arc<dyn Problem<IntChromosome<i32>>> {
        Arc::new(EngineProblem {
            factory: GenotypeFactory::single(IntFactory::of_range(3, 0..10).unwrap()),
            fitness_fn: Arc::new(|genotype: &Genotype<IntChromosome<i32>>| {
                genotype[0].iter().map(|gene| *gene.allele() as f32).sum()
            }),
        })
    }

    fn fresh_population(problem: &Arc<dyn Problem<IntChromosome<i32>>>, size: usize) -> Population<IntChromosome<i32>> {
        (0..size)
            .map(|_| Phenotype::from((problem.encode(), 0)))
            .collect()
    }

    #[test]
    fn test_eval_scores_dirty_individuals() {
        let problem = problem();
        let mut population = fresh_population(&problem, 8);

        let count = FitnessEvaluator
            .eval(&mut population, Arc::clone(&problem), false)
            .unwrap();

        assert_eq!(count, 8);
        assert!(population.iter().all(|individual| individual.is_evaluated()));
    }

    #[test]
    fn test_eval_is_idempotent() {
        let problem = problem();
        let mut population = fresh_population(&problem, 5);

        FitnessEvaluator
            .eval(&mut population, Arc::clone(&problem), false)
            .unwrap();
        let second_pass = FitnessEvaluator
            .eval(&mut population, Arc::clone(&problem), false)
            .unwrap();

        assert_eq!(second_pass, 0);
    }

    #[test]
    fn test_force_reevaluates_everything() {
        let problem = problem();
        let mut population = fresh_population(&problem, 5);

        FitnessEvaluator
            .eval(&mut population, Arc::clone(&problem), false)
            .unwrap();
        let forced = FitnessEvaluator
            .eval(&mut population, Arc::clone(&problem), true)
            .unwrap();

        assert_eq!(forced, 5);
    }

    #[test]
    fn test_eval_preserves_order() {
        let problem = problem();
        let mut population = fresh_population(&problem, 4);

        let genotypes = population
            .iter()
            .map(|individual| individual.genotype().clone())
            .collect::<Vec<_>>();

        FitnessEvaluator
            .eval(&mut population, Arc::clone(&problem), false)
            .unwrap();

        for (individual, genotype) in population.iter().zip(genotypes) {
            assert_eq!(individual.genotype(), &genotype);
        }
    }
}
