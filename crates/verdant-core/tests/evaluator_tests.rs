use verdant_core::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingProblem {
    factory: GenotypeFactory<IntChromosome<i32>>,
    calls: AtomicUsize,
}

impl Problem<IntChromosome<i32>> for CountingProblem {
    fn encode(&self) -> Genotype<IntChromosome<i32>> {
        self.factory.make()
    }

    fn eval(&self, genotype: &Genotype<IntChromosome<i32>>) -> VerdantResult<Score> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let sum: f32 = genotype[0].iter().map(|gene| *gene.allele() as f32).sum();
        Ok(Score::from(sum))
    }
}

fn counting_problem() -> Arc<CountingProblem> {
    Arc::new(CountingProblem {
        factory: GenotypeFactory::single(IntFactory::of_range(4, 0..10).unwrap()),
        calls: AtomicUsize::new(0),
    })
}

#[test]
fn only_dirty_individuals_are_evaluated() {
    let problem = counting_problem();
    let shared: Arc<dyn Problem<IntChromosome<i32>>> = problem.clone();

    let mut population = (0..6)
        .map(|_| Phenotype::from((shared.encode(), 0)))
        .collect::<Population<IntChromosome<i32>>>();

    // pre-score half the population
    for i in 0..3 {
        population[i].set_score(Some(Score::from(1.0)));
    }

    let count = FitnessEvaluator
        .eval(&mut population, Arc::clone(&shared), false)
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(problem.calls.load(Ordering::Relaxed), 3);
    assert!(population.iter().all(|individual| individual.is_evaluated()));
}

#[test]
fn force_reevaluates_the_whole_population() {
    let problem = counting_problem();
    let shared: Arc<dyn Problem<IntChromosome<i32>>> = problem.clone();

    let mut population = (0..5)
        .map(|_| Phenotype::from((shared.encode(), 0)))
        .collect::<Population<IntChromosome<i32>>>();

    FitnessEvaluator
        .eval(&mut population, Arc::clone(&shared), false)
        .unwrap();
    FitnessEvaluator
        .eval(&mut population, Arc::clone(&shared), true)
        .unwrap();

    assert_eq!(problem.calls.load(Ordering::Relaxed), 10);
}

#[test]
fn evaluation_is_idempotent_without_force() {
    let problem = counting_problem();
    let shared: Arc<dyn Problem<IntChromosome<i32>>> = problem.clone();

    let mut population = (0..5)
        .map(|_| Phenotype::from((shared.encode(), 0)))
        .collect::<Population<IntChromosome<i32>>>();

    FitnessEvaluator
        .eval(&mut population, Arc::clone(&shared), false)
        .unwrap();

    let scores_before = population
        .iter()
        .map(|individual| individual.score().unwrap().as_f32())
        .collect::<Vec<_>>();

    let second_pass = FitnessEvaluator
        .eval(&mut population, Arc::clone(&shared), false)
        .unwrap();

    let scores_after = population
        .iter()
        .map(|individual| individual.score().unwrap().as_f32())
        .collect::<Vec<_>>();

    assert_eq!(second_pass, 0);
    assert_eq!(scores_before, scores_after);
    assert_eq!(problem.calls.load(Ordering::Relaxed), 5);
}
