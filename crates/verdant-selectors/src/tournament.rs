use verdant_core::{Chromosome, Optimize, Population, Select, random_provider};
use verdant_error::{VerdantResult, ensure};

/// Tournament selection: for each slot, draw `num` individuals uniformly with
/// replacement and keep the best of them under the ranker. Larger tournaments
/// raise selection pressure; a tournament of one is a uniform draw.
#[derive(Debug, Clone)]
pub struct TournamentSelector {
    num: usize,
}

impl TournamentSelector {
    /// Create a new selector with the given tournament size. The size must be
    /// at least 1.
    pub fn new(num: usize) -> Self {
        if num < 1 {
            panic!("Tournament size must be at least 1");
        }

        TournamentSelector { num }
    }
}

impl Default for TournamentSelector {
    fn default() -> Self {
        TournamentSelector::new(3)
    }
}

impl<C: Chromosome> Select<C> for TournamentSelector {
    fn select(
        &self,
        population: &Population<C>,
        optimize: &Optimize,
        count: usize,
    ) -> VerdantResult<Population<C>> {
        ensure!(!population.is_empty(), Selection: "cannot select from an empty population");

        let mut selected = Vec::with_capacity(count);

        for _ in 0..count {
            let winner = (0..self.num)
                .map(|_| random_provider::range(0..population.len()))
                .reduce(|best, challenger| {
                    match (population[challenger].score(), population[best].score()) {
                        (Some(c), Some(b)) if optimize.is_better(c, b) => challenger,
                        _ => best,
                    }
                })
                .unwrap();

            selected.push(population[winner].clone());
        }

        Ok(Population::new(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{IntChromosome, Phenotype, Score};

    fn population(scores: &[f32]) -> Population<IntChromosome<i32>> {
        scores
            .iter()
            .map(|score| {
                let mut phenotype = Phenotype::from((vec![IntChromosome::from((2, 0..10))], 0));
                phenotype.set_score(Some(Score::from(*score)));
                phenotype
            })
            .collect()
    }

    #[test]
    #[should_panic]
    fn test_zero_tournament_size_panics() {
        let _ = TournamentSelector::new(0);
    }

    #[test]
    fn test_select_returns_requested_count() {
        let population = population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let selector = TournamentSelector::new(3);

        let selected = selector
            .select(&population, &Optimize::Maximize, 12)
            .unwrap();
        assert_eq!(selected.len(), 12);
    }

    #[test]
    fn test_full_tournament_always_selects_the_best() {
        let population = population(&[1.0, 9.0, 2.0, 3.0]);
        let selector = TournamentSelector::new(64);

        let selected = selector
            .select(&population, &Optimize::Maximize, 10)
            .unwrap();

        // a tournament much larger than the population all but surely sees
        // every individual, so every winner is the maximum
        for phenotype in selected.iter() {
            assert_eq!(phenotype.score().unwrap().as_f32(), 9.0);
        }
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let population = Population::<IntChromosome<i32>>::default();
        let selector = TournamentSelector::new(3);

        assert!(
            selector
                .select(&population, &Optimize::Maximize, 3)
                .is_err()
        );
    }
}
