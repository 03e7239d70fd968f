use crate::ProbabilityWheelIterator;
use verdant_core::{Chromosome, Optimize, Population, Select};
use verdant_error::{VerdantResult, ensure};

/// Roulette wheel (fitness proportionate) selection.
///
/// Fitnesses are first passed through the ranker's fitness transform, then
/// shifted by the population minimum so every weight is non-negative. When
/// the resulting mass is zero or not finite - all fitnesses equal, for
/// instance - the wheel degrades to a uniform draw with replacement.
///
/// With `sorted = true` the population is ranked best-first before the wheel
/// is built, so returned individuals additionally come out in rank order of
/// their wheel slots.
#[derive(Debug, Clone, Default)]
pub struct RouletteSelector {
    sorted: bool,
}

impl RouletteSelector {
    pub fn new() -> Self {
        RouletteSelector { sorted: false }
    }

    pub fn sorted() -> Self {
        RouletteSelector { sorted: true }
    }
}

impl<C: Chromosome> Select<C> for RouletteSelector {
    fn select(
        &self,
        population: &Population<C>,
        optimize: &Optimize,
        count: usize,
    ) -> VerdantResult<Population<C>> {
        ensure!(!population.is_empty(), Selection: "cannot select from an empty population");

        let pool = if self.sorted {
            let mut sorted = population.clone();
            sorted.sort_by(optimize);
            sorted
        } else {
            population.clone()
        };

        let mut weights = pool
            .iter()
            .map(|phenotype| phenotype.score().map(|score| score.as_f32()).unwrap_or(0.0))
            .collect::<Vec<f32>>();

        optimize.transform(&mut weights);

        let min = weights.iter().cloned().fold(f32::INFINITY, f32::min);
        if min.is_finite() {
            for weight in weights.iter_mut() {
                *weight -= min;
            }
        }

        let selected = ProbabilityWheelIterator::new(&weights, count)
            .map(|index| pool[index].clone())
            .collect::<Population<C>>();

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{Chromosome, Gene, IntChromosome, Phenotype, Score, random_provider};

    fn population(scores: &[f32]) -> Population<IntChromosome<i32>> {
        scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                let mut phenotype =
                    Phenotype::from((vec![IntChromosome::from(vec![i as i32])], 0));
                phenotype.set_score(Some(Score::from(*score)));
                phenotype
            })
            .collect()
    }

    #[test]
    fn test_select_returns_requested_count() {
        let population = population(&[5.0, 10.0, 15.0]);
        let selector = RouletteSelector::new();

        let selected = selector
            .select(&population, &Optimize::Maximize, 20)
            .unwrap();
        assert_eq!(selected.len(), 20);
    }

    #[test]
    fn test_equal_fitness_falls_back_to_uniform() {
        random_provider::set_seed(5);

        let population = population(&[7.0; 10]);
        let selector = RouletteSelector::new();

        // after the minimum shift every weight is zero, so selection must
        // behave like a uniform draw and still produce the full count
        let selected = selector
            .select(&population, &Optimize::Maximize, 500)
            .unwrap();

        assert_eq!(selected.len(), 500);

        let mut seen = std::collections::HashSet::new();
        for phenotype in selected.iter() {
            seen.insert(*phenotype.genotype()[0].get(0).allele());
        }
        assert!(seen.len() > 5, "uniform fallback should spread selections");
    }

    #[test]
    fn test_minimize_prefers_low_scores() {
        random_provider::set_seed(11);

        let population = population(&[1.0, 100.0]);
        let selector = RouletteSelector::new();

        let selected = selector
            .select(&population, &Optimize::Minimize, 200)
            .unwrap();

        let low = selected
            .iter()
            .filter(|phenotype| phenotype.score().unwrap().as_f32() == 1.0)
            .count();

        assert!(low > 150, "low scorer won only {} of 200 draws", low);
    }

    #[test]
    fn test_sorted_wheel_ranks_pool_first() {
        let population = population(&[3.0, 1.0, 2.0]);
        let selector = RouletteSelector::sorted();

        let selected = selector
            .select(&population, &Optimize::Maximize, 10)
            .unwrap();
        assert_eq!(selected.len(), 10);
    }
}
