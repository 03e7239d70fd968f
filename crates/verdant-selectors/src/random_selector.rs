use verdant_core::{Chromosome, Optimize, Population, Select, random_provider};
use verdant_error::{VerdantResult, ensure};

/// Uniform selection with replacement; ignores fitness entirely.
#[derive(Debug, Clone, Default)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector
    }
}

impl<C: Chromosome> Select<C> for RandomSelector {
    fn select(
        &self,
        population: &Population<C>,
        _: &Optimize,
        count: usize,
    ) -> VerdantResult<Population<C>> {
        ensure!(!population.is_empty(), Selection: "cannot select from an empty population");

        let selected = (0..count)
            .map(|_| population[random_provider::range(0..population.len())].clone())
            .collect::<Population<C>>();

        Ok(selected)
    }
}
