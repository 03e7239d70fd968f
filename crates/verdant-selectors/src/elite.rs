use verdant_core::{Chromosome, Optimize, Population, Select};
use verdant_error::{VerdantResult, ensure};

/// Truncation selection: rank the population best-first under the ranker and
/// take the top `count`. When more individuals are requested than exist, the
/// ranking is walked again from the top.
#[derive(Debug, Clone, Default)]
pub struct EliteSelector;

impl EliteSelector {
    pub fn new() -> Self {
        EliteSelector
    }
}

impl<C: Chromosome> Select<C> for EliteSelector {
    fn select(
        &self,
        population: &Population<C>,
        optimize: &Optimize,
        count: usize,
    ) -> VerdantResult<Population<C>> {
        ensure!(!population.is_empty(), Selection: "cannot select from an empty population");

        let mut ranked = population.clone();
        ranked.sort_by(optimize);

        let selected = (0..count)
            .map(|i| ranked[i % ranked.len()].clone())
            .collect::<Population<C>>();

        Ok(selected)
    }
}
