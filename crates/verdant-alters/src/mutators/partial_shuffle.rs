use super::check_rate;
use super::inversion::window;
use verdant_core::{Chromosome, Mutate, random_provider};
use verdant_error::VerdantResult;

/// The [PartialShuffleMutator] draws a window exactly like
/// [InversionMutator](crate::InversionMutator) but shuffles the window
/// uniformly instead of reversing it. Permutations stay valid.
#[derive(Debug, Clone)]
pub struct PartialShuffleMutator {
    individual_rate: f32,
    chromosome_rate: f32,
    boundary_probability: f32,
}

impl PartialShuffleMutator {
    /// Create a new instance with the given individual rate; the chromosome
    /// rate and boundary probability default to 0.5. All rates must be
    /// between 0.0 and 1.0.
    pub fn new(individual_rate: f32) -> Self {
        PartialShuffleMutator {
            individual_rate: check_rate(individual_rate),
            chromosome_rate: 0.5,
            boundary_probability: 0.5,
        }
    }

    pub fn with_chromosome_rate(mut self, chromosome_rate: f32) -> Self {
        self.chromosome_rate = check_rate(chromosome_rate);
        self
    }

    pub fn with_boundary_probability(mut self, boundary_probability: f32) -> Self {
        self.boundary_probability = check_rate(boundary_probability);
        self
    }
}

impl<C: Chromosome> Mutate<C> for PartialShuffleMutator {
    fn individual_rate(&self) -> f32 {
        self.individual_rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    #[inline]
    fn mutate_chromosome(&self, chromosome: &mut C) -> VerdantResult<usize> {
        if chromosome.len() < 2 {
            return Ok(0);
        }

        let (start, end) = window(chromosome.len(), self.boundary_probability);
        if end <= start {
            return Ok(0);
        }

        random_provider::shuffle(&mut chromosome.genes_mut()[start..=end]);
        Ok(1)
    }
}
