use super::check_rate;
use verdant_core::{Chromosome, Mutate, random_provider};
use verdant_error::VerdantResult;

/// The [SwapMutator] exchanges genes within a chromosome: every position
/// sampled at `swap_rate` is swapped with a second, uniformly drawn position.
/// Swapping only moves genes around, so permutations stay valid.
#[derive(Debug, Clone)]
pub struct SwapMutator {
    individual_rate: f32,
    chromosome_rate: f32,
    swap_rate: f32,
}

impl SwapMutator {
    /// Create a new instance with the given individual rate; chromosome and
    /// swap rates default to 0.5. All rates must be between 0.0 and 1.0.
    pub fn new(individual_rate: f32) -> Self {
        SwapMutator {
            individual_rate: check_rate(individual_rate),
            chromosome_rate: 0.5,
            swap_rate: 0.5,
        }
    }

    pub fn with_chromosome_rate(mut self, chromosome_rate: f32) -> Self {
        self.chromosome_rate = check_rate(chromosome_rate);
        self
    }

    pub fn with_swap_rate(mut self, swap_rate: f32) -> Self {
        self.swap_rate = check_rate(swap_rate);
        self
    }
}

impl<C: Chromosome> Mutate<C> for SwapMutator {
    fn individual_rate(&self) -> f32 {
        self.individual_rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    fn gene_rate(&self) -> f32 {
        self.swap_rate
    }

    #[inline]
    fn mutate_chromosome(&self, chromosome: &mut C) -> VerdantResult<usize> {
        let mut count = 0;

        for i in random_provider::indices(0..chromosome.len(), self.swap_rate) {
            let j = random_provider::range(0..chromosome.len());
            if i == j {
                continue;
            }

            chromosome.genes_mut().swap(i, j);
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{Gene, IntChromosome};

    #[test]
    fn test_swapping_preserves_the_multiset() {
        let mut chromosome = IntChromosome::from(vec![1, 2, 3, 4, 5, 6, 7, 8]);

        SwapMutator::new(1.0)
            .with_swap_rate(1.0)
            .mutate_chromosome(&mut chromosome)
            .unwrap();

        let mut alleles = chromosome
            .iter()
            .map(|gene| *gene.allele())
            .collect::<Vec<_>>();
        alleles.sort();
        assert_eq!(alleles, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_swap_rate_zero_is_identity() {
        let mut chromosome = IntChromosome::from(vec![1, 2, 3]);

        let count = SwapMutator::new(1.0)
            .with_swap_rate(0.0)
            .mutate_chromosome(&mut chromosome)
            .unwrap();

        assert_eq!(count, 0);
        let alleles = chromosome
            .iter()
            .map(|gene| *gene.allele())
            .collect::<Vec<_>>();
        assert_eq!(alleles, vec![1, 2, 3]);
    }
}
