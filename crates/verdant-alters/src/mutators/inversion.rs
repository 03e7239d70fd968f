use super::check_rate;
use verdant_core::{Chromosome, Mutate, random_provider};
use verdant_error::VerdantResult;

/// The [InversionMutator] reverses a window of the chromosome. The window
/// boundaries are drawn positionally: the start is the first position whose
/// uniform draw falls below `boundary_probability` (the first position when
/// none does), the end is the first position at or after the start whose
/// draw falls above it (the last position when none does).
///
/// Reversal only reorders genes, so permutations stay valid. With small
/// chromosomes the window is often most of the chromosome; the operator
/// works best on larger ones.
#[derive(Debug, Clone)]
pub struct InversionMutator {
    individual_rate: f32,
    chromosome_rate: f32,
    boundary_probability: f32,
}

impl InversionMutator {
    /// Create a new instance with the given individual rate; the chromosome
    /// rate and boundary probability default to 0.5. All rates must be
    /// between 0.0 and 1.0.
    pub fn new(individual_rate: f32) -> Self {
        InversionMutator {
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

/// Draws the `[start, end]` window for inversion-style mutators.
pub(crate) fn window(length: usize, boundary_probability: f32) -> (usize, usize) {
    let mut start = 0;
    for i in 0..length {
        if random_provider::random::<f32>() < boundary_probability {
            start = i;
            break;
        }
    }

    let mut end = length - 1;
    for i in start..length {
        if random_provider::random::<f32>() > boundary_probability {
            end = i;
            break;
        }
    }

    (start, end)
}

impl<C: Chromosome> Mutate<C> for InversionMutator {
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

        chromosome.genes_mut()[start..=end].reverse();
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{Gene, IntChromosome};

    #[test]
    fn test_inversion_preserves_the_multiset() {
        let mut chromosome = IntChromosome::from((0..12).collect::<Vec<i32>>());

        InversionMutator::new(1.0)
            .mutate_chromosome(&mut chromosome)
            .unwrap();

        let mut alleles = chromosome
            .iter()
            .map(|gene| *gene.allele())
            .collect::<Vec<_>>();
        alleles.sort();
        assert_eq!(alleles, (0..12).collect::<Vec<i32>>());
    }

    #[test]
    fn test_window_is_ordered_and_in_bounds() {
        for _ in 0..100 {
            let (start, end) = window(10, 0.5);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    #[test]
    fn test_single_gene_is_untouched() {
        let mut chromosome = IntChromosome::from(vec![42]);

        let count = InversionMutator::new(1.0)
            .mutate_chromosome(&mut chromosome)
            .unwrap();

        assert_eq!(count, 0);
        assert_eq!(*chromosome.get(0).allele(), 42);
    }
}
