use super::check_rate;
use verdant_core::{BitGene, Chromosome, Gene, Mutate, random_provider};
use verdant_error::VerdantResult;

/// The [BitFlipMutator] negates a `gene_rate` fraction of the bits of a
/// chosen chromosome. It is the boolean specialization of
/// [RandomMutator](crate::RandomMutator): instead of drawing a fresh coin it
/// flips the existing allele.
#[derive(Debug, Clone)]
pub struct BitFlipMutator {
    individual_rate: f32,
    chromosome_rate: f32,
    gene_rate: f32,
}

impl BitFlipMutator {
    /// Create a new instance with the given individual rate; chromosome and
    /// gene rates default to 0.5. All rates must be between 0.0 and 1.0.
    pub fn new(individual_rate: f32) -> Self {
        BitFlipMutator {
            individual_rate: check_rate(individual_rate),
            chromosome_rate: 0.5,
            gene_rate: 0.5,
        }
    }

    pub fn with_chromosome_rate(mut self, chromosome_rate: f32) -> Self {
        self.chromosome_rate = check_rate(chromosome_rate);
        self
    }

    pub fn with_gene_rate(mut self, gene_rate: f32) -> Self {
        self.gene_rate = check_rate(gene_rate);
        self
    }
}

impl<C: Chromosome<Gene = BitGene>> Mutate<C> for BitFlipMutator {
    fn individual_rate(&self) -> f32 {
        self.individual_rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    fn gene_rate(&self) -> f32 {
        self.gene_rate
    }

    #[inline]
    fn mutate_chromosome(&self, chromosome: &mut C) -> VerdantResult<usize> {
        let mut count = 0;

        for i in random_provider::indices(0..chromosome.len(), self.gene_rate) {
            let flipped = !*chromosome.get(i).allele();
            let gene = chromosome.get(i).with_allele(&flipped);
            chromosome.set(i, gene);
            count += 1;
        }

        Ok(count)
    }
}
