use super::check_rate;
use verdant_core::{Chromosome, Mutate};

/// The [RandomMutator] replaces a `gene_rate` fraction of the positions of a
/// chosen chromosome with freshly generated genes. This is the 'default'
/// mutator and a good starting point for most problems.
#[derive(Debug, Clone)]
pub struct RandomMutator {
    individual_rate: f32,
    chromosome_rate: f32,
    gene_rate: f32,
}

impl RandomMutator {
    /// Create a new instance with the given individual rate; chromosome and
    /// gene rates default to 0.5. All rates must be between 0.0 and 1.0.
    pub fn new(individual_rate: f32) -> Self {
        RandomMutator {
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

impl<C: Chromosome> Mutate<C> for RandomMutator {
    fn individual_rate(&self) -> f32 {
        self.individual_rate
    }

    fn chromosome_rate(&self) -> f32 {
        self.chromosome_rate
    }

    fn gene_rate(&self) -> f32 {
        self.gene_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{IntChromosome, Phenotype, Population, Score};

    fn population(size: usize) -> Population<IntChromosome<i32>> {
        (0..size)
            .map(|_| {
                let mut phenotype =
                    Phenotype::from((vec![IntChromosome::from((6, 0..1000))], 0));
                phenotype.set_score(Some(Score::from(0.0)));
                phenotype
            })
            .collect()
    }

    #[test]
    fn test_rate_zero_is_identity() {
        let mut pop = population(10);
        let count = RandomMutator::new(0.0).mutate(&mut pop, 1).unwrap();

        assert_eq!(count, 0);
        assert!(pop.iter().all(|phenotype| phenotype.is_evaluated()));
    }

    #[test]
    fn test_rate_one_touches_every_gene() {
        let mut pop = population(10);
        let count = RandomMutator::new(1.0)
            .with_chromosome_rate(1.0)
            .with_gene_rate(1.0)
            .mutate(&mut pop, 1)
            .unwrap();

        assert_eq!(count, 60);
        assert!(pop.iter().all(|phenotype| !phenotype.is_evaluated()));
    }

    #[test]
    #[should_panic]
    fn test_invalid_rate_panics() {
        let _ = RandomMutator::new(-0.5);
    }
}
