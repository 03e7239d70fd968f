use verdant_core::{Chromosome, Crossover, random_provider};
use verdant_error::VerdantResult;

/// The [UniformCrossover] walks the gene positions of two parents and swaps
/// the genes between the two offspring with probability `gene_rate` per
/// position; other positions are inherited straight.
pub struct UniformCrossover {
    rate: f32,
    gene_rate: f32,
}

impl UniformCrossover {
    /// Create a new instance with the given chromosome rate and the default
    /// gene rate of 0.5. Both rates must be between 0.0 and 1.0.
    pub fn new(rate: f32) -> Self {
        if !(0.0..=1.0).contains(&rate) {
            panic!("Rate must be between 0 and 1");
        }

        Self {
            rate,
            gene_rate: 0.5,
        }
    }

    pub fn with_gene_rate(mut self, gene_rate: f32) -> Self {
        if !(0.0..=1.0).contains(&gene_rate) {
            panic!("Rate must be between 0 and 1");
        }

        self.gene_rate = gene_rate;
        self
    }
}

impl<C: Chromosome> Crossover<C> for UniformCrossover {
    fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> VerdantResult<Vec<C>> {
        let (one, two) = (parents[0], parents[1]);

        let mut child_a = one.clone();
        let mut child_b = two.clone();

        for i in 0..one.len() {
            if random_provider::bool(self.gene_rate) {
                child_a.set(i, two.get(i).clone());
                child_b.set(i, one.get(i).clone());
            }
        }

        Ok(vec![child_a, child_b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{BitChromosome, Gene, random_provider as rp};

    #[test]
    fn test_positions_stay_complementary() {
        rp::set_seed(3);

        let one = BitChromosome::from(vec![false; 20]);
        let two = BitChromosome::from(vec![true; 20]);

        let children = UniformCrossover::new(1.0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        for i in 0..20 {
            assert_ne!(children[0].get(i).allele(), children[1].get(i).allele());
        }
    }

    #[test]
    fn test_gene_rate_zero_inherits_straight() {
        let one = BitChromosome::from(vec![false; 10]);
        let two = BitChromosome::from(vec![true; 10]);

        let children = UniformCrossover::new(1.0)
            .with_gene_rate(0.0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        assert!(children[0].iter().all(|gene| !*gene.allele()));
        assert!(children[1].iter().all(|gene| *gene.allele()));
    }

    #[test]
    fn test_gene_rate_one_swaps_everything() {
        let one = BitChromosome::from(vec![false; 10]);
        let two = BitChromosome::from(vec![true; 10]);

        let children = UniformCrossover::new(1.0)
            .with_gene_rate(1.0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        assert!(children[0].iter().all(|gene| *gene.allele()));
        assert!(children[1].iter().all(|gene| !*gene.allele()));
    }
}
