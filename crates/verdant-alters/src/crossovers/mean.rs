use verdant_core::{ArithmeticGene, Chromosome, Crossover, random_provider};
use verdant_error::VerdantResult;

/// The [MeanCrossover] is the integer sibling of
/// [AverageCrossover](crate::AverageCrossover): at each position, with
/// probability `gene_rate`, the offspring gene becomes the rounded average
/// of the parents' genes; otherwise it is inherited from the first parent.
pub struct MeanCrossover {
    rate: f32,
    gene_rate: f32,
}

impl MeanCrossover {
    /// Create a new instance with the given gene rate and a chromosome rate
    /// of 1.0. The rate must be between 0.0 and 1.0.
    pub fn new(gene_rate: f32) -> Self {
        if !(0.0..=1.0).contains(&gene_rate) {
            panic!("Rate must be between 0 and 1");
        }

        Self {
            rate: 1.0,
            gene_rate,
        }
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        if !(0.0..=1.0).contains(&rate) {
            panic!("Rate must be between 0 and 1");
        }

        self.rate = rate;
        self
    }
}

impl<C: Chromosome> Crossover<C> for MeanCrossover
where
    C::Gene: ArithmeticGene,
{
    fn rate(&self) -> f32 {
        self.rate
    }

    fn num_offspring(&self) -> usize {
        1
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> VerdantResult<Vec<C>> {
        let mut child = parents[0].clone();

        for i in 0..child.len() {
            if random_provider::bool(self.gene_rate) {
                child.set(i, parents[0].get(i).mean(parents[1].get(i)));
            }
        }

        Ok(vec![child])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{Gene, IntChromosome};

    #[test]
    fn test_mean_rounds_the_average() {
        let one = IntChromosome::from(vec![1, 4, 10]);
        let two = IntChromosome::from(vec![2, 8, 11]);

        let children = MeanCrossover::new(1.0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        let alleles = children[0]
            .iter()
            .map(|gene| *gene.allele())
            .collect::<Vec<_>>();
        // 1.5 rounds to 2, 6 stays 6, 10.5 rounds to 11
        assert_eq!(alleles, vec![2, 6, 11]);
    }
}
