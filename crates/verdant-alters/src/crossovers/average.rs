use verdant_core::{ArithmeticGene, Chromosome, Crossover, random_provider};
use verdant_error::VerdantResult;

/// The [AverageCrossover] blends the genes of its parents into one offspring
/// by numeric averaging: at each position, with probability `gene_rate`, the
/// offspring gene becomes the mean of the parents' genes; otherwise it is
/// inherited from the first parent.
///
/// Averaging pulls offspring towards the parents' common distribution, which
/// speeds convergence but costs diversity.
pub struct AverageCrossover {
    rate: f32,
    gene_rate: f32,
    num_parents: usize,
}

impl AverageCrossover {
    /// Create a new instance with the given gene rate, a chromosome rate of
    /// 1.0 and two parents. The rate must be between 0.0 and 1.0.
    pub fn new(gene_rate: f32) -> Self {
        if !(0.0..=1.0).contains(&gene_rate) {
            panic!("Rate must be between 0 and 1");
        }

        Self {
            rate: 1.0,
            gene_rate,
            num_parents: 2,
        }
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        if !(0.0..=1.0).contains(&rate) {
            panic!("Rate must be between 0 and 1");
        }

        self.rate = rate;
        self
    }

    pub fn with_num_parents(mut self, num_parents: usize) -> Self {
        if num_parents < 1 {
            panic!("Average crossover needs at least one parent");
        }

        self.num_parents = num_parents;
        self
    }
}

impl<C: Chromosome> Crossover<C> for AverageCrossover
where
    C::Gene: ArithmeticGene,
{
    fn rate(&self) -> f32 {
        self.rate
    }

    fn num_parents(&self) -> usize {
        self.num_parents
    }

    fn num_offspring(&self) -> usize {
        1
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> VerdantResult<Vec<C>> {
        let mut child = parents[0].clone();

        for i in 0..child.len() {
            if random_provider::bool(self.gene_rate) {
                let genes = parents.iter().map(|parent| parent.get(i)).collect::<Vec<_>>();
                child.set(i, ArithmeticGene::average(&genes));
            }
        }

        Ok(vec![child])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{FloatChromosome, Gene};

    #[test]
    fn test_average_of_two_parents() {
        let one = FloatChromosome::from(vec![0.0, 2.0, 4.0]);
        let two = FloatChromosome::from(vec![4.0, 6.0, 8.0]);

        let children = AverageCrossover::new(1.0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        let alleles = children[0]
            .iter()
            .map(|gene| *gene.allele())
            .collect::<Vec<_>>();
        assert_eq!(alleles, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_average_of_three_parents() {
        let one = FloatChromosome::from(vec![0.0]);
        let two = FloatChromosome::from(vec![3.0]);
        let three = FloatChromosome::from(vec![6.0]);

        let children = AverageCrossover::new(1.0)
            .with_num_parents(3)
            .cross_chromosomes(&[&one, &two, &three])
            .unwrap();

        assert_eq!(*children[0].get(0).allele(), 3.0);
    }
}
