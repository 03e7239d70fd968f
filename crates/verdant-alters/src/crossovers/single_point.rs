use verdant_core::{Chromosome, Crossover, random_provider};
use verdant_error::VerdantResult;

/// The [SinglePointCrossover] draws one cut index and exchanges the gene
/// tails of two parents around it: offspring A is parent one up to the cut
/// and parent two from the cut on; offspring B is the mirror image.
///
/// This is the traditional crossover of genetic algorithms and works with
/// any gene kind.
pub struct SinglePointCrossover {
    rate: f32,
}

impl SinglePointCrossover {
    /// Create a new instance with the given chromosome rate. The rate must
    /// be between 0.0 and 1.0.
    pub fn new(rate: f32) -> Self {
        if !(0.0..=1.0).contains(&rate) {
            panic!("Rate must be between 0 and 1");
        }

        Self { rate }
    }
}

impl<C: Chromosome> Crossover<C> for SinglePointCrossover {
    fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> VerdantResult<Vec<C>> {
        let (one, two) = (parents[0], parents[1]);
        let length = one.len();

        if length < 2 {
            return Ok(vec![one.clone(), two.clone()]);
        }

        let cut = random_provider::range(1..length);

        let mut child_a = one.clone();
        let mut child_b = two.clone();

        for i in cut..length {
            child_a.set(i, two.get(i).clone());
            child_b.set(i, one.get(i).clone());
        }

        Ok(vec![child_a, child_b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{Gene, IntChromosome};

    #[test]
    fn test_offspring_are_complementary() {
        let one = IntChromosome::from(vec![0; 10]);
        let two = IntChromosome::from(vec![1; 10]);

        let children = SinglePointCrossover::new(1.0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        assert_eq!(children.len(), 2);
        for i in 0..10 {
            let a = *children[0].get(i).allele();
            let b = *children[1].get(i).allele();
            assert_eq!(a + b, 1, "position {} not complementary", i);
        }

        // a single cut in [1, len): the tail swap is contiguous
        let flips = (1..10)
            .filter(|&i| children[0].get(i).allele() != children[0].get(i - 1).allele())
            .count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn test_short_chromosomes_pass_through() {
        let one = IntChromosome::from(vec![3]);
        let two = IntChromosome::from(vec![4]);

        let children = SinglePointCrossover::new(1.0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        assert_eq!(*children[0].get(0).allele(), 3);
        assert_eq!(*children[1].get(0).allele(), 4);
    }

    #[test]
    #[should_panic]
    fn test_invalid_rate_panics() {
        let _ = SinglePointCrossover::new(1.5);
    }
}
