use verdant_core::{Chromosome, Crossover, random_provider};
use verdant_error::VerdantResult;
use std::sync::Arc;

/// The [CombineCrossover] folds the genes of `num_parents` parents into a
/// single offspring: at each gene position, with probability `gene_rate`, the
/// combiner is applied to the parents' genes at that position; otherwise the
/// first parent's gene is inherited.
///
/// [AverageCrossover](crate::AverageCrossover) and
/// [MeanCrossover](crate::MeanCrossover) are the common numeric
/// specializations of this operator.
pub struct CombineCrossover<C: Chromosome> {
    combiner: Arc<dyn Fn(&[&C::Gene]) -> C::Gene + Send + Sync>,
    rate: f32,
    gene_rate: f32,
    num_parents: usize,
}

impl<C: Chromosome> CombineCrossover<C> {
    /// Create a new instance. Both rates must be between 0.0 and 1.0 and at
    /// least one parent is required.
    pub fn new(
        combiner: impl Fn(&[&C::Gene]) -> C::Gene + Send + Sync + 'static,
        rate: f32,
        gene_rate: f32,
        num_parents: usize,
    ) -> Self {
        if !(0.0..=1.0).contains(&rate) || !(0.0..=1.0).contains(&gene_rate) {
            panic!("Rate must be between 0 and 1");
        }
        if num_parents < 1 {
            panic!("Combine crossover needs at least one parent");
        }

        Self {
            combiner: Arc::new(combiner),
            rate,
            gene_rate,
            num_parents,
        }
    }
}

impl<C: Chromosome> Crossover<C> for CombineCrossover<C> {
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
                child.set(i, (self.combiner)(&genes));
            }
        }

        Ok(vec![child])
    }
}
