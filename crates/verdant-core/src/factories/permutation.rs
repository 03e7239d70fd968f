use super::ChromosomeFactory;
use crate::PermutationChromosome;
use verdant_error::{VerdantResult, ensure};
use std::sync::Arc;

/// Produces [PermutationChromosome]s: each `make` draws a uniformly shuffled
/// permutation of the configured allele set.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // Tours over 20 cities.
/// let factory = PermutationFactory::new((0..20).collect::<Vec<usize>>()).unwrap();
/// let tour = factory.make();
/// assert_eq!(tour.len(), 20);
/// assert!(tour.is_valid());
/// ```
#[derive(Clone)]
pub struct PermutationFactory<A: PartialEq + Clone> {
    alleles: Arc<[A]>,
}

impl<A: PartialEq + Clone> PermutationFactory<A> {
    pub fn new(alleles: impl Into<Arc<[A]>>) -> VerdantResult<Self> {
        let alleles = alleles.into();

        ensure!(!alleles.is_empty(), InvalidConfig: "allele set must not be empty");
        for (i, allele) in alleles.iter().enumerate() {
            ensure!(
                !alleles[i + 1..].contains(allele),
                InvalidConfig: "allele set must hold unique values, duplicate at index {}", i
            );
        }

        Ok(PermutationFactory { alleles })
    }

    pub fn alleles(&self) -> &Arc<[A]> {
        &self.alleles
    }
}

impl<A: PartialEq + Clone + Send + Sync> ChromosomeFactory<PermutationChromosome<A>>
    for PermutationFactory<A>
{
    fn make(&self) -> PermutationChromosome<A> {
        PermutationChromosome::shuffled(Arc::clone(&self.alleles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Chromosome, Valid};

    #[test]
    fn test_make_is_permutation() {
        let factory = PermutationFactory::new(vec![1, 2, 3, 4, 5]).unwrap();

        for _ in 0..10 {
            let chromosome = factory.make();
            assert_eq!(chromosome.len(), 5);
            assert!(chromosome.is_valid());
        }
    }

    #[test]
    fn test_duplicates_are_rejected() {
        assert!(PermutationFactory::new(vec![1, 2, 2]).is_err());
        assert!(PermutationFactory::new(Vec::<i32>::new()).is_err());
    }
}
