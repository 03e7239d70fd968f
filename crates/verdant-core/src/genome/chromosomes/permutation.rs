use super::{Chromosome, Gene, Valid};
use crate::random_provider;
use std::fmt::Debug;
use std::sync::Arc;

/// The [`PermutationGene`] represents one position in a permutation of a shared
/// set of unique alleles. The gene stores an index into the allele set rather
/// than the allele itself, so a chromosome of these genes is a permutation
/// whenever no index repeats. Useful for ordering problems such as routing.
///
/// # Type Parameters
/// - `A`: The type of the alleles.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationGene<A: PartialEq + Clone> {
    index: usize,
    alleles: Arc<[A]>,
}

impl<A: PartialEq + Clone> PermutationGene<A> {
    pub fn new(index: usize, alleles: Arc<[A]>) -> Self {
        PermutationGene { index, alleles }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn with_index(&self, index: usize) -> Self {
        PermutationGene {
            index,
            alleles: Arc::clone(&self.alleles),
        }
    }
}

impl<A: PartialEq + Clone> Gene for PermutationGene<A> {
    type Allele = A;

    fn allele(&self) -> &A {
        &self.alleles[self.index]
    }

    // Re-drawing a position independently would break the permutation, so the
    // generator returns the gene unchanged. Permutations are perturbed by the
    // order-preserving operators instead.
    fn new_instance(&self) -> Self {
        PermutationGene {
            index: self.index,
            alleles: Arc::clone(&self.alleles),
        }
    }

    fn with_allele(&self, allele: &A) -> Self {
        // The allele set holds unique values, so the position is well-defined.
        let index = self.alleles.iter().position(|x| x == allele).unwrap();
        PermutationGene {
            index,
            alleles: Arc::clone(&self.alleles),
        }
    }
}

impl<A: PartialEq + Clone> Valid for PermutationGene<A> {
    fn is_valid(&self) -> bool {
        self.index < self.alleles.len()
    }
}

/// A chromosome whose genes index into a shared allele set. Valid only while
/// the gene indices form a permutation (no index repeats).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PermutationChromosome<A: PartialEq + Clone> {
    genes: Vec<PermutationGene<A>>,
    alleles: Arc<[A]>,
}

impl<A: PartialEq + Clone> PermutationChromosome<A> {
    pub fn new(genes: Vec<PermutationGene<A>>, alleles: Arc<[A]>) -> Self {
        PermutationChromosome { genes, alleles }
    }

    /// A fresh chromosome carrying a uniformly shuffled permutation of the
    /// given alleles.
    pub fn shuffled(alleles: Arc<[A]>) -> Self {
        let mut order = random_provider::shuffled_indices(0..alleles.len());
        let genes = order
            .drain(..)
            .map(|index| PermutationGene::new(index, Arc::clone(&alleles)))
            .collect();

        PermutationChromosome { genes, alleles }
    }

    pub fn alleles(&self) -> &Arc<[A]> {
        &self.alleles
    }
}

impl<A: PartialEq + Clone> Chromosome for PermutationChromosome<A> {
    type Gene = PermutationGene<A>;

    fn genes(&self) -> &[Self::Gene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [Self::Gene] {
        &mut self.genes
    }
}

impl<A: PartialEq + Clone> Valid for PermutationChromosome<A> {
    fn is_valid(&self) -> bool {
        let mut seen = vec![false; self.alleles.len()];
        self.genes.iter().all(|gene| {
            if gene.index >= seen.len() || seen[gene.index] {
                return false;
            }
            seen[gene.index] = true;
            true
        })
    }
}

impl<A: PartialEq + Clone> From<Vec<PermutationGene<A>>> for PermutationChromosome<A> {
    fn from(genes: Vec<PermutationGene<A>>) -> Self {
        let alleles = genes
            .first()
            .map(|g| Arc::clone(&g.alleles))
            .unwrap_or_default();
        PermutationChromosome { genes, alleles }
    }
}

impl<A: PartialEq + Clone> IntoIterator for PermutationChromosome<A> {
    type Item = PermutationGene<A>;
    type IntoIter = std::vec::IntoIter<PermutationGene<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_gene() {
        let alleles: Arc<[i32]> = Arc::new([1, 2, 3, 4]);
        let gene = PermutationGene::new(0, alleles);

        assert_eq!(gene.allele(), &1);
        assert!(gene.is_valid());
        assert_eq!(gene.with_allele(&3).index(), 2);
    }

    #[test]
    fn test_permutation_chromosome() {
        let alleles: Arc<[i32]> = Arc::new([1, 2, 3, 4]);
        let genes = (0..4)
            .map(|i| PermutationGene::new(i, Arc::clone(&alleles)))
            .collect::<Vec<_>>();
        let chromosome = PermutationChromosome::new(genes, Arc::clone(&alleles));

        assert_eq!(chromosome.len(), 4);
        assert!(chromosome.is_valid());
        for (i, gene) in chromosome.iter().enumerate() {
            assert_eq!(gene.index(), i);
            assert_eq!(gene.allele(), &alleles[i]);
        }
    }

    #[test]
    fn test_duplicate_index_is_invalid() {
        let alleles: Arc<[i32]> = Arc::new([1, 2, 3]);
        let genes = vec![
            PermutationGene::new(0, Arc::clone(&alleles)),
            PermutationGene::new(0, Arc::clone(&alleles)),
            PermutationGene::new(2, Arc::clone(&alleles)),
        ];

        let chromosome = PermutationChromosome::from(genes);
        assert!(!chromosome.is_valid());
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let alleles: Arc<[char]> = Arc::new(['a', 'b', 'c', 'd', 'e']);

        for _ in 0..10 {
            let chromosome = PermutationChromosome::shuffled(Arc::clone(&alleles));
            assert_eq!(chromosome.len(), 5);
            assert!(chromosome.is_valid());
        }
    }
}
