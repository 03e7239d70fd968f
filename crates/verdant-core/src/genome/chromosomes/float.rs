use super::{
    Chromosome,
    gene::{ArithmeticGene, Filter, Gene, Valid},
};
use crate::random_provider;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::Range;

/// Minimum and maximum values for the `FloatGene` allele. Large enough to
/// cover practical use cases while avoiding overflow in downstream
/// arithmetic.
pub(crate) const MIN: f32 = -1e10;
pub(crate) const MAX: f32 = 1e10;

/// A [`Gene`] that represents a floating point number drawn from a half-open
/// range, optionally narrowed by a filter. The generator draws uniformly from
/// the range and rejects until the filter accepts.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // A gene with a random allele between 0 and 1.
/// let gene = FloatGene::from(0_f32..1_f32);
///
/// // A gene over [-5, 5) restricted to non-negative values.
/// let gene = FloatGene::new(-5.0..5.0, Filter::new(|v: &f32| *v >= 0.0));
/// assert!(gene.is_valid());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatGene {
    allele: f32,
    range: Range<f32>,
    #[cfg_attr(feature = "serde", serde(skip, default))]
    filter: Filter<f32>,
}

impl FloatGene {
    pub fn new(range: Range<f32>, filter: Filter<f32>) -> Self {
        let range = MIN.max(range.start)..MAX.min(range.end);
        let allele = sample_float(&range, &filter);
        FloatGene {
            allele,
            range,
            filter,
        }
    }

    pub fn range(&self) -> &Range<f32> {
        &self.range
    }
}

fn sample_float(range: &Range<f32>, filter: &Filter<f32>) -> f32 {
    loop {
        let candidate = random_provider::range(range.clone());
        if filter.accepts(&candidate) {
            return candidate;
        }
    }
}

impl Gene for FloatGene {
    type Allele = f32;

    fn allele(&self) -> &f32 {
        &self.allele
    }

    fn new_instance(&self) -> FloatGene {
        FloatGene {
            allele: sample_float(&self.range, &self.filter),
            range: self.range.clone(),
            filter: self.filter.clone(),
        }
    }

    fn with_allele(&self, allele: &f32) -> FloatGene {
        FloatGene {
            allele: *allele,
            range: self.range.clone(),
            filter: self.filter.clone(),
        }
    }
}

/// A [`FloatGene`] is valid while its allele is inside the range and
/// accepted by the filter.
impl Valid for FloatGene {
    fn is_valid(&self) -> bool {
        self.range.contains(&self.allele) && self.filter.accepts(&self.allele)
    }
}

impl ArithmeticGene for FloatGene {
    fn mean(&self, other: &FloatGene) -> FloatGene {
        Self::average(&[self, other])
    }

    fn average(genes: &[&Self]) -> Self {
        let sum = genes.iter().map(|gene| gene.allele).sum::<f32>();

        genes[0].with_allele(&(sum / genes.len() as f32))
    }
}

impl PartialEq for FloatGene {
    fn eq(&self, other: &Self) -> bool {
        self.allele == other.allele && self.range == other.range
    }
}

impl Default for FloatGene {
    fn default() -> Self {
        FloatGene {
            allele: 0.0,
            range: MIN..MAX,
            filter: Filter::accept_all(),
        }
    }
}

impl From<FloatGene> for f32 {
    fn from(gene: FloatGene) -> f32 {
        gene.allele
    }
}

impl From<f32> for FloatGene {
    fn from(allele: f32) -> Self {
        FloatGene {
            allele,
            range: MIN..MAX,
            filter: Filter::accept_all(),
        }
    }
}

impl From<Range<f32>> for FloatGene {
    fn from(range: Range<f32>) -> Self {
        FloatGene::new(range, Filter::accept_all())
    }
}

impl Display for FloatGene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.allele)
    }
}

/// Represents a chromosome composed of floating-point genes, typically used
/// in problems where solutions are encoded as real numbers.
///
/// # Example
/// ```rust
/// use verdant_core::*;
///
/// // Create a chromosome with 3 genes with alleles 0.0, 1.0, and 2.0.
/// let chromosome = FloatChromosome::from(vec![0.0, 1.0, 2.0]);
/// assert!(chromosome.is_valid());
///
/// // Create a chromosome with 3 genes with alleles in the range 0.0 to 10.0.
/// let ranged = FloatChromosome::from((3, 0.0..10.0));
/// assert_eq!(ranged.len(), 3);
/// ```
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatChromosome {
    genes: Vec<FloatGene>,
}

impl FloatChromosome {
    pub fn new(genes: Vec<FloatGene>) -> Self {
        FloatChromosome { genes }
    }
}

impl Chromosome for FloatChromosome {
    type Gene = FloatGene;

    fn genes(&self) -> &[Self::Gene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [Self::Gene] {
        &mut self.genes
    }
}

impl Valid for FloatChromosome {
    fn is_valid(&self) -> bool {
        self.genes.iter().all(|gene| gene.is_valid())
    }
}

impl From<FloatGene> for FloatChromosome {
    fn from(gene: FloatGene) -> Self {
        FloatChromosome { genes: vec![gene] }
    }
}

impl From<Vec<FloatGene>> for FloatChromosome {
    fn from(genes: Vec<FloatGene>) -> Self {
        FloatChromosome { genes }
    }
}

impl From<Vec<f32>> for FloatChromosome {
    fn from(alleles: Vec<f32>) -> Self {
        FloatChromosome {
            genes: alleles.into_iter().map(FloatGene::from).collect(),
        }
    }
}

impl From<(usize, Range<f32>)> for FloatChromosome {
    fn from((size, range): (usize, Range<f32>)) -> Self {
        FloatChromosome {
            genes: (0..size).map(|_| FloatGene::from(range.clone())).collect(),
        }
    }
}

impl FromIterator<FloatGene> for FloatChromosome {
    fn from_iter<I: IntoIterator<Item = FloatGene>>(iter: I) -> Self {
        FloatChromosome {
            genes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FloatChromosome {
    type Item = FloatGene;
    type IntoIter = std::vec::IntoIter<FloatGene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}

impl Debug for FloatChromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let gene = FloatGene::from(0_f32..1_f32);
        assert!(gene.is_valid());
        assert!((0.0..1.0).contains(gene.allele()));
    }

    #[test]
    fn test_into() {
        let gene = FloatGene::from(0_f32..1_f32);
        let copy = gene.clone();
        let allele: f32 = gene.into();
        assert_eq!(allele, *copy.allele());
    }

    #[test]
    fn test_range_clamping() {
        let gene = FloatGene::new(-1e20..1e20, Filter::accept_all());
        assert_eq!(gene.range().start, MIN);
        assert_eq!(gene.range().end, MAX);
    }

    #[test]
    fn test_filter_rejection_sampling() {
        let gene = FloatGene::new(-5.0..5.0, Filter::new(|v: &f32| *v >= 0.0));

        for _ in 0..50 {
            let fresh = gene.new_instance();
            assert!(*fresh.allele() >= 0.0);
            assert!(fresh.is_valid());
        }
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let gene = FloatGene::from(0.0..1.0);
        assert!(!gene.with_allele(&2.0).is_valid());
        assert!(gene.with_allele(&0.5).is_valid());
    }

    #[test]
    fn test_mean_and_average() {
        let one = FloatGene::from(5_f32);
        let two = FloatGene::from(10_f32);
        let three = FloatGene::from(15_f32);

        assert_eq!(*one.mean(&two).allele(), 7.5);
        assert_eq!(*FloatGene::average(&[&one, &two, &three]).allele(), 10.0);
    }

    #[test]
    fn test_chromosome() {
        let chromosome = FloatChromosome::from((10, -1.0..1.0));

        assert_eq!(chromosome.len(), 10);
        assert!(chromosome.is_valid());
        for gene in chromosome.iter() {
            assert!(gene.is_valid());
            assert!((-1.0..1.0).contains(gene.allele()));
        }
    }

    #[test]
    fn test_chromosome_from_vec() {
        let chromosome = FloatChromosome::from(vec![0.0, 1.0, 2.0]);

        assert_eq!(chromosome.len(), 3);
        assert!(chromosome.is_valid());
        for (gene, allele) in chromosome.iter().zip(vec![0.0, 1.0, 2.0]) {
            assert_eq!(*gene.allele(), allele);
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_float_gene_serialization() {
        let gene = FloatGene::from(0.5_f32..1.5_f32);

        let serialized = serde_json::to_string(&gene).expect("Failed to serialize FloatGene");
        let deserialized: FloatGene =
            serde_json::from_str(&serialized).expect("Failed to deserialize FloatGene");

        assert_eq!(gene, deserialized);
    }
}
