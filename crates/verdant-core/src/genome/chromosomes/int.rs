use super::{
    Chromosome,
    gene::{ArithmeticGene, Filter, Gene, Valid},
};
use crate::random_provider;
use rand::distr::uniform::SampleUniform;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Range, Sub};

/// The set of primitive integer types an [`IntGene`] can carry.
pub trait Integer<T>:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Default
    + Add<Output = T>
    + Sub<Output = T>
    + Mul<Output = T>
    + Div<Output = T>
    + SampleUniform
    + Send
    + Sync
    + 'static
{
    const MIN: T;
    const MAX: T;

    fn from_i32(value: i32) -> T;
    fn from_f64(value: f64) -> T;
    fn as_f64(self) -> f64;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Integer<$t> for $t {
                const MIN: $t = <$t>::MIN;
                const MAX: $t = <$t>::MAX;

                fn from_i32(value: i32) -> $t {
                    value as $t
                }

                fn from_f64(value: f64) -> $t {
                    value as $t
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

/// A [`Gene`] that represents an integer value drawn from a half-open range,
/// optionally narrowed by a filter. The generator draws uniformly from the
/// range and rejects until the filter accepts.
///
/// [`IntGene`] is generic over `T` - any type implementing [`Integer`], which
/// covers `i8` through `i128` and `u8` through `u128`.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // A gene with a fixed allele of 5 over the full i32 range.
/// let gene: IntGene<i32> = 5.into();
///
/// // A gene with a random allele between 0 and 10.
/// let gene = IntGene::from(0..10);
///
/// // A gene over 0..100 restricted to multiples of ten.
/// let gene = IntGene::new(0..100, Filter::new(|v: &i32| v % 10 == 0));
/// assert!(gene.is_valid());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntGene<T: Integer<T>> {
    allele: T,
    range: Range<T>,
    #[cfg_attr(feature = "serde", serde(skip, default))]
    filter: Filter<T>,
}

impl<T: Integer<T>> IntGene<T> {
    pub fn new(range: Range<T>, filter: Filter<T>) -> Self {
        let allele = sample_int(&range, &filter);
        IntGene {
            allele,
            range,
            filter,
        }
    }

    pub fn range(&self) -> &Range<T> {
        &self.range
    }
}

fn sample_int<T: Integer<T>>(range: &Range<T>, filter: &Filter<T>) -> T {
    loop {
        let candidate = random_provider::range(range.clone());
        if filter.accepts(&candidate) {
            return candidate;
        }
    }
}

impl<T: Integer<T>> Gene for IntGene<T> {
    type Allele = T;

    fn allele(&self) -> &T {
        &self.allele
    }

    fn new_instance(&self) -> IntGene<T> {
        IntGene {
            allele: sample_int(&self.range, &self.filter),
            range: self.range.clone(),
            filter: self.filter.clone(),
        }
    }

    fn with_allele(&self, allele: &T) -> IntGene<T> {
        IntGene {
            allele: *allele,
            range: self.range.clone(),
            filter: self.filter.clone(),
        }
    }
}

/// An [`IntGene`] is valid while its allele is inside the range and accepted
/// by the filter.
impl<T: Integer<T>> Valid for IntGene<T> {
    fn is_valid(&self) -> bool {
        self.range.contains(&self.allele) && self.filter.accepts(&self.allele)
    }
}

impl<T: Integer<T>> ArithmeticGene for IntGene<T> {
    fn mean(&self, other: &IntGene<T>) -> IntGene<T> {
        Self::average(&[self, other])
    }

    fn average(genes: &[&Self]) -> Self {
        let sum = genes.iter().map(|gene| gene.allele.as_f64()).sum::<f64>();
        let mean = (sum / genes.len() as f64).round();

        genes[0].with_allele(&T::from_f64(mean))
    }
}

impl<T: Integer<T>> PartialEq for IntGene<T> {
    fn eq(&self, other: &Self) -> bool {
        self.allele == other.allele && self.range == other.range
    }
}

impl<T: Integer<T>> From<T> for IntGene<T> {
    fn from(allele: T) -> Self {
        IntGene {
            allele,
            range: T::MIN..T::MAX,
            filter: Filter::accept_all(),
        }
    }
}

impl<T: Integer<T>> From<Range<T>> for IntGene<T> {
    fn from(range: Range<T>) -> Self {
        IntGene::new(range, Filter::accept_all())
    }
}

impl<T: Integer<T>> Display for IntGene<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.allele)
    }
}

/// Represents a chromosome composed of integer genes.
///
/// An [`IntChromosome`] is generic over the integer type `T` and contains a
/// vector of [`IntGene<T>`] instances, suitable for optimization problems
/// where solutions are encoded as integers.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// let genes = vec![IntGene::from(0..10), IntGene::from(10..20)];
/// let chromosome = IntChromosome::new(genes);
///
/// assert!(chromosome.is_valid());
/// ```
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntChromosome<I: Integer<I>> {
    genes: Vec<IntGene<I>>,
}

impl<I: Integer<I>> IntChromosome<I> {
    pub fn new(genes: Vec<IntGene<I>>) -> Self {
        IntChromosome { genes }
    }
}

impl<I: Integer<I>> Chromosome for IntChromosome<I> {
    type Gene = IntGene<I>;

    fn genes(&self) -> &[Self::Gene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [Self::Gene] {
        &mut self.genes
    }
}

impl<I: Integer<I>> Valid for IntChromosome<I> {
    fn is_valid(&self) -> bool {
        self.genes.iter().all(|gene| gene.is_valid())
    }
}

impl<T: Integer<T>> From<(usize, Range<T>)> for IntChromosome<T> {
    fn from((size, range): (usize, Range<T>)) -> Self {
        IntChromosome {
            genes: (0..size).map(|_| IntGene::from(range.clone())).collect(),
        }
    }
}

impl<T: Integer<T>> From<Vec<T>> for IntChromosome<T> {
    fn from(alleles: Vec<T>) -> Self {
        IntChromosome {
            genes: alleles.into_iter().map(IntGene::from).collect(),
        }
    }
}

impl<T: Integer<T>> From<Vec<IntGene<T>>> for IntChromosome<T> {
    fn from(genes: Vec<IntGene<T>>) -> Self {
        IntChromosome { genes }
    }
}

impl<T: Integer<T>> FromIterator<IntGene<T>> for IntChromosome<T> {
    fn from_iter<I: IntoIterator<Item = IntGene<T>>>(iter: I) -> Self {
        IntChromosome {
            genes: iter.into_iter().collect(),
        }
    }
}

impl<T: Integer<T>> IntoIterator for IntChromosome<T> {
    type Item = IntGene<T>;
    type IntoIter = std::vec::IntoIter<IntGene<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}
