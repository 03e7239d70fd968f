use crate::{Chromosome, Gene, Valid, random_provider};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// A gene that represents a single bit. The `allele` is a `bool` drawn with
/// probability `true_rate` of being `true` - the default is a fair coin.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // Create a new BitGene with a fair coin allele.
/// let gene = BitGene::new();
///
/// // Create a sparse BitGene - roughly 15% of generated alleles are true.
/// let sparse = BitGene::with_true_rate(0.15);
///
/// // Create a new BitGene from the allele.
/// let gene = gene.with_allele(gene.allele());
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitGene {
    allele: bool,
    true_rate: f32,
}

impl BitGene {
    /// Create a new [`BitGene`] with a random allele.
    pub fn new() -> Self {
        BitGene::with_true_rate(0.5)
    }

    /// Create a new [`BitGene`] whose generator produces `true` with the
    /// given probability.
    pub fn with_true_rate(true_rate: f32) -> Self {
        BitGene {
            allele: random_provider::bool(true_rate),
            true_rate,
        }
    }

    pub fn true_rate(&self) -> f32 {
        self.true_rate
    }
}

impl Gene for BitGene {
    type Allele = bool;

    fn allele(&self) -> &bool {
        &self.allele
    }

    fn new_instance(&self) -> BitGene {
        BitGene {
            allele: random_provider::bool(self.true_rate),
            true_rate: self.true_rate,
        }
    }

    fn with_allele(&self, allele: &bool) -> BitGene {
        BitGene {
            allele: *allele,
            true_rate: self.true_rate,
        }
    }
}

/// Because a [`BitGene`] is either `true` or `false` it is always valid.
impl Valid for BitGene {}

impl Default for BitGene {
    fn default() -> Self {
        BitGene::new()
    }
}

impl Display for BitGene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.allele { 1 } else { 0 })
    }
}

impl From<BitGene> for bool {
    fn from(gene: BitGene) -> bool {
        gene.allele
    }
}

impl From<bool> for BitGene {
    fn from(allele: bool) -> BitGene {
        BitGene {
            allele,
            true_rate: 0.5,
        }
    }
}

/// A [`Chromosome`] that contains [`BitGene`]s.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitChromosome {
    genes: Vec<BitGene>,
}

impl BitChromosome {
    /// Create a new [`BitChromosome`] with the given number of fair-coin genes.
    pub fn new(length: usize) -> Self {
        let genes = (0..length).map(|_| BitGene::new()).collect();
        BitChromosome { genes }
    }
}

impl Chromosome for BitChromosome {
    type Gene = BitGene;

    fn genes(&self) -> &[Self::Gene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [Self::Gene] {
        &mut self.genes
    }
}

/// Every `BitGene` is valid, so the `BitChromosome` is also valid.
impl Valid for BitChromosome {
    fn is_valid(&self) -> bool {
        true
    }
}

impl From<(usize, f32)> for BitChromosome {
    fn from((length, true_rate): (usize, f32)) -> Self {
        BitChromosome {
            genes: (0..length)
                .map(|_| BitGene::with_true_rate(true_rate))
                .collect(),
        }
    }
}

impl From<Vec<BitGene>> for BitChromosome {
    fn from(genes: Vec<BitGene>) -> Self {
        BitChromosome { genes }
    }
}

impl From<Vec<bool>> for BitChromosome {
    fn from(alleles: Vec<bool>) -> Self {
        BitChromosome {
            genes: alleles.into_iter().map(BitGene::from).collect(),
        }
    }
}

impl FromIterator<BitGene> for BitChromosome {
    fn from_iter<I: IntoIterator<Item = BitGene>>(iter: I) -> Self {
        BitChromosome {
            genes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BitChromosome {
    type Item = BitGene;
    type IntoIter = std::vec::IntoIter<BitGene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}
