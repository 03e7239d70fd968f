use super::{
    Chromosome,
    gene::{Filter, Gene, Valid},
};
use crate::random_provider;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::RangeInclusive;

/// The default character range used for the `CharGene` and `CharChromosome`:
/// the printable ASCII characters.
pub(crate) const DEFAULT_CHAR_RANGE: RangeInclusive<char> = ' '..='~';

/// A gene that represents a single character drawn from a closed character
/// range, optionally narrowed by a filter. The generator draws uniformly from
/// the range and rejects until the filter accepts.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // A gene over the printable ASCII range.
/// let gene = CharGene::default();
///
/// // A gene over lowercase letters, excluding vowels.
/// let consonant = CharGene::new('a'..='z', Filter::new(|c: &char| !"aeiou".contains(*c)));
/// assert!(consonant.is_valid());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharGene {
    allele: char,
    range: RangeInclusive<char>,
    #[cfg_attr(feature = "serde", serde(skip, default))]
    filter: Filter<char>,
}

impl CharGene {
    pub fn new(range: RangeInclusive<char>, filter: Filter<char>) -> Self {
        let allele = sample_char(&range, &filter);
        CharGene {
            allele,
            range,
            filter,
        }
    }

    pub fn range(&self) -> &RangeInclusive<char> {
        &self.range
    }
}

fn sample_char(range: &RangeInclusive<char>, filter: &Filter<char>) -> char {
    let (start, end) = (*range.start() as u32, *range.end() as u32);
    loop {
        let candidate = random_provider::range(start..end + 1);
        if let Some(c) = char::from_u32(candidate) {
            if filter.accepts(&c) {
                return c;
            }
        }
    }
}

impl Gene for CharGene {
    type Allele = char;

    fn allele(&self) -> &char {
        &self.allele
    }

    fn new_instance(&self) -> CharGene {
        CharGene {
            allele: sample_char(&self.range, &self.filter),
            range: self.range.clone(),
            filter: self.filter.clone(),
        }
    }

    fn with_allele(&self, allele: &char) -> CharGene {
        CharGene {
            allele: *allele,
            range: self.range.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl Valid for CharGene {
    fn is_valid(&self) -> bool {
        self.range.contains(&self.allele) && self.filter.accepts(&self.allele)
    }
}

impl PartialEq for CharGene {
    fn eq(&self, other: &Self) -> bool {
        self.allele == other.allele && self.range == other.range
    }
}

impl Default for CharGene {
    fn default() -> Self {
        CharGene::new(DEFAULT_CHAR_RANGE, Filter::accept_all())
    }
}

impl Display for CharGene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.allele)
    }
}

impl From<CharGene> for char {
    fn from(gene: CharGene) -> char {
        gene.allele
    }
}

impl From<char> for CharGene {
    fn from(allele: char) -> Self {
        CharGene {
            allele,
            range: DEFAULT_CHAR_RANGE,
            filter: Filter::accept_all(),
        }
    }
}

impl From<RangeInclusive<char>> for CharGene {
    fn from(range: RangeInclusive<char>) -> Self {
        CharGene::new(range, Filter::accept_all())
    }
}

/// A [`Chromosome`] of [`CharGene`]s.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharChromosome {
    genes: Vec<CharGene>,
}

impl CharChromosome {
    pub fn new(genes: Vec<CharGene>) -> Self {
        CharChromosome { genes }
    }
}

impl Chromosome for CharChromosome {
    type Gene = CharGene;

    fn genes(&self) -> &[Self::Gene] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [Self::Gene] {
        &mut self.genes
    }
}

impl Valid for CharChromosome {
    fn is_valid(&self) -> bool {
        self.genes.iter().all(|gene| gene.is_valid())
    }
}

impl From<(usize, RangeInclusive<char>)> for CharChromosome {
    fn from((size, range): (usize, RangeInclusive<char>)) -> Self {
        CharChromosome {
            genes: (0..size)
                .map(|_| CharGene::from(range.clone()))
                .collect(),
        }
    }
}

impl From<&str> for CharChromosome {
    fn from(value: &str) -> Self {
        CharChromosome {
            genes: value.chars().map(CharGene::from).collect(),
        }
    }
}

impl From<Vec<CharGene>> for CharChromosome {
    fn from(genes: Vec<CharGene>) -> Self {
        CharChromosome { genes }
    }
}

impl FromIterator<CharGene> for CharChromosome {
    fn from_iter<I: IntoIterator<Item = CharGene>>(iter: I) -> Self {
        CharChromosome {
            genes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CharChromosome {
    type Item = CharGene;
    type IntoIter = std::vec::IntoIter<CharGene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}

impl Display for CharChromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for gene in &self.genes {
            write!(f, "{}", gene)?;
        }
        Ok(())
    }
}
