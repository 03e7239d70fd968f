use super::{ChromosomeFactory, spread};
use crate::genome::chromosomes::char::DEFAULT_CHAR_RANGE;
use crate::{CharChromosome, CharGene, Filter};
use verdant_error::{VerdantResult, ensure};
use std::ops::RangeInclusive;

/// Produces [CharChromosome]s of a fixed size under the per-index
/// range/filter rule. The default range is the printable ASCII characters.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// let factory = CharFactory::new(
///     6,
///     vec!['a'..='z'],
///     vec![Filter::new(|c: &char| *c != 'q')],
/// )
/// .unwrap();
///
/// let chromosome = factory.make();
/// assert_eq!(chromosome.len(), 6);
/// ```
#[derive(Clone)]
pub struct CharFactory {
    size: usize,
    ranges: Vec<RangeInclusive<char>>,
    filters: Vec<Filter<char>>,
}

impl CharFactory {
    pub fn new(
        size: usize,
        ranges: Vec<RangeInclusive<char>>,
        filters: Vec<Filter<char>>,
    ) -> VerdantResult<Self> {
        ensure!(size > 0, InvalidConfig: "chromosome size must be > 0");

        let ranges = spread(ranges, size, DEFAULT_CHAR_RANGE, "ranges")?;
        for range in &ranges {
            ensure!(
                range.start() < range.end(),
                InvalidConfig: "range {:?}..={:?} is empty", range.start(), range.end()
            );
        }

        let filters = spread(filters, size, Filter::accept_all(), "filters")?;

        Ok(CharFactory {
            size,
            ranges,
            filters,
        })
    }

    /// All indices share one range, accept-all filters.
    pub fn of_range(size: usize, range: RangeInclusive<char>) -> VerdantResult<Self> {
        CharFactory::new(size, vec![range], Vec::new())
    }

    /// Printable ASCII for every index.
    pub fn of_size(size: usize) -> VerdantResult<Self> {
        CharFactory::new(size, Vec::new(), Vec::new())
    }
}

impl ChromosomeFactory<CharChromosome> for CharFactory {
    fn make(&self) -> CharChromosome {
        (0..self.size)
            .map(|i| CharGene::new(self.ranges[i].clone(), self.filters[i].clone()))
            .collect()
    }
}
