use super::{ChromosomeFactory, spread};
use crate::{Filter, IntChromosome, IntGene, Integer};
use verdant_error::{VerdantResult, ensure};
use std::ops::Range;

/// Produces [IntChromosome]s of a fixed size. Ranges and filters follow the
/// per-index rule: an empty list means the full range of the integer type
/// (resp. accept-all) for every index, a single entry broadcasts to every
/// index, and `size` entries configure each index individually.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // 15 genes over 1..50, restricted to primes or one.
/// let primes = [1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
/// let factory = IntFactory::new(
///     15,
///     vec![1..50],
///     vec![Filter::new(move |v: &i32| primes.contains(v))],
/// )
/// .unwrap();
///
/// let chromosome = factory.make();
/// assert_eq!(chromosome.len(), 15);
/// ```
#[derive(Clone)]
pub struct IntFactory<T: Integer<T>> {
    size: usize,
    ranges: Vec<Range<T>>,
    filters: Vec<Filter<T>>,
}

impl<T: Integer<T>> IntFactory<T> {
    pub fn new(
        size: usize,
        ranges: Vec<Range<T>>,
        filters: Vec<Filter<T>>,
    ) -> VerdantResult<Self> {
        ensure!(size > 0, InvalidConfig: "chromosome size must be > 0");

        let ranges = spread(ranges, size, T::MIN..T::MAX, "ranges")?;
        for range in &ranges {
            ensure!(
                range.start < range.end,
                InvalidConfig: "range {}..{} is empty", range.start, range.end
            );
        }

        let filters = spread(filters, size, Filter::accept_all(), "filters")?;

        Ok(IntFactory {
            size,
            ranges,
            filters,
        })
    }

    /// All indices share one range, accept-all filters.
    pub fn of_range(size: usize, range: Range<T>) -> VerdantResult<Self> {
        IntFactory::new(size, vec![range], Vec::new())
    }
}

impl<T: Integer<T>> ChromosomeFactory<IntChromosome<T>> for IntFactory<T> {
    fn make(&self) -> IntChromosome<T> {
        (0..self.size)
            .map(|i| IntGene::new(self.ranges[i].clone(), self.filters[i].clone()))
            .collect()
    }
}
