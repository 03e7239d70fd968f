use super::{ChromosomeFactory, spread};
use crate::genome::chromosomes::float;
use crate::{Filter, FloatChromosome, FloatGene};
use verdant_error::{VerdantResult, ensure};
use std::ops::Range;

/// Produces [FloatChromosome]s of a fixed size under the per-index
/// range/filter rule. The default range is the full `FloatGene` domain.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // Two coordinates in [-5, 5).
/// let factory = FloatFactory::of_range(2, -5.0..5.0).unwrap();
/// let chromosome = factory.make();
/// assert_eq!(chromosome.len(), 2);
/// ```
#[derive(Clone)]
pub struct FloatFactory {
    size: usize,
    ranges: Vec<Range<f32>>,
    filters: Vec<Filter<f32>>,
}

impl FloatFactory {
    pub fn new(
        size: usize,
        ranges: Vec<Range<f32>>,
        filters: Vec<Filter<f32>>,
    ) -> VerdantResult<Self> {
        ensure!(size > 0, InvalidConfig: "chromosome size must be > 0");

        let ranges = spread(ranges, size, float::MIN..float::MAX, "ranges")?;
        for range in &ranges {
            ensure!(
                range.start < range.end,
                InvalidConfig: "range {}..{} is empty", range.start, range.end
            );
        }

        let filters = spread(filters, size, Filter::accept_all(), "filters")?;

        Ok(FloatFactory {
            size,
            ranges,
            filters,
        })
    }

    /// All indices share one range, accept-all filters.
    pub fn of_range(size: usize, range: Range<f32>) -> VerdantResult<Self> {
        FloatFactory::new(size, vec![range], Vec::new())
    }
}

impl ChromosomeFactory<FloatChromosome> for FloatFactory {
    fn make(&self) -> FloatChromosome {
        (0..self.size)
            .map(|i| FloatGene::new(self.ranges[i].clone(), self.filters[i].clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Chromosome, Gene, Valid};

    #[test]
    fn test_make() {
        let factory = FloatFactory::of_range(5, -1.0..1.0).unwrap();
        let chromosome = factory.make();

        assert_eq!(chromosome.len(), 5);
        assert!(chromosome.is_valid());
        for gene in chromosome.iter() {
            assert!((-1.0..1.0).contains(gene.allele()));
        }
    }

    #[test]
    fn test_make_honors_filter() {
        let factory = FloatFactory::new(
            4,
            vec![-1.0..1.0],
            vec![Filter::new(|v: &f32| *v >= 0.0)],
        )
        .unwrap();

        for _ in 0..20 {
            let chromosome = factory.make();
            assert!(chromosome.iter().all(|gene| *gene.allele() >= 0.0));
        }
    }

    #[test]
    fn test_invalid_config() {
        assert!(FloatFactory::new(0, Vec::new(), Vec::new()).is_err());
        assert!(FloatFactory::new(3, vec![1.0..1.0], Vec::new()).is_err());
        assert!(FloatFactory::new(3, vec![0.0..1.0, 0.0..1.0], Vec::new()).is_err());
    }
}
