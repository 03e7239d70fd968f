use super::ChromosomeFactory;
use crate::{BitChromosome, BitGene};
use verdant_error::{VerdantResult, ensure};

/// Produces [BitChromosome]s of a fixed size whose genes draw `true` with the
/// configured rate.
///
/// # Example
/// ``` rust
/// use verdant_core::*;
///
/// // 50 genes, roughly 15% of which start out true.
/// let factory = BitFactory::new(50, 0.15).unwrap();
/// let chromosome = factory.make();
/// assert_eq!(chromosome.len(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct BitFactory {
    size: usize,
    true_rate: f32,
}

impl BitFactory {
    pub fn new(size: usize, true_rate: f32) -> VerdantResult<Self> {
        ensure!(size > 0, InvalidConfig: "chromosome size must be > 0");
        ensure!(
            (0.0..=1.0).contains(&true_rate),
            InvalidConfig: "true rate must be in [0, 1], got {}", true_rate
        );

        Ok(BitFactory { size, true_rate })
    }

    /// A fair-coin factory of the given size.
    pub fn of_size(size: usize) -> VerdantResult<Self> {
        BitFactory::new(size, 0.5)
    }
}

impl ChromosomeFactory<BitChromosome> for BitFactory {
    fn make(&self) -> BitChromosome {
        (0..self.size)
            .map(|_| BitGene::with_true_rate(self.true_rate))
            .collect()
    }
}
