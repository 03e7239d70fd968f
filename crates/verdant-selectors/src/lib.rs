pub mod elite;
pub mod random_selector;
pub mod roulette;
pub mod tournament;

use verdant_core::random_provider;

pub use elite::EliteSelector;
pub use random_selector::RandomSelector;
pub use roulette::RouletteSelector;
pub use tournament::TournamentSelector;

/// The 'roulette wheel' behind probabilistic selection: an iterator over
/// population indexes where the chance of an index being produced is
/// proportional to its weight. When the total weight is zero, not finite, or
/// otherwise unusable, the wheel degrades to a uniform draw.
pub(crate) struct ProbabilityWheelIterator {
    cdf: Vec<f32>,
    remaining: usize,
    uniform: bool,
}

impl ProbabilityWheelIterator {
    pub fn new(weights: &[f32], count: usize) -> Self {
        let mut cdf = Vec::with_capacity(weights.len());
        let mut total = 0.0f32;

        for &weight in weights {
            let w = if weight.is_finite() && weight > 0.0 {
                weight
            } else {
                0.0
            };
            total += w;
            cdf.push(total);
        }

        let uniform = !total.is_finite() || total <= 0.0;
        if !uniform && total != 1.0 {
            let inv = 1.0 / total;
            for value in &mut cdf {
                *value *= inv;
            }
        }

        Self {
            cdf,
            remaining: count,
            uniform,
        }
    }
}

impl Iterator for ProbabilityWheelIterator {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.cdf.is_empty() {
            return None;
        }

        let n = self.cdf.len();
        let index = if self.uniform {
            random_provider::range(0..n)
        } else {
            // first cumulative threshold >= the sample
            let sample = random_provider::random::<f32>();
            let i = self
                .cdf
                .binary_search_by(|v| v.partial_cmp(&sample).unwrap_or(std::cmp::Ordering::Less))
                .unwrap_or_else(|i| i);
            i.min(n - 1)
        };

        self.remaining -= 1;
        Some(index)
    }
}
