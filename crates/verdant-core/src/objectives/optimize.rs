#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ranker of the engine: the direction of optimization together with the
/// total order it induces on scores and the fitness transform used by
/// probabilistic selection.
///
/// * `Maximize` ranks higher scores first; its fitness transform is the
///   identity.
/// * `Minimize` ranks lower scores first; its fitness transform reflects each
///   fitness around the population total (`sum - f`) so that better
///   individuals receive proportionally more selection mass.
///
/// Sorting under either direction is stable: ties keep their insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Optimize {
    #[default]
    Maximize,
    Minimize,
}

impl Optimize {
    /// Whether `a` is strictly better than `b` in this direction.
    pub fn is_better<T>(&self, a: &T, b: &T) -> bool
    where
        T: PartialOrd,
    {
        match self {
            Optimize::Minimize => a < b,
            Optimize::Maximize => a > b,
        }
    }

    /// The ordering that puts better values first.
    pub fn cmp<T>(&self, a: &T, b: &T) -> std::cmp::Ordering
    where
        T: PartialOrd,
    {
        if self.is_better(a, b) {
            std::cmp::Ordering::Less
        } else if self.is_better(b, a) {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    }

    /// Stable best-first sort of any ordered slice.
    pub fn sort<T, K>(&self, values: &mut T)
    where
        T: AsMut<[K]>,
        K: PartialOrd,
    {
        values.as_mut().sort_by(|a, b| self.cmp(a, b));
    }

    /// Whether `value` has crossed `target` in this direction - at or above
    /// the target when maximizing, at or below when minimizing.
    pub fn has_crossed<T>(&self, value: &T, target: &T) -> bool
    where
        T: PartialOrd,
    {
        match self {
            Optimize::Maximize => value >= target,
            Optimize::Minimize => value <= target,
        }
    }

    /// The fitness transform applied before probabilistic selection
    /// arithmetic. Identity when maximizing; reflection around the population
    /// total (`sum - f`) when minimizing.
    pub fn transform(&self, fitnesses: &mut [f32]) {
        if let Optimize::Minimize = self {
            let sum = fitnesses.iter().sum::<f32>();
            for fitness in fitnesses.iter_mut() {
                *fitness = sum - *fitness;
            }
        }
    }
}
