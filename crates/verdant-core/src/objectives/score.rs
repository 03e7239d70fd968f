#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

pub trait Scored {
    fn score(&self) -> Option<&Score>;
}

/// A score represents the fitness of an individual as computed by the user's
/// fitness function. A score is always a finite number - non-finite fitness
/// values are rejected at evaluation time - so any two scores are ordered.
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Score {
    value: f32,
}

impl Score {
    pub fn as_f32(&self) -> f32 {
        self.value
    }

    pub fn as_i32(&self) -> i32 {
        self.value as i32
    }

    pub fn as_usize(&self) -> usize {
        self.value as usize
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Hash for Score {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl From<f32> for Score {
    fn from(value: f32) -> Self {
        if value.is_nan() {
            panic!("Score value cannot be NaN")
        }

        Score { value }
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score {
            value: value as f32,
        }
    }
}

impl From<usize> for Score {
    fn from(value: usize) -> Self {
        Score {
            value: value as f32,
        }
    }
}

impl From<Score> for f32 {
    fn from(score: Score) -> f32 {
        score.value
    }
}
