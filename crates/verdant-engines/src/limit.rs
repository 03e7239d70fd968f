use crate::Generation;
use verdant_core::{Chromosome, Score};
use std::time::Instant;

/// A termination predicate over engine state. The engine checks its limits
/// after every generation and stops as soon as any one of them reports
/// true.
///
/// Limits that need memory (steady-state detection, wall-clock budgets)
/// carry it themselves, which is why checking takes `&mut self`.
pub enum Limit<C: Chromosome> {
    /// Stop once the given number of generations has completed.
    Generations(usize),
    /// Stop once the best score crosses the target in the optimization
    /// direction - at or above when maximizing, at or below when
    /// minimizing.
    Score(f32),
    /// Stop once the best score has gone `window` consecutive generations
    /// without strict improvement under the ranker.
    Steady {
        window: usize,
        best: Option<Score>,
        steady: usize,
    },
    /// Stop once the run has consumed the given wall-clock budget. The
    /// clock starts at the first check.
    Seconds { budget: f64, started: Option<Instant> },
    /// A user-supplied predicate.
    Match(Box<dyn FnMut(&Generation<C>) -> bool>),
}

impl<C: Chromosome> Limit<C> {
    pub fn generations(count: usize) -> Self {
        Limit::Generations(count)
    }

    pub fn score(target: f32) -> Self {
        Limit::Score(target)
    }

    pub fn steady(window: usize) -> Self {
        Limit::Steady {
            window,
            best: None,
            steady: 0,
        }
    }

    pub fn seconds(budget: f64) -> Self {
        Limit::Seconds {
            budget,
            started: None,
        }
    }

    pub fn matching(predicate: impl FnMut(&Generation<C>) -> bool + 'static) -> Self {
        Limit::Match(Box::new(predicate))
    }

    pub(crate) fn reached(&mut self, generation: &Generation<C>) -> bool {
        match self {
            Limit::Generations(count) => generation.index() >= *count,
            Limit::Score(target) => generation
                .optimize()
                .has_crossed(&generation.score().as_f32(), target),
            Limit::Steady {
                window,
                best,
                steady,
            } => {
                let current = generation.score();
                let improved = match best {
                    None => true,
                    Some(previous) => generation.optimize().is_better(&current, previous),
                };

                if improved {
                    *best = Some(current);
                    *steady = 0;
                } else {
                    *steady += 1;
                }

                *steady >= *window
            }
            Limit::Seconds { budget, started } => {
                let started = started.get_or_insert_with(Instant::now);
                started.elapsed().as_secs_f64() >= *budget
            }
            Limit::Match(predicate) => predicate(generation),
        }
    }
}
