use crate::{Generation, GeneticEngine};
use verdant_core::Chromosome;
use std::time::Instant;

/// Iterator over the generations of a consumed engine. Each `next()` runs
/// one full generation; an engine error ends the iteration with a panic
/// carrying the error, since `Iterator` has no error channel.
pub struct EngineIterator<C>
where
    C: Chromosome,
{
    pub(crate) engine: GeneticEngine<C>,
}

impl<C> Iterator for EngineIterator<C>
where
    C: Chromosome + 'static,
{
    type Item = Generation<C>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.engine.next() {
            Ok(generation) => Some(generation),
            Err(e) => panic!("{e}"),
        }
    }
}

/// Stopping adapters for generation iterators.
pub trait EngineIteratorExt<C: Chromosome>: Iterator<Item = Generation<C>> + Sized {
    /// Yield generations until one's best score crosses `target` in the
    /// optimization direction; that generation is the last one yielded.
    fn until_score(self, target: f32) -> UntilScore<Self> {
        UntilScore {
            inner: self,
            target,
            done: false,
        }
    }

    /// Yield generations until the accumulated wall-clock time reaches
    /// `seconds`; the crossing generation is the last one yielded.
    fn until_seconds(self, seconds: f64) -> UntilSeconds<Self> {
        UntilSeconds {
            inner: self,
            seconds,
            started: None,
            done: false,
        }
    }

    /// Yield at most `count` generations.
    fn limit(self, count: usize) -> std::iter::Take<Self> {
        self.take(count)
    }
}

impl<C: Chromosome, I: Iterator<Item = Generation<C>>> EngineIteratorExt<C> for I {}

pub struct UntilScore<I> {
    inner: I,
    target: f32,
    done: bool,
}

impl<C, I> Iterator for UntilScore<I>
where
    C: Chromosome,
    I: Iterator<Item = Generation<C>>,
{
    type Item = Generation<C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let generation = self.inner.next()?;
        if generation
            .optimize()
            .has_crossed(&generation.score().as_f32(), &self.target)
        {
            self.done = true;
        }

        Some(generation)
    }
}

pub struct UntilSeconds<I> {
    inner: I,
    seconds: f64,
    started: Option<Instant>,
    done: bool,
}

impl<C, I> Iterator for UntilSeconds<I>
where
    C: Chromosome,
    I: Iterator<Item = Generation<C>>,
{
    type Item = Generation<C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let started = *self.started.get_or_insert_with(Instant::now);
        let generation = self.inner.next()?;

        if started.elapsed().as_secs_f64() >= self.seconds {
            self.done = true;
        }

        Some(generation)
    }
}
