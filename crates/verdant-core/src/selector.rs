use crate::genome::population::Population;
use crate::objectives::Optimize;
use crate::Chromosome;
use verdant_error::VerdantResult;

/// A selection algorithm: chooses `count` individuals from a [Population]
/// under a ranker, usually based on fitness. Selection is with replacement
/// unless an implementation says otherwise - the same individual may be
/// chosen more than once.
///
/// The engine wraps every invocation: it rejects selection from an empty
/// population and verifies that the returned population holds exactly
/// `count` individuals.
pub trait Select<C: Chromosome>: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .split('<')
            .next()
            .unwrap_or(std::any::type_name::<Self>())
            .split("::")
            .last()
            .unwrap_or("Unknown Selector")
    }

    fn select(
        &self,
        population: &Population<C>,
        optimize: &Optimize,
        count: usize,
    ) -> VerdantResult<Population<C>>;
}
