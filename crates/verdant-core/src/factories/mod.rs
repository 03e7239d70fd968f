pub mod bit;
pub mod char;
pub mod float;
pub mod int;
pub mod permutation;

pub use bit::BitFactory;
pub use char::CharFactory;
pub use float::FloatFactory;
pub use int::IntFactory;
pub use permutation::PermutationFactory;

use crate::{Chromosome, Genotype};
use verdant_error::{VerdantResult, verdant_err};
use std::sync::Arc;

/// A deterministic-given-PRNG constructor for one chromosome. Factories own
/// the shape of the chromosome they produce (size, per-index ranges and
/// filters); all randomness is drawn from the process random source, so a
/// seeded run produces a reproducible initial population.
///
/// Factory constructors validate their configuration up front and never
/// partially construct anything; `make` itself cannot fail.
pub trait ChromosomeFactory<C: Chromosome>: Send + Sync {
    fn make(&self) -> C;
}

impl<C: Chromosome, F> ChromosomeFactory<C> for F
where
    F: Fn() -> C + Send + Sync,
{
    fn make(&self) -> C {
        self()
    }
}

/// Produces whole genotypes: one chromosome per configured factory, in order.
/// This is what the engine invokes `population_size` times to build the
/// initial population.
#[derive(Clone)]
pub struct GenotypeFactory<C: Chromosome> {
    factories: Vec<Arc<dyn ChromosomeFactory<C>>>,
}

impl<C: Chromosome> GenotypeFactory<C> {
    pub fn new(factories: Vec<Arc<dyn ChromosomeFactory<C>>>) -> VerdantResult<Self> {
        if factories.is_empty() {
            return Err(
                verdant_err!(InvalidConfig: "genotype factory needs at least one chromosome factory"),
            );
        }

        Ok(GenotypeFactory { factories })
    }

    /// A genotype of a single chromosome.
    pub fn single(factory: impl ChromosomeFactory<C> + 'static) -> Self {
        GenotypeFactory {
            factories: vec![Arc::new(factory)],
        }
    }

    /// A genotype of `copies` chromosomes all produced by the same factory.
    pub fn repeated(
        factory: impl ChromosomeFactory<C> + 'static,
        copies: usize,
    ) -> VerdantResult<Self> {
        if copies == 0 {
            return Err(verdant_err!(InvalidConfig: "genotype needs at least one chromosome"));
        }

        let factory: Arc<dyn ChromosomeFactory<C>> = Arc::new(factory);
        Ok(GenotypeFactory {
            factories: (0..copies).map(|_| Arc::clone(&factory)).collect(),
        })
    }

    pub fn make(&self) -> Genotype<C> {
        self.factories
            .iter()
            .map(|factory| factory.make())
            .collect()
    }
}

/// Applies the shared list-length rule for per-index configuration: a list of
/// 0 entries means "use the default for every index", 1 entry broadcasts to
/// every index, and exactly `size` entries configure each index individually.
pub(crate) fn spread<T: Clone>(
    items: Vec<T>,
    size: usize,
    default: T,
    what: &str,
) -> VerdantResult<Vec<T>> {
    match items.len() {
        0 => Ok(vec![default; size]),
        1 => Ok(vec![items[0].clone(); size]),
        n if n == size => Ok(items),
        n => Err(verdant_err!(
            InvalidConfig: "expected 0, 1, or {} {}, got {}", size, what, n
        )),
    }
}
