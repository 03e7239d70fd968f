//! A Rust library for evolutionary computation.
//!
//! This crate re-exports the whole engine surface: the genetic data model
//! and operator contracts from `verdant-core`, the selection strategies from
//! `verdant-selectors`, the crossover and mutation operators from
//! `verdant-alters`, and the generation-by-generation evolution engine from
//! `verdant-engines`.
//!
//! # Example
//! ``` no_run
//! use verdant::*;
//!
//! // Count the ones in a 20-bit chromosome and evolve towards all ones.
//! let mut engine = GeneticEngine::builder()
//!     .genotype_factory(GenotypeFactory::single(BitFactory::new(20, 0.5).unwrap()))
//!     .fitness_fn(|genotype: &Genotype<BitChromosome>| {
//!         genotype[0].iter().filter(|gene| *gene.allele()).count() as f32
//!     })
//!     .alter(alters![
//!         UniformCrossover::new(0.6),
//!         BitFlipMutator::new(0.5)
//!     ])
//!     .limit(Limit::score(20.0))
//!     .build();
//!
//! let best = engine.evolve().unwrap();
//! println!("{:?}", best);
//! ```

pub use verdant_engines::*;
pub use verdant_error::{ErrorCode, VerdantError, VerdantResult};
