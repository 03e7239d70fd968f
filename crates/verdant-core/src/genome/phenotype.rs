use super::{Valid, genotype::Genotype};
use crate::Chromosome;
use crate::objectives::{Score, Scored};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A [Phenotype] is one individual of the population: a [Genotype] together
/// with the outcome of evaluating it. It carries:
/// * `genotype` - the genetic representation of the individual
/// * `score` - the fitness assigned by the fitness function, or `None` while
///   the individual has not been evaluated yet
/// * `generation` - the generation in which the individual was created
///
/// Two phenotypes compare equal iff their genotypes compare equal; the score
/// is not part of an individual's identity.
///
/// # Type Parameters
/// - `C`: The type of chromosome used in the genotype.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Phenotype<C: Chromosome> {
    genotype: Genotype<C>,
    score: Option<Score>,
    generation: usize,
}

impl<C: Chromosome> Phenotype<C> {
    pub fn genotype(&self) -> &Genotype<C> {
        &self.genotype
    }

    pub fn genotype_mut(&mut self) -> &mut Genotype<C> {
        &mut self.genotype
    }

    pub fn set_score(&mut self, score: Option<Score>) {
        self.score = score;
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }

    /// Drop the score and restamp the individual as born in the given
    /// generation. Called after an operator changed the genotype.
    pub fn invalidate(&mut self, generation: usize) {
        self.score = None;
        self.generation = generation;
    }

    /// The age of the individual in generations relative to the given
    /// generation.
    pub fn age(&self, generation: usize) -> usize {
        generation - self.generation
    }
}

impl<C: Chromosome> Scored for Phenotype<C> {
    fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }
}

/// A `Phenotype` is valid if its `Genotype` is valid. It is additionally
/// *verified* once it has been evaluated.
impl<C: Chromosome> Valid for Phenotype<C> {
    fn is_valid(&self) -> bool {
        self.genotype.is_valid()
    }
}

impl<C: Chromosome + PartialEq> PartialEq for Phenotype<C> {
    fn eq(&self, other: &Self) -> bool {
        self.genotype == other.genotype
    }
}

/// Phenotypes are ordered by their scores; unevaluated phenotypes are
/// unordered with respect to evaluated ones.
impl<C: Chromosome + PartialEq> PartialOrd for Phenotype<C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.score().partial_cmp(&other.score())
    }
}

impl<C: Chromosome> From<Genotype<C>> for Phenotype<C> {
    fn from(genotype: Genotype<C>) -> Self {
        Phenotype {
            genotype,
            score: None,
            generation: 0,
        }
    }
}

impl<C: Chromosome> From<(Genotype<C>, usize)> for Phenotype<C> {
    fn from((genotype, generation): (Genotype<C>, usize)) -> Self {
        Phenotype {
            genotype,
            score: None,
            generation,
        }
    }
}

/// Convenience for tests and callers that hold loose chromosomes - builds the
/// genotype in between.
impl<C: Chromosome> From<(Vec<C>, usize)> for Phenotype<C> {
    fn from((chromosomes, generation): (Vec<C>, usize)) -> Self {
        Phenotype {
            genotype: Genotype::new(chromosomes),
            score: None,
            generation,
        }
    }
}
