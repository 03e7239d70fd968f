use crate::{Chromosome, Gene, Genotype, Phenotype, Population, Valid, random_provider};
use verdant_error::{VerdantResult, ensure};

/// An alterer is any operator that produces new genetic material from
/// existing material - in this library either a crossover or a mutator. The
/// engine applies the configured alterers in order to the offspring pool of
/// each generation.
///
/// `alter` reports how many operations it performed so the engine can record
/// operator metrics and listeners can observe alteration activity.
pub trait Alter<C: Chromosome>: Send + Sync {
    fn name(&self) -> &'static str;

    /// The operator's headline rate, used for configuration validation:
    /// the chromosome rate of a crossover, the individual rate of a mutator.
    fn rate(&self) -> f32;

    fn alter(&self, population: &mut Population<C>, generation: usize) -> VerdantResult<usize>;
}

/// The two kinds of alteration. The set is closed, so composition is a
/// tagged variant rather than another trait object layer.
pub enum AlterAction<C: Chromosome> {
    Mutate(&'static str, Box<dyn Mutate<C>>),
    Crossover(&'static str, Box<dyn Crossover<C>>),
}

impl<C: Chromosome> Alter<C> for AlterAction<C> {
    fn name(&self) -> &'static str {
        match self {
            AlterAction::Mutate(name, _) => *name,
            AlterAction::Crossover(name, _) => *name,
        }
    }


    fn rate(&self) -> f32 {
        match self {
            AlterAction::Mutate(_, m) => m.individual_rate(),
            AlterAction::Crossover(_, c) => c.rate(),
        }
    }

    fn alter(&self, population: &mut Population<C>, generation: usize) -> VerdantResult<usize> {
        match self {
            AlterAction::Mutate(_, m) => m.mutate(population, generation),
            AlterAction::Crossover(_, c) => {
                let (offspring, count) = c.crossover(population, generation)?;
                *population = offspring;
                Ok(count)
            }
        }
    }
}

/// Builds a `Vec<Box<dyn Alter<_>>>` from a list of crossover and mutator
/// instances:
///
/// ```ignore
/// let alterers = alters![
///     UniformCrossover::new(0.6),
///     RandomMutator::new(0.1),
/// ];
/// ```
#[macro_export]
macro_rules! alters {
    ($($struct_instance:expr),* $(,)?) => {
        {
            let mut vec: Vec<Box<dyn Alter<_>>> = Vec::new();
            $(
                vec.push(Box::new($struct_instance.alterer()));
            )*
            vec
        }
    };
}

/// A crossover recombines the chromosomes of a group of parents into
/// offspring. A crossover declares how many parents it consumes, how many
/// offspring a group produces, a chromosome rate gating recombination per
/// chromosome index, and whether parent groups are drawn without replacement
/// (`exclusivity`).
///
/// The provided `crossover` builds a fresh offspring population of the same
/// size as the parent pool; offspring are always unevaluated. The provided
/// `cross_genotypes` walks the chromosome indices of one parent group and
/// recombines each with probability `rate`, copying the first parent's
/// chromosome unchanged otherwise. Implementations usually only supply
/// `cross_chromosomes`.
pub trait Crossover<C: Chromosome>: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>().split("::").last().unwrap()
    }

    /// The chromosome rate in `[0, 1]`.
    fn rate(&self) -> f32;

    fn num_parents(&self) -> usize {
        2
    }

    fn num_offspring(&self) -> usize {
        2
    }

    fn exclusivity(&self) -> bool {
        false
    }

    fn alterer(self) -> AlterAction<C>
    where
        Self: Sized + 'static,
    {
        AlterAction::Crossover(self.name(), Box::new(self))
    }

    #[inline]
    fn crossover(
        &self,
        population: &Population<C>,
        generation: usize,
    ) -> VerdantResult<(Population<C>, usize)> {
        if population.len() < self.num_parents() || self.num_offspring() == 0 {
            return Ok((population.clone(), 0));
        }

        let mut offspring = Vec::with_capacity(population.len());
        let mut count = 0;

        while offspring.len() < population.len() {
            let group = if self.exclusivity() {
                let mut indexes = random_provider::shuffled_indices(0..population.len());
                indexes.truncate(self.num_parents());
                indexes
            } else {
                (0..self.num_parents())
                    .map(|_| random_provider::range(0..population.len()))
                    .collect()
            };

            let parents = group
                .iter()
                .map(|&index| population[index].genotype())
                .collect::<Vec<_>>();

            let (children, crossed) = self.cross_genotypes(&parents)?;
            count += crossed;

            for child in children {
                if offspring.len() < population.len() {
                    offspring.push(Phenotype::from((child, generation)));
                }
            }
        }

        Ok((Population::new(offspring), count))
    }

    #[inline]
    fn cross_genotypes(
        &self,
        parents: &[&Genotype<C>],
    ) -> VerdantResult<(Vec<Genotype<C>>, usize)> {
        ensure!(
            parents.len() == self.num_parents(),
            Operator: "{} expected {} parents, got {}", self.name(), self.num_parents(), parents.len()
        );

        let chromosome_count = parents[0].len();
        for parent in &parents[1..] {
            ensure!(
                parent.len() == chromosome_count,
                Operator: "{} received genotypes of different chromosome counts", self.name()
            );
        }

        let mut children = (0..self.num_offspring())
            .map(|_| Vec::with_capacity(chromosome_count))
            .collect::<Vec<Vec<C>>>();
        let mut crossed = 0;

        for i in 0..chromosome_count {
            let at_index = parents
                .iter()
                .map(|parent| &parent[i])
                .collect::<Vec<&C>>();

            let length = at_index[0].len();
            for chromosome in &at_index[1..] {
                ensure!(
                    chromosome.len() == length,
                    Operator: "{} received chromosomes of unequal length at index {}", self.name(), i
                );
            }

            if random_provider::bool(self.rate()) {
                let recombined = self.cross_chromosomes(&at_index)?;
                ensure!(
                    recombined.len() == self.num_offspring(),
                    Operator: "{} produced {} chromosomes, expected {}", self.name(), recombined.len(), self.num_offspring()
                );

                for chromosome in &recombined {
                    ensure!(
                        chromosome.len() == length,
                        Operator: "{} changed the chromosome length at index {}", self.name(), i
                    );
                }

                for (child, chromosome) in children.iter_mut().zip(recombined) {
                    child.push(chromosome);
                }

                crossed += 1;
            } else {
                for child in children.iter_mut() {
                    child.push(at_index[0].clone());
                }
            }
        }

        Ok((children.into_iter().map(Genotype::new).collect(), crossed))
    }

    /// Recombine the parent chromosomes at one index into `num_offspring`
    /// chromosomes. All parents are guaranteed to have equal length.
    fn cross_chromosomes(&self, parents: &[&C]) -> VerdantResult<Vec<C>>;
}

/// A mutator perturbs individuals in place. Each mutator declares three
/// rates, all in `[0, 1]`:
/// * `individual_rate` - the probability an individual is considered at all,
/// * `chromosome_rate` - the probability each of its chromosomes is mutated,
/// * `gene_rate` - the fraction of gene positions a chromosome-level
///   mutation touches.
///
/// An individual whose genotype changed is marked unevaluated. A mutation
/// that leaves a chromosome invalid is an operator error.
pub trait Mutate<C: Chromosome>: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>().split("::").last().unwrap()
    }

    fn individual_rate(&self) -> f32;

    fn chromosome_rate(&self) -> f32 {
        0.5
    }

    fn gene_rate(&self) -> f32 {
        0.5
    }

    fn alterer(self) -> AlterAction<C>
    where
        Self: Sized + 'static,
    {
        AlterAction::Mutate(self.name(), Box::new(self))
    }

    #[inline]
    fn mutate(&self, population: &mut Population<C>, generation: usize) -> VerdantResult<usize> {
        let mut count = 0;

        for phenotype in population.iter_mut() {
            if !random_provider::bool(self.individual_rate()) {
                continue;
            }

            let mut changed = 0;
            for chromosome in phenotype.genotype_mut().iter_mut() {
                if random_provider::bool(self.chromosome_rate()) {
                    let mutations = self.mutate_chromosome(chromosome)?;
                    if mutations > 0 {
                        ensure!(
                            chromosome.is_valid(),
                            Operator: "{} produced an invalid chromosome", self.name()
                        );
                        changed += mutations;
                    }
                }
            }

            if changed > 0 {
                phenotype.invalidate(generation);
                count += changed;
            }
        }

        Ok(count)
    }

    /// Mutate one chromosome in place, returning the number of positions
    /// touched. The default replaces the genes at a `gene_rate` fraction of
    /// positions with freshly generated instances.
    #[inline]
    fn mutate_chromosome(&self, chromosome: &mut C) -> VerdantResult<usize> {
        let mut count = 0;

        for i in random_provider::indices(0..chromosome.len(), self.gene_rate()) {
            let gene = chromosome.get(i).new_instance();
            chromosome.set(i, gene);
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntChromosome;

    struct HalfMutator;

    impl Mutate<IntChromosome<i32>> for HalfMutator {
        fn individual_rate(&self) -> f32 {
            1.0
        }

        fn chromosome_rate(&self) -> f32 {
            1.0
        }

        fn gene_rate(&self) -> f32 {
            1.0
        }
    }

    struct FirstParentCrossover;

    impl Crossover<IntChromosome<i32>> for FirstParentCrossover {
        fn rate(&self) -> f32 {
            1.0
        }

        fn cross_chromosomes(
            &self,
            parents: &[&IntChromosome<i32>],
        ) -> VerdantResult<Vec<IntChromosome<i32>>> {
            Ok(vec![parents[0].clone(), parents[0].clone()])
        }
    }

    fn population(size: usize) -> Population<IntChromosome<i32>> {
        (0..size)
            .map(|_| {
                let mut phenotype =
                    Phenotype::from((vec![IntChromosome::from((5, 0..100))], 0));
                phenotype.set_score(Some(crate::Score::from(1.0)));
                phenotype
            })
            .collect()
    }

    #[test]
    fn test_mutate_invalidates_changed_individuals() {
        let mut pop = population(10);
        let count = HalfMutator.mutate(&mut pop, 3).unwrap();

        assert_eq!(count, 50);
        for phenotype in pop.iter() {
            assert!(!phenotype.is_evaluated());
            assert_eq!(phenotype.generation(), 3);
        }
    }

    #[test]
    fn test_crossover_preserves_population_size_and_shape() {
        let pop = population(9);
        let (offspring, _) = FirstParentCrossover.crossover(&pop, 1).unwrap();

        assert_eq!(offspring.len(), 9);
        for phenotype in offspring.iter() {
            assert!(!phenotype.is_evaluated());
            assert!(phenotype.is_valid());
            assert_eq!(phenotype.genotype()[0].len(), 5);
        }
    }

    #[test]
    fn test_cross_genotypes_rejects_wrong_parent_count() {
        let pop = population(3);
        let lone = pop[0].genotype();

        let result = FirstParentCrossover.cross_genotypes(&[lone]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cross_genotypes_rejects_unequal_lengths() {
        let one = Genotype::from(IntChromosome::<i32>::from((5, 0..100)));
        let two = Genotype::from(IntChromosome::<i32>::from((7, 0..100)));

        let result = FirstParentCrossover.cross_genotypes(&[&one, &two]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_mutate_chromosome_touches_every_gene_at_rate_one() {
        let mut chromosome = IntChromosome::from(vec![500, 500, 500, 500]);

        let count = HalfMutator.mutate_chromosome(&mut chromosome).unwrap();
        assert_eq!(count, 4);
    }
}
