use super::phenotype::Phenotype;
use crate::Chromosome;
use crate::objectives::{Optimize, Score};
use std::fmt::Debug;
use std::ops::{Index, IndexMut};

/// A `Population` is an ordered multiset of [Phenotype]s - the collection of
/// individuals being evolved. It is a light wrapper around a Vec with
/// sorting and lookup helpers.
///
/// The population itself never grows or shrinks an engine's configured size;
/// the engine rebuilds it at every generation boundary from survivors and
/// offspring.
///
/// # Type Parameters
/// - `C`: The type of chromosome used in the genotype.
#[derive(Clone)]
pub struct Population<C: Chromosome> {
    individuals: Vec<Phenotype<C>>,
}

impl<C: Chromosome> Default for Population<C> {
    fn default() -> Self {
        Population {
            individuals: Vec::new(),
        }
    }
}

impl<C: Chromosome> Population<C> {
    pub fn new(individuals: Vec<Phenotype<C>>) -> Self {
        Population { individuals }
    }

    pub fn get(&self, index: usize) -> Option<&Phenotype<C>> {
        self.individuals.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Phenotype<C>> {
        self.individuals.get_mut(index)
    }

    pub fn push(&mut self, individual: Phenotype<C>) {
        self.individuals.push(individual);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phenotype<C>> {
        self.individuals.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Phenotype<C>> {
        self.individuals.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn clear(&mut self) {
        self.individuals.clear();
    }

    pub fn truncate(&mut self, len: usize) {
        self.individuals.truncate(len);
    }

    pub fn extend(&mut self, other: Population<C>) {
        self.individuals.extend(other.individuals);
    }

    pub fn get_scores(&self) -> Vec<&Score> {
        self.individuals
            .iter()
            .filter_map(|individual| individual.score())
            .collect()
    }

    /// Stable sort, best first under the given ranker. Unevaluated
    /// individuals sort last; ties keep their insertion order.
    pub fn sort_by(&mut self, optimize: &Optimize) {
        self.individuals.sort_by(|one, two| {
            match (one.score(), two.score()) {
                (Some(a), Some(b)) => optimize.cmp(a, b),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
    }

    /// The best evaluated individual under the given ranker, breaking ties in
    /// favor of the earliest.
    pub fn best(&self, optimize: &Optimize) -> Option<&Phenotype<C>> {
        self.individuals
            .iter()
            .filter(|individual| individual.score().is_some())
            .reduce(|best, candidate| match (candidate.score(), best.score()) {
                (Some(c), Some(b)) if optimize.is_better(c, b) => candidate,
                _ => best,
            })
    }
}

impl<C: Chromosome> From<Vec<Phenotype<C>>> for Population<C> {
    fn from(individuals: Vec<Phenotype<C>>) -> Self {
        Population { individuals }
    }
}

impl<C: Chromosome> AsRef<[Phenotype<C>]> for Population<C> {
    fn as_ref(&self) -> &[Phenotype<C>] {
        &self.individuals
    }
}

impl<C: Chromosome> Index<usize> for Population<C> {
    type Output = Phenotype<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<C: Chromosome> IndexMut<usize> for Population<C> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.individuals[index]
    }
}

impl<C: Chromosome> IntoIterator for Population<C> {
    type Item = Phenotype<C>;
    type IntoIter = std::vec::IntoIter<Phenotype<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<C: Chromosome> FromIterator<Phenotype<C>> for Population<C> {
    fn from_iter<I: IntoIterator<Item = Phenotype<C>>>(iter: I) -> Self {
        Population {
            individuals: iter.into_iter().collect(),
        }
    }
}

/// Create a new instance of the Population from the given size and closure.
/// This will iterate the given closure `size` times and collect
/// the results into a Vec of new individuals.
impl<C: Chromosome, F> From<(usize, F)> for Population<C>
where
    F: Fn() -> Phenotype<C>,
{
    fn from((size, f): (usize, F)) -> Self {
        Population {
            individuals: (0..size).map(|_| f()).collect(),
        }
    }
}

impl<C: Chromosome + Debug> Debug for Population<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Population [")?;
        for individual in &self.individuals {
            writeln!(f, "  {:?},", individual)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CharChromosome, FloatChromosome};

    #[test]
    fn test_new() {
        let population = Population::<CharChromosome>::default();
        assert_eq!(population.len(), 0);
        assert!(population.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let individuals = vec![
            Phenotype::from((vec![CharChromosome::from("hello")], 0)),
            Phenotype::from((vec![CharChromosome::from("world")], 0)),
        ];

        let population = Population::new(individuals.clone());
        assert_eq!(population.len(), individuals.len());
    }

    #[test]
    fn test_from_fn() {
        let population = Population::from((10, || {
            Phenotype::from((vec![CharChromosome::from("hello")], 0))
        }));

        assert_eq!(population.len(), 10);

        for individual in population.iter() {
            assert_eq!(individual.genotype().len(), 1);
            assert_eq!(individual.genotype()[0].len(), 5);
        }
    }

    fn scored_population(scores: &[f32]) -> Population<FloatChromosome> {
        scores
            .iter()
            .map(|score| {
                let mut phenotype =
                    Phenotype::from((vec![FloatChromosome::from((3, 0.0..1.0))], 0));
                phenotype.set_score(Some(Score::from(*score)));
                phenotype
            })
            .collect()
    }

    #[test]
    fn test_sort_by() {
        let mut minimize = scored_population(&[3.0, 1.0, 2.0]);
        let mut maximize = minimize.clone();

        minimize.sort_by(&Optimize::Minimize);
        maximize.sort_by(&Optimize::Maximize);

        let min_scores = minimize
            .iter()
            .map(|p| p.score().unwrap().as_f32())
            .collect::<Vec<_>>();
        let max_scores = maximize
            .iter()
            .map(|p| p.score().unwrap().as_f32())
            .collect::<Vec<_>>();

        assert_eq!(min_scores, vec![1.0, 2.0, 3.0]);
        assert_eq!(max_scores, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_unevaluated_sort_last() {
        let mut population = scored_population(&[2.0, 1.0]);
        population.push(Phenotype::from((
            vec![FloatChromosome::from((3, 0.0..1.0))],
            0,
        )));

        population.sort_by(&Optimize::Minimize);
        assert!(population[2].score().is_none());
    }

    #[test]
    fn test_best() {
        let population = scored_population(&[3.0, 1.0, 2.0]);

        let best_min = population.best(&Optimize::Minimize).unwrap();
        let best_max = population.best(&Optimize::Maximize).unwrap();

        assert_eq!(best_min.score().unwrap().as_f32(), 1.0);
        assert_eq!(best_max.score().unwrap().as_f32(), 3.0);
    }
}
