use verdant_core::{Chromosome, Crossover, random_provider};
use verdant_error::VerdantResult;

/// The [MultiPointCrossover] generalizes the single point variant: it draws
/// `num_points` distinct cut indexes and exchanges every other segment
/// between the two offspring. More than two points is rarely useful but
/// allowed.
pub struct MultiPointCrossover {
    num_points: usize,
    rate: f32,
}

impl MultiPointCrossover {
    /// Create a new instance with the given chromosome rate and number of
    /// cut points. The rate must be between 0.0 and 1.0.
    pub fn new(rate: f32, num_points: usize) -> Self {
        if !(0.0..=1.0).contains(&rate) {
            panic!("Rate must be between 0 and 1");
        }

        Self { num_points, rate }
    }
}

impl<C: Chromosome> Crossover<C> for MultiPointCrossover {
    fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> VerdantResult<Vec<C>> {
        let (one, two) = (parents[0], parents[1]);
        let length = one.len();

        if length < 2 || self.num_points == 0 {
            return Ok(vec![one.clone(), two.clone()]);
        }

        let mut points = random_provider::shuffled_indices(1..length);
        points.truncate(self.num_points.min(length - 1));
        points.sort();

        let mut child_a = one.clone();
        let mut child_b = two.clone();

        let mut swapping = false;
        let mut point_iter = points.iter().peekable();

        for i in 0..length {
            if let Some(&&point) = point_iter.peek() {
                if i == point {
                    swapping = !swapping;
                    point_iter.next();
                }
            }

            if swapping {
                child_a.set(i, two.get(i).clone());
                child_b.set(i, one.get(i).clone());
            }
        }

        Ok(vec![child_a, child_b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{Gene, IntChromosome};

    #[test]
    fn test_two_points_swap_the_middle_segments() {
        let one = IntChromosome::from(vec![0; 12]);
        let two = IntChromosome::from(vec![1; 12]);

        let children = MultiPointCrossover::new(1.0, 2)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        // complementarity holds everywhere
        for i in 0..12 {
            assert_eq!(
                children[0].get(i).allele() + children[1].get(i).allele(),
                1
            );
        }

        // exactly two boundaries between inherited and swapped segments
        let flips = (1..12)
            .filter(|&i| children[0].get(i).allele() != children[0].get(i - 1).allele())
            .count();
        assert_eq!(flips, 2);
    }

    #[test]
    fn test_zero_points_is_identity() {
        let one = IntChromosome::from(vec![0; 6]);
        let two = IntChromosome::from(vec![1; 6]);

        let children = MultiPointCrossover::new(1.0, 0)
            .cross_chromosomes(&[&one, &two])
            .unwrap();

        assert!(children[0].iter().all(|gene| *gene.allele() == 0));
        assert!(children[1].iter().all(|gene| *gene.allele() == 1));
    }
}
