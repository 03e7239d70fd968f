use verdant_core::{Chromosome, Crossover, random_provider};
use verdant_error::VerdantResult;

/// The [OrderedCrossover] recombines two parents while preserving the
/// multiset of gene values, which keeps permutations valid. A window
/// `[left, right)` is drawn; each offspring copies one parent's window in
/// place and fills the remaining positions - starting immediately after the
/// window and wrapping - with the other parent's genes in the order they
/// appear from `right`, skipping values already present in the window.
pub struct OrderedCrossover {
    rate: f32,
}

impl OrderedCrossover {
    /// Create a new instance with the given chromosome rate. The rate must
    /// be between 0.0 and 1.0.
    pub fn new(rate: f32) -> Self {
        if !(0.0..=1.0).contains(&rate) {
            panic!("Rate must be between 0 and 1");
        }

        Self { rate }
    }
}

impl<C: Chromosome> Crossover<C> for OrderedCrossover
where
    C::Gene: PartialEq,
{
    fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    fn cross_chromosomes(&self, parents: &[&C]) -> VerdantResult<Vec<C>> {
        let (one, two) = (parents[0], parents[1]);
        let length = one.len();

        if length < 2 {
            return Ok(vec![one.clone(), two.clone()]);
        }

        let a = random_provider::range(0..length + 1);
        let b = random_provider::range(0..length + 1);
        let (left, right) = (a.min(b), a.max(b));

        Ok(vec![
            ordered_child(one, two, left, right),
            ordered_child(two, one, left, right),
        ])
    }
}

/// Builds one offspring: `window_parent`'s genes inside `[left, right)` stay
/// in place, the rest come from `fill_parent` in wrap-around order.
fn ordered_child<C: Chromosome>(window_parent: &C, fill_parent: &C, left: usize, right: usize) -> C
where
    C::Gene: PartialEq,
{
    let length = window_parent.len();
    let mut child = window_parent.clone();

    let window = &window_parent.genes()[left..right];
    let mut slots = length - (right - left);
    let mut position = right % length;

    for k in 0..length {
        if slots == 0 {
            break;
        }

        let gene = fill_parent.get((right + k) % length);
        if window.iter().any(|held| held == gene) {
            continue;
        }

        child.set(position, gene.clone());
        position = (position + 1) % length;
        slots -= 1;
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{PermutationChromosome, PermutationGene, Valid};
    use std::sync::Arc;

    fn permutation(order: &[usize]) -> PermutationChromosome<usize> {
        let alleles: Arc<[usize]> = (0..order.len()).collect::<Vec<_>>().into();
        let genes = order
            .iter()
            .map(|&index| PermutationGene::new(index, Arc::clone(&alleles)))
            .collect::<Vec<_>>();
        PermutationChromosome::new(genes, alleles)
    }

    #[test]
    fn test_offspring_stay_permutations() {
        let one = permutation(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let two = permutation(&[7, 6, 5, 4, 3, 2, 1, 0]);

        for _ in 0..50 {
            let children = OrderedCrossover::new(1.0)
                .cross_chromosomes(&[&one, &two])
                .unwrap();

            assert_eq!(children.len(), 2);
            for child in &children {
                assert!(child.is_valid(), "offspring lost the permutation");
                assert_eq!(child.len(), 8);
            }
        }
    }

    #[test]
    fn test_window_fill_layout() {
        let one = permutation(&[0, 1, 2, 3, 4, 5]);
        let two = permutation(&[5, 4, 3, 2, 1, 0]);

        // window [2, 4): child keeps 2, 3 from parent one; the rest is
        // parent two from index 4 on, wrapping, skipping 2 and 3
        let child = ordered_child(&one, &two, 2, 4);

        let order = child.iter().map(|gene| gene.index()).collect::<Vec<_>>();
        assert_eq!(order, vec![5, 4, 2, 3, 1, 0]);
    }

    #[test]
    fn test_full_window_copies_parent_one() {
        let one = permutation(&[3, 1, 0, 2]);
        let two = permutation(&[0, 1, 2, 3]);

        let child = ordered_child(&one, &two, 0, 4);
        let order = child.iter().map(|gene| gene.index()).collect::<Vec<_>>();
        assert_eq!(order, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_empty_window_copies_parent_two() {
        let one = permutation(&[3, 1, 0, 2]);
        let two = permutation(&[0, 1, 2, 3]);

        let child = ordered_child(&one, &two, 2, 2);
        let order = child.iter().map(|gene| gene.index()).collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}
