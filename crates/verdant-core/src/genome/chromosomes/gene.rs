use std::fmt::Debug;
use std::sync::Arc;

/// A [`Valid`] type is a type that can be checked for validity. This is used for
/// checking if a gene or a chromosome honors its intrinsic constraints. For
/// example, a gene that represents a number between 0 and 1 is valid only while
/// its allele stays between 0 and 1.
pub trait Valid {
    fn is_valid(&self) -> bool {
        true
    }
}

/// A [`Gene`] is a single unit of information in a `Chromosome` and the most
/// basic building block of the library. A gene is immutable: every operation
/// that would change it produces a new gene instead.
///
/// `new_instance` is the gene's generator - it produces a fresh gene of the
/// same kind with a newly drawn allele that honors the gene's range and
/// filter. Mutation of a gene is exactly `new_instance()`.
pub trait Gene: Clone + Valid {
    type Allele;

    /// Get the `allele` of the [Gene] - the value it expresses.
    fn allele(&self) -> &Self::Allele;

    /// Create a new instance of the [Gene] with a freshly generated allele.
    fn new_instance(&self) -> Self;

    /// Create a new [Gene] carrying the given `allele`.
    fn with_allele(&self, allele: &Self::Allele) -> Self;
}

/// A [Gene] whose allele supports numeric combination. Used by the combining
/// crossovers to blend the genes of several parents into one.
pub trait ArithmeticGene: Gene {
    /// The pairwise mean of two genes.
    fn mean(&self, other: &Self) -> Self;

    /// The mean over any number of genes. The slice must be non-empty; the
    /// first gene supplies the range and filter of the result.
    fn average(genes: &[&Self]) -> Self;
}

/// An allele predicate attached to a gene. A gene is valid only while its
/// allele is inside its range *and* accepted by its filter. The default
/// filter accepts everything.
///
/// Filters are compared as always-equal: two genes that differ only in their
/// filter closures compare equal.
#[derive(Clone)]
pub struct Filter<A>(Arc<dyn Fn(&A) -> bool + Send + Sync>);

impl<A> Filter<A> {
    pub fn new(f: impl Fn(&A) -> bool + Send + Sync + 'static) -> Self {
        Filter(Arc::new(f))
    }

    pub fn accept_all() -> Self {
        Filter(Arc::new(|_| true))
    }

    #[inline]
    pub fn accepts(&self, value: &A) -> bool {
        (self.0)(value)
    }
}

impl<A> Default for Filter<A> {
    fn default() -> Self {
        Filter::accept_all()
    }
}

impl<A> Debug for Filter<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Filter(..)")
    }
}

impl<A, F: Fn(&A) -> bool + Send + Sync + 'static> From<F> for Filter<A> {
    fn from(f: F) -> Self {
        Filter::new(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_accepts_everything() {
        let filter = Filter::<i32>::default();
        assert!(filter.accepts(&0));
        assert!(filter.accepts(&i32::MIN));
        assert!(filter.accepts(&i32::MAX));
    }

    #[test]
    fn test_filter_predicate() {
        let filter = Filter::new(|v: &i32| v % 2 == 0);
        assert!(filter.accepts(&4));
        assert!(!filter.accepts(&5));
    }
}
