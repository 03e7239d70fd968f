use verdant_core::{Chromosome, Population};

/// Brackets every generation with user logic. `before` runs first thing in
/// a generation, `after` runs once the merged population has been
/// evaluated; both may rewrite the population. The default implementation
/// is the identity.
pub trait Interceptor<C: Chromosome>: Send + Sync {
    fn before(&self, _generation: usize, _population: &mut Population<C>) {}

    fn after(&self, _generation: usize, _population: &mut Population<C>) {}
}

/// The default do-nothing interceptor.
pub struct IdentityInterceptor;

impl<C: Chromosome> Interceptor<C> for IdentityInterceptor {}
