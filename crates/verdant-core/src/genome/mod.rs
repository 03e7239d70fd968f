pub mod chromosomes;
pub mod genotype;
pub mod phenotype;
pub mod population;

pub use chromosomes::*;
pub use genotype::Genotype;
pub use phenotype::Phenotype;
pub use population::Population;
