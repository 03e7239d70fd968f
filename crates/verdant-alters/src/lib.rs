pub mod crossovers;
pub mod mutators;

pub use crossovers::*;
pub use mutators::*;
