pub mod average;
pub mod combine;
pub mod mean;
pub mod multipoint;
pub mod ordered;
pub mod single_point;
pub mod uniform;

pub use average::AverageCrossover;
pub use combine::CombineCrossover;
pub use mean::MeanCrossover;
pub use multipoint::MultiPointCrossover;
pub use ordered::OrderedCrossover;
pub use single_point::SinglePointCrossover;
pub use uniform::UniformCrossover;
