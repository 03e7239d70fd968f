pub mod optimize;
pub mod score;

pub use optimize::Optimize;
pub use score::{Score, Scored};
