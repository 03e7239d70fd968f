pub mod bit_flip;
pub mod inversion;
pub mod partial_shuffle;
pub mod random;
pub mod swap;

pub use bit_flip::BitFlipMutator;
pub use inversion::InversionMutator;
pub use partial_shuffle::PartialShuffleMutator;
pub use random::RandomMutator;
pub use swap::SwapMutator;

pub(crate) fn check_rate(rate: f32) -> f32 {
    if !(0.0..=1.0).contains(&rate) {
        panic!("Rate must be between 0 and 1");
    }

    rate
}
