use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Chooses where the mines go. Returns a `size` x `size` mask with exactly
/// `config.mines` cells set.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Array2<bool>;
}
