use super::*;

/// Uniformly random placement by rejection sampling: pick a cell, retry if it
/// already holds a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Array2<bool> {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let size = usize::from(config.size);
        let total_cells = usize::from(config.total_cells());
        let mut mines: Array2<bool> = Array2::default((size, size));

        // GameConfig guarantees mines < total_cells, so a free cell always exists
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut attempts: u32 = 0;
        for _ in 0..config.mines {
            loop {
                attempts += 1;
                let index = rng.random_range(0..total_cells);
                let cell = &mut mines[[index / size, index % size]];
                if !*cell {
                    *cell = true;
                    break;
                }
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} in {} draws (seed {})",
            config.mines,
            config.size,
            config.size,
            attempts,
            self.seed
        );
        mines
    }
}
