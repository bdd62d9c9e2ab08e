use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// The `size` x `size` cells of one game, row-major.
///
/// Mine placement and adjacency counts are fixed when the grid is built; only
/// cell marks change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Places mines for `config` with `generator`. The config is checked
    /// first, so an overfull board never reaches the generator.
    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        Self::from_mine_mask(generator.generate(config))
    }

    /// Builds a grid from a square mine mask, computing every adjacency count.
    ///
    /// The mask must be square with at most `Coord::MAX` rows and must leave
    /// at least one safe cell.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape);
        }
        let size = Coord::try_from(rows).map_err(|_| GameError::InvalidBoardShape)?;
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        GameConfig::new(size, mine_count)?;

        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            let position = to_position((row as Coord, col as Coord), size);
            let adjacent_mines = mine_mask
                .iter_neighbors(position)
                .filter(|&pos| mine_mask[to_coords(pos, size).to_nd_index()])
                .count() as u8;
            Cell::new(position, mine_mask[(row, col)], adjacent_mines)
        });

        Ok(Self { cells, mine_count })
    }

    /// Builds a grid with mines at `mine_positions`; repeated positions count once.
    pub fn from_mine_positions(size: Coord, mine_positions: &[Position]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }

        let total_cells = mult(size, size);
        let mut mine_mask: Array2<bool> = Array2::default((size.into(), size.into()));

        for &position in mine_positions {
            if position >= total_cells {
                return Err(GameError::InvalidPosition);
            }
            mine_mask[to_coords(position, size).to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_position(&self, position: Position) -> Result<Position> {
        if position < self.total_cells() {
            Ok(position)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.validate_position(position).ok().map(|position| &self[position])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, position: Position) -> NeighborIter {
        neighbors(position, self.size())
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, position: Position) -> &Self::Output {
        &self.cells[to_coords(position, self.size()).to_nd_index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        let size = self.size();
        &mut self.cells[to_coords(position, size).to_nd_index()]
    }
}
