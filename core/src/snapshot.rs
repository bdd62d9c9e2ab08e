use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player may see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "camelCase")]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        match cell.mark() {
            CellMark::Hidden => Self::Hidden,
            CellMark::Flagged => Self::Flagged,
            CellMark::Revealed if cell.is_mine() => Self::Mine,
            CellMark::Revealed => Self::Revealed(cell.adjacent_mines()),
        }
    }
}

/// Player-facing picture of a game, for whatever draws the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub size: Coord,
    pub mines: CellCount,
    pub status: GameStatus,
    pub flags_used: CellCount,
    pub mines_left: i32,
    pub elapsed_time: u32,
    pub cells: Vec<CellView>,
}

impl Snapshot {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let state = engine.state();
        Self {
            size: engine.size(),
            mines: engine.total_mines(),
            status: state.status(),
            flags_used: state.flags_used(),
            mines_left: engine.mines_left(),
            elapsed_time: state.elapsed_time(),
            cells: engine.grid().cells().map(CellView::from).collect(),
        }
    }
}
