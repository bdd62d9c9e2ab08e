use crate::Position;

/// Player-visible mark of a cell. Revealed and flagged are mutually exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellMark {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) position: Position,
    pub(crate) is_mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) mark: CellMark,
}

impl Cell {
    pub(crate) const fn new(position: Position, is_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            position,
            is_mine,
            adjacent_mines,
            mark: CellMark::Hidden,
        }
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn mark(&self) -> CellMark {
        self.mark
    }

    pub const fn is_revealed(&self) -> bool {
        matches!(self.mark, CellMark::Revealed)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.mark, CellMark::Flagged)
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self.mark, CellMark::Hidden)
    }
}
