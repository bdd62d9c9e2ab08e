use alloc::collections::VecDeque;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Counters and timer of the current game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    status: GameStatus,
    flags_used: CellCount,
    revealed_cells: CellCount,
    start_time: Option<DateTime<Utc>>,
    elapsed_time: u32,
}

impl GameState {
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub const fn flags_used(&self) -> CellCount {
        self.flags_used
    }

    pub const fn revealed_cells(&self) -> CellCount {
        self.revealed_cells
    }

    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Whole seconds between the start time and the last tick.
    pub const fn elapsed_time(&self) -> u32 {
        self.elapsed_time
    }
}

/// One game from board creation to win or loss.
///
/// The engine is owned by a single session and every operation mutates it in
/// place; out-of-range positions are rejected before anything is touched.
/// Hosts that need the board as data use [`Snapshot`], the engine itself is
/// not serializable:
///
/// ```compile_fail
/// fn assert_serialize<T: serde::Serialize>() {}
/// assert_serialize::<sweeper_core::GameEngine>();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    grid: Grid,
    state: GameState,
}

impl GameEngine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: Default::default(),
        }
    }

    pub fn create(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        Ok(Self::new(Grid::generate(config, generator)?))
    }

    pub fn config(&self) -> GameConfig {
        self.grid.game_config()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.grid.mine_count()
    }

    /// Mines minus placed flags, negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.grid.mine_count()) - i32::from(self.state.flags_used)
    }

    pub fn cell_at(&self, position: Position) -> Result<&Cell> {
        self.grid.get(position).ok_or(GameError::InvalidPosition)
    }

    /// Dispatches a player action, returning whether anything changed.
    pub fn apply(&mut self, action: Action) -> Result<bool> {
        Ok(match action {
            Action::Reveal(position) => self.reveal(position)?.has_update(),
            Action::ToggleFlag(position) => self.toggle_flag(position)?.has_update(),
        })
    }

    /// Records when the clock started. Only the first call has an effect.
    pub fn start_clock(&mut self, now: DateTime<Utc>) -> bool {
        if self.state.is_over() || self.state.start_time.is_some() {
            return false;
        }
        log::debug!("clock started at {}", now);
        self.state.start_time = Some(now);
        true
    }

    /// Recomputes the elapsed seconds, returning whether they changed.
    ///
    /// Does nothing before the clock was started or after the game ended.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.state.is_over() {
            return false;
        }
        let Some(start_time) = self.state.start_time else {
            return false;
        };

        let elapsed = (now - start_time)
            .num_seconds()
            .clamp(0, i64::from(u32::MAX)) as u32;
        if elapsed == self.state.elapsed_time {
            false
        } else {
            self.state.elapsed_time = elapsed;
            true
        }
    }

    pub fn toggle_flag(&mut self, position: Position) -> Result<MarkOutcome> {
        use CellMark::*;
        use MarkOutcome::*;

        let position = self.grid.validate_position(position)?;
        if self.state.is_over() {
            return Ok(NoChange);
        }

        let cell = &mut self.grid[position];
        Ok(match cell.mark {
            Hidden => {
                cell.mark = Flagged;
                self.state.flags_used += 1;
                Changed
            }
            Flagged => {
                cell.mark = Hidden;
                self.state.flags_used -= 1;
                Changed
            }
            Revealed => NoChange,
        })
    }

    pub fn reveal(&mut self, position: Position) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let position = self.grid.validate_position(position)?;
        let cell = self.grid[position];
        if self.state.is_over() || !cell.is_hidden() {
            return Ok(NoChange);
        }

        if cell.is_mine() {
            log::debug!("mine hit at {}", position);
            self.reveal_mines();
            self.end_game(GameStatus::Lost);
            return Ok(HitMine);
        }

        self.flood_reveal(position);

        if self.state.revealed_cells == self.grid.safe_cell_count() {
            self.end_game(GameStatus::Won);
            Ok(Won)
        } else {
            Ok(Revealed)
        }
    }

    /// Reveals `start` and, through zero cells, everything connected to it.
    fn flood_reveal(&mut self, start: Position) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(position) = to_visit.pop_front() {
            let cell = &mut self.grid[position];
            // revealed cells are never re-entered, flagged cells stay put
            if !cell.is_hidden() {
                continue;
            }

            cell.mark = CellMark::Revealed;
            let adjacent_mines = cell.adjacent_mines;
            self.state.revealed_cells += 1;
            log::trace!("revealed {}, adjacent mines: {}", position, adjacent_mines);

            if adjacent_mines == 0 {
                let grid = &self.grid;
                to_visit.extend(
                    grid.iter_neighbors(position)
                        .filter(|&neighbor| grid[neighbor].is_hidden()),
                );
            }
        }
    }

    fn reveal_mines(&mut self) {
        for cell in self.grid.cells_mut().filter(|cell| cell.is_mine) {
            match cell.mark {
                CellMark::Revealed => continue,
                CellMark::Flagged => self.state.flags_used -= 1,
                CellMark::Hidden => {}
            }
            cell.mark = CellMark::Revealed;
            self.state.revealed_cells += 1;
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.state.is_over() {
            return;
        }
        log::debug!(
            "game ended {:?} after {}s, {} cells revealed",
            status,
            self.state.elapsed_time,
            self.state.revealed_cells
        );
        self.state.status = status;
    }
}
