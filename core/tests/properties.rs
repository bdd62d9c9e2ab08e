use proptest::prelude::*;
use sweeper_core::{
    Action, Cell, GameConfig, GameEngine, GameStatus, Grid, Position, RandomMineGenerator,
    RevealOutcome, mult, neighbors, to_coords,
};

/// Any valid board: side 1..=20, and strictly fewer mines than cells.
fn config() -> impl Strategy<Value = GameConfig> {
    (1u8..=20).prop_flat_map(|size| {
        (0..mult(size, size)).prop_map(move |mines| GameConfig::new(size, mines).unwrap())
    })
}

proptest! {
    #[test]
    fn generated_boards_have_exact_mine_count(config in config(), seed in any::<u64>()) {
        let grid = Grid::generate(config, RandomMineGenerator::new(seed)).unwrap();

        prop_assert_eq!(grid.cells().filter(|cell| cell.is_mine()).count(), usize::from(config.mines));
        prop_assert_eq!(grid.game_config(), config);
    }

    #[test]
    fn adjacency_matches_neighbor_mines(config in config(), seed in any::<u64>()) {
        let grid = Grid::generate(config, RandomMineGenerator::new(seed)).unwrap();

        for cell in grid.cells() {
            let mines = neighbors(cell.position(), config.size)
                .filter(|&pos| grid[pos].is_mine())
                .count();
            prop_assert_eq!(usize::from(cell.adjacent_mines()), mines);
        }
    }

    #[test]
    fn neighbor_count_depends_on_placement(size in 3u8..=40, position in any::<u16>()) {
        let position = position % mult(size, size);
        let (row, col) = to_coords(position, size);
        let on_row_edge = row == 0 || row == size - 1;
        let on_col_edge = col == 0 || col == size - 1;
        let expected = match (on_row_edge, on_col_edge) {
            (true, true) => 3,
            (true, false) | (false, true) => 5,
            (false, false) => 8,
        };

        let found: Vec<Position> = neighbors(position, size).collect();

        prop_assert_eq!(found.len(), expected);
        for neighbor in found {
            let (n_row, n_col) = to_coords(neighbor, size);
            prop_assert!(neighbor < mult(size, size));
            prop_assert!(n_row.abs_diff(row) <= 1 && n_col.abs_diff(col) <= 1);
            prop_assert_ne!(neighbor, position);
        }
    }

    #[test]
    fn counters_track_cells_through_random_play(
        config in config(),
        seed in any::<u64>(),
        actions in proptest::collection::vec((any::<bool>(), any::<u16>()), 0..64),
    ) {
        let mut engine = GameEngine::create(config, RandomMineGenerator::new(seed)).unwrap();
        let total = config.total_cells();

        for (reveal, position) in actions {
            let position = position % total;
            let action = if reveal { Action::Reveal(position) } else { Action::ToggleFlag(position) };
            let was_over = engine.is_over();
            let changed = engine.apply(action).unwrap();
            prop_assert!(!(was_over && changed));

            let state = engine.state();
            let grid = engine.grid();
            prop_assert_eq!(usize::from(state.revealed_cells()), grid.cells().filter(|cell| cell.is_revealed()).count());
            prop_assert_eq!(usize::from(state.flags_used()), grid.cells().filter(|cell| cell.is_flagged()).count());

            let mine_revealed = grid.cells().any(|cell| cell.is_mine() && cell.is_revealed());
            let safe_revealed = grid.cells().filter(|cell| !cell.is_mine() && cell.is_revealed()).count();
            let expected = if mine_revealed {
                GameStatus::Lost
            } else if safe_revealed == usize::from(grid.safe_cell_count()) {
                GameStatus::Won
            } else {
                GameStatus::InProgress
            };
            prop_assert_eq!(state.status(), expected);
        }
    }

    #[test]
    fn loss_reveals_all_mines_and_nothing_else(config in config(), seed in any::<u64>()) {
        prop_assume!(config.mines > 0);
        let mut engine = GameEngine::create(config, RandomMineGenerator::new(seed)).unwrap();
        let mine = engine.grid().cells().find(|cell| cell.is_mine()).unwrap().position();

        prop_assert_eq!(engine.reveal(mine).unwrap(), RevealOutcome::HitMine);

        for cell in engine.grid().cells() {
            prop_assert_eq!(cell.is_revealed(), cell.is_mine());
        }
    }

    #[test]
    fn zero_reveal_opens_region_and_border(config in config(), seed in any::<u64>()) {
        let mut engine = GameEngine::create(config, RandomMineGenerator::new(seed)).unwrap();
        let zero = engine
            .grid()
            .cells()
            .find(|cell| !cell.is_mine() && cell.adjacent_mines() == 0)
            .map(Cell::position);
        prop_assume!(zero.is_some());
        let zero = zero.unwrap();

        engine.reveal(zero).unwrap();

        let grid = engine.grid();
        for cell in grid.cells().filter(|cell| cell.is_revealed()) {
            prop_assert!(!cell.is_mine());
            if cell.adjacent_mines() == 0 {
                for neighbor in grid.iter_neighbors(cell.position()) {
                    prop_assert!(grid[neighbor].is_revealed());
                }
            }
        }
    }
}
