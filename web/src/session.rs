use chrono::{DateTime, Utc};
use sweeper_core::{
    Action, GameConfig, GameEngine, RandomMineGenerator, ScoreRecord, ScoreStore, Snapshot,
};

/// What a player action did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Unchanged,
    Updated,
    /// The game just ended; reported once per game.
    Finished,
}

impl SessionEvent {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// One game in progress plus the score store it reports to when it ends.
#[derive(Debug)]
pub struct Session<S> {
    engine: GameEngine,
    store: S,
    score_saved: bool,
}

impl<S: ScoreStore> Session<S> {
    pub fn start(
        config: GameConfig,
        seed: u64,
        now: DateTime<Utc>,
        store: S,
    ) -> sweeper_core::Result<Self> {
        log::debug!(
            "new game {}x{} with {} mines, seed {}",
            config.size,
            config.size,
            config.mines,
            seed
        );
        let engine = GameEngine::create(config, RandomMineGenerator::new(seed))?;
        Ok(Self::with_engine(engine, now, store))
    }

    pub fn with_engine(mut engine: GameEngine, now: DateTime<Utc>, store: S) -> Self {
        engine.start_clock(now);
        Self {
            engine,
            store,
            score_saved: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    /// Applies a player action at `now`; the timer is brought up to date first
    /// so a final move records the real elapsed time.
    pub fn act(&mut self, action: Action, now: DateTime<Utc>) -> sweeper_core::Result<SessionEvent> {
        self.engine.tick(now);

        if !self.engine.apply(action)? {
            return Ok(SessionEvent::Unchanged);
        }
        log::debug!("{:?} -> {:?}", action, self.engine.status());

        if self.engine.is_over() && !self.score_saved {
            self.save_score();
            Ok(SessionEvent::Finished)
        } else {
            Ok(SessionEvent::Updated)
        }
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.engine.tick(now)
    }

    fn save_score(&mut self) {
        self.score_saved = true;
        let record = ScoreRecord::from_engine(&self.engine);
        match self.store.append(record) {
            Ok(()) => log::info!("score saved: {:?}", record),
            Err(err) => log::error!("Could not save score: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{GameStatus, Grid, MemoryScoreStore, Position};

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
    }

    fn session(size: u8, mines: &[Position]) -> Session<MemoryScoreStore> {
        let engine = GameEngine::new(Grid::from_mine_positions(size, mines).unwrap());
        Session::with_engine(engine, at(100), MemoryScoreStore::new())
    }

    #[test]
    fn session_starts_the_engine_clock() {
        let mut session = session(3, &[4]);

        assert_eq!(session.engine().state().start_time(), Some(at(100)));
        assert!(session.tick(at(103)));
        assert_eq!(session.snapshot().elapsed_time, 3);
    }

    #[test]
    fn winning_move_saves_one_score() {
        let mut session = session(2, &[0]);

        assert_eq!(session.act(Action::Reveal(1), at(101)).unwrap(), SessionEvent::Updated);
        assert_eq!(session.act(Action::Reveal(2), at(104)).unwrap(), SessionEvent::Updated);
        assert_eq!(session.act(Action::Reveal(3), at(107)).unwrap(), SessionEvent::Finished);

        assert_eq!(session.engine().status(), GameStatus::Won);
        assert_eq!(
            session.store().load().records(),
            [ScoreRecord {
                size: 2,
                mines: 1,
                elapsed_time: 7
            }]
        );
    }

    #[test]
    fn losing_move_also_saves_score() {
        let mut session = session(2, &[0]);

        assert_eq!(session.act(Action::Reveal(0), at(130)).unwrap(), SessionEvent::Finished);

        assert_eq!(session.engine().status(), GameStatus::Lost);
        assert_eq!(session.store().load().len(), 1);
        assert_eq!(session.store().load().records()[0].elapsed_time, 30);
    }

    #[test]
    fn actions_after_finish_do_not_save_again() {
        let mut session = session(2, &[0]);
        session.act(Action::Reveal(0), at(101)).unwrap();

        assert_eq!(session.act(Action::Reveal(3), at(102)).unwrap(), SessionEvent::Unchanged);
        assert_eq!(session.act(Action::ToggleFlag(3), at(102)).unwrap(), SessionEvent::Unchanged);
        assert!(!session.tick(at(200)));
        assert_eq!(session.store().load().len(), 1);
    }

    #[test]
    fn flags_update_without_finishing() {
        let mut session = session(2, &[0]);

        let event = session.act(Action::ToggleFlag(0), at(101)).unwrap();

        assert_eq!(event, SessionEvent::Updated);
        assert!(event.has_update());
        assert_eq!(session.snapshot().mines_left, 0);
        assert!(session.store().load().is_empty());
    }

    #[test]
    fn scores_accumulate_across_sessions() {
        let mut store = MemoryScoreStore::new();
        for seed in 0..3 {
            let config = GameConfig::new(4, 15).unwrap();
            let mut session = Session::start(config, seed, at(0), store).unwrap();
            let safe = session
                .engine()
                .grid()
                .cells()
                .find(|cell| !cell.is_mine())
                .unwrap()
                .position();
            assert_eq!(session.act(Action::Reveal(safe), at(5)).unwrap(), SessionEvent::Finished);
            store = session.store;
        }

        assert_eq!(store.load().len(), 3);
        assert!(store.load().records().iter().all(|record| record.size == 4 && record.mines == 15));
    }

    #[test]
    fn invalid_position_is_an_error() {
        let mut session = session(2, &[0]);
        assert!(session.act(Action::Reveal(4), at(101)).is_err());
    }
}
