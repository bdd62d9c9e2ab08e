use std::cell::RefCell;
use std::rc::Rc;

use sweeper_core::{Action, GameConfig, Position, ScoreStore};
use wasm_bindgen::prelude::*;

use crate::{Args, IntervalClock, LocalScoreStore, Session, SessionEvent, TICK_MILLIS, utc_now};

/// Two `Math.random` draws folded into one seed.
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

/// Browser handle for one session: a game, its clock and the score store.
///
/// The clock runs from construction until the game ends or the handle is
/// freed. `on_change` is called whenever a tick moved the displayed time.
#[wasm_bindgen]
pub struct WebGame {
    config: GameConfig,
    session: Rc<RefCell<Session<LocalScoreStore>>>,
    clock: Option<IntervalClock>,
    on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(
        size: u8,
        mines: u16,
        seed: Option<u64>,
        on_change: Option<js_sys::Function>,
    ) -> Result<WebGame, JsError> {
        let config = GameConfig::new(size, mines)?;
        Ok(Self::start(config, seed, on_change)?)
    }

    /// Builds a game from the board settings in the page's location hash.
    #[wasm_bindgen(js_name = fromLocation)]
    pub fn from_location(on_change: Option<js_sys::Function>) -> Result<WebGame, JsError> {
        let args = Args::from_location()?;
        Ok(Self::start(args.game_config()?, args.seed(), on_change)?)
    }

    pub fn reveal(&mut self, position: Position) -> Result<bool, JsError> {
        self.act(Action::Reveal(position))
    }

    #[wasm_bindgen(js_name = toggleFlag)]
    pub fn toggle_flag(&mut self, position: Position) -> Result<bool, JsError> {
        self.act(Action::ToggleFlag(position))
    }

    /// Throws the current game away and starts another with the same settings.
    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self, seed: Option<u64>) -> Result<(), JsError> {
        let seed = seed.unwrap_or_else(js_random_seed);
        let session = Session::start(self.config, seed, utc_now(), LocalScoreStore)?;
        self.stop_clock();
        *self.session.borrow_mut() = session;
        self.start_clock();
        Ok(())
    }

    /// JSON of the board as the player may see it.
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.session.borrow().snapshot())?)
    }

    /// JSON list of every stored score.
    pub fn scores() -> Result<String, JsError> {
        Ok(serde_json::to_string(&LocalScoreStore.load())?)
    }
}

impl WebGame {
    fn start(
        config: GameConfig,
        seed: Option<u64>,
        on_change: Option<js_sys::Function>,
    ) -> sweeper_core::Result<Self> {
        let seed = seed.unwrap_or_else(js_random_seed);
        let session = Session::start(config, seed, utc_now(), LocalScoreStore)?;
        let mut game = Self {
            config,
            session: Rc::new(RefCell::new(session)),
            clock: None,
            on_change,
        };
        game.start_clock();
        Ok(game)
    }

    fn act(&mut self, action: Action) -> Result<bool, JsError> {
        let event = self.session.borrow_mut().act(action, utc_now())?;
        if event == SessionEvent::Finished {
            self.stop_clock();
        }
        Ok(event.has_update())
    }

    fn start_clock(&mut self) {
        let session = Rc::downgrade(&self.session);
        let on_change = self.on_change.clone();
        self.clock = Some(IntervalClock::start(TICK_MILLIS, move |now| {
            let Some(session) = session.upgrade() else {
                return;
            };
            let changed = session.borrow_mut().tick(now);
            if changed {
                notify(on_change.as_ref());
            }
        }));
    }

    fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.stop();
        }
    }
}

impl Drop for WebGame {
    fn drop(&mut self) {
        self.stop_clock();
    }
}

fn notify(on_change: Option<&js_sys::Function>) {
    if let Some(callback) = on_change {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            log::error!("on_change callback failed: {:?}", err);
        }
    }
}
