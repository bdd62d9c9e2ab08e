use clap::Parser;
use sweeper_core::{CellCount, Coord, GameConfig};
use wasm_bindgen::prelude::*;

pub use clock::*;
pub use game::*;
pub use session::*;
pub use storage::*;

mod clock;
mod game;
mod session;
mod storage;

/// Arguments read from the page's location hash, e.g. `#--size=16&--mines=40&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Side length of the square board
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    pub(crate) fn from_location() -> Result<Self, clap::Error> {
        let location_hash = gloo::utils::window()
            .location()
            .hash()
            .unwrap_or_else(|_| "".to_string());
        Self::parse_hash(&location_hash)
    }

    fn parse_hash(location_hash: &str) -> Result<Self, clap::Error> {
        let args = location_hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("sweeper").chain(args))
    }

    pub(crate) fn game_config(&self) -> sweeper_core::Result<GameConfig> {
        GameConfig::new(self.size, self.mines)
    }

    pub(crate) fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let args = Args::from_location().expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("size: {}, mines: {}, seed: {:?}", args.size, args.mines, args.seed);
}
