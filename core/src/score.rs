use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Summary of one finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub size: Coord,
    pub mines: CellCount,
    pub elapsed_time: u32,
}

impl ScoreRecord {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let config = engine.config();
        Self {
            size: config.size,
            mines: config.mines,
            elapsed_time: engine.state().elapsed_time(),
        }
    }
}

/// Every recorded score, oldest first. Append only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBook {
    records: Vec<ScoreRecord>,
}

impl ScoreBook {
    /// Parses stored scores; missing or corrupt data reads as an empty book.
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        serde_json::from_str(raw).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed stored scores: {}", err);
            Self::default()
        })
    }

    pub fn to_json(&self) -> core::result::Result<String, ScoreError> {
        serde_json::to_string(self).map_err(|err| ScoreError::Encode(err.to_string()))
    }

    pub fn push(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Where finished-game scores are kept between sessions.
pub trait ScoreStore {
    /// The stored book, empty if nothing usable is stored.
    fn load(&self) -> ScoreBook;

    /// Replaces the stored book.
    fn save(&mut self, book: &ScoreBook) -> core::result::Result<(), ScoreError>;

    /// Read, append, write back.
    fn append(&mut self, record: ScoreRecord) -> core::result::Result<(), ScoreError> {
        let mut book = self.load();
        book.push(record);
        self.save(&book)
    }
}

/// Keeps the encoded book in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    raw: Option<String>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from previously stored text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> ScoreBook {
        ScoreBook::from_json(self.raw.as_deref())
    }

    fn save(&mut self, book: &ScoreBook) -> core::result::Result<(), ScoreError> {
        self.raw = Some(book.to_json()?);
        Ok(())
    }
}
