use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be at least 1")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid board shape")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Could not encode scores: {0}")]
    Encode(String),
    #[error("Could not write scores: {0}")]
    Write(String),
}
