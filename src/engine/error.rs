use thiserror::Error;

use super::state::Scene;
use crate::puzzle::PuzzleType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown character: {0}")]
    InvalidCharacter(String),
    #[error("no answer key registered for puzzle type {0}")]
    Configuration(PuzzleType),
    #[error("{action} is not available during {actual}")]
    WrongScene { action: &'static str, actual: Scene },
    #[error("no character has been selected")]
    NoCharacterSelected,
    #[error("puzzle {got} is not the current puzzle (expected {expected:?})")]
    UnexpectedPuzzle {
        expected: Option<PuzzleType>,
        got: PuzzleType,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
