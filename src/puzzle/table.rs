use crate::engine::{GameError, Result};

use super::types::{Puzzle, PuzzleType};

/// Answer keys indexed by puzzle type.
#[derive(Debug, Clone, Default)]
pub struct AnswerKeyTable {
    entries: [Option<Puzzle>; PuzzleType::COUNT],
}

impl AnswerKeyTable {
    /// Registers a puzzle, handing back whatever was registered for its type before.
    pub fn register(&mut self, puzzle: Puzzle) -> Option<Puzzle> {
        let slot = &mut self.entries[puzzle.kind.index()];
        slot.replace(puzzle)
    }

    pub fn get(&self, kind: PuzzleType) -> Option<&Puzzle> {
        self.entries[kind.index()].as_ref()
    }

    /// Like [`get`](Self::get), but a missing entry is a configuration error.
    pub fn lookup(&self, kind: PuzzleType) -> Result<&Puzzle> {
        self.get(kind).ok_or(GameError::Configuration(kind))
    }

    pub fn contains(&self, kind: PuzzleType) -> bool {
        self.entries[kind.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }
}
