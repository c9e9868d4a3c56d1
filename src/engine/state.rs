use std::collections::BTreeSet;
use std::fmt;

use crate::puzzle::PuzzleType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    CharacterSelect,
    ForestEntrance,
    PuzzleGate,
    PartyInvite,
    GameOver,
}

impl Scene {
    /// Restart is offered mid-run only; the select and ending screens have their own way back.
    pub const fn offers_restart(self) -> bool {
        !matches!(self, Self::CharacterSelect | Self::GameOver)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scene::CharacterSelect => "character select",
            Scene::ForestEntrance => "forest entrance",
            Scene::PuzzleGate => "puzzle gate",
            Scene::PartyInvite => "party invite",
            Scene::GameOver => "game over",
        })
    }
}

/// Progress through one run. Only the scene controller writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub(super) selected_character: Option<String>,
    pub(super) scene: Scene,
    pub(super) puzzle_index: usize,
    pub(super) completed: BTreeSet<PuzzleType>,
    pub(super) joined_party: Option<bool>,
    pub(super) carousel_index: usize,
}

impl GameState {
    pub fn selected_character(&self) -> Option<&str> {
        self.selected_character.as_deref()
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Only meaningful while the scene is [`Scene::PuzzleGate`].
    pub fn puzzle_index(&self) -> usize {
        self.puzzle_index
    }

    pub fn completed(&self) -> &BTreeSet<PuzzleType> {
        &self.completed
    }

    pub fn joined_party(&self) -> Option<bool> {
        self.joined_party
    }

    pub fn carousel_index(&self) -> usize {
        self.carousel_index
    }
}
