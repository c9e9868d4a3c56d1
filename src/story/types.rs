use serde::Deserialize;

use crate::puzzle::PuzzleType;

/// Shape of `story.toml`.
#[derive(Debug, Deserialize)]
pub(crate) struct StoryFile {
    pub story: Story,
    #[serde(default)]
    pub character: Vec<Character>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub sprite: SpriteRef,
    /// Trials in the order they are faced at the gate.
    #[serde(default)]
    pub puzzles: Vec<PuzzleType>,
}

/// A 32px cell on a sprite sheet.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SpriteRef {
    pub sheet: String,
    pub column: u32,
    pub row: u32,
}

impl SpriteRef {
    pub const CELL: i64 = 32;

    /// Background offset that brings this cell into view.
    pub fn offset(&self) -> (i64, i64) {
        (
            -Self::CELL * i64::from(self.column),
            -Self::CELL * i64::from(self.row),
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Story {
    pub title: String,
    pub select_prompt: String,
    pub forest: Forest,
    pub leader: Leader,
    pub invite: Invite,
    pub endings: Endings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Forest {
    pub text: String,
    pub action: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Leader {
    pub name: String,
    pub epithet: String,
    pub sprite: SpriteRef,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Invite {
    pub text: String,
    pub accept: String,
    pub decline: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Endings {
    pub joined: Ending,
    pub alone: Ending,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Ending {
    pub heading: String,
    pub text: String,
    pub restart: String,
}

impl Story {
    /// Expands `{name}` and `{leader}` in a story template.
    pub fn fill(&self, template: &str, name: &str) -> String {
        template
            .replace("{name}", name)
            .replace("{leader}", &self.leader.name)
    }

    pub fn ending(&self, joined: bool) -> &Ending {
        if joined {
            &self.endings.joined
        } else {
            &self.endings.alone
        }
    }
}
