use anyhow::{bail, Result};
use std::collections::HashSet;

use super::types::{Character, Story};
use crate::puzzle::AnswerKeyTable;

/// Everything fixed at startup: who can be picked, what they face, and the
/// text around it.
#[derive(Debug, Clone)]
pub struct Catalog {
    story: Story,
    characters: Vec<Character>,
    answer_keys: AnswerKeyTable,
}

impl Catalog {
    pub fn new(
        story: Story,
        characters: Vec<Character>,
        answer_keys: AnswerKeyTable,
    ) -> Result<Self> {
        if characters.is_empty() {
            bail!("the character registry is empty");
        }

        let mut seen = HashSet::new();
        for character in &characters {
            if !seen.insert(character.id.as_str()) {
                bail!("character id {:?} is defined twice", character.id);
            }
            // Left for the gate to refuse at play time.
            for kind in &character.puzzles {
                if !answer_keys.contains(*kind) {
                    tracing::warn!(
                        character = %character.id,
                        puzzle = %kind,
                        "puzzle sequence references a type with no answer key"
                    );
                }
            }
        }

        Ok(Self {
            story,
            characters,
            answer_keys,
        })
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    pub fn answer_keys(&self) -> &AnswerKeyTable {
        &self.answer_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_empty_registry_is_rejected() {
        let story = fixtures::catalog().story().clone();

        let err = Catalog::new(story, Vec::new(), AnswerKeyTable::default()).unwrap_err();

        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_duplicate_character_ids_are_rejected() {
        let catalog = fixtures::catalog();
        let boss = catalog.character("boss").unwrap().clone();

        let err = Catalog::new(
            catalog.story().clone(),
            vec![boss.clone(), boss],
            AnswerKeyTable::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("defined twice"));
    }

    #[test]
    fn test_unregistered_puzzle_reference_is_allowed_at_load() {
        let catalog = fixtures::catalog();

        let ghost = catalog.character("ghost").unwrap();

        assert!(!ghost.puzzles.is_empty());
        assert!(ghost
            .puzzles
            .iter()
            .any(|kind| !catalog.answer_keys().contains(*kind)));
    }

    #[test]
    fn test_position_follows_registry_order() {
        let catalog = fixtures::catalog();

        assert_eq!(catalog.position("boss"), Some(0));
        assert_eq!(catalog.position("flash"), Some(1));
        assert_eq!(catalog.position("nobody"), None);
    }
}
