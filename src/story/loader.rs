use anyhow::{Context, Result};
use std::path::Path;

use super::catalog::Catalog;
use super::types::StoryFile;
use crate::puzzle::loader::load_puzzles;

/// Reads `story.toml` and `puzzles/*.toml` from a content directory.
pub fn load_catalog(content_dir: &Path) -> Result<Catalog> {
    let story_path = content_dir.join("story.toml");
    let content = std::fs::read_to_string(&story_path)
        .with_context(|| format!("reading {}", story_path.display()))?;
    let file: StoryFile =
        toml::from_str(&content).with_context(|| format!("parsing {}", story_path.display()))?;

    let answer_keys = load_puzzles(&content_dir.join("puzzles"))?;

    tracing::info!(
        characters = file.character.len(),
        puzzles = answer_keys.len(),
        dir = %content_dir.display(),
        "loaded content"
    );

    Catalog::new(file.story, file.character, answer_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::puzzle::PuzzleType;
    use tempfile::TempDir;

    fn write_tree(story: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("puzzles")).unwrap();
        std::fs::write(dir.path().join("story.toml"), story).unwrap();
        std::fs::write(dir.path().join("puzzles/chess.toml"), fixtures::CHESS).unwrap();
        dir
    }

    #[test]
    fn test_load_catalog_from_directory() {
        let dir = write_tree(fixtures::STORY);

        let catalog = load_catalog(dir.path()).unwrap();

        assert_eq!(catalog.characters()[0].id, "boss");
        assert_eq!(catalog.characters()[0].puzzles, vec![PuzzleType::Chess]);
        assert!(catalog.answer_keys().contains(PuzzleType::Chess));
        assert_eq!(catalog.answer_keys().len(), 1);
    }

    #[test]
    fn test_missing_story_file_names_the_path() {
        let dir = TempDir::new().unwrap();

        let err = load_catalog(dir.path()).unwrap_err();

        assert!(err.to_string().contains("story.toml"));
    }

    #[test]
    fn test_story_without_characters_is_rejected() {
        let story = fixtures::STORY
            .split("[[character]]")
            .next()
            .unwrap()
            .to_string();
        let dir = write_tree(&story);

        assert!(load_catalog(dir.path()).is_err());
    }

    #[test]
    fn test_bundled_content_is_complete() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");

        let catalog = load_catalog(&dir).unwrap();

        for kind in PuzzleType::ALL {
            assert!(catalog.answer_keys().contains(kind), "no answer key for {kind}");
        }
        for character in catalog.characters() {
            for kind in &character.puzzles {
                assert!(catalog.answer_keys().contains(*kind));
            }
        }
        let chess = catalog.answer_keys().get(PuzzleType::Chess).unwrap();
        assert!(chess.accepts(crate::puzzle::Candidate::Text(" QG3 ")));
    }
}
