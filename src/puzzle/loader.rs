use anyhow::{bail, Context, Result};
use std::path::Path;

use super::evaluate::normalize;
use super::table::AnswerKeyTable;
use super::types::{Answer, Puzzle};

pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading puzzle {}", path.display()))?;
    let puzzle: Puzzle =
        toml::from_str(&content).with_context(|| format!("parsing puzzle {}", path.display()))?;
    check_answer(&puzzle).with_context(|| format!("invalid puzzle {}", path.display()))?;
    Ok(puzzle)
}

/// Loads every `*.toml` under `puzzle_dir` into a table, one entry per puzzle type.
pub fn load_puzzles(puzzle_dir: &Path) -> Result<AnswerKeyTable> {
    let pattern = puzzle_dir.join("*.toml");
    let pattern = pattern.to_string_lossy();

    let mut paths = glob::glob(&pattern)
        .with_context(|| format!("bad puzzle pattern {pattern}"))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // Deterministic order, so duplicate reports always name the same file
    paths.sort();

    let mut table = AnswerKeyTable::default();
    for path in paths {
        let puzzle = load_puzzle(&path)?;
        let kind = puzzle.kind;
        if table.register(puzzle).is_some() {
            bail!(
                "{} registers puzzle type {kind}, which is already defined",
                path.display()
            );
        }
        tracing::debug!(%kind, path = %path.display(), "registered answer key");
    }

    Ok(table)
}

fn check_answer(puzzle: &Puzzle) -> Result<()> {
    match &puzzle.answer {
        Answer::FreeText {
            accepted,
            strip_hyphens,
            ..
        } => {
            if accepted
                .iter()
                .all(|literal| normalize(literal, *strip_hyphens).is_empty())
            {
                bail!("free-text puzzle {} has no usable accepted answer", puzzle.kind);
            }
        }
        Answer::MultipleChoice { options } => {
            if !options.iter().any(|option| option.correct) {
                bail!("multiple-choice puzzle {} has no correct option", puzzle.kind);
            }
        }
    }
    Ok(())
}
