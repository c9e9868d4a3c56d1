use serde::Deserialize;
use std::fmt;

/// Every kind of trial a character can face on the Old Path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleType {
    Chess,
    StrategyAllocation,
    TradingCard,
    CollectibleCard,
    TriviaCreature,
    ActionRpgLore,
    TriviaMovement,
    NarrativeLore,
}

impl PuzzleType {
    pub const ALL: [PuzzleType; 8] = [
        PuzzleType::Chess,
        PuzzleType::StrategyAllocation,
        PuzzleType::TradingCard,
        PuzzleType::CollectibleCard,
        PuzzleType::TriviaCreature,
        PuzzleType::ActionRpgLore,
        PuzzleType::TriviaMovement,
        PuzzleType::NarrativeLore,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn as_str(self) -> &'static str {
        match self {
            PuzzleType::Chess => "chess",
            PuzzleType::StrategyAllocation => "strategy-allocation",
            PuzzleType::TradingCard => "trading-card",
            PuzzleType::CollectibleCard => "collectible-card",
            PuzzleType::TriviaCreature => "trivia-creature",
            PuzzleType::ActionRpgLore => "action-rpg-lore",
            PuzzleType::TriviaMovement => "trivia-movement",
            PuzzleType::NarrativeLore => "narrative-lore",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer-key entry, together with the text used to present it.
#[derive(Debug, Deserialize, Clone)]
pub struct Puzzle {
    pub kind: PuzzleType,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Shown on a correct answer. `{input}` and `{outcome}` are substituted.
    pub success: String,
    /// Shown on a wrong answer. Same substitutions as `success`.
    pub failure: String,
    pub answer: Answer,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Answer {
    FreeText {
        accepted: Vec<String>,
        #[serde(default)]
        strip_hyphens: bool,
        #[serde(default)]
        placeholder: Option<String>,
    },
    MultipleChoice {
        options: Vec<ChoiceOption>,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChoiceOption {
    pub text: String,
    pub correct: bool,
    #[serde(default)]
    pub outcome: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_type_parses_kebab_case_tags() {
        #[derive(Deserialize)]
        struct Wrapper {
            kinds: Vec<PuzzleType>,
        }

        let parsed: Wrapper =
            toml::from_str(r#"kinds = ["chess", "strategy-allocation", "action-rpg-lore"]"#)
                .unwrap();

        assert_eq!(
            parsed.kinds,
            vec![
                PuzzleType::Chess,
                PuzzleType::StrategyAllocation,
                PuzzleType::ActionRpgLore
            ]
        );
    }

    #[test]
    fn test_display_matches_content_tag() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: PuzzleType,
        }

        for kind in PuzzleType::ALL {
            let parsed: Wrapper = toml::from_str(&format!("kind = \"{kind}\"")).unwrap();
            assert_eq!(parsed.kind, kind);
        }
    }

    #[test]
    fn test_index_is_dense() {
        for (i, kind) in PuzzleType::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
