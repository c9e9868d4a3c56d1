use super::types::{Answer, Puzzle};

/// What the player offered as an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    Text(&'a str),
    Choice(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: bool,
    pub message: String,
}

/// Trims, lowercases and drops all whitespace (and hyphens when asked).
pub fn normalize(input: &str, strip_hyphens: bool) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && !(strip_hyphens && *c == '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Puzzle {
    pub fn accepts(&self, candidate: Candidate<'_>) -> bool {
        match (&self.answer, candidate) {
            (
                Answer::FreeText {
                    accepted,
                    strip_hyphens,
                    ..
                },
                Candidate::Text(text),
            ) => {
                let given = normalize(text, *strip_hyphens);
                !given.is_empty()
                    && accepted
                        .iter()
                        .any(|literal| normalize(literal, *strip_hyphens) == given)
            }
            (Answer::MultipleChoice { options }, Candidate::Choice(index)) => {
                options.get(index).is_some_and(|option| option.correct)
            }
            // Shape mismatch: a button press on a text puzzle or vice versa.
            _ => false,
        }
    }

    /// Judges a candidate without touching any game state.
    pub fn evaluate(&self, candidate: Candidate<'_>) -> Evaluation {
        let correct = self.accepts(candidate);
        let template = if correct { &self.success } else { &self.failure };

        let (input, outcome) = match (&self.answer, candidate) {
            (_, Candidate::Text(text)) => (text, ""),
            (Answer::MultipleChoice { options }, Candidate::Choice(index)) => {
                match options.get(index) {
                    Some(option) => (option.text.as_str(), option.outcome.as_str()),
                    None => ("", ""),
                }
            }
            (Answer::FreeText { .. }, Candidate::Choice(_)) => ("", ""),
        };

        let message = template
            .replace("{input}", input)
            .replace("{outcome}", outcome)
            .trim()
            .to_string();

        Evaluation { correct, message }
    }
}
