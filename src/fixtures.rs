//! Small inline content used across unit tests.

use crate::puzzle::{AnswerKeyTable, Puzzle, PuzzleType};
use crate::story::types::StoryFile;
use crate::story::Catalog;

pub const CHESS: &str = r#"
kind = "chess"
title = "The Engraved Slab"
prompt = "White to move and deliver checkmate in one."
image = "mateinone.webp"
success = "Your move ({input}) is brilliant! The Black King has no escape."
failure = "The move \"{input}\" is not checkmate. The inscription glows red."

[answer]
mode = "free-text"
accepted = ["Qg3"]
placeholder = "Enter move (e.g., Ba1)"
"#;

pub const STRATEGY: &str = r#"
kind = "strategy-allocation"
title = "Urgent Defense Protocol"
prompt = "You have 200 Minerals and 50 Vespene Gas."
success = "Victory! {outcome}"
failure = "Defeat. {outcome} The simulation resets."

[answer]
mode = "multiple-choice"

[[answer.options]]
text = "A: 4 Marines (200 M, 0 G)"
correct = false
outcome = "While cheap, they lack the armor penetration to halt the enemy push."

[[answer.options]]
text = "B: 2 Marauders and 1 Marine (250 M, 50 G)"
correct = false
outcome = "You overspent your budget!"

[[answer.options]]
text = "C: 1 Marauder and 2 Marines (200 M, 25 G)"
correct = true
outcome = "The mixture of anti-armor and volume successfully repels the attack."
"#;

pub const MOVEMENT: &str = r#"
kind = "trivia-movement"
title = "The Swimming Hole"
prompt = "Which stroke is fastest?"
success = "You glide across."
failure = "You sink."

[answer]
mode = "free-text"
accepted = ["front crawl", "freestyle"]
strip_hyphens = true
"#;

pub const STORY: &str = r#"
[story]
title = "The Whispering Woods"
select_prompt = "Choose your champion."

[story.forest]
text = "{name}, you stand at the edge of the Whispering Woods."
action = "Step onto the Old Path"

[story.leader]
name = "Prince Henry"
epithet = "a gleaming Paladin"
sprite = { sheet = "rogues.png", column = 2, row = 0 }

[story.invite]
text = "Well done, {name}. Will you join {leader}?"
accept = "Yes, I will join!"
decline = "No, I'd rather adventure alone."

[story.endings.joined]
heading = "SUCCESS! Party Formed!"
text = "You have joined {leader}'s party."
restart = "Start a New Adventure"

[story.endings.alone]
heading = "Solitary Path"
text = "You wander alone."
restart = "Start a New Adventure"

[[character]]
id = "boss"
name = "Boss"
sprite = { sheet = "rogues.png", column = 3, row = 0 }
puzzles = ["chess"]

[[character]]
id = "flash"
name = "Flash"
sprite = { sheet = "rogues.png", column = 1, row = 3 }
puzzles = ["strategy-allocation"]

[[character]]
id = "monty"
name = "Monty"
sprite = { sheet = "rogues.png", column = 0, row = 4 }
puzzles = ["chess", "trivia-movement", "strategy-allocation"]

[[character]]
id = "hermit"
name = "Hermit"
sprite = { sheet = "rogues.png", column = 1, row = 1 }
puzzles = []

[[character]]
id = "ghost"
name = "Ghost"
sprite = { sheet = "rogues.png", column = 4, row = 1 }
puzzles = ["narrative-lore"]
"#;

fn parse(source: &str) -> Puzzle {
    toml::from_str(source).unwrap()
}

pub fn chess() -> Puzzle {
    parse(CHESS)
}

pub fn strategy() -> Puzzle {
    parse(STRATEGY)
}

pub fn movement() -> Puzzle {
    parse(MOVEMENT)
}

/// Five characters; "ghost" faces a puzzle with no answer key.
pub fn catalog() -> Catalog {
    let file: StoryFile = toml::from_str(STORY).unwrap();
    let mut table = AnswerKeyTable::default();
    table.register(chess());
    table.register(strategy());
    table.register(movement());
    Catalog::new(file.story, file.character, table).unwrap()
}

/// The standard catalog with "boss" facing `puzzles` instead.
pub fn with_boss_puzzles(puzzles: Vec<PuzzleType>) -> Catalog {
    let base = catalog();
    let mut characters = base.characters().to_vec();
    characters[0].puzzles = puzzles;
    Catalog::new(base.story().clone(), characters, base.answer_keys().clone()).unwrap()
}
