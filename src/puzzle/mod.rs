pub mod evaluate;
pub mod loader;
pub mod table;
pub mod types;

pub use evaluate::{Candidate, Evaluation};
pub use table::AnswerKeyTable;
pub use types::{Answer, Puzzle, PuzzleType};
