pub mod carousel;
pub mod controller;
pub mod error;
pub mod state;

pub use carousel::Direction;
pub use controller::{Presenter, SceneController, Submission};
pub use error::{GameError, Result};
pub use state::{GameState, Scene};
