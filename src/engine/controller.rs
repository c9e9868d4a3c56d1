use super::carousel::{self, CarouselWindow, Direction};
use super::error::{GameError, Result};
use super::state::{GameState, Scene};
use crate::puzzle::{Candidate, Evaluation, Puzzle, PuzzleType};
use crate::story::{Catalog, Character};

/// The rendering side of the game. The controller tells it what to show; it
/// routes player input back through the controller's transitions.
pub trait Presenter {
    fn present(&mut self, scene: Scene, state: &GameState);

    fn present_puzzle(&mut self, puzzle: &Puzzle, state: &GameState);
}

/// A judged answer and what happened at the gate afterwards.
#[derive(Debug)]
pub struct Submission {
    pub evaluation: Evaluation,
    pub gate: Result<()>,
}

/// Owns the game state and is the only thing that moves it between scenes.
pub struct SceneController<P> {
    catalog: Catalog,
    state: GameState,
    presenter: P,
}

impl<P: Presenter> SceneController<P> {
    pub fn new(catalog: Catalog, presenter: P) -> Self {
        let mut controller = Self {
            catalog,
            state: GameState::default(),
            presenter,
        };
        controller.show();
        controller
    }

    /// Points the carousel at `id` before play starts. Unknown ids are ignored.
    pub fn preselect(&mut self, id: &str) -> bool {
        if self.state.scene != Scene::CharacterSelect {
            return false;
        }
        match self.catalog.position(id) {
            Some(index) => {
                self.state.carousel_index = index;
                tracing::debug!(character = id, index, "carousel preselected");
                self.show();
                true
            }
            None => {
                tracing::debug!(character = id, "ignoring unknown initial character");
                false
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.state
            .selected_character()
            .and_then(|id| self.catalog.character(id))
    }

    /// The puzzle at the current index, if the gate still has one to show.
    pub fn current_puzzle(&self) -> Option<PuzzleType> {
        if self.state.scene != Scene::PuzzleGate {
            return None;
        }
        self.selected_character()?
            .puzzles
            .get(self.state.puzzle_index)
            .copied()
    }

    pub fn window(&self) -> Option<CarouselWindow<'_>> {
        carousel::window_view(self.catalog.characters(), self.state.carousel_index)
    }

    pub fn navigate(&mut self, direction: Direction) -> Result<()> {
        self.expect_scene(Scene::CharacterSelect, "carousel navigation")?;
        self.state.carousel_index = carousel::advance(
            self.state.carousel_index,
            self.catalog.characters().len(),
            direction,
        );
        self.show();
        Ok(())
    }

    pub fn select_character(&mut self, id: &str) -> Result<()> {
        self.expect_scene(Scene::CharacterSelect, "character selection")?;
        if self.catalog.character(id).is_none() {
            tracing::warn!(character = id, "selection of unknown character ignored");
            return Err(GameError::InvalidCharacter(id.to_string()));
        }

        tracing::info!(character = id, "character selected");
        self.state.selected_character = Some(id.to_string());
        self.state.scene = Scene::ForestEntrance;
        self.show();
        Ok(())
    }

    /// Selects whoever sits in the middle of the carousel.
    pub fn select_current(&mut self) -> Result<()> {
        let id = self
            .window()
            .map(|window| window.current.id.clone())
            .ok_or(GameError::NoCharacterSelected)?;
        self.select_character(&id)
    }

    pub fn advance_from_forest(&mut self) -> Result<()> {
        self.expect_scene(Scene::ForestEntrance, "leaving the forest entrance")?;
        if self.selected_character().is_none() {
            return Err(GameError::NoCharacterSelected);
        }
        self.state.scene = Scene::PuzzleGate;
        self.show();
        self.enter_puzzle_gate()
    }

    /// Shows the next puzzle in sequence, or moves on to the invite once
    /// there are none left. A puzzle with no answer key stops the gate.
    pub fn enter_puzzle_gate(&mut self) -> Result<()> {
        self.expect_scene(Scene::PuzzleGate, "entering the puzzle gate")?;
        let character = self.selected_character().ok_or(GameError::NoCharacterSelected)?;

        let Some(&kind) = character.puzzles.get(self.state.puzzle_index) else {
            tracing::info!(
                character = %character.id,
                solved = self.state.puzzle_index,
                "puzzle sequence finished"
            );
            self.state.scene = Scene::PartyInvite;
            self.show();
            return Ok(());
        };

        let puzzle = match self.catalog.answer_keys().lookup(kind) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                tracing::error!(puzzle = %kind, "gate closed: {err}");
                return Err(err);
            }
        };

        tracing::debug!(puzzle = %kind, index = self.state.puzzle_index, "presenting puzzle");
        self.presenter.present_puzzle(puzzle, &self.state);
        Ok(())
    }

    /// Judges a candidate against the current puzzle. Does not change state.
    pub fn evaluate(&self, candidate: Candidate<'_>) -> Result<Evaluation> {
        let kind = self.current_puzzle_or_err()?;
        let puzzle = self.catalog.answer_keys().lookup(kind)?;
        Ok(puzzle.evaluate(candidate))
    }

    /// Evaluates the candidate and routes the result to
    /// [`complete_puzzle`](Self::complete_puzzle) or [`retry_puzzle`](Self::retry_puzzle).
    ///
    /// The outer error means nothing was judged. Once judged, the verdict is
    /// always returned, even if the gate cannot open the next puzzle.
    pub fn submit(&mut self, candidate: Candidate<'_>) -> Result<Submission> {
        let kind = self.current_puzzle_or_err()?;
        let evaluation = self.evaluate(candidate)?;
        let gate = if evaluation.correct {
            self.complete_puzzle(kind)
        } else {
            tracing::debug!(puzzle = %kind, "wrong answer");
            self.retry_puzzle()
        };
        Ok(Submission { evaluation, gate })
    }

    pub fn complete_puzzle(&mut self, kind: PuzzleType) -> Result<()> {
        self.expect_scene(Scene::PuzzleGate, "completing a puzzle")?;
        let expected = self.current_puzzle();
        if expected != Some(kind) {
            return Err(GameError::UnexpectedPuzzle {
                expected,
                got: kind,
            });
        }

        tracing::info!(puzzle = %kind, index = self.state.puzzle_index, "puzzle solved");
        self.state.completed.insert(kind);
        self.state.puzzle_index += 1;
        self.state.scene = Scene::PuzzleGate;
        self.enter_puzzle_gate()
    }

    /// Shows the same puzzle again. Nothing is counted or lost.
    pub fn retry_puzzle(&mut self) -> Result<()> {
        self.expect_scene(Scene::PuzzleGate, "retrying a puzzle")?;
        self.enter_puzzle_gate()
    }

    pub fn resolve_party_invite(&mut self, accepted: bool) -> Result<()> {
        self.expect_scene(Scene::PartyInvite, "answering the party invite")?;
        tracing::info!(accepted, "party invite resolved");
        self.state.joined_party = Some(accepted);
        self.state.scene = Scene::GameOver;
        self.show();
        Ok(())
    }

    /// Back to a fresh character select, from anywhere.
    pub fn restart(&mut self) {
        tracing::info!(from = %self.state.scene, "restarting");
        self.state = GameState::default();
        self.show();
    }

    fn show(&mut self) {
        self.presenter.present(self.state.scene, &self.state);
    }

    fn expect_scene(&self, scene: Scene, action: &'static str) -> Result<()> {
        if self.state.scene == scene {
            Ok(())
        } else {
            Err(GameError::WrongScene {
                action,
                actual: self.state.scene,
            })
        }
    }

    fn current_puzzle_or_err(&self) -> Result<PuzzleType> {
        self.expect_scene(Scene::PuzzleGate, "answering a puzzle")?;
        if self.selected_character().is_none() {
            return Err(GameError::NoCharacterSelected);
        }
        self.current_puzzle().ok_or(GameError::WrongScene {
            action: "answering a puzzle",
            actual: self.state.scene,
        })
    }
}
