mod engine;
mod puzzle;
mod story;
mod ui;

#[cfg(test)]
mod fixtures;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    widgets::{Block, Borders},
    Terminal,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tui_textarea::TextArea;

use engine::{Direction, GameError, GameState, Presenter, Scene, SceneController, Submission};
use puzzle::{Answer, Candidate, Evaluation, Puzzle, PuzzleType};
use story::load_catalog;

/// A short branching adventure: pick a champion, pass their trials, meet the prince.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Character id to show first in the carousel
    #[arg(long)]
    character: Option<String>,

    /// Directory holding story.toml and puzzles/
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Write logs here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// What the controller last asked to have on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Scene(Scene),
    Puzzle(PuzzleType),
}

struct Screen {
    view: View,
}

impl Presenter for Screen {
    fn present(&mut self, scene: Scene, _state: &GameState) {
        self.view = View::Scene(scene);
    }

    fn present_puzzle(&mut self, puzzle: &Puzzle, _state: &GameState) {
        self.view = View::Puzzle(puzzle.kind);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InviteChoice {
    Join,
    Decline,
}

impl InviteChoice {
    fn next(&self) -> Self {
        match self {
            InviteChoice::Join => InviteChoice::Decline,
            InviteChoice::Decline => InviteChoice::Join,
        }
    }
}

struct App<'a> {
    game: SceneController<Screen>,
    answer: TextArea<'a>,
    choice: usize,
    invite: InviteChoice,
    outcome: Option<Evaluation>,
    alert: Option<String>,
    last_view: View,
    quit: bool,
}

impl<'a> App<'a> {
    fn new(game: SceneController<Screen>) -> Self {
        let last_view = game.presenter().view;
        let mut app = App {
            game,
            answer: TextArea::default(),
            choice: 0,
            invite: InviteChoice::Join,
            outcome: None,
            alert: None,
            last_view,
            quit: false,
        };
        app.reset_inputs();
        app
    }

    fn view(&self) -> View {
        self.game.presenter().view
    }

    fn puzzle(&self) -> Option<&Puzzle> {
        match self.view() {
            View::Puzzle(kind) => self.game.catalog().answer_keys().get(kind),
            View::Scene(_) => None,
        }
    }

    fn reset_inputs(&mut self) {
        let placeholder = match self.puzzle().map(|p| &p.answer) {
            Some(Answer::FreeText {
                placeholder: Some(text),
                ..
            }) => text.clone(),
            _ => String::from("Type your answer..."),
        };

        self.answer = TextArea::default();
        self.answer.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Answer [ENTER: Submit] "),
        );
        self.answer.set_cursor_line_style(Style::default());
        self.answer.set_placeholder_text(placeholder);
        self.answer
            .set_placeholder_style(Style::default().fg(Color::DarkGray));
        self.choice = 0;
        self.invite = InviteChoice::Join;
    }

    /// Surfaces a refused transition instead of letting play continue past it.
    fn report(&mut self, result: engine::Result<()>) {
        if let Err(err) = result {
            match &err {
                GameError::Configuration(_) => tracing::error!("{err}"),
                _ => tracing::warn!("{err}"),
            }
            self.alert = Some(err.to_string());
        }
    }

    fn submit(&mut self, candidate: Candidate<'_>) {
        match self.game.submit(candidate) {
            Ok(Submission { evaluation, gate }) => {
                self.outcome = Some(evaluation);
                // Any gate alert waits until the outcome is dismissed.
                self.report(gate);
            }
            Err(err) => self.report(Err(err)),
        }
    }

    fn restart(&mut self) {
        self.game.restart();
        self.outcome = None;
        self.alert = None;
        self.reset_inputs();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.outcome.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.outcome = None;
                self.reset_inputs();
            }
            return;
        }

        if self.alert.is_some() {
            match key.code {
                KeyCode::F(2) | KeyCode::Enter => self.restart(),
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::F(2) && self.game.state().scene().offers_restart() {
            self.restart();
            return;
        }

        match self.view() {
            View::Scene(Scene::CharacterSelect) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    let result = self.game.navigate(Direction::Backward);
                    self.report(result);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    let result = self.game.navigate(Direction::Forward);
                    self.report(result);
                }
                KeyCode::Enter => {
                    let result = self.game.select_current();
                    self.report(result);
                }
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            },
            View::Scene(Scene::ForestEntrance) => match key.code {
                KeyCode::Enter => {
                    let result = self.game.advance_from_forest();
                    self.report(result);
                }
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            },
            View::Puzzle(_) => self.handle_puzzle_key(key),
            View::Scene(Scene::PartyInvite) => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                    self.invite = self.invite.next();
                }
                KeyCode::Char('y') => {
                    let result = self.game.resolve_party_invite(true);
                    self.report(result);
                }
                KeyCode::Char('n') => {
                    let result = self.game.resolve_party_invite(false);
                    self.report(result);
                }
                KeyCode::Enter => {
                    let result = self
                        .game
                        .resolve_party_invite(self.invite == InviteChoice::Join);
                    self.report(result);
                }
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            },
            View::Scene(Scene::GameOver) => match key.code {
                KeyCode::Enter => self.restart(),
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            },
            // Only left showing when the gate is sealed, under an alert.
            View::Scene(Scene::PuzzleGate) => {}
        }
    }

    fn handle_puzzle_key(&mut self, key: KeyEvent) {
        // None means free text; otherwise the number of options on offer.
        let options = match self.puzzle().map(|p| &p.answer) {
            Some(Answer::MultipleChoice { options }) => Some(options.len()),
            Some(Answer::FreeText { .. }) => None,
            None => return,
        };

        let Some(option_count) = options else {
            match key.code {
                KeyCode::Enter => {
                    let text = self.answer.lines().join(" ");
                    self.submit(Candidate::Text(&text));
                }
                KeyCode::Esc => self.quit = true,
                _ => {
                    self.answer.input(key);
                }
            }
            return;
        };

        if let KeyCode::Char(c) = key.code {
            if let Some(index) = letter_pick(c, option_count) {
                self.choice = index;
                self.submit(Candidate::Choice(index));
                return;
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.choice = (self.choice + option_count - 1) % option_count.max(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.choice = (self.choice + 1) % option_count.max(1);
            }
            KeyCode::Enter => self.submit(Candidate::Choice(self.choice)),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Clears stale input whenever the controller moves to a new view.
    fn sync_view(&mut self) {
        let view = self.view();
        if view != self.last_view {
            self.last_view = view;
            if self.outcome.is_none() {
                self.reset_inputs();
            }
        }
    }
}

/// Option letters take priority over navigation keys while in range.
fn letter_pick(c: char, option_count: usize) -> Option<usize> {
    let index = c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)?;
    (index < option_count).then_some(index)
}

fn init_tracing(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let catalog = load_catalog(&cli.content)?;
    let mut game = SceneController::new(
        catalog,
        Screen {
            view: View::Scene(Scene::CharacterSelect),
        },
    );
    if let Some(id) = &cli.character {
        game.preselect(id);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);

    let outcome = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    outcome?;

    match app.game.state().joined_party() {
        Some(true) => println!("\nYou rode out with the party. To be continued...\n"),
        Some(false) => println!("\nYou walked the solitary path. Perhaps another day.\n"),
        None => {}
    }

    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_>,
) -> Result<()> {
    while !app.quit {
        terminal.draw(|f| ui::draw_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
            app.sync_view();
        }
    }
    Ok(())
}

#[cfg(test)]
fn test_app(catalog: story::Catalog) -> App<'static> {
    App::new(SceneController::new(
        catalog,
        Screen {
            view: View::Scene(Scene::CharacterSelect),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::puzzle::AnswerKeyTable;

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.sync_view();
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn at_gate(app: &mut App<'_>, id: &str) {
        app.game.select_character(id).unwrap();
        app.sync_view();
        press(app, KeyCode::Enter);
    }

    /// "flash" faces a strategy puzzle whose eleventh option, `k`, is correct.
    fn wide_strategy_catalog() -> story::Catalog {
        let mut source = String::from(
            "kind = \"strategy-allocation\"\ntitle = \"Wide\"\nprompt = \"Pick one.\"\n\
             success = \"Yes\"\nfailure = \"No\"\n\n[answer]\nmode = \"multiple-choice\"\n",
        );
        for i in 0..11 {
            source.push_str(&format!(
                "\n[[answer.options]]\ntext = \"Option {i}\"\ncorrect = {}\n",
                i == 10
            ));
        }
        let wide: Puzzle = toml::from_str(&source).unwrap();

        let base = fixtures::catalog();
        let mut table: AnswerKeyTable = base.answer_keys().clone();
        table.register(wide);
        story::Catalog::new(base.story().clone(), base.characters().to_vec(), table).unwrap()
    }

    #[test]
    fn test_letter_pick_bounds() {
        assert_eq!(letter_pick('a', 3), Some(0));
        assert_eq!(letter_pick('c', 3), Some(2));
        assert_eq!(letter_pick('d', 3), None);
        assert_eq!(letter_pick('k', 11), Some(10));
        assert_eq!(letter_pick('C', 3), None);
        assert_eq!(letter_pick('1', 3), None);
    }

    #[test]
    fn test_letter_submits_multiple_choice() {
        let mut app = test_app(fixtures::catalog());
        at_gate(&mut app, "flash");
        assert_eq!(app.view(), View::Puzzle(PuzzleType::StrategyAllocation));

        press(&mut app, KeyCode::Char('c'));

        assert!(app.outcome.as_ref().unwrap().correct);
        assert_eq!(app.game.state().scene(), Scene::PartyInvite);
    }

    #[test]
    fn test_navigation_letters_still_navigate_when_out_of_range() {
        let mut app = test_app(fixtures::catalog());
        at_gate(&mut app, "flash");

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('k'));

        assert_eq!(app.choice, 1);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_option_letters_win_over_navigation_keys() {
        let mut app = test_app(wide_strategy_catalog());
        at_gate(&mut app, "flash");

        press(&mut app, KeyCode::Char('k'));

        assert!(app.outcome.as_ref().unwrap().correct);
        assert_eq!(app.game.state().scene(), Scene::PartyInvite);
    }

    #[test]
    fn test_outcome_shows_before_gate_alert() {
        let catalog =
            fixtures::with_boss_puzzles(vec![PuzzleType::Chess, PuzzleType::NarrativeLore]);
        let mut app = test_app(catalog);
        at_gate(&mut app, "boss");

        type_text(&mut app, "qg3");
        press(&mut app, KeyCode::Enter);

        assert!(app.outcome.as_ref().unwrap().correct);
        assert!(app.alert.is_some());

        press(&mut app, KeyCode::Enter);

        assert!(app.outcome.is_none());
        assert!(app.alert.as_ref().unwrap().contains("narrative-lore"));

        press(&mut app, KeyCode::Enter);

        assert!(app.alert.is_none());
        assert_eq!(app.game.state(), &GameState::default());
    }
}
