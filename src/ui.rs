use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::engine::Scene;
use crate::puzzle::{Answer, Evaluation, Puzzle};
use crate::story::{Character, SpriteRef};
use crate::{App, InviteChoice, View};

pub fn draw_ui(f: &mut Frame, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(5),
        ])
        .split(f.area());

    draw_status(f, app, chunks[0]);

    if let Some(outcome) = &app.outcome {
        draw_outcome(f, outcome, chunks[1]);
    } else if let Some(alert) = &app.alert {
        draw_alert(f, alert, chunks[1]);
    } else {
        match app.view() {
            View::Scene(Scene::CharacterSelect) => draw_character_select(f, app, chunks[1]),
            View::Scene(Scene::ForestEntrance) => draw_forest(f, app, chunks[1]),
            View::Puzzle(_) => {
                if let Some(puzzle) = app.puzzle() {
                    draw_puzzle(f, app, puzzle, chunks[1]);
                }
            }
            View::Scene(Scene::PartyInvite) => draw_invite(f, app, chunks[1]),
            View::Scene(Scene::GameOver) => draw_game_over(f, app, chunks[1]),
            View::Scene(Scene::PuzzleGate) => {}
        }
    }

    draw_keys(f, app, chunks[2]);
}

fn draw_status(f: &mut Frame, app: &App<'_>, area: Rect) {
    let story = app.game.catalog().story();
    let state = app.game.state();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", story.title.to_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("  "),
    ];

    if let Some(character) = app.game.selected_character() {
        spans.push(Span::styled(
            format!(" {} ", character.name),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
        spans.push(Span::raw("  "));
        if state.scene() == Scene::PuzzleGate && !character.puzzles.is_empty() {
            spans.push(Span::styled(
                format!(
                    " Trial {}/{} ",
                    (state.puzzle_index() + 1).min(character.puzzles.len()),
                    character.puzzles.len()
                ),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw("  "));
        }
    }

    spans.push(Span::styled(
        format!(" Solved: {} ", state.completed().len()),
        Style::default().fg(Color::Green),
    ));

    let status =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status, area);
}

fn sprite_label(sprite: &SpriteRef) -> String {
    let (x, y) = sprite.offset();
    format!("{} @ {}px {}px", sprite.sheet, x, y)
}

fn draw_character_select(f: &mut Frame, app: &App<'_>, area: Rect) {
    let story = app.game.catalog().story();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    let count = app.game.catalog().characters().len();
    let prompt = Paragraph::new(Text::from(vec![
        Line::from(story.select_prompt.as_str()),
        Line::from(Span::styled(
            format!("{} of {}", app.game.state().carousel_index() % count + 1, count),
            Style::default().fg(Color::DarkGray),
        )),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    .wrap(Wrap { trim: true });
    f.render_widget(prompt, rows[0]);

    let Some(window) = app.game.window() else {
        return;
    };

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    for (i, character) in [window.previous, window.current, window.next]
        .into_iter()
        .enumerate()
    {
        draw_slot(f, character, i == 1, slots[i]);
    }
}

fn draw_slot(f: &mut Frame, character: &Character, active: bool, area: Rect) {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let trials = if character.puzzles.is_empty() {
        String::from("no trials")
    } else {
        character
            .puzzles
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let text = Text::from(vec![
        Line::from(""),
        Line::from(character.name.as_str()).style(style),
        Line::from(""),
        Line::from(Span::styled(
            sprite_label(&character.sprite),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(trials, Style::default().fg(Color::DarkGray))),
    ]);

    let slot = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }));
    f.render_widget(slot, area);
}

fn character_name<'a>(app: &'a App<'_>) -> &'a str {
    app.game
        .selected_character()
        .map(|c| c.name.as_str())
        .unwrap_or_default()
}

fn draw_forest(f: &mut Frame, app: &App<'_>, area: Rect) {
    let story = app.game.catalog().story();
    let text = Text::from(vec![
        Line::from(story.fill(&story.forest.text, character_name(app))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ENTER] {}", story.forest.action),
            Style::default().fg(Color::Yellow),
        )),
    ]);

    let forest = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" The Whispering Woods "))
        .wrap(Wrap { trim: false });
    f.render_widget(forest, area);
}

fn draw_puzzle(f: &mut Frame, app: &App<'_>, puzzle: &Puzzle, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut text = Text::from(puzzle.prompt.trim());
    if let Some(image) = &puzzle.image {
        text.push_line("");
        text.push_line(Span::styled(
            format!("(illustration: {image})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let prompt = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", puzzle.title)),
        )
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));
    f.render_widget(prompt, columns[0]);

    match &puzzle.answer {
        Answer::FreeText { .. } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(columns[1]);
            f.render_widget(&app.answer, rows[0]);
        }
        Answer::MultipleChoice { options } => {
            let lines: Vec<Line> = options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let style = if i == app.choice {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Line::from(Span::styled(format!(" {} ", option.text), style))
                })
                .collect();
            let choices = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title(" Choose "))
                .wrap(Wrap { trim: false });
            f.render_widget(choices, columns[1]);
        }
    }
}

fn draw_invite(f: &mut Frame, app: &App<'_>, area: Rect) {
    let story = app.game.catalog().story();
    let leader = &story.leader;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let text = Text::from(vec![
        Line::from(format!(
            "You step through the gate and find {}, {}, waiting for you.",
            leader.name, leader.epithet
        )),
        Line::from(Span::styled(
            sprite_label(&leader.sprite),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(story.fill(&story.invite.text, character_name(app))),
    ]);
    let speech = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", leader.name)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(speech, columns[0]);

    let option = |label: &str, choice: InviteChoice| {
        let style = if app.invite == choice {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(Span::styled(format!(" {label} "), style))
    };
    let answers = Paragraph::new(Text::from(vec![
        option(&story.invite.accept, InviteChoice::Join),
        Line::from(""),
        option(&story.invite.decline, InviteChoice::Decline),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Your Answer "))
    .wrap(Wrap { trim: false });
    f.render_widget(answers, columns[1]);
}

fn draw_game_over(f: &mut Frame, app: &App<'_>, area: Rect) {
    let story = app.game.catalog().story();
    let joined = app.game.state().joined_party().unwrap_or(false);
    let ending = story.ending(joined);
    let color = if joined { Color::Green } else { Color::Blue };

    let text = Text::from(vec![
        Line::from(Span::styled(
            ending.heading.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(story.fill(&ending.text, character_name(app))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ENTER] {}", ending.restart),
            Style::default().fg(Color::Yellow),
        )),
    ]);
    let ending = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(ending, area);
}

fn draw_outcome(f: &mut Frame, outcome: &Evaluation, area: Rect) {
    let (title, style, prompt) = if outcome.correct {
        (
            " SOLVED! ",
            Style::default().fg(Color::Black).bg(Color::Green),
            "[ENTER] Continue to the Gate",
        )
    } else {
        (
            " NOT QUITE ",
            Style::default().fg(Color::White).bg(Color::Red),
            "[ENTER] Try again",
        )
    };

    let text = Text::from(vec![
        Line::from(outcome.message.as_str()),
        Line::from(""),
        Line::from(prompt),
    ]);
    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .style(style);
    f.render_widget(panel, area);
}

fn draw_alert(f: &mut Frame, alert: &str, area: Rect) {
    let text = Text::from(vec![
        Line::from("The path ahead is sealed by a broken enchantment."),
        Line::from(""),
        Line::from(alert),
    ]);
    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Something Went Wrong "))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::Magenta));
    f.render_widget(panel, area);
}

fn draw_keys(f: &mut Frame, app: &App<'_>, area: Rect) {
    let restart = if app.game.state().scene().offers_restart() {
        "  •  F2 restart"
    } else {
        ""
    };

    let keys = if app.outcome.is_some() {
        String::from("ENTER continue")
    } else if app.alert.is_some() {
        String::from("ENTER/F2 start over  •  q quit")
    } else {
        let base = match app.view() {
            View::Scene(Scene::CharacterSelect) => "←/→ browse  •  ENTER select  •  q quit",
            View::Scene(Scene::ForestEntrance) => "ENTER continue  •  q quit",
            View::Puzzle(_) => match app.puzzle().map(|p| &p.answer) {
                Some(Answer::FreeText { .. }) => {
                    "type your answer  •  ENTER submit  •  Esc quit"
                }
                _ => "↑/↓ choose  •  a/b/c pick  •  ENTER submit  •  q quit",
            },
            View::Scene(Scene::PartyInvite) => {
                "↑/↓ choose  •  y/n answer  •  ENTER confirm  •  q quit"
            }
            View::Scene(Scene::GameOver) => "ENTER play again  •  q quit",
            View::Scene(Scene::PuzzleGate) => "",
        };
        format!("{base}{restart}")
    };

    let help = Paragraph::new(keys)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}
