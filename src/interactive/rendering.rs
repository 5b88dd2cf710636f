//! TUI rendering with ratatui
//!
//! Layout for the name chain game.

use super::app::{App, InputMode, MessageStyle};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔗 NAMECHAIN - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Current game
            Constraint::Min(4),    // Chain
            Constraint::Length(5), // Solution
        ])
        .split(area);

    render_current_game(f, app, chunks[0]);
    render_chain(f, app, chunks[1]);
    render_solution(f, app, chunks[2]);
}

fn render_current_game(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Game ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(state) = app.session.game() else {
        let paragraph = Paragraph::new("No game. Press 'n' to start.").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let next = match (state.is_active(), state.next_letter()) {
        (true, Some(letter)) => letter.to_uppercase().to_string(),
        (true, None) => "?".to_string(),
        (false, _) => "-".to_string(),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                state.current_name().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Target:  "),
            Span::styled(
                state.target_name().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Next:    "),
            Span::styled(
                next,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Score:   {}", state.score())),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_chain(f: &mut Frame, app: &App, area: Rect) {
    let chain = app.session.game().map_or(&[][..], GameState::chain);
    let visible = usize::from(area.height.saturating_sub(2)).max(1);

    let items: Vec<ListItem> = chain
        .iter()
        .enumerate()
        .rev()
        .take(visible)
        .map(|(i, name)| {
            let style = if i == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(format!("{:>2}. {name}", i + 1)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Chain ({}) ", chain.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_solution(f: &mut Frame, app: &App, area: Rect) {
    let (title, text) = match &app.solution {
        Some(path) if path.is_empty() => (" Solution ".to_string(), "None found".to_string()),
        Some(path) => (
            format!(" Solution ({}) ", path.origin),
            path.names.join(" → "),
        ),
        None => (" Solution ".to_string(), "TAB for a hint".to_string()),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, max) = app.session.game().map_or_else(
        || {
            let max = app.session.config().max_attempts;
            (max, max)
        },
        |state| (state.remaining_attempts(), state.max_attempts()),
    );
    let ratio = if max == 0 {
        0.0
    } else {
        f64::from(remaining) / f64::from(max)
    };

    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max} remaining"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Idle => (" Press 'n' to start a game ", "", Color::DarkGray),
        InputMode::Guessing => (
            " Enter a name | Enter: Submit | TAB: Hint | Ctrl+G: Give up ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let board = app.session.scoreboard();

    let names = Paragraph::new(format!("Names: {}", app.session.dictionary().len()))
        .alignment(Alignment::Center);
    f.render_widget(names, chunks[0]);

    let games = Paragraph::new(format!(
        "Games: {} | Reached: {}",
        board.games_played(),
        board.targets_reached()
    ))
    .alignment(Alignment::Center);
    f.render_widget(games, chunks[1]);

    let best = Paragraph::new(format!(
        "Best score: {}",
        board.best_score().map_or_else(|| "-".to_string(), |s| s.to_string())
    ))
    .alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New | Ctrl+R: Reset")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
