//! TUI application state and logic

use crate::game::{GuessOutcome, Session};
use crate::output::formatters::format_chain;
use crate::solver::SolutionPath;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest guess the input box accepts
const MAX_INPUT: usize = 32;

/// Application state
pub struct App<'a> {
    pub session: Session<'a, StdRng>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Last hint or give-up path
    pub solution: Option<SolutionPath>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// A game is running
    Guessing,
    /// The game ended; waiting for a new game or quit
    GameOver,
    /// No game since a reset
    Idle,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a, StdRng>) -> Self {
        Self {
            session,
            input_mode: InputMode::Idle,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Chain names from the start to the target.".to_string(),
                style: MessageStyle::Info,
            }],
            solution: None,
            should_quit: false,
        }
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.solution = None;

        let result = self.session.start().map(|state| {
            let letter = state
                .next_letter()
                .map_or_else(|| "?".to_string(), |c| c.to_uppercase().to_string());
            format!(
                "New game: {} to {}. Next name must start with {letter}",
                state.start_name(),
                state.target_name()
            )
        });

        match result {
            Ok(text) => {
                self.input_mode = InputMode::Guessing;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => {
                self.input_mode = InputMode::Idle;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        let outcome = self.session.guess(&guess);

        match &outcome {
            GuessOutcome::Accepted { name, result } if result.is_victory() => {
                let steps = self.session.game().map_or(0, |state| state.steps());
                self.add_message(
                    &format!("🎉 VICTORY with {name}! {steps} steps"),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Accepted { name, .. } => {
                self.add_message(&format!("Good! {name} added"), MessageStyle::Success);
            }
            GuessOutcome::Rejected {
                reason,
                remaining_attempts,
            } => {
                self.add_message(&reason.message(*remaining_attempts), MessageStyle::Error);
            }
            GuessOutcome::GameOver { reason } => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
        }

        if outcome.ends_game() {
            self.finish_game();
        }
    }

    pub fn give_up(&mut self) {
        match self.session.give_up() {
            Ok(concession) => {
                self.add_message(
                    &format!(
                        "You gave up! The target was {}.",
                        concession.state.target_name()
                    ),
                    MessageStyle::Error,
                );
                self.solution = Some(concession.solution);
                self.finish_game();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn show_hint(&mut self) {
        match self.session.hint() {
            Ok(path) if path.is_empty() => {
                self.add_message("No hint available", MessageStyle::Info);
            }
            Ok(path) => {
                self.add_message(
                    &format!("Hint: {}", format_chain(path.names.as_slice())),
                    MessageStyle::Info,
                );
                self.solution = Some(path);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.input_buffer.clear();
        self.solution = None;
        self.input_mode = InputMode::Idle;
        self.add_message(
            "Game has been reset. Press 'n' to start a new game.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('n'), true) => {
                self.new_game();
                return;
            }
            (KeyCode::Char('r'), true) => {
                self.reset();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::GameOver | InputMode::Idle => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match (key.code, ctrl) {
                (KeyCode::Char('g'), true) => self.give_up(),
                (KeyCode::Tab, _) => self.show_hint(),
                (KeyCode::Char(c), false) => {
                    if self.input_buffer.chars().count() < MAX_INPUT {
                        self.input_buffer.push(c);
                    }
                }
                (KeyCode::Backspace, _) => {
                    self.input_buffer.pop();
                }
                (KeyCode::Enter, _) => self.submit_guess(),
                _ => {}
            },
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Dictionary;
    use crate::game::GameState;
    use rand::SeedableRng;

    fn app(dict: &Dictionary) -> App<'_> {
        App::new(Session::new(
            dict,
            GameConfig::default(),
            StdRng::seed_from_u64(4),
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn new_game_starts_guessing() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        assert_eq!(app.input_mode, InputMode::Idle);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.session.game().is_some_and(GameState::is_active));
    }

    #[test]
    fn typing_and_backspace() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        app.new_game();

        type_text(&mut app, "Lia");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "Li");
    }

    #[test]
    fn empty_guess_reports_error() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        app.new_game();

        press(&mut app, KeyCode::Enter);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Please enter a name.");
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn wrong_guess_reports_attempts_left() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        app.new_game();

        type_text(&mut app, "Zed");
        press(&mut app, KeyCode::Enter);
        let last = app.messages.last().unwrap();
        assert!(last.text.ends_with(" 9 attempts remaining."), "{}", last.text);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn give_up_ends_game() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        app.new_game();

        ctrl(&mut app, 'g');
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(app.solution.is_some());

        // Letters no longer go into the input box
        type_text(&mut app, "x");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn reset_returns_to_idle() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        app.new_game();

        ctrl(&mut app, 'r');
        assert_eq!(app.input_mode, InputMode::Idle);
        assert!(app.session.game().is_none());
    }

    #[test]
    fn quit_keys() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        app.new_game();
        type_text(&mut app, "q");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn too_few_names_stays_idle() {
        let dict = Dictionary::new(["Alice"]);
        let mut app = app(&dict);
        app.new_game();
        assert_eq!(app.input_mode, InputMode::Idle);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn messages_are_capped() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy"]);
        let mut app = app(&dict);
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
