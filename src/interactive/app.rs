//! TUI application state and logic

use crate::core::{Alert, RejectionReason};
use crate::dictionary::Dictionary;
use crate::session::{GameSession, SessionError, Submission};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<D: Dictionary> {
    pub session: GameSession<D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(session: GameSession<D>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Spell words using the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            rounds_played: 0,
            should_quit: false,
        }
    }

    /// Start a new round, clearing the input line
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the root-word list cannot be loaded.
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        let root = self.session.start_game()?.to_string();
        self.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.add_message(
            &format!("New round: {}", root.to_uppercase()),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Commit the input line as a submission
    pub fn submit(&mut self) {
        match self.session.submit_word(&self.input_buffer) {
            Ok(Submission::Accepted(word)) => {
                self.input_buffer.clear();
                self.add_message(&format!("Found '{word}'"), MessageStyle::Success);
            }
            Ok(Submission::Ignored) => {}
            Err(reason) => self.show_rejection(reason),
        }
    }

    fn show_rejection(&mut self, reason: RejectionReason) {
        let alert = reason.alert();
        self.add_message(&alert.title, MessageStyle::Error);
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Total letters across the words found this round
    #[must_use]
    pub fn letters_found(&self) -> usize {
        self.session
            .used_words()
            .iter()
            .map(|w| w.chars().count())
            .sum()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // While an alert is open only dismissal keys count
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::F(5) => self.restart(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
            _ => {}
        }
    }

    fn restart(&mut self) {
        if let Err(err) = self.new_round() {
            log::warn!("could not start a new round: {err}");
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// The first round is started before the terminal switches to raw mode, so a
/// missing word list is reported as a normal error.
///
/// # Errors
///
/// Returns an error if the first round cannot start, if terminal setup/cleanup
/// fails, or if there's an I/O error during rendering or event handling.
pub fn run_tui<D: Dictionary>(mut app: App<D>) -> Result<()> {
    app.new_round()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
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

    log::info!(
        "quitting after {} round(s), {} word(s) in the last one",
        app.rounds_played,
        app.session.used_words().len()
    );
    Ok(())
}
