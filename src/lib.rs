//! # scholars-table
//!
//! A terminal quiz table: timed multiple-choice rounds that pay out XP and
//! coins, a lobby of games and tournaments, Vue and Angular snippet practice,
//! and Bob the Bot commenting on all of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scholars_table::{Config, Error, ScholarsTable};
//!
//! fn main() -> Result<(), Error> {
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let _enter = runtime.enter();
//!
//!     let table = ScholarsTable::from_json("questions.json", &Config::default())?;
//!     table.run()
//! }
//! ```

mod app;
pub mod assistant;
pub mod config;
pub mod data;
pub mod engine;
mod error;
pub mod logging;
pub mod models;
pub mod snippet;
pub mod state;
pub mod terminal;
mod ui;

use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub use app::{ActiveQuiz, App, LobbyFocus, SnippetMode, SnippetView};
pub use config::{Config, ConfigError};
pub use data::{LoadError, load_questions_from_json};
pub use engine::{EngineError, EngineSettings, SessionEvent, SessionHandle};
pub use error::{Error, Result};
pub use models::{Framework, Question, QuizResult, User};
pub use state::{AppState, View};

/// How long to wait for a key before checking the quiz session again.
const FRAME: Duration = Duration::from_millis(100);

/// The whole application, ready to take over a terminal.
pub struct ScholarsTable {
    app: App,
}

impl ScholarsTable {
    pub fn new(questions: Vec<Question>, config: &Config) -> Self {
        Self {
            app: App::new(questions, config),
        }
    }

    /// Use the questions in a JSON file instead of the built-in set.
    pub fn from_json<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions, config))
    }

    /// Run until the player quits.
    ///
    /// Quiz sessions are spawned on the ambient tokio runtime, so this must be
    /// called from inside one (for example after `Runtime::enter`).
    pub fn run(mut self) -> Result<()> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        app.poll_session();
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(FRAME)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_input(app, key);
        }
    }

    tracing::info!("player quit");
    Ok(())
}

fn handle_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.back_to_lobby();
        app.quit();
        return;
    }

    match app.view() {
        View::Lobby => {
            // The player stays in the lobby; the failure only goes to the log.
            if let Err(err) = handle_lobby_input(app, key.code) {
                tracing::warn!(%err, "lobby action failed");
            }
        }
        View::Quiz => handle_quiz_input(app, key.code),
        View::Summary => handle_summary_input(app, key.code),
        View::Snippet(_) => handle_snippet_input(app, key.code),
    }
}

fn handle_lobby_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Enter => app.activate()?,
        KeyCode::Char('v') | KeyCode::Char('V') => app.open_snippet(Framework::Vue)?,
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_snippet(Framework::Angular)?,
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
    Ok(())
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.next_option(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char(c @ '1'..='9') => app.answer(c as usize - '1' as usize),
        KeyCode::Esc => app.close_quiz(),
        _ => {}
    }
}

fn handle_summary_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Esc => app.back_to_lobby(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_snippet_input(app: &mut App, key: KeyCode) {
    let in_reference = matches!(
        app.snippet().map(SnippetView::mode),
        Some(SnippetMode::Reference { .. })
    );

    match key {
        KeyCode::F(2) => app.snippet_hint(),
        KeyCode::F(3) => app.toggle_reference(),
        KeyCode::F(5) => app.run_snippet(),
        KeyCode::F(6) => {
            app.submit_snippet();
        }
        KeyCode::F(8) => app.reset_snippet(),
        KeyCode::Esc if in_reference => app.toggle_reference(),
        KeyCode::Esc => app.back_to_lobby(),
        KeyCode::Enter if in_reference => app.insert_reference(),
        KeyCode::Down if in_reference => app.reference_next(),
        KeyCode::Up if in_reference => app.reference_previous(),
        KeyCode::Enter => app.snippet_insert('\n'),
        KeyCode::Tab => {
            app.snippet_insert(' ');
            app.snippet_insert(' ');
        }
        KeyCode::Backspace => app.snippet_backspace(),
        KeyCode::Left => app.snippet_left(),
        KeyCode::Right => app.snippet_right(),
        KeyCode::Char(c) => app.snippet_insert(c),
        _ => {}
    }
}
