//! # knowledge-quiz
//!
//! A terminal multiple-choice quiz: one question at a time, free movement
//! back and forth, and a review of every answer at the end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use knowledge_quiz::{Quiz, QuizError, Skin};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Built-in questions, or `Quiz::from_json("questions.json", Skin::Card)?`
//!     let quiz = Quiz::new(knowledge_quiz::QuizDataset::sample(), Skin::Fluid);
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod error;
pub mod logging;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{debug, info};

pub use app::App;
pub use data::{QuizDataset, load_questions_from_json};
pub use error::{DatasetError, LoadError, NavigationError, QuizError, SessionError};
pub use models::{Answers, Question};
pub use session::{Advance, Session, SessionState};
pub use ui::Skin;

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(dataset: QuizDataset, skin: Skin) -> Self {
        Self {
            app: App::new(dataset, skin),
        }
    }

    /// Build a quiz from raw questions, rejecting an unusable list up front.
    pub fn from_questions(questions: Vec<Question>, skin: Skin) -> Result<Self, QuizError> {
        Ok(Self::new(QuizDataset::new(questions)?, skin))
    }

    /// Load a quiz from a JSON file.
    ///
    /// ```rust,no_run
    /// use knowledge_quiz::{Quiz, Skin};
    ///
    /// let quiz = Quiz::from_json("questions.json", Skin::Fluid).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, skin: Skin) -> Result<Self, QuizError> {
        let dataset = load_questions_from_json(path)?;
        Ok(Self::new(dataset, skin))
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        info!(
            questions = self.app.session().total_questions(),
            skin = ?self.app.skin(),
            "starting quiz"
        );
        let mut guard = terminal::TerminalGuard::enter()?;
        let result = run_event_loop(guard.terminal_mut(), &mut self.app);
        drop(guard);
        info!(answered = self.app.session().answered_count(), "quiz closed");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    app.clear_notice();

    if matches!(key, KeyCode::Char('q' | 'Q') | KeyCode::Esc) {
        debug!("quit requested");
        return true;
    }

    if app.session().is_finished() {
        handle_results_input(app, key);
    } else {
        handle_answering_input(app, key);
    }
    false
}

fn handle_answering_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_highlighted(),
        KeyCode::Char(c @ '1'..='9') => {
            app.choose_numbered(c as usize - '0' as usize);
        }
        KeyCode::Right | KeyCode::Char('l' | 'n') => app.advance(),
        KeyCode::Left | KeyCode::Char('h' | 'p') => app.go_back(),
        KeyCode::Char('r' | 'R') => app.restart(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r' | 'R') | KeyCode::Enter => app.restart(),
        _ => {}
    }
}
