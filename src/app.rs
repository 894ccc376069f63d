use tracing::debug;

use crate::data::QuizDataset;
use crate::error::{NavigationError, SessionError};
use crate::session::{Advance, Session, SessionState};
use crate::ui::Skin;

/// A session plus the presentation-only state around it.
pub struct App {
    session: Session,
    skin: Skin,
    option_cursor: usize,
    result_scroll: usize,
    notice: Option<String>,
}

impl App {
    pub fn new(dataset: QuizDataset, skin: Skin) -> Self {
        Self {
            session: Session::new(dataset),
            skin,
            option_cursor: 0,
            result_scroll: 0,
            notice: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    /// Index of the highlighted option of the current question.
    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Message explaining the last refused action, cleared by the next key.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn move_cursor_down(&mut self) {
        if let Some(count) = self.option_count() {
            self.option_cursor = (self.option_cursor + 1) % count;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if let Some(count) = self.option_count() {
            self.option_cursor = (self.option_cursor + count - 1) % count;
        }
    }

    /// Select the highlighted option.
    pub fn choose_highlighted(&mut self) {
        self.choose(self.option_cursor);
    }

    /// Select an option by its 1-based number as shown on screen.
    pub fn choose_numbered(&mut self, number: usize) {
        match self.option_count() {
            Some(count) if (1..=count).contains(&number) => self.choose(number - 1),
            Some(_) => self.notice = Some(format!("There is no option {number}")),
            None => {}
        }
    }

    fn choose(&mut self, index: usize) {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return;
        };

        match self.session.select_option(&option) {
            Ok(()) => self.option_cursor = index,
            Err(err) => self.reject(err),
        }
    }

    /// Go to the next question, or submit on the last one.
    pub fn advance(&mut self) {
        match self.session.go_next() {
            Ok(Advance::Moved(_)) => self.sync_cursor(),
            Ok(Advance::Finished) => {
                self.option_cursor = 0;
                self.result_scroll = 0;
            }
            Err(err) => self.reject(err),
        }
    }

    pub fn go_back(&mut self) {
        match self.session.go_previous() {
            Ok(_) => self.sync_cursor(),
            Err(err) => self.reject(err),
        }
    }

    pub fn restart(&mut self) {
        self.session.reset();
        self.option_cursor = 0;
        self.result_scroll = 0;
        self.notice = None;
    }

    pub fn scroll_results_down(&mut self) {
        if self.session.is_finished() {
            let max_scroll = self.session.total_questions().saturating_sub(1);
            self.result_scroll = (self.result_scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn option_count(&self) -> Option<usize> {
        self.session
            .current_question()
            .map(|question| question.options.len())
    }

    /// Put the cursor on the recorded answer of the new current question.
    fn sync_cursor(&mut self) {
        self.option_cursor = self
            .session
            .current_question()
            .and_then(|question| {
                self.session
                    .answer_for(question.id)
                    .and_then(|answer| question.option_index(answer))
            })
            .unwrap_or(0);
    }

    fn reject(&mut self, err: SessionError) {
        debug!(error = %err, "action rejected");
        self.notice = Some(match err {
            SessionError::InvalidNavigation(NavigationError::Unanswered { .. }) => {
                "Pick an answer first".to_string()
            }
            SessionError::InvalidNavigation(NavigationError::AtFirstQuestion) => {
                "This is the first question".to_string()
            }
            other => other.to_string(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(QuizDataset::sample(), Skin::default())
    }
}
