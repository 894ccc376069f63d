//! Quiz session state machine.
//!
//! A session is either answering questions one at a time or showing the
//! results. The only way out of results is [`Session::reset`].

use std::mem;

use tracing::debug;

use crate::data::QuizDataset;
use crate::error::{NavigationError, SessionError};
use crate::models::{Answers, Question};

/// Macro-state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Answering the question at `current_index`.
    Answering {
        current_index: usize,
        answers: Answers,
    },

    /// Reviewing the recorded answers.
    Results { answers: Answers },
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Answering {
            current_index: 0,
            answers: Answers::new(),
        }
    }
}

impl SessionState {
    pub fn answers(&self) -> &Answers {
        match self {
            Self::Answering { answers, .. } | Self::Results { answers } => answers,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Results { .. })
    }
}

/// Result of a successful [`Session::go_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// Left the last question and entered results.
    Finished,
}

/// One attempt at a quiz.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: QuizDataset,
    state: SessionState,
}

impl Session {
    pub fn new(dataset: QuizDataset) -> Self {
        Self {
            dataset,
            state: SessionState::default(),
        }
    }

    pub fn dataset(&self) -> &QuizDataset {
        &self.dataset
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn answers(&self) -> &Answers {
        self.state.answers()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Record `option` for the current question, replacing any earlier choice.
    pub fn select_option(&mut self, option: &str) -> Result<(), SessionError> {
        let SessionState::Answering {
            current_index,
            answers,
        } = &mut self.state
        else {
            return Err(SessionError::Finished);
        };

        let question = &self.dataset.questions()[*current_index];
        if !question.offers(option) {
            return Err(SessionError::InvalidOption {
                question_id: question.id,
                option: option.to_string(),
            });
        }

        debug!(question = question.id, option, "option selected");
        answers.record(question.id, option.to_string());
        Ok(())
    }

    /// Like [`Session::select_option`], but names the question explicitly.
    pub fn select_option_for(&mut self, question_id: u32, option: &str) -> Result<(), SessionError> {
        if self.dataset.by_id(question_id).is_none() {
            return Err(SessionError::UnknownQuestion(question_id));
        }
        let current = self.current_question().ok_or(SessionError::Finished)?.id;
        if current != question_id {
            return Err(SessionError::NotCurrentQuestion {
                requested: question_id,
                current,
            });
        }
        self.select_option(option)
    }

    /// Move forward, or finish when on the last question.
    ///
    /// The current question must be answered first.
    pub fn go_next(&mut self) -> Result<Advance, SessionError> {
        let last_index = self.dataset.last_index();
        let SessionState::Answering {
            current_index,
            answers,
        } = &mut self.state
        else {
            return Err(SessionError::Finished);
        };

        let question_id = self.dataset.questions()[*current_index].id;
        if !answers.contains(question_id) {
            return Err(NavigationError::Unanswered { question_id }.into());
        }

        if *current_index < last_index {
            *current_index += 1;
            debug!(index = *current_index, "moved to next question");
            return Ok(Advance::Moved(*current_index));
        }

        let answers = mem::take(answers);
        debug!(answered = answers.len(), "quiz finished");
        self.state = SessionState::Results { answers };
        Ok(Advance::Finished)
    }

    /// Move back one question.
    pub fn go_previous(&mut self) -> Result<usize, SessionError> {
        let SessionState::Answering { current_index, .. } = &mut self.state else {
            return Err(SessionError::Finished);
        };

        if *current_index == 0 {
            return Err(NavigationError::AtFirstQuestion.into());
        }

        *current_index -= 1;
        debug!(index = *current_index, "moved to previous question");
        Ok(*current_index)
    }

    /// Discard all answers and start again from the first question.
    pub fn reset(&mut self) {
        debug!(finished = self.is_finished(), "session reset");
        self.state = SessionState::default();
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::Answering { current_index, .. } => Some(*current_index),
            SessionState::Results { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index()
            .map(|index| &self.dataset.questions()[index])
    }

    pub fn total_questions(&self) -> usize {
        self.dataset.len()
    }

    pub fn progress_percent(&self) -> Option<f64> {
        self.current_index()
            .map(|index| 100.0 * (index + 1) as f64 / self.total_questions() as f64)
    }

    pub fn answered_count(&self) -> usize {
        self.answers().len()
    }

    pub fn answer_for(&self, question_id: u32) -> Option<&str> {
        self.answers().get(question_id)
    }

    pub fn is_option_selected(&self, question: &Question, option: &str) -> bool {
        self.answer_for(question.id) == Some(option)
    }

    pub fn can_go_next(&self) -> bool {
        self.current_question()
            .is_some_and(|question| self.answers().contains(question.id))
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index().is_some_and(|index| index > 0)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.dataset.last_index())
    }

    /// Every question in order with its recorded answer, if any.
    pub fn review(&self) -> impl Iterator<Item = (&Question, Option<&str>)> {
        let answers = self.answers();
        self.dataset
            .questions()
            .iter()
            .map(move |question| (question, answers.get(question.id)))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(QuizDataset::sample())
    }
}
