//! Error types for dataset loading, session transitions and running the quiz.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A question list that cannot back a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("quiz must contain at least one question")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(u32),
    #[error("question {0} has no options")]
    NoOptions(u32),
}

/// Failure to load a dataset from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid quiz in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DatasetError,
    },
}

/// Why a forward or backward move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("question {question_id} has not been answered yet")]
    Unanswered { question_id: u32 },
}

/// A rejected session action. The session state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{option:?} is not an option of question {question_id}")]
    InvalidOption { question_id: u32, option: String },
    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(u32),
    #[error("question {requested} is not the current question ({current})")]
    NotCurrentQuestion { requested: u32, current: u32 },
    #[error(transparent)]
    InvalidNavigation(#[from] NavigationError),
    #[error("the quiz is finished; start over to answer again")]
    Finished,
}

/// Top-level error for building and running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("Invalid quiz: {0}")]
    Dataset(#[from] DatasetError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_error_is_transparent() {
        let err = SessionError::from(NavigationError::Unanswered { question_id: 2 });
        assert_eq!(err.to_string(), "question 2 has not been answered yet");
    }

    #[test]
    fn test_load_error_mentions_path() {
        let err = LoadError::Invalid {
            path: PathBuf::from("quiz.json"),
            source: DatasetError::Empty,
        };
        assert_eq!(
            err.to_string(),
            "invalid quiz in quiz.json: quiz must contain at least one question"
        );
    }
}
