use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::data::QuizDataset;
use crate::error::LoadError;
use crate::models::Question;

/// Load and validate a quiz from a JSON array of questions.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuizDataset, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading questions");

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let dataset = QuizDataset::new(questions).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), questions = dataset.len(), "loaded quiz");
    Ok(dataset)
}
