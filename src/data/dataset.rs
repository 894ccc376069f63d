use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::DatasetError;
use crate::models::Question;

/// An immutable, validated, non-empty list of questions.
///
/// Cloning is cheap; clones share the same question storage.
#[derive(Debug, Clone)]
pub struct QuizDataset {
    questions: Arc<[Question]>,
    index_by_id: Arc<BTreeMap<u32, usize>>,
}

impl QuizDataset {
    /// Validate and wrap a list of questions.
    ///
    /// Fails when the list is empty, when two questions share an id, or when
    /// a question offers no options.
    pub fn new(questions: Vec<Question>) -> Result<Self, DatasetError> {
        if questions.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut index_by_id = BTreeMap::new();
        for (index, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(DatasetError::NoOptions(question.id));
            }
            if index_by_id.insert(question.id, index).is_some() {
                return Err(DatasetError::DuplicateId(question.id));
            }
        }

        Ok(Self {
            questions: questions.into(),
            index_by_id: Arc::new(index_by_id),
        })
    }

    /// The built-in three question quiz.
    pub fn sample() -> Self {
        let questions = vec![
            Question::new(
                1,
                "What sound does a cat make?",
                ["Bhau-Bhau", "Meow-Meow", "Oink-Oink"],
            ),
            Question::new(
                2,
                "What is the largest planet in our solar system?",
                ["Mars", "Jupiter", "Saturn"],
            ),
            Question::new(
                3,
                "Which language is primarily used for web development?",
                ["Python", "JavaScript", "C++"],
            ),
        ];

        Self::new(questions).unwrap_or_else(|err| unreachable!("sample quiz is valid: {err}"))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn by_id(&self, id: u32) -> Option<&Question> {
        self.position_of(id).map(|index| &self.questions[index])
    }

    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub(crate) fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

impl Default for QuizDataset {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset() {
        let dataset = QuizDataset::sample();
        assert_eq!(dataset.len(), 3);
        let ids: Vec<u32> = dataset.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(dataset.by_id(2).unwrap().options[1], "Jupiter");
        assert_eq!(dataset.position_of(3), Some(2));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert_eq!(QuizDataset::new(Vec::new()).unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let questions = vec![
            Question::new(1, "a", ["x"]),
            Question::new(1, "b", ["y"]),
        ];
        assert_eq!(
            QuizDataset::new(questions).unwrap_err(),
            DatasetError::DuplicateId(1)
        );
    }

    #[test]
    fn test_question_without_options_rejected() {
        let questions = vec![Question::new(4, "a", Vec::<String>::new())];
        assert_eq!(
            QuizDataset::new(questions).unwrap_err(),
            DatasetError::NoOptions(4)
        );
    }

    #[test]
    fn test_duplicate_options_are_allowed() {
        let questions = vec![Question::new(1, "a", ["same", "same"])];
        assert!(QuizDataset::new(questions).is_ok());
    }
}
