use std::collections::BTreeMap;

/// Selected option per question id. Only answered questions have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(BTreeMap<u32, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.0.get(&question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.0.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(id, option)| (*id, option.as_str()))
    }

    /// Overwrites any previous selection for the question.
    pub(crate) fn record(&mut self, question_id: u32, option: String) {
        self.0.insert(question_id, option);
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for Answers {
    fn from_iter<T: IntoIterator<Item = (u32, S)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, s)| (id, s.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_overwrites() {
        let mut answers = Answers::new();
        answers.record(1, "Oink-Oink".to_string());
        answers.record(1, "Meow-Meow".to_string());

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(1), Some("Meow-Meow"));
        assert!(!answers.contains(2));
    }

    #[test]
    fn test_iter_is_ordered_by_id() {
        let answers: Answers = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        let ids: Vec<u32> = answers.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
