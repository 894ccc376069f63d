use serde::{Deserialize, Serialize};

/// One quiz item: a stable id, the prompt text, and the options offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn new<P, I, S>(id: u32, prompt: P, options: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn option_index(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_and_index() {
        let q = Question::new(2, "Largest planet?", ["Mars", "Jupiter", "Saturn"]);
        assert!(q.offers("Jupiter"));
        assert!(!q.offers("jupiter"));
        assert_eq!(q.option_index("Saturn"), Some(2));
        assert_eq!(q.option_index("Pluto"), None);
    }

    #[test]
    fn test_deserialize_uses_question_field() {
        let json = r#"{"id": 7, "question": "Pick one", "options": ["a", "b"]}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 7);
        assert_eq!(q.prompt, "Pick one");
        assert_eq!(q.options, vec!["a".to_string(), "b".to_string()]);
    }
}
