use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A quiz question with a fixed set of textual options and a correct subset.
///
/// `correct_options` holds zero-based indices into `options` and is never
/// exposed to clients; the `QuizDto` projection strips it together with the
/// author. A quiz is immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: Option<String>, // assigned by the store on save
    pub author_id: String,
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_options: HashSet<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(
        author_id: &str,
        title: &str,
        text: &str,
        options: Vec<String>,
        correct_options: HashSet<i32>,
    ) -> Self {
        Quiz {
            id: None,
            author_id: author_id.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            options,
            correct_options,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quiz_has_no_id_until_saved() {
        let quiz = Quiz::new(
            "user-1",
            "Capitals",
            "What is the capital of France?",
            vec!["Paris".to_string(), "Lyon".to_string()],
            HashSet::from([0]),
        );

        assert!(quiz.id.is_none());
        assert_eq!(quiz.author_id, "user-1");
        assert!(quiz.created_at.is_some());
    }

    #[test]
    fn test_quiz_round_trip_serialization_keeps_correct_options() {
        let quiz = Quiz::new(
            "user-1",
            "Colors",
            "Pick the primary colors",
            vec!["red".to_string(), "green".to_string(), "blue".to_string()],
            HashSet::from([0, 2]),
        );

        let json = serde_json::to_string(&quiz).expect("quiz should serialize");
        let parsed: Quiz = serde_json::from_str(&json).expect("quiz should deserialize");

        assert_eq!(parsed.correct_options, HashSet::from([0, 2]));
        assert_eq!(parsed.options.len(), 3);
    }
}
