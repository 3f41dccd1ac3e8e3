use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamped proof that a user successfully answered a quiz. Appended to
/// the owning user on every correct submission; never mutated or deleted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizCompletion {
    pub quiz_id: String,
    pub completed_at: DateTime<Utc>,
}

impl QuizCompletion {
    pub fn new(quiz_id: &str) -> Self {
        QuizCompletion {
            quiz_id: quiz_id.to_string(),
            completed_at: Utc::now(),
        }
    }
}
