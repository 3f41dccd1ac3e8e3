use serde::{Deserialize, Serialize};

use crate::models::domain::{Quiz, User, UserRole};

/// Client-visible projection of a quiz. Deliberately omits the correct
/// options and the author id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDto {
    pub id: String,
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id.unwrap_or_default(),
            title: quiz.title,
            text: quiz.text,
            options: quiz.options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionFeedback {
    pub success: bool,
    pub feedback: String,
}

impl SolutionFeedback {
    pub fn new(success: bool) -> Self {
        let feedback = if success {
            "Congratulations, you're right!"
        } else {
            "Wrong answer! Please, try again."
        };
        SolutionFeedback {
            success,
            feedback: feedback.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

/// One page of an ordered listing, ten items per page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_quiz_dto_hides_correct_options_and_author() {
        let mut quiz = Quiz::new(
            "user-1",
            "The Java Logo",
            "What is depicted on the Java logo?",
            vec!["Robot".to_string(), "Tea leaves".to_string()],
            HashSet::from([1]),
        );
        quiz.id = Some("quiz-1".to_string());

        let dto = QuizDto::from(quiz);
        let json = serde_json::to_string(&dto).expect("dto should serialize");

        assert_eq!(dto.id, "quiz-1");
        assert!(!json.contains("correct_options"));
        assert!(!json.contains("author_id"));
    }

    #[test]
    fn test_solution_feedback_messages() {
        assert_eq!(
            SolutionFeedback::new(true).feedback,
            "Congratulations, you're right!"
        );
        assert_eq!(
            SolutionFeedback::new(false).feedback,
            "Wrong answer! Please, try again."
        );
    }

    #[test]
    fn test_user_dto_does_not_leak_password_hash() {
        let user = User::new("alice@example.com", "hash");
        let dto = UserDto::from(user);

        let json = serde_json::to_string(&dto).expect("dto should serialize");
        assert!(!json.contains("hash"));
    }
}
