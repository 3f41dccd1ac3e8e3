use std::collections::HashSet;

use crate::models::domain::{Quiz, User};

pub mod fixtures {
    use super::*;

    /// Creates a standard test user
    pub fn test_user() -> User {
        User::new("testuser@example.com", "hash")
    }

    /// Creates a test user with a custom email
    pub fn test_user_with_email(email: &str) -> User {
        User::new(email, "hash")
    }

    /// A persisted four-option quiz whose correct answer is {2}
    pub fn saved_quiz(id: &str, author: &User) -> Quiz {
        let mut quiz = Quiz::new(
            &author.id,
            "The Java Logo",
            "What is depicted on the Java logo?",
            vec![
                "Robot".to_string(),
                "Tea leaves".to_string(),
                "Cup of coffee".to_string(),
                "Bug".to_string(),
            ],
            HashSet::from([2]),
        );
        quiz.id = Some(id.to_string());
        quiz
    }
}
