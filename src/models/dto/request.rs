use std::collections::HashSet;

use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 5, message = "password must have at least 5 characters"))]
    pub password: String,
}

/// Payload for creating a quiz. `answer` holds the zero-based indices of the
/// correct options; the index-bounds check against `options` happens in the
/// service, since it spans both fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(custom(function = validate_not_blank, message = "Quiz title cannot be blank"))]
    pub title: String,

    #[validate(custom(function = validate_not_blank, message = "Quiz text cannot be blank"))]
    pub text: String,

    #[validate(length(min = 2, message = "There must be at least two answer options"))]
    pub options: Vec<String>,

    #[validate(length(min = 1, message = "There must be at least one correct option"))]
    pub answer: HashSet<i32>,
}

/// Multiple choice answer for a solving attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct Solution {
    pub answer: HashSet<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageParams {
    #[validate(range(min = 0))]
    pub page: Option<i64>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: Some(0) }
    }
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0)
    }
}
