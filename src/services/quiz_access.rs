use crate::models::domain::{Quiz, User};

/// Authorship-based access rule for quizzes.
pub struct QuizAccessPolicy;

impl QuizAccessPolicy {
    /// Only the author may delete a quiz. Roles carry no extra rights here.
    pub fn can_delete(user: &User, quiz: &Quiz) -> bool {
        user.id == quiz.author_id
    }
}
