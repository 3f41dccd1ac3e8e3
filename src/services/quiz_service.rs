use std::collections::HashSet;
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizCompletion, User},
    models::dto::request::CreateQuizRequest,
    models::dto::response::{Page, QuizDto, SolutionFeedback},
    repositories::{QuizRepository, UserRepository},
    services::{AnswerEvaluator, QuizAccessPolicy},
};

pub const PAGE_SIZE: i64 = 10;

/// Entry point for the quiz lifecycle: retrieval, creation, deletion, answer
/// evaluation, and completion history. Every operation receives the already
/// resolved acting user (`None` for anonymous callers) and fails fast with a
/// typed error; wrong answers are a regular negative result, not a failure.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    users: Arc<dyn UserRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { quizzes, users }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizDto> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(QuizDto::from(quiz))
    }

    pub async fn list_quizzes(&self, page: i64) -> AppResult<Page<QuizDto>> {
        let (quizzes, total) = self.quizzes.find_page(page * PAGE_SIZE, PAGE_SIZE).await?;

        Ok(Page {
            items: quizzes.into_iter().map(QuizDto::from).collect(),
            page,
            total,
        })
    }

    pub async fn create_quiz(
        &self,
        acting_user: Option<&User>,
        request: CreateQuizRequest,
    ) -> AppResult<QuizDto> {
        let user = self.require_user(acting_user)?;
        request.validate()?;

        // The bounds check covers the whole set: one bad member fails the
        // request no matter how many others are valid.
        let option_count = request.options.len() as i32;
        let mut out_of_bounds: Vec<i32> = request
            .answer
            .iter()
            .copied()
            .filter(|index| !(0..option_count).contains(index))
            .collect();
        if !out_of_bounds.is_empty() {
            out_of_bounds.sort_unstable();
            return Err(AppError::InvalidAnswerIndex(format!(
                "answer indices {:?} must correspond to option indices 0..{}",
                out_of_bounds, option_count
            )));
        }

        let quiz = Quiz::new(
            &user.id,
            &request.title,
            &request.text,
            request.options,
            request.answer,
        );
        let saved = self.quizzes.save(quiz).await?;
        log::debug!("added quiz with id {:?}", saved.id);

        Ok(QuizDto::from(saved))
    }

    pub async fn delete_quiz(&self, acting_user: Option<&User>, quiz_id: &str) -> AppResult<()> {
        let user = self.require_user(acting_user)?;
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        if !QuizAccessPolicy::can_delete(user, &quiz) {
            return Err(AppError::Forbidden(
                "user is not the author of this quiz and thus not allowed to delete it"
                    .to_string(),
            ));
        }

        self.quizzes.delete(&quiz).await
    }

    pub async fn evaluate_answer(
        &self,
        acting_user: Option<&User>,
        quiz_id: &str,
        submitted: &HashSet<i32>,
    ) -> AppResult<SolutionFeedback> {
        let user = self.require_user(acting_user)?;
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        log::debug!(
            "evaluating answer {:?} for quiz with correct options {:?}",
            submitted,
            quiz.correct_options
        );
        let success = AnswerEvaluator::evaluate(submitted, &quiz.correct_options);

        if success {
            let mut user = user.clone();
            user.completions.push(QuizCompletion::new(quiz_id));
            self.users.save(user).await?;
        }

        Ok(SolutionFeedback::new(success))
    }

    pub async fn get_completions(
        &self,
        acting_user: Option<&User>,
        page: i64,
    ) -> AppResult<Page<QuizCompletion>> {
        let user = self.require_user(acting_user)?;

        let mut completions = user.completions.clone();
        completions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

        let total = completions.len() as i64;
        let start = (page * PAGE_SIZE).max(0) as usize;
        let end = (start + PAGE_SIZE as usize).min(completions.len());
        let items = if start >= completions.len() {
            vec![]
        } else {
            completions[start..end].to_vec()
        };

        Ok(Page { items, page, total })
    }

    fn require_user<'a>(&self, acting_user: Option<&'a User>) -> AppResult<&'a User> {
        acting_user.ok_or_else(|| AppError::Unauthorized("not authenticated".to_string()))
    }
}
