use std::{
    collections::HashMap,
    sync::atomic::{AtomicI64, Ordering},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use webquiz_server::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    repositories::{QuizRepository, UserRepository},
};

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
    next_id: AtomicI64,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn find_page(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes.values().cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }

    async fn save(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        if quiz.id.is_none() {
            let n = self.next_id.fetch_add(1, Ordering::SeqCst);
            quiz.id = Some(format!("quiz-{:03}", n));
        }
        let id = quiz.id.clone().expect("id was just assigned");

        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(id, quiz.clone());
        Ok(quiz)
    }

    async fn delete(&self, quiz: &Quiz) -> AppResult<()> {
        let id = quiz
            .id
            .as_deref()
            .ok_or_else(|| AppError::InternalError("cannot delete an unsaved quiz".to_string()))?;

        let mut quizzes = self.quizzes.write().await;
        if quizzes.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}

pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::AlreadyExists(format!(
                "User with email '{}' already exists",
                user.email
            )));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(AppError::NotFound(format!(
                "User with id '{}' not found",
                user.id
            )));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
