use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_page(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)>;
    /// Persists the quiz, assigning an id when it has none, and returns it.
    async fn save(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn delete(&self, quiz: &Quiz) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let total = self.collection.count_documents(doc! {}).await? as i64;

        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .skip(Some(offset.max(0) as u64))
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;

        Ok((items, total))
    }

    async fn save(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        if quiz.id.is_none() {
            quiz.id = Some(Uuid::new_v4().to_string());
        }
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn delete(&self, quiz: &Quiz) -> AppResult<()> {
        let id = quiz
            .id
            .as_deref()
            .ok_or_else(|| AppError::InternalError("cannot delete an unsaved quiz".to_string()))?;

        let result = self.collection.delete_one(doc! { "id": id }).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
