use std::sync::Arc;

use crate::{
    auth::{PasswordHasher, Sha256PasswordHasher},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, MongoUserRepository, UserRepository},
    services::{QuizService, RegistrationService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub registration_service: Arc<RegistrationService>,
    pub user_repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository: Arc<dyn UserRepository> =
            Arc::new(MongoUserRepository::new(&db, &config.users_collection));
        user_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));

        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Sha256PasswordHasher);
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            Arc::clone(&user_repository),
        ));
        let registration_service = Arc::new(RegistrationService::new(
            Arc::clone(&user_repository),
            Arc::clone(&password_hasher),
        ));

        Ok(Self {
            quiz_service,
            registration_service,
            user_repository,
            password_hasher,
            config: Arc::new(config),
        })
    }
}
