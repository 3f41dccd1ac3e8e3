use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::PasswordHasher,
    errors::{AppError, AppResult},
    models::domain::User,
    models::dto::request::RegistrationRequest,
    models::dto::response::UserDto,
    repositories::UserRepository,
};

pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegistrationService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Registers a new user. The raw password never reaches the store; only
    /// the hash produced by the configured `PasswordHasher` is persisted.
    pub async fn register(&self, request: RegistrationRequest) -> AppResult<UserDto> {
        request.validate()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "User with email '{}' already exists",
                request.email
            )));
        }

        let user = User::new(&request.email, &self.hasher.hash(&request.password));
        let user = self.users.create(user).await?;
        log::info!("registered user {}", user.email);

        Ok(UserDto::from(user))
    }
}
