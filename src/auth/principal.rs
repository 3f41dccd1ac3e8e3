use actix_web_httpauth::extractors::basic::BasicAuth;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::domain::User,
};

/// Resolves the acting user from HTTP Basic credentials.
///
/// Missing credentials are not an error; they resolve to `None` and the
/// service layer decides whether the operation requires authentication.
/// Present-but-wrong credentials are rejected here.
pub async fn resolve_user(
    state: &AppState,
    credentials: Option<BasicAuth>,
) -> AppResult<Option<User>> {
    let Some(credentials) = credentials else {
        return Ok(None);
    };

    let email = credentials.user_id();
    let user = state
        .user_repository
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid credentials".to_string()))?;

    let password = credentials.password().unwrap_or_default();
    if !state.password_hasher.verify(password, &user.password_hash) {
        log::debug!("password mismatch for {}", email);
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }

    Ok(Some(user))
}
