use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::RegistrationRequest,
};

#[post("/api/register")]
pub async fn register_user(
    state: web::Data<AppState>,
    request: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("registration requested from {}", request.email);
    let user = state
        .registration_service
        .register(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}
