use actix_web::{delete, get, post, web, HttpResponse};
use actix_web_httpauth::extractors::basic::BasicAuth;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::resolve_user,
    errors::AppError,
    models::dto::request::{CreateQuizRequest, PageParams, Solution},
};

#[get("/api/quizzes")]
pub async fn get_quizzes(
    state: web::Data<AppState>,
    web::Query(params): web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;
    let page = state.quiz_service.list_quizzes(params.page()).await?;
    Ok(HttpResponse::Ok().json(page))
}

// Registered before `get_quiz` so "completed" is not captured by `{id}`.
#[get("/api/quizzes/completed")]
pub async fn get_completed_quizzes(
    state: web::Data<AppState>,
    web::Query(params): web::Query<PageParams>,
    auth: Option<BasicAuth>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;
    let acting_user = resolve_user(&state, auth).await?;
    let page = state
        .quiz_service
        .get_completions(acting_user.as_ref(), params.page())
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: Option<BasicAuth>,
) -> Result<HttpResponse, AppError> {
    let acting_user = resolve_user(&state, auth).await?;
    let quiz = state
        .quiz_service
        .create_quiz(acting_user.as_ref(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[post("/api/quizzes/{id}/solve")]
pub async fn solve_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    solution: web::Json<Solution>,
    auth: Option<BasicAuth>,
) -> Result<HttpResponse, AppError> {
    let acting_user = resolve_user(&state, auth).await?;
    let feedback = state
        .quiz_service
        .evaluate_answer(acting_user.as_ref(), &id, &solution.answer)
        .await?;
    Ok(HttpResponse::Ok().json(feedback))
}

#[delete("/api/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: Option<BasicAuth>,
) -> Result<HttpResponse, AppError> {
    log::debug!("delete request for quiz id {}", id);
    let acting_user = resolve_user(&state, auth).await?;
    state
        .quiz_service
        .delete_quiz(acting_user.as_ref(), &id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
