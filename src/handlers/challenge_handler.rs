use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::response::AttemptStatusResponse,
};

#[get("/api/challenges/{id}")]
pub async fn get_challenge(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let challenge = state.challenge_service.get_challenge(&id).await?;
    Ok(HttpResponse::Ok().json(challenge))
}

#[get("/api/challenges/{id}/questions")]
pub async fn list_questions(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let questions = state.challenge_service.list_questions(&id).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/challenges/{id}/attempt")]
pub async fn get_attempt_status(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (attempt, answered) = state
        .challenge_service
        .attempt_status(&auth.0.sub, &id)
        .await?;
    Ok(HttpResponse::Ok().json(AttemptStatusResponse::from_attempt(attempt, answered)))
}
