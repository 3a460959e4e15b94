use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::SubmitAnswerRequest,
    models::dto::response::AnswerResultResponse,
};

#[post("/api/challenges/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .answer_service
        .submit_answer(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(AnswerResultResponse::from(outcome)))
}
