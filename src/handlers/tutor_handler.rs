use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{AskQuestionRequest, AskWithoutImageRequest},
        response::AnswerResponse,
    },
};

#[post("/api/ask-question")]
pub async fn ask_question(
    state: web::Data<AppState>,
    request: web::Json<AskQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let answer = state
        .tutor_service
        .ask_with_image(
            request.question.as_deref().unwrap_or_default(),
            request.current_screenshot.as_deref(),
            &request.messages,
        )
        .await?;
    Ok(HttpResponse::Ok().json(AnswerResponse { answer }))
}

#[post("/api/ask-without-image")]
pub async fn ask_without_image(
    state: web::Data<AppState>,
    request: web::Json<AskWithoutImageRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let answer = state
        .tutor_service
        .ask_text_only(
            request.question.as_deref().unwrap_or_default(),
            &request.messages,
        )
        .await?;
    Ok(HttpResponse::Ok().json(AnswerResponse { answer }))
}
