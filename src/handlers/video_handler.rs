use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

/// Any request body (the front end posts a multipart upload) is ignored; the
/// transcript always comes from storage.
#[post("/api/process-local-video")]
pub async fn process_local_video(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.video_service.process_local_video().await?;
    Ok(HttpResponse::Ok().json(response))
}
