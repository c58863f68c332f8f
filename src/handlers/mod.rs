pub mod health_handler;
pub mod quiz_handler;
pub mod tutor_handler;
pub mod video_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use quiz_handler::evaluate_answer;
pub use tutor_handler::{ask_question, ask_without_image};
pub use video_handler::process_local_video;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(ask_question)
        .service(ask_without_image)
        .service(process_local_video)
        .service(evaluate_answer);
}

/// JSON extractor settings: large enough for a base64 screenshot, and body
/// errors reported in the same `{error}` shape as every other failure.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {}", err);
            AppError::from(err).into()
        })
}
