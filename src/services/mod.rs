pub mod context;
pub mod model_service;
pub mod quiz_service;
pub mod timestamp;
pub mod tutor_service;
pub mod video_service;
