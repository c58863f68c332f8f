use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{FileQuizRepository, FileTranscriptRepository},
    services::{
        model_service::{ModelGateway, OpenAiGateway},
        quiz_service::QuizService,
        tutor_service::TutorService,
        video_service::VideoService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub tutor_service: Arc<TutorService>,
    pub video_service: Arc<VideoService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway = Arc::new(OpenAiGateway::new(&config));
        Self::with_gateway(config, gateway)
    }

    /// Wires the file-backed stores from `config` around the given model gateway.
    pub fn with_gateway(config: Config, gateway: Arc<dyn ModelGateway>) -> Self {
        let transcripts = Arc::new(FileTranscriptRepository::new(&config.transcript_path));
        let quiz_repository = Arc::new(FileQuizRepository::new(&config.quiz_path));

        let quiz_service = Arc::new(QuizService::new(quiz_repository));
        let tutor_service = Arc::new(TutorService::new(
            gateway.clone(),
            transcripts.clone(),
            config.vision_model.clone(),
            config.text_model.clone(),
        ));
        let video_service = Arc::new(VideoService::new(
            gateway,
            transcripts,
            quiz_service.clone(),
            config.text_model.clone(),
        ));

        Self {
            tutor_service,
            video_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}
