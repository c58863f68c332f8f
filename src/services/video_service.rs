use std::sync::Arc;

use crate::{
    constants::prompts::{summary_prompt, TRANSCRIPT_SUMMARISER_PROMPT},
    errors::{AppError, AppResult},
    models::dto::response::{ProcessVideoResponse, ProcessedTranscript},
    repositories::TranscriptRepository,
    services::{
        model_service::{CompletionRequest, ModelGateway},
        quiz_service::QuizService,
    },
};

/// Turns the stored transcript into a summary and the quiz schedule.
pub struct VideoService {
    gateway: Arc<dyn ModelGateway>,
    transcripts: Arc<dyn TranscriptRepository>,
    quiz_service: Arc<QuizService>,
    text_model: String,
}

impl VideoService {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        transcripts: Arc<dyn TranscriptRepository>,
        quiz_service: Arc<QuizService>,
        text_model: String,
    ) -> Self {
        Self {
            gateway,
            transcripts,
            quiz_service,
            text_model,
        }
    }

    pub async fn process_local_video(&self) -> AppResult<ProcessVideoResponse> {
        let transcript = self.transcripts.load_transcript().await?;
        let processed = self.process_transcript(&transcript).await?;

        Ok(ProcessVideoResponse {
            transcript,
            processed,
        })
    }

    /// Either both the summary and the quiz questions are produced, or the
    /// whole call fails with a processing error.
    pub async fn process_transcript(&self, transcript: &str) -> AppResult<ProcessedTranscript> {
        log::info!("Summarising transcript ({} bytes)", transcript.len());

        let summary = self
            .gateway
            .complete(CompletionRequest {
                model: self.text_model.clone(),
                system_prompt: TRANSCRIPT_SUMMARISER_PROMPT.to_string(),
                user_text: summary_prompt(transcript),
                image_base64: None,
            })
            .await
            .map_err(processing_failure)?;

        let quiz_questions = self
            .quiz_service
            .quiz_questions()
            .await
            .map_err(processing_failure)?;

        log::info!(
            "Processed transcript into a summary and {} quiz questions",
            quiz_questions.len()
        );

        Ok(ProcessedTranscript {
            summary,
            quiz_questions,
        })
    }
}

fn processing_failure(err: AppError) -> AppError {
    log::error!("Transcript processing error: {}", err.detail());
    AppError::Processing(err.detail().to_string())
}
