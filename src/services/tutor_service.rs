use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::prompts::{
        question_prompt, MISSING_SCREENSHOT_MESSAGE, TEXT_TUTOR_PROMPT, VISION_TUTOR_PROMPT,
    },
    errors::{AppError, AppResult},
    repositories::TranscriptRepository,
    services::{
        context::assemble_context,
        model_service::{CompletionRequest, ModelGateway},
    },
};

/// Answers student questions about the video, grounded by the transcript and
/// the conversation so far.
pub struct TutorService {
    gateway: Arc<dyn ModelGateway>,
    transcripts: Arc<dyn TranscriptRepository>,
    vision_model: String,
    text_model: String,
}

impl TutorService {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        transcripts: Arc<dyn TranscriptRepository>,
        vision_model: String,
        text_model: String,
    ) -> Self {
        Self {
            gateway,
            transcripts,
            vision_model,
            text_model,
        }
    }

    pub async fn ask_with_image(
        &self,
        question: &str,
        screenshot: Option<&str>,
        prior_messages: &Value,
    ) -> AppResult<String> {
        let screenshot = screenshot
            .filter(|image| !image.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_SCREENSHOT_MESSAGE.to_string()))?;

        let transcript = self.transcripts.load_transcript().await?;
        let context = assemble_context(prior_messages, &transcript);

        self.complete(CompletionRequest {
            model: self.vision_model.clone(),
            system_prompt: VISION_TUTOR_PROMPT.to_string(),
            user_text: question_prompt(question, &context),
            image_base64: Some(screenshot.to_string()),
        })
        .await
    }

    pub async fn ask_text_only(&self, question: &str, prior_messages: &Value) -> AppResult<String> {
        let transcript = self.transcripts.load_transcript().await?;
        let context = assemble_context(prior_messages, &transcript);

        self.complete(CompletionRequest {
            model: self.text_model.clone(),
            system_prompt: TEXT_TUTOR_PROMPT.to_string(),
            user_text: question_prompt(question, &context),
            image_base64: None,
        })
        .await
    }

    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        self.gateway.complete(request).await.map_err(|e| {
            log::error!("OpenAI API error: {}", e.detail());
            AppError::Model(e.detail().to_string())
        })
    }
}
