use serde::Serialize;

use crate::models::dto::quiz_dto::QuizQuestionDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// Model summary plus the timestamped quiz questions for one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedTranscript {
    pub summary: String,
    pub quiz_questions: Vec<QuizQuestionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessVideoResponse {
    pub transcript: String,
    #[serde(flatten)]
    pub processed: ProcessedTranscript,
}
