use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{domain::FormattedQuizQuestion, dto::quiz_dto::QuizQuestionDto},
    repositories::QuizRepository,
};

/// Feedback for the first item whose formatted text equals `question` byte
/// for byte. An empty string means no item matched.
pub fn grade(question: &str, items: &[FormattedQuizQuestion]) -> String {
    items
        .iter()
        .find(|item| item.formatted_q == question)
        .map(|item| {
            format!(
                "The correct answer is {}. {}",
                item.correct_option, item.short_explanation
            )
        })
        .unwrap_or_default()
}

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn load_formatted(&self) -> AppResult<Vec<FormattedQuizQuestion>> {
        let items = self.repository.load_quiz().await?;
        Ok(items.iter().map(FormattedQuizQuestion::from).collect())
    }

    /// Only the question text takes part in grading; the submitted answer does not.
    pub async fn evaluate_answer(&self, question: &str) -> AppResult<String> {
        let items = self.load_formatted().await?;
        let feedback = grade(question, &items);
        if feedback.is_empty() {
            log::info!("No quiz item matched the submitted question");
        }
        Ok(feedback)
    }

    /// Quiz questions in file order. Items whose timestamp cannot be converted
    /// are skipped with a warning instead of failing the batch.
    pub async fn quiz_questions(&self) -> AppResult<Vec<QuizQuestionDto>> {
        let items = self.load_formatted().await?;

        let questions = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match QuizQuestionDto::try_from(item) {
                Ok(dto) => Some(dto),
                Err(e) => {
                    log::warn!(
                        "Skipping quiz item {} with timestamp '{}': {}",
                        index,
                        item.timestamp,
                        e
                    );
                    None
                }
            })
            .collect();

        Ok(questions)
    }
}
