use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::domain::FormattedQuizQuestion;

/// A quiz question as the player sees it: display text plus the second at
/// which the player should pause and ask it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestionDto {
	pub question: String,
	pub timestamp: u64,
}

impl TryFrom<&FormattedQuizQuestion> for QuizQuestionDto {
	type Error = AppError;

	fn try_from(formatted: &FormattedQuizQuestion) -> Result<Self, Self::Error> {
		Ok(QuizQuestionDto {
			question: formatted.formatted_q.clone(),
			timestamp: formatted.timestamp_seconds()?,
		})
	}
}
