use crate::{errors::AppResult, models::domain::QuizItem, services::timestamp::to_seconds};

/// A quiz record in display form, built per request and discarded with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedQuizQuestion {
    pub formatted_q: String,
    pub timestamp: String,
    pub correct_option: String,
    pub short_explanation: String,
}

impl FormattedQuizQuestion {
    pub fn timestamp_seconds(&self) -> AppResult<u64> {
        to_seconds(&self.timestamp)
    }
}

impl From<&QuizItem> for FormattedQuizQuestion {
    fn from(item: &QuizItem) -> Self {
        Self {
            formatted_q: item.format_question(),
            timestamp: item.timestamp.clone(),
            correct_option: item.correct_option.clone(),
            short_explanation: item.short_explanation.clone(),
        }
    }
}
