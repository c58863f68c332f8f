use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizItem,
};

#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Loads every quiz record in file order. Fails as a whole; never partial.
    async fn load_quiz(&self) -> AppResult<Vec<QuizItem>>;
}

pub struct FileQuizRepository {
    path: PathBuf,
}

impl FileQuizRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuizRepository for FileQuizRepository {
    async fn load_quiz(&self) -> AppResult<Vec<QuizItem>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            log::error!("Failed to read quiz file {}: {}", self.path.display(), e);
            AppError::StorageRead(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let items: Vec<QuizItem> = serde_json::from_str(&raw).map_err(|e| {
            log::error!("Quiz file {} is not valid: {}", self.path.display(), e);
            AppError::StorageRead(format!("failed to parse {}: {}", self.path.display(), e))
        })?;

        log::debug!("Loaded {} quiz items from {}", items.len(), self.path.display());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::TempFile;

    const QUIZ_JSON: &str = r#"[
        {
            "timestamp": "0:42",
            "question": "What does the borrow checker enforce?",
            "options": ["A) Types", "B) Aliasing rules"],
            "correct option": "B) Aliasing rules",
            "short explanation": "It rejects shared mutable aliasing."
        },
        {
            "timestamp": "1:05:00",
            "question": "Which keyword moves ownership into a closure?",
            "options": ["A) move", "B) ref"]
        }
    ]"#;

    #[actix_web::test]
    async fn loads_items_in_file_order() {
        let file = TempFile::with_contents("quiz.json", QUIZ_JSON);
        let repository = FileQuizRepository::new(file.path());

        let items = repository.load_quiz().await.expect("quiz should load");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].timestamp, "0:42");
        assert_eq!(items[0].correct_option, "B) Aliasing rules");
        assert_eq!(items[1].question, "Which keyword moves ownership into a closure?");
        assert!(items[1].correct_option.is_empty());
        assert!(items[1].short_explanation.is_empty());
    }

    #[actix_web::test]
    async fn loading_twice_yields_identical_items() {
        let file = TempFile::with_contents("quiz.json", QUIZ_JSON);
        let repository = FileQuizRepository::new(file.path());

        let first = repository.load_quiz().await.unwrap();
        let second = repository.load_quiz().await.unwrap();

        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn missing_file_is_a_storage_error() {
        let repository = FileQuizRepository::new("/definitely/not/here/quiz.txt");

        let result = repository.load_quiz().await;

        assert!(matches!(result, Err(AppError::StorageRead(_))));
    }

    #[actix_web::test]
    async fn malformed_json_is_a_storage_error() {
        let file = TempFile::with_contents("quiz.json", r#"[{"question": "unterminated"#);
        let repository = FileQuizRepository::new(file.path());

        let result = repository.load_quiz().await;

        assert!(matches!(result, Err(AppError::StorageRead(_))));
    }

    #[actix_web::test]
    async fn non_array_document_is_a_storage_error() {
        let file = TempFile::with_contents("quiz.json", r#"{"question": "not a list"}"#);
        let repository = FileQuizRepository::new(file.path());

        assert!(matches!(
            repository.load_quiz().await,
            Err(AppError::StorageRead(_))
        ));
    }
}
