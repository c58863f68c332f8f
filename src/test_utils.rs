#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::QuizItem;

    /// Builds a quiz record with every field set
    pub fn quiz_item(
        timestamp: &str,
        question: &str,
        options: &[&str],
        correct_option: &str,
        short_explanation: &str,
    ) -> QuizItem {
        QuizItem {
            timestamp: timestamp.to_string(),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct_option.to_string(),
            short_explanation: short_explanation.to_string(),
        }
    }

    /// A small quiz in file order
    pub fn sample_quiz() -> Vec<QuizItem> {
        vec![
            quiz_item(
                "0:45",
                "What is a lifetime?",
                &["A) A thread", "B) A scope for references"],
                "B) A scope for references",
                "Lifetimes bound how long a reference is valid.",
            ),
            quiz_item(
                "1:02:03",
                "Which trait enables `?` conversion?",
                &["A) From", "B) Display", "C) Drop"],
                "A) From",
                "`?` calls From::from on the error.",
            ),
            quiz_item("12:30", "Q", &["A", "B"], "B", "Because B is correct."),
        ]
    }

    /// JSON text of `sample_quiz()` as it appears in a quiz file
    pub fn sample_quiz_json() -> String {
        serde_json::to_string_pretty(&sample_quiz()).expect("fixture serializes")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::path::{Path, PathBuf};

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState, config::Config, services::model_service::MockModelGateway,
    };

    /// File under the system temp dir, removed on drop
    pub struct TempFile {
        path: PathBuf,
    }

    impl TempFile {
        pub fn with_contents(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name));
            std::fs::write(&path, contents).expect("temp file should be writable");
            Self { path }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    /// App state reading the given files and answering through `gateway`
    pub fn test_state(gateway: MockModelGateway, transcript: &Path, quiz: &Path) -> AppState {
        let mut config = Config::test_config();
        config.transcript_path = transcript.display().to_string();
        config.quiz_path = quiz.display().to_string();
        AppState::with_gateway(config, std::sync::Arc::new(gateway))
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::*, test_helpers::TempFile};
    use crate::models::domain::QuizItem;

    #[test]
    fn test_sample_quiz_json_round_trips_through_file_keys() {
        let json = sample_quiz_json();
        assert!(json.contains("\"correct option\""));
        assert!(json.contains("\"short explanation\""));

        let parsed: Vec<QuizItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_quiz());
    }

    #[test]
    fn test_temp_file_is_removed_on_drop() {
        let path = {
            let file = TempFile::with_contents("scratch.txt", "hello");
            assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "hello");
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
