pub mod quiz_repository;
pub mod transcript_repository;

pub use quiz_repository::{FileQuizRepository, QuizRepository};
pub use transcript_repository::{FileTranscriptRepository, TranscriptRepository};
