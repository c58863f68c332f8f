use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    async fn load_transcript(&self) -> AppResult<String>;
}

pub struct FileTranscriptRepository {
    path: PathBuf,
}

impl FileTranscriptRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TranscriptRepository for FileTranscriptRepository {
    async fn load_transcript(&self) -> AppResult<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            log::error!("Failed to read transcript {}: {}", self.path.display(), e);
            AppError::StorageRead(format!("failed to read {}: {}", self.path.display(), e))
        })
    }
}
