use std::env;

use secrecy::{ExposeSecret, SecretString};

const DEFAULT_MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub vision_model: String,
    pub text_model: String,
    pub transcript_path: String,
    pub quiz_path: String,
    pub cors_allowed_origins: Vec<String>,
    pub max_payload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|base| !base.trim().is_empty()),
            vision_model: env::var("OPENAI_VISION_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            text_model: env::var("OPENAI_TEXT_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            transcript_path: env::var("TRANSCRIPT_PATH")
                .unwrap_or_else(|_| "transcript.txt".to_string()),
            quiz_path: env::var("QUIZ_PATH").unwrap_or_else(|_| "quiz.txt".to_string()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            max_payload_bytes: env::var("MAX_PAYLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_PAYLOAD_BYTES),
        }
    }

    /// Logs settings that will make requests fail at runtime.
    pub fn warn_on_missing_settings(&self) {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            log::warn!("OPENAI_API_KEY is not set; every model call will fail");
        }
        if self.cors_allowed_origins.is_empty() {
            log::info!("CORS_ALLOWED_ORIGINS not set, allowing any origin");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: None,
            vision_model: "vision-test-model".to_string(),
            text_model: "text-test-model".to_string(),
            transcript_path: "transcript.txt".to_string(),
            quiz_path: "quiz.txt".to_string(),
            cors_allowed_origins: Vec::new(),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.transcript_path.is_empty());
        assert!(!config.quiz_path.is_empty());
        assert!(config.max_payload_bytes > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_port, 5000);
        assert_eq!(config.quiz_path, "quiz.txt");
        assert_eq!(config.openai_api_key.expose_secret(), "sk-test");
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" http://localhost:5173 , ,https://tutor.example.com,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://tutor.example.com".to_string()
            ]
        );
    }
}
