use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// One single-turn completion: a system prompt plus a user message that may
/// carry a base64 JPEG alongside the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_text: String,
    pub image_base64: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Returns the trimmed completion text.
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn build_chat_body(request: &CompletionRequest) -> ChatCompletionBody {
    let user_content = match &request.image_base64 {
        Some(image) => json!([
            { "type": "text", "text": request.user_text },
            {
                "type": "image_url",
                "image_url": { "url": format!("data:image/jpeg;base64,{}", image) }
            }
        ]),
        None => Value::String(request.user_text.clone()),
    };

    ChatCompletionBody {
        model: request.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: Value::String(request.system_prompt.clone()),
            },
            ChatMessage {
                role: "user",
                content: user_content,
            },
        ],
    }
}

fn extract_answer(completion: ChatCompletion) -> AppResult<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| AppError::Model("completion contained no message content".to_string()))
}

pub struct OpenAiGateway {
    client: Client<OpenAIConfig>,
}

impl OpenAiGateway {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(api_base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        log::debug!(
            "Requesting completion from {} (image attached: {})",
            request.model,
            request.image_base64.is_some()
        );

        let body = build_chat_body(&request);
        let completion: ChatCompletion = self.client.chat().create_byot(body).await?;
        extract_answer(completion)
    }
}
