use serde::Deserialize;
use serde_json::Value;

// Every field is optional so an absent field never rejects the request; the
// front end also sends a few fields the server does not use.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    /// Base64 JPEG of the paused frame
    #[serde(default)]
    pub current_screenshot: Option<String>,
    #[serde(default)]
    pub messages: Value,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskWithoutImageRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub messages: Value,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateAnswerRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub context: Option<Value>,
}
