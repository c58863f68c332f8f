use serde::{Deserialize, Serialize};

/// One record of the quiz file. Every key is optional on disk and defaults to
/// an empty value, so a sparse record never fails the whole load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuizItem {
    pub timestamp: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correct option")]
    pub correct_option: String,
    #[serde(rename = "short explanation")]
    pub short_explanation: String,
}

impl QuizItem {
    /// Question text, a blank line, then one option per line (each newline-terminated).
    pub fn format_question(&self) -> String {
        let mut formatted = format!("{}\n\n", self.question);
        for option in &self.options {
            formatted.push_str(option);
            formatted.push('\n');
        }
        formatted
    }
}
