use serde_json::Value;

/// Grounding text sent to the model: prior conversation, then the transcript.
pub fn assemble_context(prior_messages: &Value, transcript: &str) -> String {
    format!(
        "Previous Messages: {}\n\nVideo Transcript: {}\n\n",
        render_prior_messages(prior_messages),
        transcript
    )
}

// The history is opaque: strings go in verbatim, anything else as compact JSON.
fn render_prior_messages(prior_messages: &Value) -> String {
    match prior_messages {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
