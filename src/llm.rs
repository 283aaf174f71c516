//! Chat-completion client for the AI summary path.
//!
//! One attempt per call, strict timeouts, and tolerant handling of the
//! provider's free-text reply: the assistant content is expected to embed
//! a single `{"pros":[...],"cons":[...]}` object, possibly wrapped in
//! prose or code fences. Every failure is classified; no transport error
//! leaks to the caller raw.

use crate::config::Config;
use crate::summary::{clean_list, Summary};
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

/// System instruction constraining the model's output.
const SYSTEM_PROMPT: &str = "Output JSON only: {\"pros\":[max 3],\"cons\":[max 3]}. \
     Do NOT mention AI. Do NOT hallucinate. Base strictly on provided reviews.";

#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured; the call is refused before any network I/O.
    #[error("no provider API key configured")]
    ConfigMissing,
    /// The provider answered with a non-2xx status.
    #[error("provider returned status {0}")]
    Provider(u16),
    /// A 2xx response with missing or blank assistant content.
    #[error("provider returned no content")]
    BadGateway,
    /// Anything else: transport errors, timeouts, unparseable replies.
    #[error("unusable provider response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Malformed(err.to_string())
    }
}

/// Client for the chat-completion endpoint.
pub struct LlmClient {
    http: Client,
    config: Config,
}

impl LlmClient {
    /// Build a client from injected configuration. Timeouts bound the
    /// worst-case latency of a single call.
    pub fn new(config: Config) -> Result<Self, LlmError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// Ask the model for a pros/cons summary of the prompt's reviews.
    pub async fn summarize(&self, prompt: &str) -> Result<Summary, LlmError> {
        let api_key = self.config.api_key().ok_or(LlmError::ConfigMissing)?;

        let body = json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
        });

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Provider(status.as_u16()));
        }

        let reply: Value = response.json().await?;
        let content = reply
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(LlmError::BadGateway)?;

        let object = extract_json_object(content)?;
        let parsed: Value =
            serde_json::from_str(object).map_err(|e| LlmError::Malformed(e.to_string()))?;

        Ok(Summary::new(
            string_items(parsed.get("pros")),
            string_items(parsed.get("cons")),
        ))
    }
}

/// Cut the substring from the first `{` to the last `}`. Tolerates prose
/// or code fences around the object; anything without a complete brace
/// pair is unusable.
fn extract_json_object(raw: &str) -> Result<&str, LlmError> {
    let trimmed = raw.trim();
    let start = trimmed
        .find('{')
        .ok_or_else(|| LlmError::Malformed("no JSON object in content".to_string()))?;
    let end = trimmed
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| LlmError::Malformed("no JSON object in content".to_string()))?;
    Ok(&trimmed[start..=end])
}

/// Read an optional JSON array as a bounded string list. Strings pass
/// through, numbers and booleans are stringified, nested values are
/// skipped; a missing or non-array field is just empty.
fn string_items(field: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = field else {
        return Vec::new();
    };
    let coerced = items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect();
    clean_list(coerced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_from_prose_and_fences() {
        let raw = "Sure! ```json\n{\"pros\":[\"a\"],\"cons\":[]}\n``` hope that helps";
        assert_eq!(
            extract_json_object(raw).unwrap(),
            "{\"pros\":[\"a\"],\"cons\":[]}"
        );

        let bare = "{\"pros\":[],\"cons\":[]}";
        assert_eq!(extract_json_object(bare).unwrap(), bare);
    }

    #[test]
    fn rejects_content_without_brace_pair() {
        assert!(matches!(
            extract_json_object("no json here"),
            Err(LlmError::Malformed(_))
        ));
        assert!(matches!(
            extract_json_object("} backwards {"),
            Err(LlmError::Malformed(_))
        ));
        assert!(matches!(
            extract_json_object("{ never closed"),
            Err(LlmError::Malformed(_))
        ));
    }

    #[test]
    fn string_items_coerces_and_bounds() {
        let value: Value = serde_json::from_str(
            "{\"pros\":[\"Great battery\",\"Great battery\",\"\",42,true,[\"nested\"],\"a\",\"b\"]}",
        )
        .unwrap();
        assert_eq!(
            string_items(value.get("pros")),
            vec!["Great battery", "42", "true"]
        );
    }

    #[test]
    fn missing_or_non_array_field_is_empty() {
        let value: Value = serde_json::from_str("{\"pros\":\"not a list\"}").unwrap();
        assert!(string_items(value.get("pros")).is_empty());
        assert!(string_items(value.get("cons")).is_empty());
    }
}
