//! Inbound request and outbound chat-completion wire types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Model every summary is requested from
pub const SUMMARY_MODEL: &str = "llama3-8b-8192";

/// Instruction sent ahead of the transcript
pub const SYSTEM_PROMPT: &str = "Summarize this meeting:";

/// Body of `POST /summarize`
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    /// Raw meeting text; absent means empty
    #[serde(default)]
    pub transcript: String,
}

impl SummarizeRequest {
    /// Parse an inbound body
    ///
    /// The body must be a JSON object; `transcript`, when present, must be
    /// a string.
    ///
    /// # Errors
    ///
    /// Returns the parser message when the body is not a JSON object or the
    /// transcript has the wrong type
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }
}

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Build the two-message summarization conversation
    ///
    /// The transcript becomes the user message unchanged.
    pub fn summarize(transcript: String) -> Self {
        Self {
            model: SUMMARY_MODEL.to_owned(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatMessage {
                    role: Role::User,
                    content: transcript,
                },
            ],
        }
    }
}

/// A single role/content pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_matches_provider_format() {
        let request = ChatCompletionRequest::summarize("Alice: let's ship Friday.".to_owned());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "llama3-8b-8192",
                "messages": [
                    {"role": "system", "content": "Summarize this meeting:"},
                    {"role": "user", "content": "Alice: let's ship Friday."}
                ]
            })
        );
    }

    #[test]
    fn transcript_is_not_trimmed_or_escaped() {
        let transcript = "  Bob: \"ok\" \u{1F680}\n\tCarol: <b>fine</b>  ";
        let request = ChatCompletionRequest::summarize(transcript.to_owned());

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: ChatCompletionRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.messages[1].content, transcript);
    }

    #[test]
    fn missing_transcript_defaults_to_empty() {
        let request = SummarizeRequest::from_json(b"{}").unwrap();
        assert_eq!(request.transcript, "");
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let request = SummarizeRequest::from_json(br#"{"transcript": "hi", "meeting_id": 42}"#).unwrap();
        assert_eq!(request.transcript, "hi");
    }

    #[test]
    fn only_objects_are_accepted() {
        for body in ["[]", r#"["x"]"#, "null", r#""str""#, "42"] {
            assert!(SummarizeRequest::from_json(body.as_bytes()).is_err(), "{body} should be rejected");
        }
    }

    #[test]
    fn transcript_must_be_a_string() {
        assert!(SummarizeRequest::from_json(br#"{"transcript": null}"#).is_err());
        assert!(SummarizeRequest::from_json(br#"{"transcript": ["a"]}"#).is_err());
    }
}
