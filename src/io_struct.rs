use crate::transcript::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    // Older clients post `{"prompt": ...}`
    #[serde(alias = "prompt", default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub time: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        StatusResponse {
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body sent to the completion API.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

/// Body returned by the completion API. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// Message as returned upstream. Providers may omit the role, use their own
/// role names, or send `content: null`; the relay only needs the text.
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice. A first choice with null or missing content
    /// counts as no answer.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_accepts_prompt_alias() {
        let req: ChatRequest = serde_json::from_value(json!({"prompt": "hi"})).unwrap();
        assert_eq!(req.message, "hi");
        let req: ChatRequest = serde_json::from_value(json!({"message": "hello"})).unwrap();
        assert_eq!(req.message, "hello");
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.message.is_empty());
    }

    #[test]
    fn test_completion_request_wire_format() {
        let messages = vec![Message::system("sys"), Message::user("hi")];
        let body = CompletionRequest {
            model: "some/model",
            messages: &messages,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "model": "some/model",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ]
            })
        );
    }

    #[test]
    fn test_completion_response_ignores_extra_fields() {
        let resp: CompletionResponse = serde_json::from_value(json!({
            "id": "gen-1",
            "model": "x-ai/grok-4-fast:free",
            "choices": [
                {"index": 0, "finish_reason": "stop",
                 "message": {"role": "assistant", "content": "Hi there"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ],
            "usage": {"prompt_tokens": 3}
        }))
        .unwrap();
        assert_eq!(resp.choices[0].message.role, "assistant");
        assert_eq!(resp.first_content().as_deref(), Some("Hi there"));
    }

    #[test]
    fn test_completion_response_without_choices() {
        let resp: CompletionResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(resp.first_content().is_none());
    }

    #[test]
    fn test_choice_role_is_free_form() {
        let resp: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "model", "content": "Hi there"}}]
        }))
        .unwrap();
        assert_eq!(resp.choices[0].message.role, "model");
        assert_eq!(resp.first_content().as_deref(), Some("Hi there"));

        let resp: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": "Hi there"}}]
        }))
        .unwrap();
        assert!(resp.choices[0].message.role.is_empty());
        assert_eq!(resp.first_content().as_deref(), Some("Hi there"));
    }

    #[test]
    fn test_null_content_is_no_answer() {
        let resp: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(resp.first_content().is_none());

        let resp: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant"}}]
        }))
        .unwrap();
        assert!(resp.first_content().is_none());
    }
}
