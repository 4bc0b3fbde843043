#![allow(dead_code)]

use chat_relay::config::RelayConfig;
use chat_relay::relay_state::RelayState;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "sk-test-key";
pub const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Upstream payload with a single assistant choice.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "gen-123",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": content}
        }]
    })
}

pub fn relay_config(server: &MockServer) -> RelayConfig {
    RelayConfig::new(API_KEY).with_upstream_url(format!("{}{}", server.uri(), COMPLETIONS_PATH))
}

pub fn relay_for(server: &MockServer) -> RelayState {
    RelayState::new(&relay_config(server)).unwrap()
}

/// Starts a mock completion API that answers every request with `template`.
pub async fn mock_upstream(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

pub async fn mock_reply(content: &str) -> MockServer {
    mock_upstream(ResponseTemplate::new(200).set_body_json(completion_body(content))).await
}

/// Bodies of every request the mock has seen, in order.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.body_json::<Value>().unwrap())
        .collect()
}
