#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scriptsmith::config::Config;

pub const OPENAI_PATH: &str = "/chat/completions";
pub const ANTHROPIC_PATH: &str = "/v1/messages";

pub fn openai_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "gpt-4o",
        "choices": [{
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 40 }
    }))
}

pub fn anthropic_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "claude-3-5-sonnet-20240620",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 300, "output_tokens": 90 }
    }))
}

/// One mock server per stage, wired into a config that points at them.
pub struct MockStages {
    pub style: MockServer,
    pub review: MockServer,
}

impl MockStages {
    pub async fn start() -> Self {
        Self {
            style: MockServer::start().await,
            review: MockServer::start().await,
        }
    }

    pub async fn mount_style(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(OPENAI_PATH))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.style)
            .await;
    }

    pub async fn mount_review(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(ANTHROPIC_PATH))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.review)
            .await;
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.style.api_key = Some("sk-test-style".into());
        config.style.base_url = Some(self.style.uri());
        config.review.api_key = Some("sk-ant-test-review".into());
        config.review.base_url = Some(self.review.uri());
        config
    }
}

/// JSON bodies of every request a server has seen, in arrival order.
pub async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
