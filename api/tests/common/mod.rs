#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use calorielens_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, ServerArgs},
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn args(api_key: Option<&str>, base_url: String) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: "/api".to_string(),
            allowed_origins: vec!["http://localhost:7860".to_string()],
            // The Prometheus recorder is process global and can only be installed once.
            metrics_enabled: false,
        },
        llm: LlmArgs {
            api_key: api_key.map(str::to_string),
            base_url,
            model: "test-model".to_string(),
            temperature: 0.3,
            max_tokens: 2000,
            stream: false,
            timeout_secs: 5,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

fn test_server(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

/// Application wired to a mock chat-completion endpoint.
pub struct AiContext {
    pub ai: MockServer,
    pub server: TestServer,
}

impl AiContext {
    /// Makes the mock endpoint answer every call with `content` as the assistant message.
    pub async fn reply_with(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            })))
            .mount(&self.ai)
            .await;
    }

    pub async fn fail_with(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream down"))
            .mount(&self.ai)
            .await;
    }

    pub async fn expect_no_call(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.ai)
            .await;
    }
}

impl AsyncTestContext for AiContext {
    async fn setup() -> Self {
        let ai = MockServer::start().await;
        let server = test_server(args(Some("test-key"), format!("{}/v1", ai.uri())));

        AiContext { ai, server }
    }
}

/// Application started without an AI credential.
pub struct UnconfiguredContext {
    pub server: TestServer,
}

impl AsyncTestContext for UnconfiguredContext {
    async fn setup() -> Self {
        let server = test_server(args(None, "http://127.0.0.1:9/v1".to_string()));

        UnconfiguredContext { server }
    }
}

pub fn rice_and_cola_request() -> Value {
    json!({
        "meal_type": "lunch",
        "clear_foods": [{"name": "米饭", "quantity": "中碗", "calories": 232}],
        "clarified_items": [{"food": "可乐", "selected_label": "中杯", "calories": 215}]
    })
}

pub fn rice_and_cola_fallback() -> Value {
    json!({
        "status": "clear",
        "foods": [
            {"name": "米饭", "quantity": "中碗", "calories": 232},
            {"name": "可乐", "quantity": "中杯", "calories": 215}
        ],
        "total_calories": 447,
        "dietary_advice": "请保持均衡饮食，适量摄入蛋白质、碳水化合物和蔬菜。",
        "health_score": 70,
        "visualizations": {"cola": 1.7, "rice": 1.9, "running_km": 7.5}
    })
}
