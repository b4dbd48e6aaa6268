use std::time::Duration;

use futures::StreamExt;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::{LLMConfig, entities::app_errors::CoreError},
        meal_analysis::ports::LLMClient,
    },
    infrastructure::llm::sse::{SseEvent, SseLineBuffer},
};

/// Client for any OpenAI-compatible `/chat/completions` endpoint (ModelScope by default).
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    config: LLMConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn call_chat_api(&self, api_key: &str, request: ChatRequest<'_>) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat completion request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Chat completion API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        if request.stream {
            Self::collect_stream(response).await
        } else {
            Self::read_completion(response).await
        }
    }

    async fn read_completion(response: Response) -> Result<String, CoreError> {
        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse chat completion response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    /// Appends every streamed delta until `[DONE]` or the end of the body.
    async fn collect_stream(response: Response) -> Result<String, CoreError> {
        let mut byte_stream = response.bytes_stream();
        let mut buffer = SseLineBuffer::new();
        let mut text = String::new();

        while let Some(chunk) = byte_stream.next().await {
            let chunk = chunk.map_err(|e| {
                tracing::error!("Chat completion stream interrupted: {}", e);
                CoreError::ExternalServiceError(format!("LLM stream error: {}", e))
            })?;

            for event in buffer.feed(&chunk) {
                match event {
                    SseEvent::Data(data) => append_delta(&mut text, &data),
                    SseEvent::Done => return Ok(text),
                }
            }
        }

        if let Some(SseEvent::Data(data)) = buffer.flush() {
            append_delta(&mut text, &data);
        }

        Ok(text)
    }
}

fn append_delta(text: &mut String, data: &str) {
    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => {
            if let Some(content) = chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content)
            {
                text.push_str(&content);
            }
        }
        Err(e) => tracing::debug!("Skipping unreadable stream event: {}", e),
    }
}

impl LLMClient for ChatCompletionClient {
    fn is_configured(&self) -> bool {
        self.config.credential().is_some()
    }

    async fn complete(&self, system_prompt: String, user_prompt: String) -> Result<String, CoreError> {
        let api_key = self.config.credential().ok_or_else(|| {
            CoreError::Configuration("AI API key is not configured".to_string())
        })?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: self.config.stream,
        };

        tracing::debug!(
            model = %self.config.model,
            stream = self.config.stream,
            "calling chat completion API"
        );

        self.call_chat_api(api_key, request).await
    }
}
