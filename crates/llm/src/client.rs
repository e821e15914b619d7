use async_trait::async_trait;
use chatdigest_common::{AppConfig, ChatDigestError, DecodingConfig, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::llm_trait::SummaryProvider;
use crate::prompts::PROMPT_TEMPLATE_VERSION;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, PromptMessages};

/// OpenAI chat-completions client
///
/// One request per call. No retries and no client-side timeout.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    org_id: Option<String>,
    decoding: DecodingConfig,
    client: Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("org_id", &self.org_id)
            .field("decoding", &self.decoding)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create new client from the startup configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ChatDigestError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Completion client initialized: {} (model: {})",
            config.openai_base_url, config.llm_model
        );

        Ok(Self {
            base_url: config.openai_base_url.clone(),
            api_key: config.openai_api_key.clone(),
            org_id: config.openai_org_id.clone(),
            decoding: config.decoding(),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send the prompt and return the first choice's content
    pub async fn chat_completion(&self, prompt: &PromptMessages) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.decoding.model,
            messages: prompt.as_slice(),
            max_tokens: self.decoding.max_tokens,
            temperature: self.decoding.temperature,
        };

        debug!(
            "Sending chat completion - Model: {}, Template: {}, Prompt chars: {}",
            request.model,
            PROMPT_TEMPLATE_VERSION,
            prompt.char_count()
        );

        let mut builder = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request);
        if let Some(org) = &self.org_id {
            builder = builder.header("OpenAI-Organization", org.as_str());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatDigestError::quota_exceeded(error_message(&body)));
        }
        if !status.is_success() {
            return Err(ChatDigestError::remote_service(status.as_u16(), body));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            ChatDigestError::unknown(format!("Failed to parse completion response: {}", e))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatDigestError::unknown("Completion response contained no choices"))?;

        debug!(
            "Received completion - Model: {}, Finish reason: {}",
            parsed.model.as_deref().unwrap_or("unknown"),
            choice.finish_reason.as_deref().unwrap_or("unknown")
        );

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl SummaryProvider for OpenAiClient {
    async fn complete(&self, prompt: &PromptMessages) -> Result<String> {
        self.chat_completion(prompt).await
    }

    fn model(&self) -> &str {
        &self.decoding.model
    }
}

/// Map a reqwest failure onto the provider-neutral taxonomy
fn transport_error(e: reqwest::Error) -> ChatDigestError {
    if e.is_connect() || e.is_timeout() || e.is_request() {
        ChatDigestError::connectivity(e.to_string())
    } else {
        ChatDigestError::unknown(e.to_string())
    }
}

/// Prefer the provider's `error.message`, fall back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
