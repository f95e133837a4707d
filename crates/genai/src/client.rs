//! OpenAI-compatible chat-completions client for design generation.
//!
//! One request per design: a fixed system message plus the rendered
//! design prompt. The first non-empty message content of the reply is
//! parsed into a [`DesignRecord`]. Failures are returned as-is; there is
//! no retry.

use async_trait::async_trait;
use dbarchitect_core::design::{DesignRecord, DesignRequest};
use dbarchitect_core::parse::parse_design_reply;
use dbarchitect_core::prompt::{build_design_prompt, SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};

use crate::config::GenAiConfig;
use crate::error::GenAiError;
use crate::generator::DesignGenerator;

/// HTTP client for the design-generation service.
pub struct OpenAiDesignClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl OpenAiDesignClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GenAiConfig) -> Self {
        Self { client, config }
    }

    /// Send the prompt and return the raw reply text.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, GenAiError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.config.chat_completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let reply = response.json::<ChatResponse>().await?;
        first_content(reply).ok_or(GenAiError::EmptyReply)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise surface the
    /// upstream error message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl DesignGenerator for OpenAiDesignClient {
    async fn generate(&self, request: &DesignRequest) -> Result<DesignRecord, GenAiError> {
        let api_key = self.config.api_key()?;
        let prompt = build_design_prompt(request);

        tracing::info!(model = %self.config.model, domain = %request.domain, "Requesting design");
        let content = self.complete(api_key, &prompt).await?;
        tracing::debug!(reply_len = content.len(), "Received design reply");

        let record = parse_design_reply(&content).map_err(GenAiError::InvalidReply)?;
        tracing::info!(
            tables = record.tables.len(),
            rules = record.business_rules.len(),
            "Parsed design reply"
        );
        Ok(record)
    }
}

/// First choice with non-blank message content.
fn first_content(reply: ChatResponse) -> Option<String> {
    reply
        .choices
        .into_iter()
        .filter_map(|choice| choice.message?.content)
        .find(|text| !text.trim().is_empty())
}

/// `error.message` from an OpenAI-style error body, else the trimmed body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error?.message)
        .unwrap_or_else(|| body.trim().to_string())
}
