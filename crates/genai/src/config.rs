use crate::error::GenAiError;

/// Generation service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Bearer credential. Checked on use, not at load time, so the server
    /// can start (and serve history) without one.
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API (default: `https://api.openai.com`).
    pub api_base: String,
    /// Chat model name (default: `gpt-3.5-turbo`).
    pub model: String,
    /// Sampling temperature (default: `0.3`).
    pub temperature: f32,
    /// Reply token limit (default: `3500`).
    pub max_tokens: u32,
}

impl GenAiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                  |
    /// |----------------------|--------------------------|
    /// | `OPENAI_API_KEY`     | unset                    |
    /// | `OPENAI_API_BASE`    | `https://api.openai.com` |
    /// | `OPENAI_MODEL`       | `gpt-3.5-turbo`          |
    /// | `OPENAI_TEMPERATURE` | `0.3`                    |
    /// | `OPENAI_MAX_TOKENS`  | `3500`                   |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com".into());

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".into());

        let temperature: f32 = std::env::var("OPENAI_TEMPERATURE")
            .unwrap_or_else(|_| "0.3".into())
            .parse()
            .expect("OPENAI_TEMPERATURE must be a valid f32");

        let max_tokens: u32 = std::env::var("OPENAI_MAX_TOKENS")
            .unwrap_or_else(|_| "3500".into())
            .parse()
            .expect("OPENAI_MAX_TOKENS must be a valid u32");

        Self {
            api_key,
            api_base,
            model,
            temperature,
            max_tokens,
        }
    }

    /// The credential, if present and shaped like a secret key (`sk-...`).
    pub fn api_key(&self) -> Result<&str, GenAiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenAiError::Config("OPENAI_API_KEY is not set".to_string()))?;
        if !key.contains("sk-") {
            return Err(GenAiError::Config(
                "OPENAI_API_KEY does not look like a secret key".to_string(),
            ));
        }
        Ok(key)
    }

    /// Full chat-completions endpoint, tolerating a base with or without `/v1`.
    pub fn chat_completions_url(&self) -> String {
        let trimmed = self.api_base.trim_end_matches('/');
        if trimmed.ends_with("/v1") {
            format!("{trimmed}/chat/completions")
        } else {
            format!("{trimmed}/v1/chat/completions")
        }
    }
}
