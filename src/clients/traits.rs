use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("prompt was blocked: {0}")]
    Blocked(String),
    #[error("model returned no text")]
    EmptyResponse,
    #[error("parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ModelError::ParseError(err.to_string())
        } else {
            ModelError::Transport(err.to_string())
        }
    }
}

/// A hosted model that turns a prompt into free text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;

    /// Human readable model name for banners and logs.
    fn model_name(&self) -> &str;
}
