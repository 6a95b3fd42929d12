use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::clients::traits::{ContentGenerator, ModelError};
use crate::config::Config;
use crate::error::{BrandzError, Result};

// Sampling is part of the product behavior, so it is not configurable.
pub const TEMPERATURE: f64 = 0.8;
pub const TOP_P: f64 = 0.95;
pub const TOP_K: u32 = 40;
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest<'a> {
    pub(crate) contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    pub(crate) generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub(crate) role: &'a str,
    pub(crate) parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part<'a> {
    pub(crate) text: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct GenerationConfig {
    pub(crate) temperature: f64,
    #[serde(rename = "topP")]
    pub(crate) top_p: f64,
    #[serde(rename = "topK")]
    pub(crate) top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    pub(crate) max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub(crate) prompt_feedback: Option<PromptFeedback>,
    pub(crate) error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub(crate) content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    pub(crate) finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub(crate) parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    pub(crate) text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub(crate) block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) code: Option<u16>,
    pub(crate) message: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts concatenated.
    pub(crate) fn into_text(self) -> std::result::Result<String, ModelError> {
        if let Some(err) = self.error {
            return Err(ModelError::Api {
                status: err.code.unwrap_or(0),
                message: err.message,
            });
        }
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ModelError::Blocked(reason));
        }
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(ModelError::EmptyResponse);
        };
        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if text.is_empty() {
            if let Some(reason) = candidate.finish_reason {
                return Err(ModelError::Blocked(format!("finish reason {reason}")));
            }
            return Err(ModelError::EmptyResponse);
        }
        Ok(text)
    }
}

/// REST client for Gemini `generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BrandzError::Initialization {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the client from loaded configuration; fails when the API key is
    /// missing or still the placeholder.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Self::new(api_key, &config.gemini.model, &config.gemini.api_base_url)
    }

    pub fn endpoint(&self) -> String {
        let model = self.model.trim_start_matches("models/");
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ModelError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        };

        tracing::debug!(
            "Calling Gemini (model={}, prompt_chars={})",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::ParseError(e.to_string()))?;
        let text = parsed.into_text()?;
        tracing::debug!("Gemini returned {} chars", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Prefer the API's own error message over the raw body.
fn api_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct Envelope {
        error: ApiError,
    }
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => truncate_chars(body.trim(), MAX_ERROR_BODY_CHARS),
    }
}

fn truncate_chars(input: &str, max: usize) -> String {
    let mut out = String::new();
    for (idx, ch) in input.chars().enumerate() {
        if idx >= max {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }
    out
}
