//! Domain-specific error types for brandz

use axum::http::StatusCode;
use thiserror::Error;

use crate::clients::ModelError;

/// Message shown when no JSON object can be located in the model output.
pub const UNPARSEABLE_RESPONSE: &str = "Could not parse brand identity response";

/// Message shown when the brief is missing a required field.
pub const MISSING_REQUIRED_FIELDS: &str = "Please fill in all required fields.";

/// Main error type for the brandz service
#[derive(Error, Debug)]
pub enum BrandzError {
    #[error("Please add your Gemini API key: {message}")]
    Config { message: String },

    #[error("Failed to initialize Gemini API: {message}")]
    Initialization { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Error generating brand identity: {message}")]
    Upstream { message: String },

    /// The model answered with an `error` document; shown as the model wrote it.
    #[error("{message}")]
    ModelReported { message: String },

    #[error("Could not parse brand identity response")]
    Interpretation,

    #[error("Could not decode brand identity JSON: {message}")]
    MalformedJson { message: String },

    #[error("Template error: {message}")]
    Render { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BrandzError {
    pub fn validation(message: impl Into<String>) -> Self {
        BrandzError::Validation {
            message: message.into(),
        }
    }

    /// HTTP status used when the error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BrandzError::Config { .. } | BrandzError::Initialization { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            BrandzError::Validation { .. } => StatusCode::BAD_REQUEST,
            BrandzError::Upstream { .. }
            | BrandzError::ModelReported { .. }
            | BrandzError::Interpretation
            | BrandzError::MalformedJson { .. } => StatusCode::BAD_GATEWAY,
            BrandzError::Render { .. }
            | BrandzError::Serialization { .. }
            | BrandzError::Io { .. }
            | BrandzError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for BrandzError {
    fn from(err: anyhow::Error) -> Self {
        BrandzError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BrandzError {
    fn from(err: serde_json::Error) -> Self {
        BrandzError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<tera::Error> for BrandzError {
    fn from(err: tera::Error) -> Self {
        // tera keeps the useful part in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        BrandzError::Render { message }
    }
}

impl From<std::io::Error> for BrandzError {
    fn from(err: std::io::Error) -> Self {
        BrandzError::Io {
            message: err.to_string(),
        }
    }
}

impl From<ModelError> for BrandzError {
    fn from(err: ModelError) -> Self {
        BrandzError::Upstream {
            message: err.to_string(),
        }
    }
}

/// Result type alias for brandz operations
pub type Result<T> = std::result::Result<T, BrandzError>;
