// backend.rs - Text Generation Backend Interface
// Every concrete provider implements TextBackend so the fallback manager
// can treat them uniformly and tests can substitute scripted doubles.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a backend call can surface. The manager only cares about the
/// rate-limit distinction; everything else counts toward the disable
/// threshold.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("API request failed: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

impl BackendError {
    /// Whether this failure means "out of quota, back off" rather than
    /// "the backend is misbehaving". Providers classify 429s up front,
    /// but quota errors occasionally arrive as plain API errors with a
    /// telltale message, so the message is sniffed too.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            BackendError::RateLimited(_) => true,
            BackendError::Api { status, message } => {
                *status == 429 || message.to_lowercase().contains("quota")
            }
            _ => false,
        }
    }
}

/// One configured text-generation provider. Implementations hold their
/// own credentials and transport; the manager only issues prompts.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Generate text for the given prompt. All-or-nothing: no partial
    /// or streamed results.
    async fn invoke(&self, prompt: &str) -> Result<String, BackendError>;
}
