// gemini.rs - Google Generative Language REST Backend
// Non-streaming generateContent calls over reqwest, plus a list_models
// connectivity probe. Quota responses (HTTP 429 / RESOURCE_EXHAUSTED)
// are classified as rate limits so the manager can apply its cooldown.

use crate::backend::{BackendError, TextBackend};
use async_trait::async_trait;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Shared HTTP client for all Gemini backends
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent("llm-fallback-client/0.1")
        .build()
        .expect("Failed to create HTTP client")
});

// API request/response structures
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ModelListResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
}

/// One Gemini model endpoint. Several of these share the same key and
/// base URL but point at different model names.
pub struct GeminiBackend {
    model: String,
    api_key: String,
    base_url: String,
    request_timeout: Duration,
}

impl GeminiBackend {
    pub fn new(model: &str, api_key: &str, base_url: &str, request_timeout: Duration) -> Self {
        Self {
            model: model.to_string(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
        }
    }
}

#[async_trait]
impl TextBackend for GeminiBackend {
    async fn invoke(&self, prompt: &str) -> Result<String, BackendError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        debug!("Sending generateContent request to model '{}'", self.model);

        let response = HTTP_CLIENT
            .post(&format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                self.base_url, self.model, self.api_key
            ))
            .timeout(self.request_timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Model '{}' returned HTTP {}", self.model, status);
            return Err(classify_http_error(status.as_u16(), &body));
        }

        let response: GenerateResponse = response.json().await?;
        extract_text(response)
    }
}

/// Map a failed HTTP response to the backend error taxonomy. 429s and
/// quota-flavored error bodies become RateLimited; everything else is a
/// plain API error.
fn classify_http_error(status: u16, body: &str) -> BackendError {
    let lowered = body.to_lowercase();
    if status == 429 || lowered.contains("resource_exhausted") || lowered.contains("quota") {
        BackendError::RateLimited(format!("HTTP {}: {}", status, truncate(body, 300)))
    } else {
        BackendError::Api {
            status,
            message: truncate(body, 300).to_string(),
        }
    }
}

/// Pull the generated text out of a generateContent response. The API
/// can return a candidate with no content (e.g. safety-blocked), which
/// counts as an empty response.
fn extract_text(response: GenerateResponse) -> Result<String, BackendError> {
    let mut text = String::new();

    for candidate in response.candidates {
        if let Some(content) = candidate.content {
            for part in content.parts {
                if let Some(part_text) = part.text {
                    text.push_str(&part_text);
                }
            }
        }
        // Only the first candidate is used
        break;
    }

    if text.trim().is_empty() {
        return Err(BackendError::EmptyResponse);
    }

    Ok(text)
}

fn truncate(text: &str, max_len: usize) -> &str {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// List the models the configured API key can reach. Used by the CLI
/// connectivity check before any generation is attempted.
pub async fn list_models(base_url: &str, api_key: &str) -> Result<Vec<String>, BackendError> {
    let response = HTTP_CLIENT
        .get(&format!(
            "{}/v1beta/models?key={}",
            base_url.trim_end_matches('/'),
            api_key
        ))
        .timeout(Duration::from_secs(10))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_http_error(status.as_u16(), &body));
    }

    let listing: ModelListResponse = response.json().await?;
    Ok(listing.models.into_iter().map(|m| m.name).collect())
}
