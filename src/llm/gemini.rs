//! Gemini `generateContent` provider implementation.
//!
//! Talks to the Google Generative Language REST surface (or any endpoint
//! that mirrors it, which is how the tests stub it out).

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::provider::{
    FinishReason, GenerationRequest, GenerationResponse, Speaker, TextGenerator,
};

/// Provider name constant to avoid magic strings.
const PROVIDER_NAME: &str = "gemini";

/// Gemini REST provider.
pub struct GeminiClient {
    client: Client,
    config: LlmConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("Failed to build reqwest client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    /// Construct the generateContent URL for the configured model.
    /// Strips a trailing `/v1beta` from base_url to avoid doubling it.
    fn api_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1beta").unwrap_or(base);
        format!(
            "{}/v1beta/models/{}:generateContent",
            base, self.config.model
        )
    }

    /// Send a request to the generateContent API.
    async fn send_request(&self, body: &GenerateContentRequest) -> Result<GenerateContentResponse, LlmError> {
        let url = self.api_url();

        tracing::debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini request failed: {}", e);
                LlmError::RequestFailed {
                    provider: PROVIDER_NAME.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| LlmError::RequestFailed {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(LlmError::AuthFailed {
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            if status.as_u16() == 429 {
                return Err(LlmError::RateLimited {
                    provider: PROVIDER_NAME.to_string(),
                    retry_after: None,
                });
            }
            return Err(LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("HTTP {}: {}", status, snippet(&response_text, 200)),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: format!(
                "JSON parse error: {}. Raw: {}",
                e,
                snippet(&response_text, 200)
            ),
        })
    }
}

/// Bound an error snippet to at most `max` bytes without cutting inside a
/// multibyte character.
fn snippet(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, req: GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let contents: Vec<Content> = req.turns.into_iter().map(Content::from).collect();

        let generation_config = if req.temperature.is_some() || req.max_tokens.is_some() || req.json_output {
            Some(GenerationConfig {
                temperature: req.temperature,
                max_output_tokens: req.max_tokens,
                response_mime_type: req.json_output.then(|| "application/json".to_string()),
            })
        } else {
            None
        };

        let request = GenerateContentRequest {
            system_instruction: req.system.map(|text| SystemInstruction {
                parts: vec![Part { text }],
            }),
            contents,
            generation_config,
        };

        let response = self.send_request(&request).await?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse {
                provider: PROVIDER_NAME.to_string(),
                reason: "No candidates in response".to_string(),
            })?;

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let finish_reason = match candidate.finish_reason.as_deref() {
            Some("STOP") => FinishReason::Stop,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") => FinishReason::Safety,
            _ => FinishReason::Unknown,
        };

        let usage = response.usage_metadata.unwrap_or_default();

        Ok(GenerationResponse {
            text,
            finish_reason,
            input_tokens: usage.prompt_token_count,
            output_tokens: usage.candidates_token_count,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// Gemini generateContent API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl From<crate::llm::provider::Turn> for Content {
    fn from(turn: crate::llm::provider::Turn) -> Self {
        let role = match turn.speaker {
            Speaker::User => "user",
            Speaker::Model => "model",
        };
        Self {
            role: role.to_string(),
            parts: vec![Part { text: turn.text }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}
