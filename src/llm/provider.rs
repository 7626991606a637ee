//! Text-generation provider trait and types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Model,
}

/// A single turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// Create a model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Model,
            text: text.into(),
        }
    }
}

/// Request for a text generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System instruction kept separate from the turn list, the way the
    /// hosted API expects it.
    pub system: Option<String>,
    pub turns: Vec<Turn>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Ask the provider to emit strict JSON.
    pub json_output: bool,
}

impl GenerationRequest {
    /// Create a new generation request.
    pub fn new(turns: Vec<Turn>) -> Self {
        Self {
            system: None,
            turns,
            temperature: None,
            max_tokens: None,
            json_output: false,
        }
    }

    /// Set the system instruction.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the response length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Request a JSON-typed response body.
    pub fn expecting_json(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Response from a text generation.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub text: String,
    pub finish_reason: FinishReason,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Why the generation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    Safety,
    Unknown,
}

/// A hosted text-generation service.
///
/// Implementations are injected as `Arc<dyn TextGenerator>` so the chat and
/// story layers never depend on a concrete provider, and tests can stub the
/// network away entirely.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation.
    async fn generate(&self, req: GenerationRequest) -> Result<GenerationResponse, LlmError>;

    /// The configured model identifier.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_constructors_set_speaker() {
        assert_eq!(Turn::user("hi").speaker, Speaker::User);
        assert_eq!(Turn::model("hello").speaker, Speaker::Model);
    }

    #[test]
    fn request_builders_compose() {
        let req = GenerationRequest::new(vec![Turn::user("hi")])
            .with_system("be kind")
            .with_temperature(0.6)
            .with_max_tokens(512)
            .expecting_json();
        assert_eq!(req.system.as_deref(), Some("be kind"));
        assert_eq!(req.temperature, Some(0.6));
        assert_eq!(req.max_tokens, Some(512));
        assert!(req.json_output);
    }
}
