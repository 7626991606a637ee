//! Hosted text-generation providers.

pub mod gemini;
pub mod provider;

pub use gemini::GeminiClient;
pub use provider::{
    FinishReason, GenerationRequest, GenerationResponse, Speaker, TextGenerator, Turn,
};
