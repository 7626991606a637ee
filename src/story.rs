//! Metaphorical story generation.
//!
//! Hands a scenario seed to the hosted text service under a fixed
//! storyteller instruction and parses a `{title, story}` pair out of
//! whatever the model returns. Models wrap JSON in prose or code fences
//! often enough that parsing has to be lenient.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::llm::{GenerationRequest, TextGenerator, Turn};

/// System instruction for the storyteller persona.
///
/// The prompt forbids literal mentions of studies, exams, family pressure,
/// or clinical terms; everything arrives as metaphor.
pub const STORYTELLER_PROMPT: &str = r#"You are a wise, empathetic, and gentle storyteller. Your task is to write a short, metaphorical story (around 300-400 words) for a young person in India who is struggling with their mental health, based on the specific situation provided.

Core Rules for Every Story:

Metaphorical, Not Literal: You MUST AVOID direct mentions of studies, exams, family pressure, or clinical terms. Instead, you will represent these struggles through powerful metaphors. For example:

Stress/Anxiety: A relentless, howling wind; a climb up a steep, crumbling mountain; a boat in a churning storm.
Sadness/Depression: A world that has lost its color; a heavy, invisible cloak; a persistent, grey fog.
Loneliness: Being in a bustling city where no one can see you; a single tree in a vast, empty field.
Fatigue/Burnout: A traveler whose backpack is filled with heavy stones; a lamp running low on oil.

Relatable Protagonist: Create a character with a simple, culturally resonant Indian name (e.g., Rohan, Priya, Aarav, Meera) who embodies the user's feelings.

Embed Subtle Coping Mechanisms: Weave one or two simple, actionable coping strategies into the narrative as actions the character takes. These actions should lead to a small but significant shift in the story.
- For Stress/Worry: The character learns to calm the storm by taking three deep, steady breaths.
- For Sadness: The character finds a single, vibrant flower by noticing something small and beautiful in the grey landscape.
- For Loneliness: The character feels a moment of connection by simply nodding at a friendly forest creature (representing sharing a small part of their burden).
- For Fatigue: The character discovers the strength to continue not by pushing harder, but by resting beside a quiet stream and just listening.

Culturally Sensitive Imagery: Ground the story in a gentle, Indian context. Use imagery like ancient banyan trees, the scent of jasmine or marigolds, the feel of the first monsoon rain, or the sight of fireflies at dusk.

A Hopeful, Gentle Ending: The story MUST NOT offer a magical cure. The problem is not "solved." Instead, the character finds a new tool, a moment of peace, or a flicker of hope. The story should end with the feeling that this difficult moment is just one part of a much longer journey, and that the character now has a new way to take the next step.

Output format: Strict JSON with keys {"title": string, "story": string}."#;

/// Title used when the model output carries no parseable JSON.
const FALLBACK_TITLE: &str = "A Gentle Story";

/// A generated title/body pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub title: String,
    pub story: String,
}

/// Story generator over an injected text provider.
pub struct StoryTeller {
    generator: Arc<dyn TextGenerator>,
}

impl StoryTeller {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate a story from a scenario seed.
    ///
    /// When the model ignores the JSON instruction, the raw text becomes
    /// the story body under a fallback title rather than failing the
    /// request.
    pub async fn generate(&self, scenario_prompt: &str) -> Result<GeneratedStory, LlmError> {
        let request = GenerationRequest::new(vec![Turn::user(scenario_prompt)])
            .with_system(format!("{STORYTELLER_PROMPT}\nKeep within 300-400 words."))
            .expecting_json();

        let response = self.generator.generate(request).await?;
        if response.text.trim().is_empty() {
            return Err(LlmError::EmptyResponse {
                provider: self.generator.model_name().to_string(),
            });
        }

        Ok(parse_story(&response.text))
    }
}

/// Turn raw model output into a story, tolerating non-JSON wrapping.
fn parse_story(raw: &str) -> GeneratedStory {
    match extract_json(raw) {
        Some(value) => {
            let title = value
                .get("title")
                .and_then(|t| t.as_str())
                .filter(|t| !t.is_empty())
                .unwrap_or(FALLBACK_TITLE)
                .to_string();
            let story = value
                .get("story")
                .and_then(|s| s.as_str())
                .unwrap_or_default()
                .to_string();
            if story.is_empty() {
                GeneratedStory {
                    title: FALLBACK_TITLE.to_string(),
                    story: raw.trim().to_string(),
                }
            } else {
                GeneratedStory { title, story }
            }
        }
        None => GeneratedStory {
            title: FALLBACK_TITLE.to_string(),
            story: raw.trim().to_string(),
        },
    }
}

/// Pull a JSON object out of model output.
///
/// Tries, in order: direct parse, the inside of the first code fence, and
/// the substring between the first `{` and the last `}`.
fn extract_json(raw: &str) -> Option<serde_json::Value> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
        if value.is_object() {
            return Some(value);
        }
    }

    if let Some(fenced) = fenced_block(raw) {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(fenced.trim()) {
            if value.is_object() {
                return Some(value);
            }
        }
    }

    let first = raw.find('{')?;
    let last = raw.rfind('}')?;
    if last > first {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw[first..=last]) {
            if value.is_object() {
                return Some(value);
            }
        }
    }
    None
}

/// The body of the first ``` fence, if any. The opening fence may carry a
/// language tag.
fn fenced_block(raw: &str) -> Option<&str> {
    let start = raw.find("```")?;
    let after_fence = &raw[start + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    Some(&body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clean_json() {
        let story = parse_story(r#"{"title": "The Banyan", "story": "Rohan walked."}"#);
        assert_eq!(story.title, "The Banyan");
        assert_eq!(story.story, "Rohan walked.");
    }

    #[test]
    fn parses_fenced_json() {
        let raw = "Here you go:\n```json\n{\"title\": \"Fireflies\", \"story\": \"Meera paused.\"}\n```\nEnjoy!";
        let story = parse_story(raw);
        assert_eq!(story.title, "Fireflies");
        assert_eq!(story.story, "Meera paused.");
    }

    #[test]
    fn parses_json_embedded_in_prose() {
        let raw = "Sure! {\"title\": \"The Stream\", \"story\": \"Aarav rested.\"} Hope that helps.";
        let story = parse_story(raw);
        assert_eq!(story.title, "The Stream");
        assert_eq!(story.story, "Aarav rested.");
    }

    #[test]
    fn falls_back_to_raw_text() {
        let story = parse_story("Once upon a time, without any JSON at all.");
        assert_eq!(story.title, "A Gentle Story");
        assert_eq!(story.story, "Once upon a time, without any JSON at all.");
    }

    #[test]
    fn missing_story_key_falls_back_to_raw() {
        let raw = r#"{"title": "Empty"}"#;
        let story = parse_story(raw);
        assert_eq!(story.title, "A Gentle Story");
        assert_eq!(story.story, raw);
    }

    #[test]
    fn empty_title_uses_fallback() {
        let story = parse_story(r#"{"title": "", "story": "The rain came."}"#);
        assert_eq!(story.title, "A Gentle Story");
        assert_eq!(story.story, "The rain came.");
    }

    #[test]
    fn fenced_block_requires_closing_fence() {
        assert!(fenced_block("```json\n{\"a\": 1}").is_none());
        assert_eq!(fenced_block("```\nbody\n```"), Some("body\n"));
    }
}
