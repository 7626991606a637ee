//! Mental-wellness check-in classifier.
//!
//! Maps a completed 12-question answer set to a support category with a
//! pre-authored observation and suggestion set, plus a metaphor seed for
//! the story generator. Pure functions over their input: no I/O, no state,
//! deterministic for every valid answer set.
//!
//! The rule cascade is held as an ordered `(predicate, category)` table and
//! walked top to bottom; first match wins. The order is load-bearing
//! because the categories are not mutually exclusive under naive scoring.

pub mod guidance;
pub mod questions;
pub mod scenario;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

pub use guidance::{Guidance, Suggestion};
pub use questions::{Question, QUESTIONS};

/// Number of questions in a check-in.
pub const ANSWER_COUNT: usize = 12;

/// Questions per life-domain section.
pub const QUESTIONS_PER_SECTION: usize = 3;

/// Ordinal response level for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// "Not at all / Rarely"
    #[serde(rename = "A")]
    Rarely,
    /// "Some of the time"
    #[serde(rename = "B")]
    Sometimes,
    /// "Often"
    #[serde(rename = "C")]
    Often,
    /// "Almost always"
    #[serde(rename = "D")]
    AlmostAlways,
}

impl Level {
    /// Parse a single answer letter. Case-insensitive.
    pub fn parse(index: usize, raw: &str) -> Result<Self, AssessmentError> {
        match raw.trim() {
            "A" | "a" => Ok(Level::Rarely),
            "B" | "b" => Ok(Level::Sometimes),
            "C" | "c" => Ok(Level::Often),
            "D" | "d" => Ok(Level::AlmostAlways),
            other => Err(AssessmentError::InvalidLevel {
                index,
                value: other.to_string(),
            }),
        }
    }

    /// An elevated answer ("often" or "almost always") counts toward the
    /// section score.
    pub fn is_elevated(self) -> bool {
        matches!(self, Level::Often | Level::AlmostAlways)
    }

    /// The answer letter shown to users.
    pub fn letter(self) -> char {
        match self {
            Level::Rarely => 'A',
            Level::Sometimes => 'B',
            Level::Often => 'C',
            Level::AlmostAlways => 'D',
        }
    }
}

/// One of the four fixed life-domain sections.
///
/// Question positions map statically: 0-2 Mood, 3-5 Stress, 6-8 Energy,
/// 9-11 Social.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Mood,
    Stress,
    Energy,
    Social,
}

impl Section {
    /// All sections in question order.
    pub const ALL: [Section; 4] = [
        Section::Mood,
        Section::Stress,
        Section::Energy,
        Section::Social,
    ];

    /// Section owning the question at `position` (0-based).
    ///
    /// Panics if `position >= ANSWER_COUNT`; positions are validated at
    /// answer-set construction.
    pub fn of_position(position: usize) -> Section {
        Self::ALL[position / QUESTIONS_PER_SECTION]
    }

    /// Human-readable section heading.
    pub fn label(self) -> &'static str {
        match self {
            Section::Mood => "Mood & Emotions",
            Section::Stress => "Stress & Pressure",
            Section::Energy => "Energy & Daily Functioning",
            Section::Social => "Social Connection & Support",
        }
    }
}

/// A validated, complete set of 12 answers.
///
/// Construction is the only place validation happens; once built, every
/// operation on the set is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSet([Level; ANSWER_COUNT]);

impl AnswerSet {
    /// Build from per-question responses where `None` marks an unanswered
    /// position. Fails on wrong length or any missing answer; never guesses
    /// a default level.
    pub fn from_responses(responses: &[Option<Level>]) -> Result<Self, AssessmentError> {
        if responses.len() != ANSWER_COUNT {
            return Err(AssessmentError::WrongLength {
                expected: ANSWER_COUNT,
                got: responses.len(),
            });
        }
        let mut levels = [Level::Rarely; ANSWER_COUNT];
        for (index, response) in responses.iter().enumerate() {
            levels[index] = response.ok_or(AssessmentError::Unanswered { index: index + 1 })?;
        }
        Ok(Self(levels))
    }

    /// Build from raw answer strings as submitted over the wire.
    ///
    /// Empty strings mark unanswered positions; anything outside `A`-`D`
    /// is rejected with the 1-based question index.
    pub fn parse(raw: &[String]) -> Result<Self, AssessmentError> {
        if raw.len() != ANSWER_COUNT {
            return Err(AssessmentError::WrongLength {
                expected: ANSWER_COUNT,
                got: raw.len(),
            });
        }
        let mut responses = Vec::with_capacity(ANSWER_COUNT);
        for (index, answer) in raw.iter().enumerate() {
            if answer.trim().is_empty() {
                responses.push(None);
            } else {
                responses.push(Some(Level::parse(index + 1, answer)?));
            }
        }
        Self::from_responses(&responses)
    }

    /// The answers in question order.
    pub fn levels(&self) -> &[Level; ANSWER_COUNT] {
        &self.0
    }

    /// Per-section elevated-answer counts.
    pub fn scores(&self) -> SectionScores {
        let mut scores = SectionScores::default();
        for (position, level) in self.0.iter().enumerate() {
            if level.is_elevated() {
                *scores.slot_mut(Section::of_position(position)) += 1;
            }
        }
        scores
    }
}

/// Count of elevated answers per section. Each count is in `0..=3`.
///
/// Derived from an [`AnswerSet`], never stored independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionScores {
    pub mood: u8,
    pub stress: u8,
    pub energy: u8,
    pub social: u8,
}

impl SectionScores {
    fn slot_mut(&mut self, section: Section) -> &mut u8 {
        match section {
            Section::Mood => &mut self.mood,
            Section::Stress => &mut self.stress,
            Section::Energy => &mut self.energy,
            Section::Social => &mut self.social,
        }
    }

    /// Elevated count for one section.
    pub fn get(&self, section: Section) -> u8 {
        match section {
            Section::Mood => self.mood,
            Section::Stress => self.stress,
            Section::Energy => self.energy,
            Section::Social => self.social,
        }
    }

    /// Total elevated answers across all sections.
    pub fn total(&self) -> u8 {
        self.mood + self.stress + self.energy + self.social
    }

    /// How many sections have at least `threshold` elevated answers.
    pub fn sections_at_least(&self, threshold: u8) -> usize {
        Section::ALL
            .iter()
            .filter(|s| self.get(**s) >= threshold)
            .count()
    }

    /// Whether stress is concentrated and (weakly) the highest section.
    pub fn stress_dominant(&self) -> bool {
        self.stress >= 2
            && self.stress >= self.mood
            && self.stress >= self.energy
            && self.stress >= self.social
    }
}

/// Closed set of support categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Low overall distress.
    #[serde(rename = "STEADY")]
    Steady,
    /// Multi-domain distress with fatigue prominent.
    #[serde(rename = "WIDESPREAD")]
    Widespread,
    /// Concentration in mood and social disconnection.
    #[serde(rename = "MOOD_SOCIAL")]
    MoodSocial,
    /// Stress is concentrated and the highest section.
    #[serde(rename = "STRESS")]
    Stress,
    /// Elevated but matching no specific pattern.
    #[serde(rename = "MIXED")]
    Mixed,
}

impl Category {
    /// Canonical identifier string.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Steady => "STEADY",
            Category::Widespread => "WIDESPREAD",
            Category::MoodSocial => "MOOD_SOCIAL",
            Category::Stress => "STRESS",
            Category::Mixed => "MIXED",
        }
    }
}

/// One entry in the ordered rule cascade.
struct Rule {
    name: &'static str,
    applies: fn(&SectionScores) -> bool,
    category: Category,
}

/// The cascade, in priority order. First match wins; the final rule always
/// matches, so classification is total over valid answer sets.
const RULES: [Rule; 5] = [
    Rule {
        name: "mostly-fine",
        applies: |s| s.total() <= 3,
        category: Category::Steady,
    },
    Rule {
        name: "widespread",
        applies: |s| s.energy >= 2 && s.sections_at_least(2) >= 2,
        category: Category::Widespread,
    },
    Rule {
        name: "mood-social",
        applies: |s| (s.mood >= 2 && s.social >= 1) || (s.social >= 2 && s.mood >= 1),
        category: Category::MoodSocial,
    },
    Rule {
        name: "stress-dominant",
        applies: SectionScores::stress_dominant,
        category: Category::Stress,
    },
    Rule {
        name: "mixed",
        applies: |_| true,
        category: Category::Mixed,
    },
];

/// Result of classifying one completed check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub observation: &'static str,
    pub suggestions: [Suggestion; 3],
    pub scenario_prompt: &'static str,
}

/// Classify a completed answer set.
///
/// Deterministic and idempotent; every valid 12-answer set maps to exactly
/// one category. Validation happens at [`AnswerSet`] construction, so this
/// cannot fail.
pub fn classify(answers: &AnswerSet) -> Classification {
    let scores = answers.scores();
    let rule = RULES
        .iter()
        .find(|rule| (rule.applies)(&scores))
        .expect("final rule always matches");

    tracing::debug!(
        rule = rule.name,
        category = rule.category.as_str(),
        total_elevated = scores.total(),
        "check-in classified"
    );

    let guidance = guidance::for_category(rule.category);
    Classification {
        category: rule.category,
        observation: guidance.observation,
        suggestions: guidance.suggestions,
        scenario_prompt: scenario::scenario_prompt(&scores),
    }
}
