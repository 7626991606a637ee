//! The fixed 12-question check-in catalog.

use serde::Serialize;

use crate::assessment::Section;

/// One questionnaire item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    /// 1-based question number.
    pub id: u8,
    pub section: Section,
    pub text: &'static str,
    /// What the item probes for, shown as helper text.
    pub helper: &'static str,
}

/// All questions in submission order: 3 per section, Mood then Stress then
/// Energy then Social.
pub const QUESTIONS: [Question; 12] = [
    Question {
        id: 1,
        section: Section::Mood,
        text: "In the last two weeks, how often have you felt low, sad, or down?",
        helper: "This question gently probes for symptoms of low mood or depression.",
    },
    Question {
        id: 2,
        section: Section::Mood,
        text: "How often have you found it difficult to find joy or interest in activities you usually like (e.g., hobbies, talking to friends, watching movies)?",
        helper: "This assesses anhedonia, a common indicator of mental distress.",
    },
    Question {
        id: 3,
        section: Section::Mood,
        text: "How often have you felt irritable, on edge, or easily annoyed by things or people around you?",
        helper: "Irritability is a frequent, but often overlooked, sign of both anxiety and depression.",
    },
    Question {
        id: 4,
        section: Section::Stress,
        text: "How often do you feel overwhelmed by pressure from your studies, exams, or career expectations?",
        helper: "This directly addresses the academic and societal pressure common among Indian youth.",
    },
    Question {
        id: 5,
        section: Section::Stress,
        text: "How often have you found yourself worrying constantly about the future or about things you can't control?",
        helper: "This is a key indicator of generalized anxiety.",
    },
    Question {
        id: 6,
        section: Section::Stress,
        text: "How often do you feel tense, restless, or unable to relax?",
        helper: "This question looks into the physical manifestations of anxiety.",
    },
    Question {
        id: 7,
        section: Section::Energy,
        text: "How would you describe your energy levels lately? Have you been feeling tired or drained most of the time?",
        helper: "Fatigue and low energy are common symptoms linked to various mental health challenges.",
    },
    Question {
        id: 8,
        section: Section::Energy,
        text: "How has your sleep been? (e.g., trouble falling asleep, waking up during the night, sleeping too much).",
        helper: "Sleep disruption is a critical indicator of one's mental state. Select the option that best fits your overall sleep quality.",
    },
    Question {
        id: 9,
        section: Section::Energy,
        text: "Have you noticed any significant changes in your appetite (eating much more or much less than usual)?",
        helper: "Changes in eating habits can be a physical sign of emotional distress.",
    },
    Question {
        id: 10,
        section: Section::Social,
        text: "How often have you felt lonely or isolated, even when you are with other people?",
        helper: "This explores feelings of social disconnection, which can be a major factor in mental well-being.",
    },
    Question {
        id: 11,
        section: Section::Social,
        text: "How often do you feel like you have someone you can talk to honestly, without fear of being judged?",
        helper: "This assesses the user's perceived support system, which is crucial for resilience.",
    },
    Question {
        id: 12,
        section: Section::Social,
        text: "When you think about discussing your feelings, how comfortable do you feel about reaching out for help?",
        helper: "This question directly addresses the core challenge of stigma around seeking support.",
    },
];
