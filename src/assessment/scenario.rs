//! Metaphor seeds for the story generator.
//!
//! Derives a fixed narrative seed from section scores. The seeds carry no
//! user data and deliberately avoid literal mentions of exams, family, or
//! clinical terms, so the downstream generator can only work from metaphor.
//!
//! Independent rule set from the category cascade, evaluated in its own
//! priority order.

use crate::assessment::SectionScores;

/// High stress and pressure: caught in a relentless storm.
pub const SEED_STORM: &str = "The user is a young person feeling immense pressure and anxiety. They feel overwhelmed, tense, and their mind is always racing with worries about the future. Their struggle feels like being caught in a relentless storm.";

/// Low mood and loneliness: a world faded to grey.
pub const SEED_GREY_WORLD: &str = "The user is a young person experiencing a persistent low mood and a loss of joy. They feel disconnected, isolated, and lonely, as if the world's color has faded to grey and they are invisible to everyone.";

/// Fatigue and burnout: walking through thick mud.
pub const SEED_EXHAUSTION: &str = "The user is a young person feeling completely drained of energy, both mentally and physically. Daily tasks feel like monumental efforts, and they feel stuck in a state of deep exhaustion, like they are trying to walk through thick mud.";

/// Mixed, multi-domain distress: lost in fog on a steep mountain.
pub const SEED_FOG_MOUNTAIN: &str = "The user is a young person going through a very difficult time with a mix of sadness, stress, and exhaustion. They feel lost, overwhelmed, and isolated, and their energy is too low to see a clear path forward. It feels like they are lost in a cold, dense fog on a steep mountain.";

/// Derive the scenario seed for a set of section scores.
///
/// Priority order:
/// 1. stress-dominant → storm
/// 2. mood/social concentration → grey world
/// 3. isolated fatigue → exhaustion
/// 4. multi-domain distress → fog/mountain
/// 5. highest-scoring section, ties broken Stress > Energy > Social/Mood
pub fn scenario_prompt(scores: &SectionScores) -> &'static str {
    if scores.stress_dominant() {
        return SEED_STORM;
    }
    if (scores.mood >= 2 && scores.social >= 1) || scores.social >= 2 {
        return SEED_GREY_WORLD;
    }
    if scores.energy >= 2 && scores.mood <= 1 && scores.stress <= 1 && scores.social <= 1 {
        return SEED_EXHAUSTION;
    }
    if scores.total() >= 6
        || (scores.energy >= 2 && (scores.mood >= 2 || scores.stress >= 2 || scores.social >= 2))
    {
        return SEED_FOG_MOUNTAIN;
    }

    // Fallback: highest section wins, checked in tie-break order.
    let max = scores
        .stress
        .max(scores.energy)
        .max(scores.social)
        .max(scores.mood);
    if max == scores.stress {
        SEED_STORM
    } else if max == scores.energy {
        SEED_EXHAUSTION
    } else {
        SEED_GREY_WORLD
    }
}
