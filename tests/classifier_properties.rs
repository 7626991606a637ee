//! End-to-end properties of the check-in classifier.

use mindspace::assessment::{classify, AnswerSet, Category};
use pretty_assertions::assert_eq;
use rand::Rng;

/// Build an answer set from a 12-character letter string.
fn answers(letters: &str) -> AnswerSet {
    let raw: Vec<String> = letters.chars().map(|c| c.to_string()).collect();
    AnswerSet::parse(&raw).expect("test input must be valid")
}

#[test]
fn calm_answers_classify_as_steady() {
    let result = classify(&answers("AAAAAAAAAAAA"));
    assert_eq!(result.category, Category::Steady);
}

#[test]
fn scattered_low_answers_stay_steady() {
    // Three elevated answers across sections keep the total at the
    // steady threshold.
    let result = classify(&answers("CAACAAAAACAA"));
    assert_eq!(result.category, Category::Steady);
}

#[test]
fn all_elevated_answers_classify_as_widespread() {
    let result = classify(&answers("DDDDDDDDDDDD"));
    assert_eq!(result.category, Category::Widespread);
}

#[test]
fn stress_cluster_classifies_as_stress() {
    // Stress section fully elevated, every other section at most 1.
    let result = classify(&answers("CAACCDAAAAAA"));
    assert_eq!(result.category, Category::Stress);
}

#[test]
fn mood_social_pairing_classifies_as_mood_social() {
    // Mood at 2, social at 2, total above the steady threshold.
    let result = classify(&answers("DDAAAAAAACCA"));
    assert_eq!(result.category, Category::MoodSocial);
}

#[test]
fn unmatched_spread_falls_through_to_mixed() {
    // Energy at 2 but no second section reaches 2, mood and social too
    // low to pair, stress below 2: nothing above the catch-all fires.
    let result = classify(&answers("CAACAADDAAAA"));
    assert_eq!(result.category, Category::Mixed);
}

#[test]
fn widespread_outranks_mood_social() {
    // Mood, energy, and social all at 2 satisfy both rules; the earlier
    // one wins.
    let result = classify(&answers("DDAAAADDACCA"));
    assert_eq!(result.category, Category::Widespread);
}

#[test]
fn steady_outranks_every_concentration() {
    // Two elevated mood answers plus one social answer is an intense
    // cluster, but the total is still at the steady threshold.
    let result = classify(&answers("DDAAAAAAACAA"));
    assert_eq!(result.category, Category::Steady);
}

#[test]
fn classification_is_deterministic() {
    let set = answers("CDBACDBACDBA");
    let first = classify(&set);
    let second = classify(&set);
    assert_eq!(first, second);
}

#[test]
fn every_valid_answer_set_gets_complete_guidance() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let letters: String = (0..12)
            .map(|_| ['A', 'B', 'C', 'D'][rng.gen_range(0..4)])
            .collect();
        let result = classify(&answers(&letters));

        assert!(!result.observation.is_empty(), "input {letters}");
        assert!(!result.scenario_prompt.is_empty(), "input {letters}");
        for suggestion in &result.suggestions {
            assert!(!suggestion.title.is_empty(), "input {letters}");
            assert!(!suggestion.description.is_empty(), "input {letters}");
        }
    }
}

#[test]
fn lowercase_answers_are_accepted() {
    assert_eq!(
        classify(&answers("aaaaaaaaaaaa")).category,
        classify(&answers("AAAAAAAAAAAA")).category
    );
}
