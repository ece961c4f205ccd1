//! Composite wellness scoring: fixed weights over stress, sleep, mood and habits.

use std::collections::HashSet;

/// Habits the dashboard tracks for consistency and the strength radar.
pub const RECOMMENDED_HABITS: [&str; 5] = ["exercise", "journaling", "mindfulness", "reading", "water"];

const POSITIVE_WORDS: [&str; 10] = [
    "happy",
    "good",
    "great",
    "calm",
    "relaxed",
    "productive",
    "excited",
    "joy",
    "joyful",
    "content",
];

const NEGATIVE_WORDS: [&str; 10] = [
    "anxious",
    "stressed",
    "angry",
    "sad",
    "tired",
    "depressed",
    "worried",
    "down",
    "upset",
    "nervous",
];

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub stress: f64,
    pub sleep: f64,
    pub mood: f64,
    pub habits: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stress: 0.35,
            sleep: 0.25,
            mood: 0.2,
            habits: 0.2,
        }
    }
}

/// Keyword-lexicon sentiment for free-text mood, 0–100 with 50 as neutral.
/// Each distinct positive word adds 10, each distinct negative word subtracts 10.
pub fn mood_sentiment_score(mood: &str) -> u32 {
    let words: HashSet<String> = mood
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| ".,!?:;".contains(c)).to_lowercase())
        .collect();

    let positive = POSITIVE_WORDS.iter().filter(|w| words.contains(**w)).count() as i64;
    let negative = NEGATIVE_WORDS.iter().filter(|w| words.contains(**w)).count() as i64;

    (50 + 10 * positive - 10 * negative).clamp(0, 100) as u32
}

pub fn sleep_quality_score(hours: f64) -> u32 {
    if hours < 5.0 {
        30
    } else if hours < 7.0 {
        60
    } else {
        90
    }
}

pub fn sleep_category(hours: f64) -> &'static str {
    if hours < 5.0 {
        "Very Low"
    } else if hours < 7.0 {
        "Below Optimal"
    } else {
        "Healthy"
    }
}

/// Share of `RECOMMENDED_HABITS` present, as a truncated percentage.
pub fn habit_consistency(habits: &[String]) -> u32 {
    let have = RECOMMENDED_HABITS
        .iter()
        .filter(|r| habits.iter().any(|h| h == *r))
        .count();
    (have * 100 / RECOMMENDED_HABITS.len()) as u32
}

/// Composite 0–100 score. Lower stress, healthier sleep, brighter mood and
/// more recommended habits all raise it.
pub fn wellness_score(
    stress: i32,
    sleep_hours: f64,
    mood: &str,
    habits: &[String],
    weights: &ScoringWeights,
) -> u32 {
    let stress_component = 100i32.saturating_sub(stress.saturating_mul(10)).max(0) as f64;
    let sleep_component = sleep_quality_score(sleep_hours) as f64;
    let mood_component = mood_sentiment_score(mood) as f64;
    let habit_component = habit_consistency(habits) as f64;

    let score = weights.stress * stress_component
        + weights.sleep * sleep_component
        + weights.mood * mood_component
        + weights.habits * habit_component;

    score.round().clamp(0.0, 100.0) as u32
}
