//! Threshold tools: pure lookups from a single input to a fixed status and tips.
//!
//! Brackets are written exactly as the coaching rules define them:
//! stress ≤3 / ≤6 / else, sleep <5 / <7 / else. Comparisons are unbounded, so
//! negative or oversized inputs land in the outermost bracket.

use crate::models::wellness::ToolReport;

pub const HABIT_EXERCISE: &str = "exercise";
pub const HABIT_JOURNALING: &str = "journaling";

/// Maps a 0–10 stress rating to a status bracket.
pub fn stress_tool(stress: i32) -> ToolReport {
    if stress <= 3 {
        ToolReport::new("Low Stress", &["Keep journaling", "Maintain routine"])
    } else if stress <= 6 {
        ToolReport::new("Moderate Stress", &["Try deep breathing", "Walk 10 minutes"])
    } else {
        ToolReport::new("High Stress", &["Mindfulness exercise", "Talk to a friend"])
    }
}

/// Maps last night's sleep (hours) to a status bracket.
pub fn sleep_tool(hours: f64) -> ToolReport {
    if hours < 5.0 {
        ToolReport::new("Very Low Sleep", &["Avoid screens", "Short nap if possible"])
    } else if hours < 7.0 {
        ToolReport::new("Below Optimal Sleep", &["Go to bed earlier", "Relaxing tea"])
    } else {
        ToolReport::new("Healthy Sleep", &["Keep routine", "Good energy"])
    }
}

/// Recommends the anchor habits the user is missing.
///
/// Matching is exact and case-sensitive; callers lowercase habit names.
pub fn habit_tool(habits: &[String]) -> ToolReport {
    let has = |name: &str| habits.iter().any(|h| h == name);

    let mut tips = Vec::new();
    if !has(HABIT_EXERCISE) {
        tips.push("Add 10-min morning walk");
    }
    if !has(HABIT_JOURNALING) {
        tips.push("Start 5-min nightly journaling");
    }
    if tips.is_empty() {
        tips.push("Great habit consistency!");
    }

    ToolReport::new("Habit Analysis", &tips)
}
