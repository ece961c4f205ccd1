//! Daily wellness plan: one fixed entry per rule, chosen by threshold or habit presence.

use crate::pipeline::tools::{HABIT_EXERCISE, HABIT_JOURNALING};

/// Stress at or above this gets the immediate-relief entry.
const PLAN_HIGH_STRESS: i32 = 7;
/// Sleep below this gets the wind-down entry.
const PLAN_SHORT_SLEEP: f64 = 6.0;

/// Four plan lines, always in the order: stress, sleep, exercise, journaling.
pub fn daily_plan(stress: i32, sleep_hours: f64, habits: &[String]) -> Vec<&'static str> {
    let has = |name: &str| habits.iter().any(|h| h == name);

    vec![
        if stress >= PLAN_HIGH_STRESS {
            "🔴 Immediate: 5–10 min guided breathing and short walk"
        } else {
            "🟢 Gentle: 5 min breathing, brief stretching"
        },
        if sleep_hours < PLAN_SHORT_SLEEP {
            "🛏️ Sleep: Wind down 1 hour before bed; no screens; aim for 7–8 hrs"
        } else {
            "✅ Sleep: Keep the schedule, good job"
        },
        if has(HABIT_EXERCISE) {
            "🏃 Keep exercising 3x/week"
        } else {
            "🏃 Add 10-min morning walk to routine"
        },
        if has(HABIT_JOURNALING) {
            "✍️ Keep journaling daily if possible"
        } else {
            "✍️ Start 5-min evening journaling (feelings & wins)"
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habits(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stress_entry_switches_at_7() {
        assert!(daily_plan(6, 8.0, &[])[0].contains("Gentle"));
        assert!(daily_plan(7, 8.0, &[])[0].contains("Immediate"));
    }

    #[test]
    fn test_sleep_entry_switches_at_6_hours() {
        assert!(daily_plan(2, 5.9, &[])[1].contains("Wind down"));
        assert!(daily_plan(2, 6.0, &[])[1].contains("Keep the schedule"));
    }

    #[test]
    fn test_missing_habits_get_start_entries() {
        let plan = daily_plan(2, 8.0, &[]);
        assert_eq!(plan[2], "🏃 Add 10-min morning walk to routine");
        assert_eq!(plan[3], "✍️ Start 5-min evening journaling (feelings & wins)");
    }

    #[test]
    fn test_present_habits_get_keep_entries() {
        let plan = daily_plan(2, 8.0, &habits(&["exercise", "journaling"]));
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[2], "🏃 Keep exercising 3x/week");
        assert_eq!(plan[3], "✍️ Keep journaling daily if possible");
    }
}
