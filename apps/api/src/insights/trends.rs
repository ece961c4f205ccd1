//! Synthesized 7-day series. There is no stored history, so each series is the
//! current reading plus bounded random jitter. The RNG is injected so callers
//! (and tests) control reproducibility.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::insights::scoring::RECOMMENDED_HABITS;
use crate::pipeline::tools::HABIT_EXERCISE;

pub const TREND_DAYS: usize = 7;

/// `days` consecutive ISO dates ending at `today`, oldest first.
pub fn trailing_dates(today: NaiveDate, days: usize) -> Vec<String> {
    (0..days)
        .rev()
        .map(|offset| (today - Duration::days(offset as i64)).to_string())
        .collect()
}

/// `center ± U(-spread, spread)`, clamped to `[floor, ceil]` and rounded to one decimal.
pub fn jittered_series<R: Rng + ?Sized>(
    rng: &mut R,
    center: f64,
    days: usize,
    spread: f64,
    floor: f64,
    ceil: f64,
) -> Vec<f64> {
    (0..days)
        .map(|_| {
            let v = (center + rng.gen_range(-spread..=spread)).clamp(floor, ceil);
            round1(v)
        })
        .collect()
}

/// Daily mood scores around today's sentiment, ±5 points, clamped to 0–100.
pub fn mood_series<R: Rng + ?Sized>(rng: &mut R, mood_score: u32, days: usize) -> Vec<u32> {
    (0..days)
        .map(|_| jitter_percent(rng, mood_score as f64, 5.0))
        .collect()
}

/// Strength per recommended habit: around 80 when practised, around 30 when not.
pub fn habit_strengths<R: Rng + ?Sized>(rng: &mut R, habits: &[String]) -> Vec<u32> {
    RECOMMENDED_HABITS
        .iter()
        .map(|r| {
            let base = if habits.iter().any(|h| h == *r) { 80.0 } else { 30.0 };
            jitter_percent(rng, base, 10.0)
        })
        .collect()
}

/// Change between the last two points, rounded to one decimal. Zero for short series.
pub fn last_delta(series: &[f64]) -> f64 {
    match series {
        [.., prev, last] => round1(last - prev),
        _ => 0.0,
    }
}

/// Heuristic labels for the stress trend panel.
pub fn stress_pattern_labels(series: &[f64]) -> Vec<&'static str> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };

    let max = series.iter().copied().fold(f64::MIN, f64::max);
    let mean = series.iter().sum::<f64>() / series.len() as f64;

    let mut labels = Vec::new();
    if first < last {
        labels.push("Increasing trend since start of week");
    }
    if max >= 8.0 {
        labels.push("High spikes detected — consider immediate breathing");
    }
    if mean < 4.0 {
        labels.push("Generally low stress this week — keep it up");
    }
    labels
}

/// Mean of a series, rounded to one decimal. Zero for an empty series.
pub fn series_average(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    round1(series.iter().sum::<f64>() / series.len() as f64)
}

/// One spoke of the personal balance radar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceAxis {
    pub axis: String,
    pub value: f64,
}

/// Rough 0–100 estimates for Mental, Physical, Productivity, Social and Sleep.
///
/// Mental falls 8 points per stress level; Physical is a flat 80 with exercise;
/// Productivity and Social have no input signal and are jitter around a midpoint.
pub fn balance_axes<R: Rng + ?Sized>(
    rng: &mut R,
    stress: i32,
    habits: &[String],
    sleep_quality: u32,
) -> Vec<BalanceAxis> {
    let mental = (100.0 - stress as f64 * 8.0 + rng.gen_range(-5.0..=5.0)).clamp(0.0, 100.0);
    let physical = if habits.iter().any(|h| h == HABIT_EXERCISE) {
        80.0
    } else {
        40.0 + rng.gen_range(-10.0..=10.0)
    };
    let productivity = 60.0 + rng.gen_range(-10.0..=10.0);
    let social = 50.0 + rng.gen_range(-15.0..=15.0);

    [
        ("Mental", mental),
        ("Physical", physical),
        ("Productivity", productivity),
        ("Social", social),
        ("Sleep", sleep_quality as f64),
    ]
    .into_iter()
    .map(|(axis, value)| BalanceAxis {
        axis: axis.to_string(),
        value: round1(value),
    })
    .collect()
}

fn jitter_percent<R: Rng + ?Sized>(rng: &mut R, base: f64, spread: f64) -> u32 {
    (base + rng.gen_range(-spread..=spread))
        .round()
        .clamp(0.0, 100.0) as u32
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_trailing_dates_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let dates = trailing_dates(today, 3);
        assert_eq!(dates, vec!["2024-02-29", "2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn test_jittered_series_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = jittered_series(&mut rng, 9.5, 200, 1.8, 0.0, 10.0);
        assert_eq!(series.len(), 200);
        assert!(series.iter().all(|v| (0.0..=10.0).contains(v)));
        assert!(series.iter().all(|v| (v - 9.5).abs() <= 1.8 + 0.05));
    }

    #[test]
    fn test_jittered_series_is_reproducible_with_seed() {
        let a = jittered_series(&mut StdRng::seed_from_u64(42), 5.0, 7, 1.2, 0.0, 12.0);
        let b = jittered_series(&mut StdRng::seed_from_u64(42), 5.0, 7, 1.2, 0.0, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_jittered_series_rounds_to_one_decimal() {
        let mut rng = StdRng::seed_from_u64(1);
        for v in jittered_series(&mut rng, 6.0, 50, 1.0, 0.0, 12.0) {
            assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9, "{v}");
        }
    }

    #[test]
    fn test_mood_series_is_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = mood_series(&mut rng, 100, 100);
        assert!(series.iter().all(|&v| (95..=100).contains(&v)));
    }

    #[test]
    fn test_habit_strengths_separate_present_from_missing() {
        let mut rng = StdRng::seed_from_u64(9);
        let habits = vec!["exercise".to_string(), "water".to_string()];
        let strengths = habit_strengths(&mut rng, &habits);
        assert_eq!(strengths.len(), RECOMMENDED_HABITS.len());
        assert!((70..=90).contains(&strengths[0]), "exercise: {}", strengths[0]);
        assert!((20..=40).contains(&strengths[1]), "journaling: {}", strengths[1]);
        assert!((70..=90).contains(&strengths[4]), "water: {}", strengths[4]);
    }

    #[test]
    fn test_last_delta() {
        assert_eq!(last_delta(&[1.0, 3.2, 2.1]), -1.1);
        assert_eq!(last_delta(&[4.0]), 0.0);
        assert_eq!(last_delta(&[]), 0.0);
    }

    #[test]
    fn test_series_average() {
        assert_eq!(series_average(&[2.0, 3.0, 5.0]), 3.3);
        assert_eq!(series_average(&[]), 0.0);
    }

    #[test]
    fn test_balance_axes_ranges() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let axes = balance_axes(&mut rng, 5, &[], 60);
            let names: Vec<&str> = axes.iter().map(|a| a.axis.as_str()).collect();
            assert_eq!(names, ["Mental", "Physical", "Productivity", "Social", "Sleep"]);
            assert!((55.0..=65.0).contains(&axes[0].value), "mental {}", axes[0].value);
            assert!((30.0..=50.0).contains(&axes[1].value), "physical {}", axes[1].value);
            assert!((50.0..=70.0).contains(&axes[2].value), "productivity {}", axes[2].value);
            assert!((35.0..=65.0).contains(&axes[3].value), "social {}", axes[3].value);
            assert_eq!(axes[4].value, 60.0);
        }
    }

    #[test]
    fn test_balance_mental_is_clamped_and_exercise_is_flat() {
        let mut rng = StdRng::seed_from_u64(8);
        let habits = vec!["exercise".to_string()];
        for _ in 0..50 {
            let axes = balance_axes(&mut rng, 14, &habits, 90);
            assert_eq!(axes[0].value, 0.0);
            assert_eq!(axes[1].value, 80.0);
        }
    }

    #[test]
    fn test_balance_is_reproducible_with_seed() {
        let a = balance_axes(&mut StdRng::seed_from_u64(3), 4, &[], 90);
        let b = balance_axes(&mut StdRng::seed_from_u64(3), 4, &[], 90);
        assert_eq!(a, b);
    }

    #[test]
    fn test_stress_labels() {
        assert_eq!(
            stress_pattern_labels(&[2.0, 3.0, 8.5]),
            vec![
                "Increasing trend since start of week",
                "High spikes detected — consider immediate breathing"
            ]
        );
        assert_eq!(
            stress_pattern_labels(&[3.0, 2.0, 1.0]),
            vec!["Generally low stress this week — keep it up"]
        );
        assert!(stress_pattern_labels(&[]).is_empty());
    }
}
