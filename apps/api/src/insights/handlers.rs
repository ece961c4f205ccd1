//! Axum route handlers for dashboard insights.

use axum::{extract::rejection::JsonRejection, Json};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::insights::scoring::{
    habit_consistency, mood_sentiment_score, sleep_category, sleep_quality_score, wellness_score,
    ScoringWeights, RECOMMENDED_HABITS,
};
use crate::insights::plan::daily_plan;
use crate::insights::trends::{
    balance_axes, habit_strengths, jittered_series, last_delta, mood_series, series_average,
    stress_pattern_labels, trailing_dates, BalanceAxis, TREND_DAYS,
};
use crate::models::wellness::{format_hours, WellnessRequest};

/// Shown when `/analyze` is unavailable or returned no guidance.
pub const FALLBACK_GUIDANCE: &str = "Try breathing, 10-min walk, and 5-min journaling tonight.";

/// Chart-ready payload for the dashboard front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub dates: Vec<String>,
    pub stress_vals: Vec<f64>,
    pub sleep_vals: Vec<f64>,
    pub mood_scores: Vec<u32>,
    pub habit_keys: Vec<String>,
    pub habit_scores: Vec<u32>,
    pub wellness_score: u32,
    pub sleep_quality: u32,
    pub sleep_category: String,
    pub habit_consistency: u32,
    pub delta_stress: f64,
    pub delta_sleep: f64,
    pub avg_stress: f64,
    pub avg_sleep: f64,
    pub stress_patterns: Vec<String>,
    pub daily_plan: Vec<String>,
    pub balance: Vec<BalanceAxis>,
    pub fallback_analysis: String,
    pub fallback_guidance: String,
}

/// Builds the dashboard for one request. Randomness comes only from `rng`.
pub fn build_dashboard<R: Rng + ?Sized>(
    request: &WellnessRequest,
    today: NaiveDate,
    rng: &mut R,
) -> DashboardResponse {
    let stress_vals = jittered_series(rng, request.stress as f64, TREND_DAYS, 1.8, 0.0, 10.0);
    let sleep_vals = jittered_series(rng, request.sleep, TREND_DAYS, 1.2, 0.0, 12.0);
    let mood_scores = mood_series(rng, mood_sentiment_score(&request.mood), TREND_DAYS);
    let habit_scores = habit_strengths(rng, &request.habits);
    let sleep_quality = sleep_quality_score(request.sleep);
    let balance = balance_axes(rng, request.stress, &request.habits, sleep_quality);

    DashboardResponse {
        dates: trailing_dates(today, TREND_DAYS),
        delta_stress: last_delta(&stress_vals),
        delta_sleep: last_delta(&sleep_vals),
        avg_stress: series_average(&stress_vals),
        avg_sleep: series_average(&sleep_vals),
        stress_patterns: stress_pattern_labels(&stress_vals)
            .into_iter()
            .map(String::from)
            .collect(),
        daily_plan: daily_plan(request.stress, request.sleep, &request.habits)
            .into_iter()
            .map(String::from)
            .collect(),
        balance,
        stress_vals,
        sleep_vals,
        mood_scores,
        habit_keys: RECOMMENDED_HABITS.iter().map(|h| h.to_string()).collect(),
        habit_scores,
        wellness_score: wellness_score(
            request.stress,
            request.sleep,
            &request.mood,
            &request.habits,
            &ScoringWeights::default(),
        ),
        sleep_quality,
        sleep_category: sleep_category(request.sleep).to_string(),
        habit_consistency: habit_consistency(&request.habits),
        fallback_analysis: fallback_analysis(request),
        fallback_guidance: FALLBACK_GUIDANCE.to_string(),
    }
}

/// Placeholder analysis text for when `/analyze` returns no `analysis_text`.
pub fn fallback_analysis(request: &WellnessRequest) -> String {
    format!(
        "Auto-analysis: mood='{}', stress={}, sleep={}hrs.",
        request.mood,
        request.stress,
        format_hours(request.sleep)
    )
}

/// POST /dashboard
///
/// Scores and 7-day series for the dashboard, computed locally from the raw
/// inputs. Works even when the text-generation service is down.
pub async fn handle_dashboard(
    payload: Result<Json<WellnessRequest>, JsonRejection>,
) -> Result<Json<DashboardResponse>, AppError> {
    let Json(request) = payload?;

    let today = Utc::now().date_naive();
    let dashboard = build_dashboard(&request, today, &mut rand::thread_rng());

    Ok(Json(dashboard))
}
