//! Axum route handlers for the analysis pipeline.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::wellness::{AnalyzeResponse, WellnessRequest};
use crate::state::AppState;

/// POST /analyze
///
/// Runs Analyze → Tools → Final and returns every field the pipeline produced.
/// Malformed bodies are rejected before the pipeline starts; an upstream
/// failure in any stage fails the whole request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<WellnessRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;

    info!(
        "Analyze request: stress={}, sleep={}, habits={}",
        request.stress,
        request.sleep,
        request.habits.len()
    );

    let result = state
        .pipeline
        .run(request, state.generator.as_ref())
        .await?;

    Ok(Json(AnalyzeResponse::from(result)))
}
