//! Pipeline runner: executes registered stages strictly in order.
//!
//! Before a stage runs, every field it declares in `requires()` must already be
//! set. `Pipeline::new` checks this statically against the stage list, and `run`
//! checks it again against the live state. Any stage failure aborts the run;
//! there is no retry and no partial result.

use std::collections::HashSet;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::wellness::WellnessRequest;
use crate::pipeline::stages::Stage;
use crate::pipeline::state::{Field, WellnessState};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("stage '{stage}' failed: text-generation service error: {source}")]
    Upstream {
        stage: Stage,
        #[source]
        source: LlmError,
    },

    #[error("stage '{stage}' requires '{field}' but it has not been set")]
    MissingInput { stage: Stage, field: Field },

    #[error("stage '{stage}' reads '{field}' before any earlier stage produces it")]
    Misordered { stage: Stage, field: Field },

    #[error("failed to serialize tool report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An ordered list of stages. Cheap to clone; holds no per-request state.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Analyze → Tools → Final.
    #[cfg(test)]
    pub fn standard() -> Self {
        Self {
            stages: Stage::ORDER.to_vec(),
        }
    }

    /// Builds a pipeline from an explicit stage list, rejecting any order in
    /// which a stage would read a field no earlier stage produces.
    pub fn new(stages: Vec<Stage>) -> Result<Self, PipelineError> {
        let mut available: HashSet<Field> = Field::INPUTS.into_iter().collect();

        for &stage in &stages {
            if let Some(&field) = stage.requires().iter().find(|f| !available.contains(*f)) {
                return Err(PipelineError::Misordered { stage, field });
            }
            available.extend(stage.produces().iter().copied());
        }

        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs every stage against a fresh state built from `request`.
    pub async fn run(
        &self,
        request: WellnessRequest,
        generator: &dyn TextGenerator,
    ) -> Result<WellnessState, PipelineError> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();
        let mut state = WellnessState::new(request);

        info!(
            "Pipeline run {run_id} started ({} stages)",
            self.stages.len()
        );

        for &stage in &self.stages {
            if let Some(&field) = stage.requires().iter().find(|f| !state.is_set(**f)) {
                warn!("Pipeline run {run_id}: stage '{stage}' missing input '{field}'");
                return Err(PipelineError::MissingInput { stage, field });
            }

            let stage_started = Instant::now();
            stage.run(&mut state, generator).await.map_err(|e| {
                warn!("Pipeline run {run_id}: stage '{stage}' failed: {e}");
                e
            })?;
            debug!(
                "Pipeline run {run_id}: stage '{stage}' finished in {}ms",
                stage_started.elapsed().as_millis()
            );
        }

        info!(
            "Pipeline run {run_id} complete in {}ms",
            started.elapsed().as_millis()
        );

        Ok(state)
    }
}
