//! The three pipeline stages and the data each one reads and writes.

use std::fmt;

use tracing::debug;

use crate::llm_client::TextGenerator;
use crate::models::wellness::format_hours;
use crate::pipeline::prompts::{
    render, ANALYZE_PROMPT_TEMPLATE, FINAL_PROMPT_TEMPLATE, NO_HABITS,
};
use crate::pipeline::runner::PipelineError;
use crate::pipeline::state::{Field, WellnessState};
use crate::pipeline::tools::{habit_tool, sleep_tool, stress_tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Analyze,
    Tools,
    Final,
}

impl Stage {
    /// Registration order of the standard pipeline.
    pub const ORDER: [Stage; 3] = [Stage::Analyze, Stage::Tools, Stage::Final];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Analyze => "analyze",
            Stage::Tools => "tools",
            Stage::Final => "final",
        }
    }

    pub fn requires(self) -> &'static [Field] {
        match self {
            Stage::Analyze => &[Field::Mood, Field::Stress, Field::Sleep, Field::Habits],
            Stage::Tools => &[Field::Stress, Field::Sleep, Field::Habits],
            Stage::Final => &[
                Field::Analysis,
                Field::StressAnalysis,
                Field::SleepAnalysis,
                Field::HabitAnalysis,
            ],
        }
    }

    pub fn produces(self) -> &'static [Field] {
        match self {
            Stage::Analyze => &[Field::Analysis],
            Stage::Tools => &[
                Field::StressAnalysis,
                Field::SleepAnalysis,
                Field::HabitAnalysis,
            ],
            Stage::Final => &[Field::Guidance],
        }
    }

    pub async fn run(
        self,
        state: &mut WellnessState,
        generator: &dyn TextGenerator,
    ) -> Result<(), PipelineError> {
        match self {
            Stage::Analyze => {
                let prompt = build_analyze_prompt(state);
                state.analysis = Some(self.generate(generator, &prompt).await?);
            }
            Stage::Tools => {
                state.stress_analysis = Some(stress_tool(state.stress));
                state.sleep_analysis = Some(sleep_tool(state.sleep));
                state.habit_analysis = Some(habit_tool(&state.habits));
            }
            Stage::Final => {
                let prompt = build_final_prompt(state)?;
                state.guidance = Some(self.generate(generator, &prompt).await?);
            }
        }
        Ok(())
    }

    async fn generate(
        self,
        generator: &dyn TextGenerator,
        prompt: &str,
    ) -> Result<String, PipelineError> {
        debug!("Stage '{}' prompt is {} chars", self, prompt.len());
        generator
            .generate(prompt)
            .await
            .map_err(|source| PipelineError::Upstream {
                stage: self,
                source,
            })
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fills the Analyze template from the caller's raw inputs.
pub fn build_analyze_prompt(state: &WellnessState) -> String {
    let habits = if state.habits.is_empty() {
        NO_HABITS.to_string()
    } else {
        state.habits.join(", ")
    };

    render(
        ANALYZE_PROMPT_TEMPLATE,
        &[
            ("mood", state.mood.as_str()),
            ("stress", state.stress.to_string().as_str()),
            ("sleep", format_hours(state.sleep).as_str()),
            ("habits", habits.as_str()),
        ],
    )
}

/// Fills the Final template from the analysis text and the serialized tool reports.
pub fn build_final_prompt(state: &WellnessState) -> Result<String, PipelineError> {
    let missing = |field| PipelineError::MissingInput {
        stage: Stage::Final,
        field,
    };

    let analysis = state.analysis.as_deref().ok_or(missing(Field::Analysis))?;
    let stress = state
        .stress_analysis
        .as_ref()
        .ok_or(missing(Field::StressAnalysis))?;
    let sleep = state
        .sleep_analysis
        .as_ref()
        .ok_or(missing(Field::SleepAnalysis))?;
    let habit = state
        .habit_analysis
        .as_ref()
        .ok_or(missing(Field::HabitAnalysis))?;

    let stress = serde_json::to_string(stress)?;
    let sleep = serde_json::to_string(sleep)?;
    let habit = serde_json::to_string(habit)?;

    Ok(render(
        FINAL_PROMPT_TEMPLATE,
        &[
            ("analysis", analysis),
            ("stress_analysis", stress.as_str()),
            ("sleep_analysis", sleep.as_str()),
            ("habit_analysis", habit.as_str()),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wellness::WellnessRequest;

    fn state(habits: &[&str]) -> WellnessState {
        WellnessState::new(WellnessRequest {
            mood: "anxious and tired".to_string(),
            stress: 6,
            sleep: 6.5,
            habits: habits.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_analyze_prompt_embeds_inputs() {
        let prompt = build_analyze_prompt(&state(&["exercise", "reading"]));
        assert!(prompt.contains("User Mood: anxious and tired"));
        assert!(prompt.contains("Stress Level: 6/10"));
        assert!(prompt.contains("Sleep Hours: 6.5"));
        assert!(prompt.contains("Current Habits: exercise, reading"));
        assert!(!prompt.contains('{'), "unfilled placeholder in: {prompt}");
    }

    #[test]
    fn test_analyze_prompt_shows_whole_hours_with_a_decimal() {
        let mut s = state(&[]);
        s.sleep = 8.0;
        assert!(build_analyze_prompt(&s).contains("Sleep Hours: 8.0\n"));
    }

    #[test]
    fn test_analyze_prompt_leaves_braces_in_user_text_alone() {
        let mut s = state(&["{mood}", "{stress}"]);
        s.mood = "{habits} today".to_string();
        let prompt = build_analyze_prompt(&s);
        assert!(prompt.contains("User Mood: {habits} today\n"));
        assert!(prompt.contains("Current Habits: {mood}, {stress}\n"));
        assert!(prompt.contains("Stress Level: 6/10"));
    }

    #[test]
    fn test_analyze_prompt_with_no_habits() {
        let prompt = build_analyze_prompt(&state(&[]));
        assert!(prompt.contains("Current Habits: none"));
    }

    #[test]
    fn test_final_prompt_requires_analysis() {
        let s = state(&[]);
        let err = build_final_prompt(&s).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingInput {
                stage: Stage::Final,
                field: Field::Analysis
            }
        ));
    }

    #[tokio::test]
    async fn test_tools_stage_fills_all_reports() {
        struct Unused;
        #[async_trait::async_trait]
        impl TextGenerator for Unused {
            async fn generate(&self, _: &str) -> Result<String, crate::llm_client::LlmError> {
                panic!("tools stage must not call the generator");
            }
        }

        let mut s = state(&["exercise"]);
        Stage::Tools.run(&mut s, &Unused).await.unwrap();
        assert_eq!(s.stress_analysis.unwrap().status, "Moderate Stress");
        assert_eq!(s.sleep_analysis.unwrap().status, "Below Optimal Sleep");
        assert_eq!(
            s.habit_analysis.unwrap().tips,
            vec!["Start 5-min nightly journaling"]
        );
        assert!(s.analysis.is_none());
    }

    #[test]
    fn test_final_prompt_embeds_analysis_and_reports() {
        let mut s = state(&["exercise", "journaling"]);
        s.analysis = Some("Sounds like a {heavy} week.".to_string());
        s.stress_analysis = Some(stress_tool(s.stress));
        s.sleep_analysis = Some(sleep_tool(s.sleep));
        s.habit_analysis = Some(habit_tool(&s.habits));

        let prompt = build_final_prompt(&s).unwrap();
        assert!(prompt.contains("Sounds like a {heavy} week."));
        assert!(prompt.contains(r#"Stress Analysis: {"status":"Moderate Stress""#));
        assert!(prompt.contains("Great habit consistency!"));
    }

    #[test]
    fn test_every_stage_declares_outputs() {
        for stage in Stage::ORDER {
            assert!(!stage.produces().is_empty(), "{stage} produces nothing");
        }
    }
}
