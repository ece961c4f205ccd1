use std::fmt;

use crate::models::wellness::{AnalyzeResponse, ToolReport, WellnessRequest};

/// Named slots of `WellnessState`. Stages declare which they read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Mood,
    Stress,
    Sleep,
    Habits,
    Analysis,
    StressAnalysis,
    SleepAnalysis,
    HabitAnalysis,
    Guidance,
}

impl Field {
    /// Fields supplied by the caller and therefore set before any stage runs.
    pub const INPUTS: [Field; 4] = [Field::Mood, Field::Stress, Field::Sleep, Field::Habits];

    pub fn name(self) -> &'static str {
        match self {
            Field::Mood => "mood",
            Field::Stress => "stress",
            Field::Sleep => "sleep",
            Field::Habits => "habits",
            Field::Analysis => "analysis",
            Field::StressAnalysis => "stress_analysis",
            Field::SleepAnalysis => "sleep_analysis",
            Field::HabitAnalysis => "habit_analysis",
            Field::Guidance => "guidance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The in-flight record for one `/analyze` call.
///
/// Inputs are fixed at construction; every derived field starts as `None` and
/// is written exactly once, by the stage that produces it.
#[derive(Debug, Clone)]
pub struct WellnessState {
    pub mood: String,
    pub stress: i32,
    pub sleep: f64,
    pub habits: Vec<String>,
    pub analysis: Option<String>,
    pub stress_analysis: Option<ToolReport>,
    pub sleep_analysis: Option<ToolReport>,
    pub habit_analysis: Option<ToolReport>,
    pub guidance: Option<String>,
}

impl WellnessState {
    pub fn new(request: WellnessRequest) -> Self {
        Self {
            mood: request.mood,
            stress: request.stress,
            sleep: request.sleep,
            habits: request.habits,
            analysis: None,
            stress_analysis: None,
            sleep_analysis: None,
            habit_analysis: None,
            guidance: None,
        }
    }

    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Mood | Field::Stress | Field::Sleep | Field::Habits => true,
            Field::Analysis => self.analysis.is_some(),
            Field::StressAnalysis => self.stress_analysis.is_some(),
            Field::SleepAnalysis => self.sleep_analysis.is_some(),
            Field::HabitAnalysis => self.habit_analysis.is_some(),
            Field::Guidance => self.guidance.is_some(),
        }
    }
}

impl From<WellnessState> for AnalyzeResponse {
    fn from(state: WellnessState) -> Self {
        AnalyzeResponse {
            guidance: state.guidance,
            analysis_text: state.analysis,
            stress_analysis: state.stress_analysis,
            sleep_analysis: state.sleep_analysis,
            habit_analysis: state.habit_analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> WellnessRequest {
        WellnessRequest {
            mood: "calm".to_string(),
            stress: 2,
            sleep: 8.0,
            habits: vec!["exercise".to_string()],
        }
    }

    #[test]
    fn test_new_state_has_only_inputs_set() {
        let state = WellnessState::new(request());
        for field in Field::INPUTS {
            assert!(state.is_set(field), "{field} should be set");
        }
        for field in [
            Field::Analysis,
            Field::StressAnalysis,
            Field::SleepAnalysis,
            Field::HabitAnalysis,
            Field::Guidance,
        ] {
            assert!(!state.is_set(field), "{field} should be unset");
        }
    }

    #[test]
    fn test_response_renames_analysis_field() {
        let mut state = WellnessState::new(request());
        state.analysis = Some("You seem grounded.".to_string());
        let response = AnalyzeResponse::from(state);
        assert_eq!(response.analysis_text.as_deref(), Some("You seem grounded."));
        assert!(response.guidance.is_none());
    }
}
