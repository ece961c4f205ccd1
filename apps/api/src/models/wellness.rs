use serde::{Deserialize, Serialize};

/// Inbound body shared by `/analyze` and `/dashboard`.
///
/// Ranges (stress 0–10, sleep 0–24) are the caller's responsibility; the
/// threshold tools resolve out-of-range values into the outermost bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessRequest {
    pub mood: String,
    pub stress: i32,
    pub sleep: f64,
    pub habits: Vec<String>,
}

/// Output of a threshold tool: a fixed status label plus static tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolReport {
    pub status: String,
    pub tips: Vec<String>,
}

impl ToolReport {
    pub fn new(status: &str, tips: &[&str]) -> Self {
        Self {
            status: status.to_string(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Renders hours the way the dashboard shows them: whole numbers keep one
/// decimal (`8.0`), fractional values print as-is (`6.25`).
pub fn format_hours(hours: f64) -> String {
    if hours.is_finite() && hours.fract() == 0.0 {
        format!("{hours:.1}")
    } else {
        hours.to_string()
    }
}

/// Outbound body of `/analyze`. A field is `null` when its stage never ran.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub guidance: Option<String>,
    pub analysis_text: Option<String>,
    pub stress_analysis: Option<ToolReport>,
    pub sleep_analysis: Option<ToolReport>,
    pub habit_analysis: Option<ToolReport>,
}
