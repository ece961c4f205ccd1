// All LLM prompt templates for the wellness pipeline.
// Placeholders are `{name}` and are filled by `render` before sending.

/// Analyze stage. Replace: {mood}, {stress}, {sleep}, {habits}
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"You are a mental wellness coach.
User Mood: {mood}
Stress Level: {stress}/10
Sleep Hours: {sleep}
Current Habits: {habits}

Provide a warm, short supportive analysis."#;

/// Final stage. Replace: {analysis}, {stress_analysis}, {sleep_analysis}, {habit_analysis}
pub const FINAL_PROMPT_TEMPLATE: &str = r#"Based on the analysis:
{analysis}

Stress Analysis: {stress_analysis}
Sleep Analysis: {sleep_analysis}
Habit Analysis: {habit_analysis}

Provide a concise, friendly wellness guidance message."#;

/// Rendered in place of the habit list when the user reports none.
pub const NO_HABITS: &str = "none";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user or model text containing
/// `{mood}` or similar stays literal. Unknown `{...}` sequences are kept as-is.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let placeholder = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match placeholder {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
