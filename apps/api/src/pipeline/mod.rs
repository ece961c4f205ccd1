// Wellness analysis pipeline: Analyze → Tools → Final over a single per-request state record.
// All text generation goes through llm_client::TextGenerator, never a concrete client here.

pub mod handlers;
pub mod prompts;
pub mod runner;
pub mod stages;
pub mod state;
pub mod tools;

pub use runner::{Pipeline, PipelineError};
pub use stages::Stage;
