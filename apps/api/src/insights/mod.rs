// Dashboard insights: deterministic scores plus synthesized 7-day series.
// Computed from the raw request only; never calls the text-generation service.

pub mod handlers;
pub mod plan;
pub mod scoring;
pub mod trends;
