// src/cli/mod.rs
pub mod display_findings;
pub mod run;
pub mod run_pipeline;
pub mod save_draft;

pub use run_pipeline::PipelineOutcome;
