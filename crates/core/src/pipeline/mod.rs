//! # Pipeline Orchestration
//!
//! Sequences the content agents for Copyforge.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Requirements → Plan → Researcher → Writer → Editor → SEO → Final Report
//! ```

pub mod driver;
pub mod events;
pub mod stage;

pub use driver::{ContentPipeline, PipelineRun};
pub use events::{PipelineEvent, PipelineEventKind};
pub use stage::{PipelineStage, PipelineState};
