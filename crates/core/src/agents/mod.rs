//! # Copyforge Agents
//!
//! The five role-specialized stages of the content pipeline.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Requirements → Coordinator (plan)
//!             → Researcher → Writer → Editor → SEO Optimizer
//!             → Coordinator (final report)
//! ```
//!
//! Each agent is a pure transformation with a typed input/output contract;
//! output types live beside the agent that produces them. The descriptive
//! role metadata on each agent is presentation-only and feeds event
//! attribution and logging.

pub mod coordinator;
pub mod editor;
pub mod researcher;
pub mod seo_optimizer;
pub mod writer;

pub use coordinator::{ContentPlan, CoordinatorAgent, FinalReport, PipelineArtifacts};
pub use editor::{EditorAgent, EditorOutput};
pub use researcher::{ResearchAgent, ResearchArtifact};
pub use seo_optimizer::{SeoAgent, SeoOutput};
pub use writer::{WriterAgent, WriterOutput};

/// Presentation-only descriptor for an agent role
///
/// Used for event attribution and UI display; carries no behavior.
#[derive(Debug, Clone, Copy)]
pub struct AgentProfile {
    /// Stable identifier used in pipeline events
    pub id: &'static str,
    /// Human-readable role title
    pub role: &'static str,
    /// One-line statement of what the agent is for
    pub goal: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_have_distinct_ids() {
        let ids = [
            CoordinatorAgent::PROFILE.id,
            ResearchAgent::PROFILE.id,
            WriterAgent::PROFILE.id,
            EditorAgent::PROFILE.id,
            SeoAgent::PROFILE.id,
        ];
        for (i, id) in ids.iter().enumerate() {
            assert!(!id.is_empty());
            assert!(!ids[i + 1..].contains(id));
        }
    }
}
