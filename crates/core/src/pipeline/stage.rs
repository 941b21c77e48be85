//! # Pipeline Stages
//!
//! Defines the stages of the content pipeline.

use serde::{Deserialize, Serialize};

/// Stage of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Coordinator building the content plan
    Planning,
    /// Researcher gathering sources
    Researching,
    /// Writer drafting the document
    Writing,
    /// Editor refining the draft
    Editing,
    /// SEO optimizer tuning the edited content
    Optimizing,
    /// Coordinator assembling the final report
    FinalReview,
    /// Complete
    Complete,
    /// Failed
    Failed,
}

/// The pipeline state machine
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Current stage
    pub stage: PipelineStage,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            stage: PipelineStage::Planning,
        }
    }
}

impl PipelineState {
    /// Create a new pipeline state
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next stage
    pub fn advance(&mut self) {
        self.stage = match self.stage {
            PipelineStage::Planning => PipelineStage::Researching,
            PipelineStage::Researching => PipelineStage::Writing,
            PipelineStage::Writing => PipelineStage::Editing,
            PipelineStage::Editing => PipelineStage::Optimizing,
            PipelineStage::Optimizing => PipelineStage::FinalReview,
            PipelineStage::FinalReview => PipelineStage::Complete,
            PipelineStage::Complete => PipelineStage::Complete,
            PipelineStage::Failed => PipelineStage::Failed,
        };
    }

    /// Fail the pipeline
    pub fn fail(&mut self) {
        self.stage = PipelineStage::Failed;
    }

    /// Check if the pipeline has stopped
    pub fn is_complete(&self) -> bool {
        matches!(self.stage, PipelineStage::Complete | PipelineStage::Failed)
    }

    /// Check if the pipeline succeeded
    pub fn is_success(&self) -> bool {
        self.stage == PipelineStage::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_advances_in_order() {
        let mut state = PipelineState::new();
        assert_eq!(state.stage, PipelineStage::Planning);

        let expected = [
            PipelineStage::Researching,
            PipelineStage::Writing,
            PipelineStage::Editing,
            PipelineStage::Optimizing,
            PipelineStage::FinalReview,
            PipelineStage::Complete,
        ];
        for stage in expected {
            state.advance();
            assert_eq!(state.stage, stage);
        }

        // Advancing past the end stays complete
        state.advance();
        assert!(state.is_complete());
        assert!(state.is_success());
    }

    #[test]
    fn test_failed_state_is_terminal() {
        let mut state = PipelineState::new();
        state.fail();
        assert!(state.is_complete());
        assert!(!state.is_success());

        state.advance();
        assert_eq!(state.stage, PipelineStage::Failed);
    }
}
