//! # Pipeline Driver
//!
//! Sequences the five agents over one requirements value: plan, research,
//! writing, editing, SEO, final report. Strictly sequential; each stage
//! consumes the previous stage's output and the immutable requirements.
//! A stage failure aborts the run and names the failed stage.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::events::{PipelineEvent, PipelineEventKind};
use super::stage::PipelineState;
use crate::agents::coordinator::{ContentPlan, FinalReport, PipelineArtifacts};
use crate::agents::{CoordinatorAgent, EditorAgent, ResearchAgent, SeoAgent, WriterAgent};
use crate::models::{PipelineConfig, Requirements};
use crate::tools::search::SearchProvider;

/// Result of one full pipeline run
#[derive(Debug)]
pub struct PipelineRun {
    /// The plan built before any stage ran
    pub plan: ContentPlan,
    /// All four stage outputs
    pub artifacts: PipelineArtifacts,
    /// The coordinator's final report
    pub report: FinalReport,
    /// Events that occurred
    pub events: Vec<PipelineEvent>,
    /// Whether the final validation passed
    pub success: bool,
}

/// The content pipeline
pub struct ContentPipeline {
    coordinator: CoordinatorAgent,
    researcher: ResearchAgent,
    writer: WriterAgent,
    editor: EditorAgent,
    seo: SeoAgent,
    state: PipelineState,
    events: Vec<PipelineEvent>,
    event_tx: Option<mpsc::Sender<PipelineEvent>>,
}

impl ContentPipeline {
    /// Create a pipeline with the given search collaborator
    pub fn new(config: PipelineConfig, search: Arc<dyn SearchProvider>) -> Self {
        Self {
            coordinator: CoordinatorAgent::new(),
            researcher: ResearchAgent::new(search, config),
            writer: WriterAgent::new(),
            editor: EditorAgent::new(),
            seo: SeoAgent::new(),
            state: PipelineState::new(),
            events: Vec::new(),
            event_tx: None,
        }
    }

    /// Set event channel for streaming progress
    pub fn with_event_channel(mut self, tx: mpsc::Sender<PipelineEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Emit an event
    async fn emit(&mut self, event: PipelineEvent) {
        self.events.push(event.clone());
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event).await;
        }
    }

    /// Run the full pipeline on one requirements value
    #[tracing::instrument(skip(self, requirements), fields(topic = %requirements.topic))]
    pub async fn run(&mut self, requirements: &Requirements) -> Result<PipelineRun> {
        self.emit(PipelineEvent::new(
            PipelineEventKind::PipelineStarted,
            CoordinatorAgent::PROFILE.id,
        ))
        .await;

        // Stage 0: Plan
        let plan = self.coordinator.create_content_plan(requirements);
        self.state.advance();

        // Stage 1: Research
        self.emit(PipelineEvent::new(
            PipelineEventKind::AgentStarted,
            ResearchAgent::PROFILE.id,
        ))
        .await;

        let research = match self
            .researcher
            .conduct_research(&requirements.topic, requirements)
            .await
        {
            Ok(artifact) => artifact,
            Err(error) => {
                self.emit(
                    PipelineEvent::new(PipelineEventKind::AgentFailed, ResearchAgent::PROFILE.id)
                        .with_data(serde_json::json!({ "error": error.to_string() })),
                )
                .await;
                self.state.fail();
                self.emit(PipelineEvent::new(
                    PipelineEventKind::PipelineFailed,
                    CoordinatorAgent::PROFILE.id,
                ))
                .await;
                return Err(error.context("research stage failed"));
            }
        };

        self.emit(
            PipelineEvent::new(PipelineEventKind::AgentCompleted, ResearchAgent::PROFILE.id)
                .with_data(serde_json::json!({
                    "sources": research.source_references.len()
                })),
        )
        .await;
        self.state.advance();

        // Stage 2: Writing
        self.emit(PipelineEvent::new(
            PipelineEventKind::AgentStarted,
            WriterAgent::PROFILE.id,
        ))
        .await;
        let writing = self.writer.create_content(&research, requirements);
        self.emit(
            PipelineEvent::new(PipelineEventKind::AgentCompleted, WriterAgent::PROFILE.id)
                .with_data(serde_json::json!({ "word_count": writing.word_count })),
        )
        .await;
        self.state.advance();

        // Stage 3: Editing
        self.emit(PipelineEvent::new(
            PipelineEventKind::AgentStarted,
            EditorAgent::PROFILE.id,
        ))
        .await;
        let editing = self.editor.edit_content(&writing.content, requirements);
        self.emit(
            PipelineEvent::new(PipelineEventKind::AgentCompleted, EditorAgent::PROFILE.id)
                .with_data(serde_json::json!({
                    "quality_score": editing.final_quality_score
                })),
        )
        .await;
        self.state.advance();

        // Stage 4: SEO optimization
        self.emit(PipelineEvent::new(
            PipelineEventKind::AgentStarted,
            SeoAgent::PROFILE.id,
        ))
        .await;
        let seo = self
            .seo
            .optimize_content(&editing.edited_content, requirements);
        self.emit(
            PipelineEvent::new(PipelineEventKind::AgentCompleted, SeoAgent::PROFILE.id)
                .with_data(serde_json::json!({ "seo_score": seo.seo_score })),
        )
        .await;
        self.state.advance();

        // Stage 5: Final report
        let artifacts = PipelineArtifacts {
            research,
            writing,
            editing,
            seo,
        };
        let report = self.coordinator.create_final_report(
            &artifacts.seo.optimized_content,
            &plan,
            &artifacts,
        );
        self.state.advance();

        let success = report.quality_assessment.passed;
        self.emit(
            PipelineEvent::new(
                PipelineEventKind::PipelineCompleted,
                CoordinatorAgent::PROFILE.id,
            )
            .with_data(serde_json::json!({
                "passed": success,
                "overall_score": report.quality_assessment.overall_score
            })),
        )
        .await;

        Ok(PipelineRun {
            plan,
            artifacts,
            report,
            events: self.events.clone(),
            success,
        })
    }

    /// Current stage of the pipeline
    pub fn state(&self) -> &PipelineState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::stage::PipelineStage;
    use crate::tools::search::{SearchError, SearchResult};
    use async_trait::async_trait;

    struct StaticSearch;

    #[async_trait]
    impl SearchProvider for StaticSearch {
        async fn search(
            &self,
            _query: &str,
            _num_results: usize,
        ) -> Result<Vec<SearchResult>, SearchError> {
            Ok(vec![
                SearchResult {
                    title: "Remote Work Research".to_string(),
                    url: "https://example.edu/remote".to_string(),
                    snippet: "Remote work is transforming the way modern organizations structure their teams. Recent surveys report 40% higher retention among flexible employers. However, results vary between industries.".to_string(),
                },
                SearchResult {
                    title: "Productivity Study".to_string(),
                    url: "https://example.org/study".to_string(),
                    snippet: "Productivity can improve when remote work policies are paired with the latest collaboration tooling and clear expectations.".to_string(),
                },
                SearchResult {
                    title: "Workplace News".to_string(),
                    url: "https://news.example.com/work".to_string(),
                    snippet: "Companies report that hybrid schedules are now standard practice in many sectors.".to_string(),
                },
            ])
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl SearchProvider for FailingSearch {
        async fn search(
            &self,
            _query: &str,
            _num_results: usize,
        ) -> Result<Vec<SearchResult>, SearchError> {
            Err(SearchError::NoBackend)
        }
    }

    fn requirements() -> Requirements {
        Requirements::new("Remote Work")
            .with_word_count(300)
            .with_keywords(["remote work", "productivity"])
    }

    #[tokio::test]
    async fn test_full_pipeline_run() {
        let mut pipeline =
            ContentPipeline::new(PipelineConfig::default(), Arc::new(StaticSearch));

        let run = pipeline.run(&requirements()).await.unwrap();

        assert_eq!(run.plan.tasks.len(), 5);
        assert!(!run.artifacts.research.source_references.is_empty());
        assert!(run
            .artifacts
            .writing
            .content
            .starts_with("# Remote Work: A Comprehensive Guide"));
        assert!(run.artifacts.writing.word_count > 0);
        assert!(!run.artifacts.editing.edited_content.is_empty());
        assert!(!run.artifacts.seo.optimized_content.is_empty());
        assert_eq!(
            run.report.seo_summary,
            run.artifacts.seo.seo_score
        );
        assert!(pipeline.state().is_success());
    }

    #[tokio::test]
    async fn test_pipeline_events_are_ordered() {
        let mut pipeline =
            ContentPipeline::new(PipelineConfig::default(), Arc::new(StaticSearch));
        let run = pipeline.run(&requirements()).await.unwrap();

        let kinds: Vec<&PipelineEventKind> = run.events.iter().map(|e| &e.kind).collect();
        assert_eq!(kinds.first(), Some(&&PipelineEventKind::PipelineStarted));
        assert_eq!(kinds.last(), Some(&&PipelineEventKind::PipelineCompleted));
        // One start/complete pair per content stage
        let starts = kinds
            .iter()
            .filter(|k| ***k == PipelineEventKind::AgentStarted)
            .count();
        let completions = kinds
            .iter()
            .filter(|k| ***k == PipelineEventKind::AgentCompleted)
            .count();
        assert_eq!(starts, 4);
        assert_eq!(completions, 4);

        let agents: Vec<&str> = run
            .events
            .iter()
            .filter(|e| e.kind == PipelineEventKind::AgentStarted)
            .map(|e| e.agent.as_str())
            .collect();
        assert_eq!(agents, vec!["researcher", "writer", "editor", "seo"]);
    }

    #[tokio::test]
    async fn test_pipeline_survives_search_outage() {
        let mut pipeline =
            ContentPipeline::new(PipelineConfig::default(), Arc::new(FailingSearch));

        let run = pipeline.run(&requirements()).await.unwrap();

        // Research degrades but the pipeline still completes end to end
        assert!(run
            .artifacts
            .research
            .research_summary
            .starts_with("Limited research available"));
        assert!(!run.artifacts.seo.optimized_content.is_empty());
        assert_eq!(pipeline.state().stage, PipelineStage::Complete);
    }

    #[tokio::test]
    async fn test_event_channel_receives_stream() {
        let (tx, mut rx) = mpsc::channel(64);
        let mut pipeline = ContentPipeline::new(PipelineConfig::default(), Arc::new(StaticSearch))
            .with_event_channel(tx);

        let run = pipeline.run(&requirements()).await.unwrap();

        let mut streamed = Vec::new();
        while let Ok(event) = rx.try_recv() {
            streamed.push(event);
        }
        assert_eq!(streamed.len(), run.events.len());
    }
}
