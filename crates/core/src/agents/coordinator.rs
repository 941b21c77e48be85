//! # Coordinator Agent
//!
//! Builds the content plan before the pipeline runs, validates finished
//! content against that plan, and synthesizes the cross-stage final
//! report after all stages complete. Coordinator operations never fail;
//! missing optional input falls back to documented defaults.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::editor::EditorOutput;
use super::researcher::ResearchArtifact;
use super::seo_optimizer::SeoOutput;
use super::writer::WriterOutput;
use super::AgentProfile;
use crate::models::{Requirements, Tone};
use crate::tools::text;

/// One task in the content creation sequence
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskSpec {
    pub name: String,
    /// Agent responsible for the task
    pub agent: String,
    pub description: String,
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub estimated_time: String,
}

/// Inclusive numeric band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

/// Structural expectations for finished content
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StructureRequirements {
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub has_headings: bool,
    pub max_paragraph_length: usize,
}

/// SEO expectations for finished content
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeoRequirements {
    /// Keyword density band, in percent
    pub keyword_density: Band,
    /// Meta title length band, in characters
    pub meta_title_length: Band,
    /// Meta description length band, in characters
    pub meta_description_length: Band,
}

/// Quality criteria derived from the requirements
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityCriteria {
    /// 90% of the target word count
    pub minimum_word_count: f64,
    /// 110% of the target word count
    pub maximum_word_count: f64,
    pub required_keywords: Vec<String>,
    /// Minimum acceptable readability score
    pub readability_score: f64,
    pub structure_requirements: StructureRequirements,
    pub seo_requirements: SeoRequirements,
}

/// Timeline estimate for the whole run
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Timeline {
    pub estimated_duration: String,
    pub research_phase: String,
    pub writing_phase: String,
    pub editing_phase: String,
    pub seo_phase: String,
    pub review_phase: String,
}

/// The content creation plan, created once per run and never mutated
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentPlan {
    pub topic: String,
    pub target_audience: String,
    pub word_count: usize,
    pub tone: Tone,
    pub seo_keywords: Vec<String>,
    pub content_type: String,
    pub tasks: Vec<TaskSpec>,
    pub quality_criteria: QualityCriteria,
    pub timeline: Timeline,
}

/// Word-count check result
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordCountCheck {
    pub current: usize,
    pub target_range: String,
    pub passed: bool,
}

/// Structure check result
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StructureCheck {
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub has_headings: bool,
    /// All three markers present
    pub passed: bool,
}

/// The individual validation checks
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationChecks {
    pub word_count: WordCountCheck,
    pub structure: StructureCheck,
}

/// Result of validating content against the plan's quality criteria
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityValidation {
    /// 100 × passed checks / total checks
    pub overall_score: f64,
    pub passed: bool,
    pub checks: ValidationChecks,
    pub feedback: Vec<String>,
    pub improvements_needed: Vec<String>,
}

/// Metadata about the finished content
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentMetadata {
    pub topic: String,
    pub word_count: usize,
    pub target_audience: String,
    pub content_type: String,
    pub creation_date: DateTime<Utc>,
}

/// The accumulated outputs of all four content stages
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PipelineArtifacts {
    pub research: ResearchArtifact,
    pub writing: WriterOutput,
    pub editing: EditorOutput,
    pub seo: SeoOutput,
}

/// Cross-stage final report
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FinalReport {
    pub content_metadata: ContentMetadata,
    pub quality_assessment: QualityValidation,
    pub agent_contributions: PipelineArtifacts,
    /// The SEO stage's final score
    pub seo_summary: f64,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

const INTRO_MARKERS: [&str; 4] = ["introduction", "overview", "begin", "start"];
const CONCLUSION_MARKERS: [&str; 4] = ["conclusion", "summary", "final", "end"];

/// Coordinator agent orchestrating plan and report synthesis
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinatorAgent;

impl CoordinatorAgent {
    pub const PROFILE: AgentProfile = AgentProfile {
        id: "coordinator",
        role: "Content Creation Coordinator",
        goal: "Orchestrate the content creation pipeline to produce high-quality, SEO-optimized content",
    };

    pub fn new() -> Self {
        Self
    }

    /// Build the content creation plan from the requirements
    ///
    /// Deterministic and infallible; any requirements value yields a plan.
    pub fn create_content_plan(&self, requirements: &Requirements) -> ContentPlan {
        ContentPlan {
            topic: requirements.topic.clone(),
            target_audience: requirements.target_audience.clone(),
            word_count: requirements.word_count,
            tone: requirements.tone,
            seo_keywords: requirements.seo_keywords.clone(),
            content_type: requirements.content_type.clone(),
            tasks: generate_task_sequence(requirements),
            quality_criteria: define_quality_criteria(requirements),
            timeline: estimate_timeline(requirements),
        }
    }

    /// Validate content against the plan's quality criteria
    pub fn validate_content_quality(&self, content: &str, plan: &ContentPlan) -> QualityValidation {
        let criteria = &plan.quality_criteria;
        let word_count = text::word_count(content);

        let word_check = WordCountCheck {
            current: word_count,
            target_range: format!(
                "{}-{}",
                criteria.minimum_word_count, criteria.maximum_word_count
            ),
            passed: word_count as f64 >= criteria.minimum_word_count
                && word_count as f64 <= criteria.maximum_word_count,
        };

        let mut improvements_needed = Vec::new();
        if !word_check.passed {
            if (word_count as f64) < criteria.minimum_word_count {
                let deficit = (criteria.minimum_word_count - word_count as f64).ceil() as usize;
                improvements_needed.push(format!(
                    "Content is too short ({} words). Add {} more words.",
                    word_count, deficit
                ));
            } else {
                let excess = (word_count as f64 - criteria.maximum_word_count).ceil() as usize;
                improvements_needed.push(format!(
                    "Content is too long ({} words). Remove {} words.",
                    word_count, excess
                ));
            }
        }

        let lowered = content.to_lowercase();
        let has_introduction = INTRO_MARKERS
            .iter()
            .any(|marker| text::prefix_chars(&lowered, 200).contains(marker));
        let has_conclusion = CONCLUSION_MARKERS
            .iter()
            .any(|marker| text::suffix_chars(&lowered, 200).contains(marker));
        let has_headings = content.contains('#')
            || content.lines().any(|line| {
                line.chars().any(|c| c.is_lowercase() || c.is_uppercase())
                    && !line.chars().any(|c| c.is_lowercase())
            });

        let structure_check = StructureCheck {
            has_introduction,
            has_conclusion,
            has_headings,
            passed: has_introduction && has_conclusion && has_headings,
        };

        let passed_checks =
            u32::from(word_check.passed) + u32::from(structure_check.passed);
        let overall_score = passed_checks as f64 / 2.0 * 100.0;
        let passed = overall_score >= 80.0;

        let mut feedback = Vec::new();
        if passed {
            feedback
                .push("Content meets quality standards and is ready for publication.".to_string());
        } else {
            feedback.push("Content needs improvements before publication.".to_string());
            feedback.extend(improvements_needed.iter().cloned());
        }

        QualityValidation {
            overall_score,
            passed,
            checks: ValidationChecks {
                word_count: word_check,
                structure: structure_check,
            },
            feedback,
            improvements_needed,
        }
    }

    /// Synthesize the final report from the finished content and all
    /// stage outputs
    pub fn create_final_report(
        &self,
        content: &str,
        plan: &ContentPlan,
        artifacts: &PipelineArtifacts,
    ) -> FinalReport {
        let validation = self.validate_content_quality(content, plan);

        let recommendations = generate_final_recommendations(&validation, artifacts);
        let next_steps = suggest_next_steps(&validation);

        FinalReport {
            content_metadata: ContentMetadata {
                topic: plan.topic.clone(),
                word_count: text::word_count(content),
                target_audience: plan.target_audience.clone(),
                content_type: plan.content_type.clone(),
                creation_date: Utc::now(),
            },
            seo_summary: artifacts.seo.seo_score,
            quality_assessment: validation,
            agent_contributions: artifacts.clone(),
            recommendations,
            next_steps,
        }
    }
}

fn generate_task_sequence(requirements: &Requirements) -> Vec<TaskSpec> {
    vec![
        TaskSpec {
            name: "research".to_string(),
            agent: "researcher".to_string(),
            description: format!(
                "Research comprehensive information about '{}'",
                requirements.topic
            ),
            deliverables: vec![
                "research_summary".to_string(),
                "key_facts".to_string(),
                "source_references".to_string(),
            ],
            dependencies: Vec::new(),
            estimated_time: "15 minutes".to_string(),
        },
        TaskSpec {
            name: "content_writing".to_string(),
            agent: "writer".to_string(),
            description: format!(
                "Write a {}-word {}",
                requirements.word_count, requirements.content_type
            ),
            deliverables: vec!["first_draft".to_string()],
            dependencies: vec!["research".to_string()],
            estimated_time: "20 minutes".to_string(),
        },
        TaskSpec {
            name: "editing".to_string(),
            agent: "editor".to_string(),
            description: "Review and improve content for clarity, flow, and grammar".to_string(),
            deliverables: vec![
                "edited_content".to_string(),
                "improvement_notes".to_string(),
            ],
            dependencies: vec!["content_writing".to_string()],
            estimated_time: "10 minutes".to_string(),
        },
        TaskSpec {
            name: "seo_optimization".to_string(),
            agent: "seo".to_string(),
            description: format!(
                "Optimize content for SEO with keywords: {}",
                requirements.seo_keywords.join(", ")
            ),
            deliverables: vec![
                "seo_optimized_content".to_string(),
                "meta_tags".to_string(),
                "seo_report".to_string(),
            ],
            dependencies: vec!["editing".to_string()],
            estimated_time: "10 minutes".to_string(),
        },
        TaskSpec {
            name: "final_review".to_string(),
            agent: "coordinator".to_string(),
            description: "Conduct final quality assurance and approval".to_string(),
            deliverables: vec!["final_content".to_string(), "quality_report".to_string()],
            dependencies: vec!["seo_optimization".to_string()],
            estimated_time: "5 minutes".to_string(),
        },
    ]
}

fn define_quality_criteria(requirements: &Requirements) -> QualityCriteria {
    QualityCriteria {
        minimum_word_count: requirements.word_count as f64 * 0.9,
        maximum_word_count: requirements.word_count as f64 * 1.1,
        required_keywords: requirements.seo_keywords.clone(),
        readability_score: 60.0,
        structure_requirements: StructureRequirements {
            has_introduction: true,
            has_conclusion: true,
            has_headings: true,
            max_paragraph_length: 150,
        },
        seo_requirements: SeoRequirements {
            keyword_density: Band { min: 0.5, max: 3.0 },
            meta_title_length: Band {
                min: 30.0,
                max: 60.0,
            },
            meta_description_length: Band {
                min: 120.0,
                max: 160.0,
            },
        },
    }
}

fn estimate_timeline(requirements: &Requirements) -> Timeline {
    let complexity_multiplier = if requirements.word_count > 2000 {
        1.5
    } else if requirements.word_count > 1500 {
        1.2
    } else {
        1.0
    };

    let base_time = 60.0;
    let estimated_time = (base_time * complexity_multiplier) as usize;

    Timeline {
        estimated_duration: format!("{} minutes", estimated_time),
        research_phase: "15 minutes".to_string(),
        writing_phase: "20 minutes".to_string(),
        editing_phase: "10 minutes".to_string(),
        seo_phase: "10 minutes".to_string(),
        review_phase: "5 minutes".to_string(),
    }
}

fn generate_final_recommendations(
    validation: &QualityValidation,
    artifacts: &PipelineArtifacts,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    recommendations.extend(validation.improvements_needed.iter().cloned());
    recommendations.extend(artifacts.seo.recommendations.iter().cloned());

    if validation.overall_score >= 90.0 {
        recommendations
            .push("Excellent content quality! Consider this for featured placement.".to_string());
    } else if validation.overall_score >= 80.0 {
        recommendations
            .push("Good content quality. Ready for publication with minor improvements.".to_string());
    } else {
        recommendations
            .push("Content needs significant improvements before publication.".to_string());
    }

    recommendations
}

fn suggest_next_steps(validation: &QualityValidation) -> Vec<String> {
    if validation.passed {
        vec![
            "Content is ready for publication".to_string(),
            "Schedule social media promotion".to_string(),
            "Consider internal linking opportunities".to_string(),
            "Monitor performance metrics after publication".to_string(),
        ]
    } else {
        vec![
            "Address quality issues identified in validation".to_string(),
            "Re-run content through editing agent if needed".to_string(),
            "Consider additional research if content gaps exist".to_string(),
            "Re-validate content after improvements".to_string(),
        ]
    }
}
