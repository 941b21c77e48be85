//! # Copyforge Models
//!
//! Centralized configuration types for the Copyforge pipeline.
//! `Requirements` is the immutable per-run input consumed by every stage;
//! `PipelineConfig` carries the knobs for the pipeline driver and the
//! search collaborator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Writing tone requested for the content
///
/// Template and indicator lookups only know the first three tones;
/// `Academic` falls back to the `Professional` templates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Technical,
    Academic,
}

impl Tone {
    /// Display name, matching the strings used in plans and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Technical => "Technical",
            Tone::Academic => "Academic",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_audience() -> String {
    "General audience".to_string()
}

fn default_word_count() -> usize {
    1000
}

fn default_content_type() -> String {
    "Blog post".to_string()
}

/// Content requirements driving a single pipeline run
///
/// Every field except `topic` has a documented default, so partially
/// specified input deserializes without error. Stage code treats this
/// value as read-only.
///
/// ## Example
/// ```rust,ignore
/// use copyforge_core::models::{Requirements, Tone};
///
/// let requirements = Requirements::new("Remote Work")
///     .with_word_count(1200)
///     .with_tone(Tone::Casual)
///     .with_keywords(["remote work", "productivity"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Requirements {
    /// Main topic the content is about
    #[serde(default)]
    pub topic: String,
    /// Intended readership
    #[serde(default = "default_audience")]
    pub target_audience: String,
    /// Target word count for the finished document
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    /// Requested writing tone
    #[serde(default)]
    pub tone: Tone,
    /// Kind of content to produce (blog post, guide, review, ...)
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Target SEO keywords, most important first
    #[serde(default)]
    pub seo_keywords: Vec<String>,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            topic: String::new(),
            target_audience: default_audience(),
            word_count: default_word_count(),
            tone: Tone::default(),
            content_type: default_content_type(),
            seo_keywords: Vec::new(),
        }
    }
}

impl Requirements {
    /// Create requirements for a topic with all defaults
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Set the target audience
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    /// Set the target word count
    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = word_count;
        self
    }

    /// Set the writing tone
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the SEO keyword list
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seo_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Configuration for the pipeline driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Results requested from the search collaborator per query
    pub results_per_query: usize,
    /// Maximum number of research queries per run
    pub max_queries: usize,
    /// Custom SearXNG instance URL (overrides auto-discovery)
    pub searx_url: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            results_per_query: 5,
            max_queries: 8,
            searx_url: None, // Uses auto-discovery by default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_defaults() {
        let requirements = Requirements::new("Test Topic");
        assert_eq!(requirements.topic, "Test Topic");
        assert_eq!(requirements.target_audience, "General audience");
        assert_eq!(requirements.word_count, 1000);
        assert_eq!(requirements.tone, Tone::Professional);
        assert_eq!(requirements.content_type, "Blog post");
        assert!(requirements.seo_keywords.is_empty());
    }

    #[test]
    fn test_requirements_deserialize_missing_fields() {
        let requirements: Requirements = serde_json::from_str(r#"{"topic": "Rust"}"#).unwrap();
        assert_eq!(requirements.word_count, 1000);
        assert_eq!(requirements.target_audience, "General audience");
        assert_eq!(requirements.tone, Tone::Professional);
    }

    #[test]
    fn test_requirements_builder() {
        let requirements = Requirements::new("Remote Work")
            .with_word_count(300)
            .with_tone(Tone::Technical)
            .with_keywords(["remote work", "productivity"]);
        assert_eq!(requirements.word_count, 300);
        assert_eq!(requirements.tone, Tone::Technical);
        assert_eq!(requirements.seo_keywords.len(), 2);
    }

    #[test]
    fn test_tone_display() {
        assert_eq!(Tone::Professional.to_string(), "Professional");
        assert_eq!(Tone::Academic.as_str(), "Academic");
    }

    #[test]
    fn test_pipeline_config_default() {
        let config = PipelineConfig::default();
        assert_eq!(config.results_per_query, 5);
        assert_eq!(config.max_queries, 8);
        assert!(config.searx_url.is_none());
    }
}
