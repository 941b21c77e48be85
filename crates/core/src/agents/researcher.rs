//! # Research Agent
//!
//! Turns a topic plus requirements into a structured research artifact:
//! summary, facts, statistics, quotes, ranked sources, outline, gaps, and
//! a credibility assessment. The only stage that talks to the outside
//! world; a failed search query degrades that query's contribution and
//! the stage continues with whatever valid results remain.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AgentProfile;
use crate::models::{PipelineConfig, Requirements};
use crate::tools::search::{SearchProvider, SearchResult};
use crate::tools::text;

/// A research source with a heuristic trust estimate
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SourceReference {
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// Trust estimate in [0, 1]
    pub credibility: f64,
}

/// Aggregate credibility of the gathered sources
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CredibilityAssessment {
    /// Mean per-source credibility in [0, 1]
    pub overall_score: f64,
    pub total_sources: usize,
    /// Sources scoring 0.8 or above
    pub high_credibility_sources: usize,
    pub assessment: String,
}

/// Structured output of the research stage
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResearchArtifact {
    pub topic: String,
    pub research_summary: String,
    /// Up to 5 factual sentences extracted from snippets
    pub key_facts: Vec<String>,
    /// Up to 3 numeric findings with surrounding context
    pub statistics: Vec<String>,
    /// Up to 3 quoted passages attributed to their source title
    pub expert_quotes: Vec<String>,
    /// Top sources, sorted by descending credibility
    pub source_references: Vec<SourceReference>,
    pub content_outline: Vec<String>,
    pub research_gaps: Vec<String>,
    pub credibility_assessment: CredibilityAssessment,
}

/// Outline template chosen from the requested content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    /// Guides, tutorials, how-tos
    Guide,
    /// Reviews and comparisons
    Review,
    /// Everything else
    Standard,
}

impl OutlineKind {
    /// Classify a content type string
    pub fn classify(content_type: &str) -> Self {
        match content_type.to_lowercase().as_str() {
            "guide" | "tutorial" | "how-to" => OutlineKind::Guide,
            "review" | "comparison" => OutlineKind::Review,
            _ => OutlineKind::Standard,
        }
    }

    fn outline(&self, topic: &str) -> Vec<String> {
        match self {
            OutlineKind::Guide => vec![
                format!("Introduction to {}", topic),
                "Prerequisites and Requirements".to_string(),
                "Step-by-Step Process".to_string(),
                "Best Practices".to_string(),
                "Common Mistakes to Avoid".to_string(),
                "Advanced Tips".to_string(),
                "Conclusion and Next Steps".to_string(),
            ],
            OutlineKind::Review => vec![
                format!("Overview of {}", topic),
                "Methodology".to_string(),
                "Detailed Analysis".to_string(),
                "Pros and Cons".to_string(),
                "Comparisons".to_string(),
                "Recommendations".to_string(),
                "Final Verdict".to_string(),
            ],
            OutlineKind::Standard => vec![
                format!("Introduction to {}", topic),
                format!("What is {}?", topic),
                format!("Key Benefits of {}", topic),
                "Challenges and Considerations".to_string(),
                "Current Trends and Developments".to_string(),
                "Practical Applications".to_string(),
                "Future Outlook".to_string(),
                "Conclusion".to_string(),
            ],
        }
    }
}

const VERB_INDICATORS: [&str; 9] = [
    "is", "are", "was", "were", "has", "have", "can", "will", "according",
];

const HIGH_CREDIBILITY_DOMAINS: [&str; 5] =
    [".edu", ".gov", ".org", "wikipedia", "scholar.google"];
const MEDIUM_CREDIBILITY_DOMAINS: [&str; 4] = [".com", "news", "journal", "research"];
const QUALITY_INDICATORS: [&str; 5] = ["research", "study", "analysis", "report", "official"];

const RECENCY_INDICATORS: [&str; 6] = ["2025", "2024", "recent", "latest", "new", "current"];

const STOPWORDS: [&str; 52] = [
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "up",
    "about", "into", "through", "during", "before", "after", "above", "below", "between", "among",
    "around", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "this",
    "that", "these", "those", "a", "an",
];

/// Research agent backed by a search collaborator
pub struct ResearchAgent {
    search: Arc<dyn SearchProvider>,
    config: PipelineConfig,
}

impl ResearchAgent {
    pub const PROFILE: AgentProfile = AgentProfile {
        id: "researcher",
        role: "Content Research Specialist",
        goal: "Conduct thorough, accurate research on assigned topics and provide comprehensive, fact-based information",
    };

    pub fn new(search: Arc<dyn SearchProvider>, config: PipelineConfig) -> Self {
        Self { search, config }
    }

    /// Conduct research on a topic
    ///
    /// Never fails outright: queries that error are skipped with a
    /// warning, and zero valid results yields a degraded artifact with a
    /// "limited research" summary.
    pub async fn conduct_research(
        &self,
        topic: &str,
        requirements: &Requirements,
    ) -> Result<ResearchArtifact> {
        let queries = self.generate_research_queries(topic, requirements);

        let mut results: Vec<SearchResult> = Vec::new();
        for query in &queries {
            match self.search.search(query, self.config.results_per_query).await {
                Ok(hits) => results.extend(hits),
                Err(error) => {
                    tracing::warn!(%query, %error, "search query failed, continuing with remaining queries");
                }
            }
        }

        Ok(ResearchArtifact {
            topic: topic.to_string(),
            research_summary: create_research_summary(topic, &results),
            key_facts: extract_key_facts(&results),
            statistics: extract_statistics(&results),
            expert_quotes: extract_quotes(&results),
            source_references: compile_sources(&results),
            content_outline: suggest_content_outline(topic, requirements),
            research_gaps: identify_research_gaps(&results),
            credibility_assessment: assess_source_credibility(&results),
        })
    }

    fn generate_research_queries(&self, topic: &str, requirements: &Requirements) -> Vec<String> {
        let mut queries = vec![
            topic.to_string(),
            format!("{} definition", topic),
            format!("{} benefits", topic),
            format!("{} challenges", topic),
            format!("{} statistics", topic),
            format!("{} recent developments", topic),
        ];

        let audience = requirements.target_audience.trim();
        if !audience.is_empty() {
            queries.push(format!("{} for {}", topic, audience));
            queries.push(format!("{} {} case studies", topic, audience));
        }

        for keyword in requirements.seo_keywords.iter().take(3) {
            queries.push(format!("{} {}", keyword, topic));
        }

        queries.truncate(self.config.max_queries);
        queries
    }
}

fn create_research_summary(topic: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!(
            "Limited research available on {}. Recommend using authoritative sources.",
            topic
        );
    }

    let combined: String = results
        .iter()
        .take(10)
        .map(|r| r.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let confidence = if results.len() >= 5 {
        "High"
    } else if results.len() >= 3 {
        "Medium"
    } else {
        "Low"
    };

    format!(
        "Research Summary: {topic}\n\n\
         Overview: Based on analysis of {count} sources, {topic} appears to be a significant \
         subject with multiple dimensions worth exploring.\n\n\
         Key Themes Identified:\n- {themes}\n\n\
         Current Status: The topic shows ongoing relevance with recent developments and \
         continued interest from various stakeholders.\n\n\
         Research Confidence: {confidence}",
        topic = topic,
        count = results.len(),
        themes = extract_main_themes(&combined),
        confidence = confidence,
    )
}

/// Top-5 most frequent non-stopword words longer than three characters
fn extract_main_themes(combined: &str) -> String {
    let lowered = combined.to_lowercase();
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for word in lowered.split_whitespace() {
        let clean = word.trim_matches(|c: char| ".,!?\";:()[]{}".contains(c));
        if clean.chars().count() > 3 && !STOPWORDS.contains(&clean) {
            let count = frequency.entry(clean).or_insert(0);
            if *count == 0 {
                order.push(clean);
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<&str> = order;
    ranked.sort_by_key(|word| std::cmp::Reverse(frequency[word]));
    ranked.truncate(5);

    if ranked.is_empty() {
        "General information and insights".to_string()
    } else {
        ranked.join(", ")
    }
}

fn extract_key_facts(results: &[SearchResult]) -> Vec<String> {
    let mut facts = Vec::new();

    'outer: for result in results.iter().take(5) {
        for sentence in result.snippet.split('.') {
            let sentence = sentence.trim();
            let lowered = sentence.to_lowercase();
            if text::char_count(sentence) > 50
                && VERB_INDICATORS.iter().any(|verb| lowered.contains(verb))
            {
                facts.push(sentence.to_string());
                if facts.len() >= 5 {
                    break 'outer;
                }
            }
        }
    }

    facts
}

fn extract_statistics(results: &[SearchResult]) -> Vec<String> {
    let patterns = [
        Regex::new(r"\d+%").expect("valid percentage pattern"),
        Regex::new(r"\$[\d,]+").expect("valid dollar pattern"),
        Regex::new(r"(?i)\d+\.\d+\s*(?:million|billion|thousand)")
            .expect("valid scaled number pattern"),
        Regex::new(r"(?i)\d+\s*(?:times|fold)").expect("valid multiplier pattern"),
    ];

    let mut statistics = Vec::new();

    'outer: for result in results {
        for pattern in &patterns {
            for found in pattern.find_iter(&result.snippet) {
                let context = context_window(&result.snippet, found.start());
                statistics.push(format!("{}: {}", found.as_str(), context.trim()));
                if statistics.len() >= 3 {
                    break 'outer;
                }
            }
        }
    }

    statistics
}

/// Up to 50 characters either side of the match start
fn context_window(snippet: &str, match_start: usize) -> String {
    let prefix_chars = snippet[..match_start].chars().count();
    snippet
        .chars()
        .skip(prefix_chars.saturating_sub(50))
        .take(100)
        .collect()
}

fn extract_quotes(results: &[SearchResult]) -> Vec<String> {
    let mut quotes = Vec::new();

    'outer: for result in results {
        for (i, part) in result.snippet.split('"').enumerate() {
            // Every other part sits between quote marks
            if i % 2 == 1 && text::char_count(part) > 20 {
                quotes.push(format!("\"{}\" - {}", part, result.title));
                if quotes.len() >= 3 {
                    break 'outer;
                }
            }
        }
    }

    quotes
}

fn compile_sources(results: &[SearchResult]) -> Vec<SourceReference> {
    let mut sources: Vec<SourceReference> = results
        .iter()
        .take(5)
        .map(|result| SourceReference {
            title: if result.title.is_empty() {
                "Unknown Title".to_string()
            } else {
                result.title.clone()
            },
            url: result.url.clone(),
            snippet: format!("{}...", text::prefix_chars(&result.snippet, 200)),
            credibility: assess_single_source_credibility(result),
        })
        .collect();

    sources.sort_by(|a, b| {
        b.credibility
            .partial_cmp(&a.credibility)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sources
}

fn assess_single_source_credibility(source: &SearchResult) -> f64 {
    let url = source.url.to_lowercase();
    let title = source.title.to_lowercase();

    let mut score: f64 = 0.5;

    if HIGH_CREDIBILITY_DOMAINS.iter().any(|d| url.contains(d)) {
        score += 0.3;
    } else if MEDIUM_CREDIBILITY_DOMAINS.iter().any(|d| url.contains(d)) {
        score += 0.1;
    }

    if QUALITY_INDICATORS.iter().any(|q| title.contains(q)) {
        score += 0.1;
    }

    score.min(1.0)
}

fn suggest_content_outline(topic: &str, requirements: &Requirements) -> Vec<String> {
    OutlineKind::classify(&requirements.content_type).outline(topic)
}

fn identify_research_gaps(results: &[SearchResult]) -> Vec<String> {
    let mut gaps = Vec::new();

    if results.len() < 3 {
        gaps.push(
            "Limited source diversity - recommend finding additional authoritative sources"
                .to_string(),
        );
    }

    let combined_with_titles: String = results
        .iter()
        .map(|r| format!("{}{}", r.snippet, r.title))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let has_recent = RECENCY_INDICATORS
        .iter()
        .any(|indicator| combined_with_titles.contains(indicator));
    if !has_recent {
        gaps.push("Lack of recent information - consider finding more current sources".to_string());
    }

    let combined_snippets: String = results
        .iter()
        .map(|r| r.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if !combined_snippets.contains("however") && !combined_snippets.contains("but") {
        gaps.push(
            "Limited perspective diversity - consider finding contrasting viewpoints".to_string(),
        );
    }

    gaps
}

fn assess_source_credibility(results: &[SearchResult]) -> CredibilityAssessment {
    if results.is_empty() {
        return CredibilityAssessment {
            overall_score: 0.0,
            total_sources: 0,
            high_credibility_sources: 0,
            assessment: "No valid sources found".to_string(),
        };
    }

    let scores: Vec<f64> = results
        .iter()
        .map(assess_single_source_credibility)
        .collect();
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;

    CredibilityAssessment {
        overall_score: text::round_to(avg, 2),
        total_sources: results.len(),
        high_credibility_sources: scores.iter().filter(|s| **s >= 0.8).count(),
        assessment: credibility_assessment_text(avg),
    }
}

fn credibility_assessment_text(score: f64) -> String {
    if score >= 0.8 {
        "High credibility - sources are trustworthy and authoritative"
    } else if score >= 0.6 {
        "Good credibility - sources are generally reliable"
    } else if score >= 0.4 {
        "Medium credibility - sources should be verified"
    } else {
        "Low credibility - additional authoritative sources needed"
    }
    .to_string()
}
