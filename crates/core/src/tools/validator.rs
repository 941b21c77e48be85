//! # Content Validator
//!
//! Heuristic quality analysis over free text. Pure function of its input;
//! used by the editing stage before and after its transforms and by tests
//! that gate pipeline output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::text;

/// Quality metrics for a piece of content
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentAnalysis {
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// 0-100, higher is easier to read
    pub readability_score: f64,
    /// Detected problems, each a human-readable description
    pub issues: Vec<String>,
    /// 0-100 overall content-health score
    pub quality_score: f64,
}

/// Analyze content and return quality metrics
pub fn analyze(content: &str) -> ContentAnalysis {
    let word_count = text::word_count(content);
    let sentence_count = text::sentence_count(content);
    let paragraph_count = text::paragraphs(content).len();
    let readability_score = calculate_readability(word_count, sentence_count);
    let issues = identify_issues(content);

    let mut analysis = ContentAnalysis {
        word_count,
        character_count: text::char_count(content),
        sentence_count,
        paragraph_count,
        readability_score,
        issues,
        quality_score: 0.0,
    };
    analysis.quality_score = calculate_quality_score(&analysis);
    analysis
}

/// Simple readability score: 100 minus twice the average sentence length
fn calculate_readability(words: usize, sentences: usize) -> f64 {
    if sentences == 0 {
        return 0.0;
    }
    let avg_sentence_length = words as f64 / sentences as f64;
    text::round_to((100.0 - avg_sentence_length * 2.0).max(0.0), 2)
}

fn identify_issues(content: &str) -> Vec<String> {
    let mut issues = Vec::new();

    // Very long paragraphs
    for (i, para) in text::paragraphs(content).iter().enumerate() {
        let words = text::word_count(para);
        if words > 200 {
            issues.push(format!("Paragraph {} is very long ({} words)", i + 1, words));
        }
    }

    // Repetitive longer words, reported in first-occurrence order
    let lowered = content.to_lowercase();
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for word in lowered.split_whitespace() {
        if word.chars().count() > 5 {
            let count = frequency.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }
    }
    for word in order {
        let count = frequency[word];
        if count > 10 {
            issues.push(format!(
                "Word '{}' appears {} times (potentially repetitive)",
                word, count
            ));
        }
    }

    // Missing terminal punctuation
    let terminal = content.trim().chars().last();
    if !matches!(terminal, Some('.') | Some('!') | Some('?')) {
        issues.push("Content doesn't end with proper punctuation".to_string());
    }

    issues
}

fn calculate_quality_score(metrics: &ContentAnalysis) -> f64 {
    let mut score = 100.0;

    score -= metrics.issues.len() as f64 * 5.0;

    if metrics.readability_score < 30.0 {
        score -= 20.0;
    } else if metrics.readability_score < 50.0 {
        score -= 10.0;
    }

    if metrics.word_count < 100 {
        score -= 30.0;
    } else if metrics.word_count < 300 {
        score -= 15.0;
    } else if metrics.word_count > 3000 {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}
