//! # Editor Agent
//!
//! Turns a draft plus requirements into an edited document with editing
//! diagnostics. Runs the content validator before and after an ordered
//! sequence of deterministic text transforms: heading normalization,
//! paragraph spacing, wordy-phrase substitution, transition insertion,
//! long-sentence splitting, and grammar spacing fixups.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AgentProfile;
use crate::models::Requirements;
use crate::tools::text;
use crate::tools::validator::{self, ContentAnalysis};

/// Output of the editing stage
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EditorOutput {
    pub original_content: String,
    pub edited_content: String,
    /// Validator result for the original content
    pub quality_analysis: ContentAnalysis,
    pub improvements_made: Vec<String>,
    pub editing_notes: Vec<String>,
    /// Validator quality score of the edited content
    pub final_quality_score: f64,
    /// At most five recommendations
    pub recommendations: Vec<String>,
}

/// Before/after metrics for an editing pass
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EditingMetrics {
    pub original_word_count: usize,
    pub final_word_count: usize,
    pub original_quality_score: f64,
    pub final_quality_score: f64,
    pub readability_improvement: f64,
    pub issues_resolved: i64,
}

/// Comprehensive summary of an editing pass
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EditingSummary {
    pub editing_metrics: EditingMetrics,
    pub key_improvements: Vec<String>,
    pub final_recommendations: Vec<String>,
    /// Editor confidence in the final content, in [0, 1]
    pub editor_confidence: f64,
    pub ready_for_publication: bool,
}

/// Wordy phrase → concise replacement table, applied in order
const CLARITY_REPLACEMENTS: [(&str, &str); 11] = [
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("at this point in time", "now"),
    ("for the purpose of", "to"),
    ("in the event that", "if"),
    ("take into consideration", "consider"),
    ("make a decision", "decide"),
    ("come to a conclusion", "conclude"),
    ("it is important to note that", ""),
    ("it should be mentioned that", ""),
    ("it is worth noting that", ""),
];

const TRANSITION_STARTERS: [&str; 8] = [
    "However,",
    "Furthermore,",
    "Additionally,",
    "Moreover,",
    "In contrast,",
    "Similarly,",
    "Therefore,",
    "Consequently,",
];

const TRANSITION_WORDS: [&str; 5] =
    ["However", "Furthermore", "Additionally", "Moreover", "Therefore"];

/// Editor agent refining drafts
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorAgent;

impl EditorAgent {
    pub const PROFILE: AgentProfile = AgentProfile {
        id: "editor",
        role: "Content Editor and Quality Specialist",
        goal: "Review and improve content quality, ensuring clarity, coherence, and professional standards",
    };

    pub fn new() -> Self {
        Self
    }

    /// Edit and improve content against the quality standards
    pub fn edit_content(&self, content: &str, requirements: &Requirements) -> EditorOutput {
        let quality_analysis = validator::analyze(content);

        let edited = improve_content(content);

        let final_analysis = validator::analyze(&edited);
        let recommendations = generate_recommendations(&edited, &final_analysis, requirements);

        EditorOutput {
            improvements_made: track_improvements(content, &edited),
            editing_notes: generate_editing_notes(content, &edited, requirements),
            final_quality_score: final_analysis.quality_score,
            recommendations,
            original_content: content.to_string(),
            edited_content: edited,
            quality_analysis,
        }
    }

    /// Summarize an editing pass with before/after metrics
    pub fn create_editing_summary(&self, output: &EditorOutput) -> EditingSummary {
        let original = validator::analyze(&output.original_content);
        let fin = validator::analyze(&output.edited_content);

        let critical_issues = output
            .recommendations
            .iter()
            .filter(|r| {
                let lowered = r.to_lowercase();
                lowered.contains("significant") || lowered.contains("requires")
            })
            .count();

        let mut confidence = output.final_quality_score / 100.0;
        if output.improvements_made.len() >= 3 {
            confidence += 0.1;
        }
        if critical_issues > 0 {
            confidence -= 0.2;
        }

        EditingSummary {
            editing_metrics: EditingMetrics {
                original_word_count: original.word_count,
                final_word_count: fin.word_count,
                original_quality_score: original.quality_score,
                final_quality_score: fin.quality_score,
                readability_improvement: fin.readability_score - original.readability_score,
                issues_resolved: original.issues.len() as i64 - fin.issues.len() as i64,
            },
            key_improvements: output.improvements_made.clone(),
            final_recommendations: output.recommendations.clone(),
            editor_confidence: confidence.clamp(0.0, 1.0),
            ready_for_publication: fin.quality_score >= 80.0,
        }
    }
}

/// Apply all improvement transforms in sequence
fn improve_content(content: &str) -> String {
    let improved = normalize_headings(content);
    let improved = fix_paragraph_spacing(&improved);
    let improved = improve_clarity(&improved);
    let improved = improve_flow(&improved);
    let improved = split_long_sentences(&improved);
    fix_grammar(&improved)
}

/// Ensure a single space after the `#` run of each heading
fn normalize_headings(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            if line.starts_with('#') {
                let level = line.chars().take_while(|c| *c == '#').count();
                let heading_text = line.trim_start_matches('#').trim();
                format!("{} {}", "#".repeat(level), heading_text)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse intra-paragraph line breaks and drop empty blocks
fn fix_paragraph_spacing(content: &str) -> String {
    content
        .split("\n\n")
        .filter_map(|para| {
            let cleaned = para.trim();
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.split('\n').collect::<Vec<_>>().join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn improve_clarity(content: &str) -> String {
    let mut improved = content.to_string();
    for (wordy, concise) in CLARITY_REPLACEMENTS {
        improved = improved.replace(wordy, concise);
    }
    improved
}

/// Prepend transition words to substantial paragraphs that lack one,
/// chosen from adjacent-paragraph sentiment keywords
fn improve_flow(content: &str) -> String {
    let paragraphs: Vec<&str> = content.split("\n\n").collect();
    let mut improved: Vec<String> = Vec::with_capacity(paragraphs.len());

    for (i, para) in paragraphs.iter().enumerate() {
        let mut paragraph = para.to_string();

        if i > 0 && text::word_count(para) > 20 {
            let trimmed = para.trim();
            let has_transition = TRANSITION_STARTERS
                .iter()
                .any(|starter| trimmed.starts_with(starter));

            if !has_transition {
                let lowered = para.to_lowercase();
                if lowered.contains("benefit") || lowered.contains("advantage") {
                    if paragraphs[i - 1].to_lowercase().contains("challenge") {
                        paragraph = format!("However, {}", paragraph);
                    } else {
                        paragraph = format!("Additionally, {}", paragraph);
                    }
                } else if lowered.contains("challenge") || lowered.contains("difficult") {
                    paragraph = format!("However, {}", paragraph);
                }
            }
        }

        improved.push(paragraph);
    }

    improved.join("\n\n")
}

/// Split sentences longer than 30 words at " and " or " which "
///
/// Operates per paragraph and leaves heading lines untouched so the
/// document's markdown structure survives the pass.
fn split_long_sentences(content: &str) -> String {
    content
        .split("\n\n")
        .map(|para| {
            if para.trim_start().starts_with('#') {
                return para.to_string();
            }
            split_paragraph_sentences(para)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn split_paragraph_sentences(para: &str) -> String {
    let ends_with_period = para.trim_end().ends_with('.');
    let mut sentences: Vec<String> = Vec::new();

    for sentence in para.split('.') {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        if text::word_count(sentence) > 30 {
            if let Some((first, second)) = sentence.split_once(" and ") {
                sentences.push(first.trim().to_string());
                sentences.push(second.trim().to_string());
                continue;
            }
            if let Some((first, second)) = sentence.split_once(" which ") {
                sentences.push(first.trim().to_string());
                sentences.push(format!("This {}", second.trim()));
                continue;
            }
        }

        sentences.push(sentence.to_string());
    }

    let mut rebuilt = sentences.join(". ");
    if ends_with_period && !rebuilt.is_empty() {
        rebuilt.push('.');
    }
    rebuilt
}

/// Spacing and capitalization fixups
fn fix_grammar(content: &str) -> String {
    let mut improved = content.to_string();

    for (incorrect, correct) in [(" ,", ","), (" .", "."), (",,", ","), ("..", "."), ("  ", " ")] {
        improved = improved.replace(incorrect, correct);
    }

    // Capitalize the first letter after a sentence boundary
    improved
        .split(". ")
        .map(|sentence| {
            let mut chars = sentence.chars();
            match chars.next() {
                Some(first) if first.is_lowercase() => {
                    format!("{}{}", first.to_uppercase(), chars.as_str())
                }
                _ => sentence.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(". ")
}

fn track_improvements(original: &str, improved: &str) -> Vec<String> {
    let mut improvements = Vec::new();

    let original_words = text::word_count(original);
    let improved_words = text::word_count(improved);
    if improved_words != original_words {
        if improved_words < original_words {
            improvements.push(format!(
                "Reduced word count by {} words for better conciseness",
                original_words - improved_words
            ));
        } else {
            improvements.push(format!(
                "Expanded content by {} words for better clarity",
                improved_words - original_words
            ));
        }
    }

    let original_headings = original.matches('#').count();
    let improved_headings = improved.matches('#').count();
    if improved_headings > original_headings {
        improvements.push("Added headings to improve content structure".to_string());
    }

    let original_paras = text::paragraphs(original).len();
    let improved_paras = text::paragraphs(improved).len();
    if improved_paras != original_paras {
        improvements.push("Reorganized content into better paragraph structure".to_string());
    }

    let count_transitions = |content: &str| {
        TRANSITION_WORDS
            .iter()
            .map(|word| content.matches(word).count())
            .sum::<usize>()
    };
    if count_transitions(improved) > count_transitions(original) {
        improvements.push("Added transition words to improve flow".to_string());
    }

    if improvements.is_empty() {
        improvements.push("Made minor improvements to clarity and readability".to_string());
    }

    improvements
}

fn generate_editing_notes(
    original: &str,
    improved: &str,
    requirements: &Requirements,
) -> Vec<String> {
    let mut notes = Vec::new();

    let original_quality = validator::analyze(original);
    let improved_quality = validator::analyze(improved);

    if improved_quality.quality_score > original_quality.quality_score {
        notes.push(format!(
            "Quality score improved from {} to {}",
            original_quality.quality_score, improved_quality.quality_score
        ));
    }

    if improved_quality.issues.len() < original_quality.issues.len() {
        notes.push(format!(
            "Resolved {} content issues",
            original_quality.issues.len() - improved_quality.issues.len()
        ));
    }

    if improved_quality.readability_score > original_quality.readability_score {
        notes.push(format!(
            "Improved readability score from {} to {}",
            original_quality.readability_score, improved_quality.readability_score
        ));
    }

    let target_words = requirements.word_count;
    let actual_words = text::word_count(improved);
    if (actual_words as f64 - target_words as f64).abs() <= target_words as f64 * 0.1 {
        notes.push(format!(
            "Content length optimized to target ({} words)",
            actual_words
        ));
    }

    notes.push("Applied standard editorial best practices".to_string());
    notes.push("Ensured consistency in tone and style".to_string());

    notes
}

fn generate_recommendations(
    content: &str,
    analysis: &ContentAnalysis,
    requirements: &Requirements,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let quality_score = analysis.quality_score;

    if quality_score >= 90.0 {
        recommendations.push("Excellent content quality - ready for publication".to_string());
        recommendations
            .push("Consider this content for featured placement or promotion".to_string());
    } else if quality_score >= 80.0 {
        recommendations
            .push("Good content quality - minor improvements may enhance impact".to_string());
        recommendations.push("Content is ready for publication".to_string());
    } else if quality_score >= 70.0 {
        recommendations.push("Content needs minor improvements before publication".to_string());
        recommendations.push("Consider additional review of structure and clarity".to_string());
    } else {
        recommendations.push("Content requires significant improvements".to_string());
        recommendations.push("Recommend additional editing pass before publication".to_string());
    }

    for issue in analysis.issues.iter().take(3) {
        recommendations.push(format!("Address: {}", issue));
    }

    let word_count = text::word_count(content);
    let target_words = requirements.word_count;
    if (word_count as f64) < target_words as f64 * 0.9 {
        recommendations.push(format!(
            "Consider expanding content to reach target word count ({} words)",
            target_words
        ));
    } else if word_count as f64 > target_words as f64 * 1.1 {
        recommendations.push(format!(
            "Consider condensing content to meet target word count ({} words)",
            target_words
        ));
    }

    if !requirements.seo_keywords.is_empty() {
        let content_lower = content.to_lowercase();
        let missing: Vec<&str> = requirements
            .seo_keywords
            .iter()
            .filter(|kw| !content_lower.contains(&kw.to_lowercase()))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            recommendations.push(format!(
                "Consider incorporating missing SEO keywords: {}",
                missing.join(", ")
            ));
        }
    }

    recommendations.truncate(5);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements() -> Requirements {
        Requirements::new("Testing").with_word_count(100)
    }

    #[test]
    fn test_normalize_headings() {
        assert_eq!(normalize_headings("##   Spaced Out"), "## Spaced Out");
        assert_eq!(normalize_headings("#Tight"), "# Tight");
        assert_eq!(normalize_headings("plain text"), "plain text");
    }

    #[test]
    fn test_fix_paragraph_spacing() {
        let content = "First line\ncontinues here.\n\n\n\nSecond paragraph.";
        let fixed = fix_paragraph_spacing(content);
        assert_eq!(fixed, "First line continues here.\n\nSecond paragraph.");
    }

    #[test]
    fn test_clarity_replacements() {
        let improved = improve_clarity("We did this in order to win due to the fact that we care.");
        assert_eq!(improved, "We did this to win because we care.");
    }

    #[test]
    fn test_transition_insertion() {
        let intro = "This opening paragraph sets the scene for everything that follows in the document.";
        let body = "The benefit and advantage of the approach become clear once the team has \
                    used the process for several weeks in production settings.";
        let content = format!("{}\n\n{}", intro, body);
        let improved = improve_flow(&content);
        assert!(improved.contains("Additionally, The benefit"));
    }

    #[test]
    fn test_long_sentence_split_preserves_headings() {
        let long_sentence = format!(
            "{} and {}.",
            "the first half keeps adding words until it is quite long overall today".repeat(2).trim(),
            "the second half continues with even more words"
        );
        let content = format!("# Heading Stays\n\n{}", long_sentence);
        let result = split_long_sentences(&content);
        assert!(result.starts_with("# Heading Stays\n\n"));
        // The split point became a sentence boundary
        assert!(result.matches(". ").count() >= 1);
        assert!(result.ends_with('.'));
    }

    #[test]
    fn test_fix_grammar_spacing_and_capitalization() {
        let fixed = fix_grammar("Something odd . next sentence starts lowercase. and here,, too");
        assert!(!fixed.contains(" ."));
        assert!(!fixed.contains(",,"));
        assert!(fixed.contains(". Next sentence"));
        assert!(fixed.contains(". And here"));
    }

    #[test]
    fn test_edit_content_outputs() {
        let editor = EditorAgent::new();
        let content = "# Test Article\n\nThis is a test article. It has multiple sentences. \
                       Some sentences are longer than others.\n\n## Section 1\n\nThis section \
                       contains information about the topic. It provides details and explanations.";
        let output = editor.edit_content(content, &requirements());

        assert!(!output.edited_content.is_empty());
        assert!(!output.improvements_made.is_empty());
        assert!(output.final_quality_score >= 0.0);
        assert!(output.recommendations.len() <= 5);
        assert_eq!(output.original_content, content);
    }

    #[test]
    fn test_second_pass_is_stable() {
        let editor = EditorAgent::new();
        let content = "# Guide\n\nThe process works well. Teams adopt it quickly. Everyone \
                       understands the overall approach. The results speak for themselves.";

        let first = editor.edit_content(content, &requirements());
        let second = editor.edit_content(&first.edited_content, &requirements());

        // A normalized document yields no further structural improvements
        assert_eq!(
            second.improvements_made,
            vec!["Made minor improvements to clarity and readability".to_string()]
        );
        assert!(second.final_quality_score >= first.final_quality_score);
    }

    #[test]
    fn test_missing_keyword_recommendation() {
        let editor = EditorAgent::new();
        let requirements = Requirements::new("Testing")
            .with_word_count(20)
            .with_keywords(["absent keyword"]);
        let output = editor.edit_content(
            "# Title\n\nShort body text that says nothing about the keyword topic at all.",
            &requirements,
        );
        assert!(output
            .recommendations
            .iter()
            .any(|r| r.contains("missing SEO keywords: absent keyword")));
    }

    #[test]
    fn test_editing_summary_confidence_range() {
        let editor = EditorAgent::new();
        let output = editor.edit_content(
            "# Title\n\nA reasonable short document. It reads fine. Nothing fancy happens here.",
            &requirements(),
        );
        let summary = editor.create_editing_summary(&output);
        assert!((0.0..=1.0).contains(&summary.editor_confidence));
        assert_eq!(
            summary.ready_for_publication,
            output.final_quality_score >= 80.0
        );
    }
}
