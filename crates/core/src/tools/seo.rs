//! # SEO Analyzer
//!
//! Heuristic search-optimization analysis over free text: keyword usage,
//! structural signals, meta-tag suggestions, a 0-100 score, and templated
//! recommendations. Pure function of its inputs; used by the SEO stage
//! before and after optimization.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::text;

/// Usage statistics for a single target keyword
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeywordStats {
    pub keyword: String,
    /// Case-insensitive occurrence count
    pub count: usize,
    /// Percentage of total words; 0 when the content is empty
    pub density: f64,
    /// Character offsets of each occurrence (overlap allowed)
    pub positions: Vec<usize>,
}

/// Keyword usage across the whole keyword list
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeywordAnalysis {
    pub stats: Vec<KeywordStats>,
    /// Keywords that never occur in the content
    pub missing_keywords: Vec<String>,
}

/// Structural signals relevant to search engines
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentStructure {
    pub has_headings: bool,
    /// One entry per heading, formatted "H{level}: {text}"
    pub heading_hierarchy: Vec<String>,
    pub paragraph_count: usize,
    pub avg_paragraph_length: f64,
    pub has_lists: bool,
    pub internal_links: usize,
    pub word_count: usize,
}

/// Meta-tag suggestions derived from the content itself
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MetaSuggestions {
    pub title: String,
    pub description: String,
}

/// Full SEO analysis result
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeoAnalysis {
    pub keyword_analysis: KeywordAnalysis,
    pub content_structure: ContentStructure,
    pub meta_suggestions: MetaSuggestions,
    /// 0-100 search-optimization score
    pub seo_score: f64,
    pub recommendations: Vec<String>,
}

/// Analyze content against a target keyword list
pub fn analyze(content: &str, target_keywords: &[String]) -> SeoAnalysis {
    let keyword_analysis = analyze_keywords(content, target_keywords);
    let content_structure = analyze_structure(content);
    let meta_suggestions = generate_meta_suggestions(content);

    let seo_score = calculate_seo_score(&keyword_analysis, &content_structure);
    let recommendations = generate_recommendations(&keyword_analysis, &content_structure);

    SeoAnalysis {
        keyword_analysis,
        content_structure,
        meta_suggestions,
        seo_score,
        recommendations,
    }
}

fn analyze_keywords(content: &str, keywords: &[String]) -> KeywordAnalysis {
    let content_lower = content.to_lowercase();
    let total_words = text::word_count(content);

    let mut stats = Vec::new();
    let mut missing_keywords = Vec::new();

    for keyword in keywords {
        let keyword_lower = keyword.to_lowercase();
        let positions = find_positions(&content_lower, &keyword_lower);
        let count = content_lower.matches(keyword_lower.as_str()).count();

        let density = if total_words > 0 {
            text::round_to(count as f64 / total_words as f64 * 100.0, 2)
        } else {
            0.0
        };

        if count == 0 {
            missing_keywords.push(keyword.clone());
        }

        stats.push(KeywordStats {
            keyword: keyword.clone(),
            count,
            density,
            positions,
        });
    }

    KeywordAnalysis {
        stats,
        missing_keywords,
    }
}

/// Character offsets of every occurrence, advancing one character at a
/// time so overlapping matches are all reported
fn find_positions(haystack: &str, needle: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() {
        return positions;
    }
    let haystack_chars: Vec<char> = haystack.chars().collect();
    let needle_chars: Vec<char> = needle.chars().collect();
    if needle_chars.len() > haystack_chars.len() {
        return positions;
    }
    for start in 0..=(haystack_chars.len() - needle_chars.len()) {
        if haystack_chars[start..start + needle_chars.len()] == needle_chars[..] {
            positions.push(start);
        }
    }
    positions
}

fn analyze_structure(content: &str) -> ContentStructure {
    let heading_marker_re = Regex::new(r"#+\s").expect("valid heading marker pattern");
    let heading_re = Regex::new(r"(?m)^(#+)\s+(.+)$").expect("valid heading pattern");
    let list_re = Regex::new(r"(?m)^\s*[-*+]\s").expect("valid list pattern");
    let link_re = Regex::new(r"\[[^\]\n]*\]\([^)\n]*\)").expect("valid link pattern");

    let heading_hierarchy: Vec<String> = heading_re
        .captures_iter(content)
        .map(|cap| format!("H{}: {}", cap[1].len(), &cap[2]))
        .collect();

    ContentStructure {
        has_headings: heading_marker_re.is_match(content),
        heading_hierarchy,
        paragraph_count: text::paragraphs(content).len(),
        avg_paragraph_length: text::round_to(text::avg_paragraph_length(content), 1),
        has_lists: list_re.is_match(content),
        internal_links: link_re.find_iter(content).count(),
        word_count: text::word_count(content),
    }
}

fn generate_meta_suggestions(content: &str) -> MetaSuggestions {
    let first_sentence = text::first_sentence(content).unwrap_or_default();

    let title = if text::char_count(first_sentence) > 60 {
        format!("{}...", text::prefix_chars(first_sentence, 60))
    } else {
        first_sentence.to_string()
    };

    let description = if text::char_count(content) > 155 {
        format!("{}...", text::prefix_chars(content, 155))
    } else {
        content.to_string()
    };

    MetaSuggestions {
        title,
        description: description.replace('\n', " ").trim().to_string(),
    }
}

fn calculate_seo_score(keywords: &KeywordAnalysis, structure: &ContentStructure) -> f64 {
    let mut score = 100.0;

    score -= keywords.missing_keywords.len() as f64 * 10.0;

    if !structure.has_headings {
        score -= 20.0;
    }
    if structure.word_count < 300 {
        score -= 15.0;
    }
    if structure.avg_paragraph_length > 150.0 {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}

fn generate_recommendations(
    keywords: &KeywordAnalysis,
    structure: &ContentStructure,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !keywords.missing_keywords.is_empty() {
        recommendations.push(format!(
            "Include missing keywords: {}",
            keywords.missing_keywords.join(", ")
        ));
    }
    if !structure.has_headings {
        recommendations.push("Add headings to improve content structure".to_string());
    }
    if structure.word_count < 300 {
        recommendations.push("Increase content length to at least 300 words".to_string());
    }
    if structure.avg_paragraph_length > 150.0 {
        recommendations.push("Break up long paragraphs for better readability".to_string());
    }
    if !structure.has_lists {
        recommendations.push("Consider adding bullet points or numbered lists".to_string());
    }
    if structure.internal_links == 0 {
        recommendations.push("Add internal links to related content".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_keyword_density_identity() {
        let content = "rust is fast. rust is safe. nothing else matters here";
        let analysis = analyze(content, &kw(&["rust"]));
        let stats = &analysis.keyword_analysis.stats[0];
        let expected = 2.0 / content.split_whitespace().count() as f64 * 100.0;
        assert_eq!(stats.count, 2);
        assert_eq!(stats.density, text::round_to(expected, 2));
    }

    #[test]
    fn test_keyword_density_zero_for_empty_content() {
        let analysis = analyze("", &kw(&["rust"]));
        let stats = &analysis.keyword_analysis.stats[0];
        assert_eq!(stats.count, 0);
        assert_eq!(stats.density, 0.0);
        assert_eq!(analysis.keyword_analysis.missing_keywords, vec!["rust"]);
    }

    #[test]
    fn test_positions_are_case_insensitive() {
        let analysis = analyze("Rust and rust and RUST", &kw(&["rust"]));
        assert_eq!(analysis.keyword_analysis.stats[0].positions.len(), 3);
    }

    #[test]
    fn test_structure_detection() {
        let content = "# Title\n\nSome intro text here.\n\n## Section\n\n- item one\n- item two\n\nSee [docs](https://example.com) for more.";
        let analysis = analyze(content, &[]);
        let structure = &analysis.content_structure;
        assert!(structure.has_headings);
        assert_eq!(structure.heading_hierarchy.len(), 2);
        assert_eq!(structure.heading_hierarchy[0], "H1: Title");
        assert!(structure.has_lists);
        assert_eq!(structure.internal_links, 1);
    }

    #[test]
    fn test_score_penalizes_missing_structure() {
        let flat = analyze("short text without structure", &kw(&["absent"]));
        // -10 missing keyword, -20 no headings, -15 under 300 words
        assert_eq!(flat.seo_score, 55.0);
        assert!(flat
            .recommendations
            .iter()
            .any(|r| r.contains("missing keywords: absent")));
    }

    #[test]
    fn test_meta_suggestions_truncate() {
        let long = format!("{}. More text follows here.", "word ".repeat(40).trim());
        let analysis = analyze(&long, &[]);
        assert!(text::char_count(&analysis.meta_suggestions.title) <= 63);
        assert!(text::char_count(&analysis.meta_suggestions.description) <= 158);
    }
}
