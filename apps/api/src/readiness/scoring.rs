//! Scoring engine — deterministic keyword scoring of resume / JD text.
//!
//! Algorithm:
//! 1. Normalize text (lowercase, collapse whitespace, trim).
//! 2. Per category, count keywords present as substrings (each keyword counts once).
//! 3. ratio = hits / max(total, 1): ≥0.35 → High, ≥0.15 → Medium, else Low.
//! 4. Map level → score (100 / 60 / 25) and level vs expected → status.
//! 5. overall = round(Σ score / (categories × 100) × 100), clamped to 0–100.
//!
//! No I/O and no randomness. Identical (text, role) always yields an identical result.

use serde::{Deserialize, Serialize};

use crate::readiness::taxonomy::{Category, Level, Taxonomy};

const HIGH_RATIO: f64 = 0.35;
const MEDIUM_RATIO: f64 = 0.15;
const MAX_CATEGORY_SCORE: u32 = 100;

/// Outcome of comparing a category's level against its expected level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

/// Scored result for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAreaResult {
    #[serde(rename = "skillArea")]
    pub category: Category,
    pub expected_level: Level,
    pub your_level: Level,
    pub status: Status,
    pub score: u32,
    pub hits: usize,
    pub total_keywords: usize,
}

/// Full deterministic analysis, before insight text and score perturbation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub role: String,
    pub overall_score: u32,
    pub skill_areas: Vec<SkillAreaResult>,
    pub weak_areas: Vec<Category>,
}

/// Unicode whitespace plus U+FEFF, which browsers and editors leave in pasted text.
pub fn is_text_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Lowercases and collapses every whitespace run to a single space.
pub fn normalize_text(text: &str) -> String {
    text.split(is_text_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Number of keywords that occur anywhere in `normalized` (substring match).
pub fn count_keyword_hits<S: AsRef<str>>(normalized: &str, keywords: &[S]) -> usize {
    keywords
        .iter()
        .filter(|kw| normalized.contains(&kw.as_ref().to_lowercase()))
        .count()
}

pub fn classify_level(hits: usize, total_keywords: usize) -> Level {
    if total_keywords == 0 {
        return Level::Low;
    }
    let ratio = hits as f64 / total_keywords as f64;
    if ratio >= HIGH_RATIO {
        Level::High
    } else if ratio >= MEDIUM_RATIO {
        Level::Medium
    } else {
        Level::Low
    }
}

pub fn level_score(level: Level) -> u32 {
    match level {
        Level::High => 100,
        Level::Medium => 60,
        Level::Low => 25,
    }
}

/// Decision table, evaluated top to bottom.
pub fn status_for(your_level: Level, expected_level: Level) -> Status {
    match (your_level, expected_level) {
        (Level::High, _) => Status::Good,
        (Level::Medium, Level::High) => Status::NeedsWork,
        (Level::Medium, _) => Status::Good,
        (Level::Low, _) => Status::NeedsWork,
    }
}

/// Scores `text` against the framework for `role`.
///
/// Unknown roles fall back to the Backend Engineer stack; the returned
/// `role` still echoes what the caller passed.
pub fn analyze(taxonomy: &Taxonomy, text: &str, role: &str) -> AnalysisResult {
    let framework = taxonomy.framework(role);
    let normalized = normalize_text(text);

    let skill_areas: Vec<SkillAreaResult> = Category::ALL
        .iter()
        .map(|&category| {
            let keywords = framework.keywords(category);
            let hits = count_keyword_hits(&normalized, keywords);
            let your_level = classify_level(hits, keywords.len().max(1));
            let expected_level = framework.expected_level(category);
            SkillAreaResult {
                category,
                expected_level,
                your_level,
                status: status_for(your_level, expected_level),
                score: level_score(your_level),
                hits,
                total_keywords: keywords.len(),
            }
        })
        .collect();

    let total: u32 = skill_areas.iter().map(|a| a.score).sum();
    let max_score = skill_areas.len() as u32 * MAX_CATEGORY_SCORE;
    let overall = if max_score > 0 {
        (total as f64 / max_score as f64 * 100.0).round() as u32
    } else {
        0
    };

    let weak_areas = skill_areas
        .iter()
        .filter(|a| a.status == Status::NeedsWork)
        .map(|a| a.category)
        .collect();

    AnalysisResult {
        role: role.to_string(),
        overall_score: overall.min(100),
        skill_areas,
        weak_areas,
    }
}
