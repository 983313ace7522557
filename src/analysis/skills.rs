//! Skill detection with whole-word boundary matching
//!
//! A single Aho-Corasick automaton scans the lowercased text for every
//! catalog entry at once; candidate matches are then filtered on word
//! boundaries so "sql" inside "nosql" is rejected while "SQL," at a
//! sentence end counts. Punctuation inside a name (`c++`, `vue.js`) is
//! matched literally.

use crate::analysis::catalog::{SkillCategory, SKILL_CATALOG};
use crate::error::{Result, ResumeInsightError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillHit {
    /// Canonical display name from the catalog.
    pub name: String,
    /// Number of whole-word matches, always >= 1.
    pub count: usize,
    pub category: SkillCategory,
}

pub struct SkillDetector {
    matcher: AhoCorasick,
}

impl SkillDetector {
    pub fn new() -> Result<Self> {
        let patterns: Vec<String> = SKILL_CATALOG
            .iter()
            .map(|(name, _)| name.to_lowercase())
            .collect();

        let matcher = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeInsightError::TextProcessing(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self { matcher })
    }

    /// Detect catalog skills in the lowercased text. Hits are sorted by
    /// count descending, ties kept in catalog order.
    pub fn detect(&self, text_lower: &str) -> Vec<SkillHit> {
        let mut counts = vec![0usize; SKILL_CATALOG.len()];

        for mat in self.matcher.find_overlapping_iter(text_lower) {
            if is_word_bounded(text_lower, mat.start(), mat.end()) {
                counts[mat.pattern().as_usize()] += 1;
            }
        }

        let mut hits: Vec<SkillHit> = SKILL_CATALOG
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|((name, category), count)| SkillHit {
                name: (*name).to_string(),
                count,
                category: *category,
            })
            .collect();

        // Stable sort keeps catalog order within equal counts
        hits.sort_by(|a, b| b.count.cmp(&a.count));
        hits
    }
}

/// A match is whole-word when the characters adjacent to it are not word
/// characters (letters or digits). Boundaries apply to the surrounding
/// context only, never inside the matched name.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}
