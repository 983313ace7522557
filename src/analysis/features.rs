//! Feature extraction: word count, experience years, contact-info
//! probes, and section/verb presence checks.

use crate::analysis::catalog::{PROFESSIONAL_VERBS, SECTION_MARKERS};
use crate::error::{Result, ResumeInsightError};
use regex::Regex;

/// Upper bound on extracted years of experience.
pub const MAX_EXPERIENCE_YEARS: u32 = 60;

#[derive(Debug, Clone, Default)]
pub struct ResumeFeatures {
    /// Whitespace-separated tokens of the raw input.
    pub word_count: usize,
    /// First "N years of experience"-style figure, clamped to [0, 60].
    pub experience_years: u32,
    pub has_email: bool,
    pub has_phone: bool,
    /// Section markers present as substrings of the lowercased text.
    pub section_hits: usize,
    /// Professional verbs present as substrings of the lowercased text.
    pub verb_hits: usize,
}

pub struct FeatureExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    experience_regex: Regex,
}

impl FeatureExtractor {
    pub fn new() -> Result<Self> {
        let email_regex = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
            .map_err(invalid_regex)?;

        let phone_regex = Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").map_err(invalid_regex)?;

        let experience_regex =
            Regex::new(r"(?i)(\d+)[+\s]*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)")
                .map_err(invalid_regex)?;

        Ok(Self {
            email_regex,
            phone_regex,
            experience_regex,
        })
    }

    /// Extract all features. `raw` is the untouched input; `lower` is the
    /// case-folded view (substring probes run against it).
    pub fn extract(&self, raw: &str, lower: &str) -> ResumeFeatures {
        ResumeFeatures {
            word_count: word_count(raw),
            experience_years: self.experience_years(raw),
            has_email: self.email_regex.is_match(raw),
            has_phone: self.phone_regex.is_match(raw),
            section_hits: SECTION_MARKERS.iter().filter(|s| lower.contains(*s)).count(),
            verb_hits: self.found_verbs(lower).len(),
        }
    }

    /// Professional verbs present in the lowercased text, table order.
    /// Matching is substring-based by design ("led" matches in "sled").
    pub fn found_verbs(&self, lower: &str) -> Vec<&'static str> {
        PROFESSIONAL_VERBS
            .iter()
            .filter(|v| lower.contains(*v))
            .copied()
            .collect()
    }

    fn experience_years(&self, text: &str) -> u32 {
        self.experience_regex
            .captures(text)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .map_or(0, |years| years.min(MAX_EXPERIENCE_YEARS))
    }
}

/// Count of whitespace-separated tokens in the raw input.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn invalid_regex(e: regex::Error) -> ResumeInsightError {
    ResumeInsightError::TextProcessing(format!("Invalid regex: {}", e))
}
