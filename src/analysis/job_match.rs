//! Job-description matching
//!
//! Set overlap between the resume's alphabetic tokens and the
//! stop-filtered job-description tokens. Matched/missing lists are
//! capped at 15 entries; `BTreeSet` iteration keeps them deterministic,
//! but consumers should rely on membership only.

use crate::analysis::catalog::STOP_WORDS;
use crate::analysis::normalize::{alpha_tokens, NormalizedText};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Maximum entries reported in each keyword list.
const MAX_KEYWORDS_SHOWN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAnalysis {
    /// Percentage of job keywords found in the resume, 0..=100.
    pub match_score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Size of the stop-filtered job keyword set before truncation.
    pub total_job_keywords: usize,
}

impl JobAnalysis {
    /// The zero report returned when no job description was supplied.
    pub fn empty() -> Self {
        Self {
            match_score: 0,
            matched_keywords: Vec::new(),
            missing_keywords: Vec::new(),
            total_job_keywords: 0,
        }
    }
}

pub struct JobMatcher {
    stop_words: HashSet<&'static str>,
}

impl JobMatcher {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Compare a resume against a job description. Whitespace-only job
    /// text yields the zero report.
    pub fn analyze(&self, resume: &NormalizedText, job_description: &str) -> JobAnalysis {
        if job_description.trim().is_empty() {
            return JobAnalysis::empty();
        }

        let resume_set: BTreeSet<&str> =
            resume.tokens_alpha.iter().map(|t| t.as_str()).collect();

        let job_tokens = alpha_tokens(job_description);
        let job_keywords: BTreeSet<&str> = job_tokens
            .iter()
            .map(|t| t.as_str())
            .filter(|t| !self.stop_words.contains(t))
            .collect();

        let matched: Vec<&str> = job_keywords.intersection(&resume_set).copied().collect();
        let missing: Vec<&str> = job_keywords.difference(&resume_set).copied().collect();

        let match_score = if job_keywords.is_empty() {
            0
        } else {
            (100 * matched.len() / job_keywords.len()).min(100) as u8
        };

        JobAnalysis {
            match_score,
            matched_keywords: truncate_owned(&matched),
            missing_keywords: truncate_owned(&missing),
            total_job_keywords: job_keywords.len(),
        }
    }
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_owned(words: &[&str]) -> Vec<String> {
    words
        .iter()
        .take(MAX_KEYWORDS_SHOWN)
        .map(|w| (*w).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(resume: &str, job: &str) -> JobAnalysis {
        JobMatcher::new().analyze(&NormalizedText::new(resume), job)
    }

    #[test]
    fn test_empty_job_description() {
        let report = analyze("python docker kubernetes", "");
        assert_eq!(report, JobAnalysis::empty());

        let report = analyze("python docker kubernetes", "   \n\t ");
        assert_eq!(report, JobAnalysis::empty());
    }

    #[test]
    fn test_perfect_match() {
        let report = analyze(
            "built services in python with docker and kubernetes on terraform",
            "python docker kubernetes terraform",
        );
        assert_eq!(report.match_score, 100);
        assert_eq!(report.total_job_keywords, 4);
        assert!(report.missing_keywords.is_empty());
        for kw in ["python", "docker", "kubernetes", "terraform"] {
            assert!(report.matched_keywords.iter().any(|m| m == kw));
        }
    }

    #[test]
    fn test_no_overlap() {
        let resume = "alpha ".repeat(300);
        let report = analyze(&resume, "beta gamma delta epsilon zeta");
        assert_eq!(report.match_score, 0);
        assert!(report.matched_keywords.is_empty());
        assert_eq!(report.total_job_keywords, 5);
        for kw in ["beta", "gamma", "delta", "epsilon", "zeta"] {
            assert!(report.missing_keywords.iter().any(|m| m == kw));
        }
    }

    #[test]
    fn test_stop_words_filtered() {
        // "with", "team", "company" are stop words; "rust" is not
        let report = analyze("nothing relevant here", "work with the team company rust");
        assert_eq!(report.total_job_keywords, 1);
        assert!(report.missing_keywords.iter().any(|m| m == "rust"));
    }

    #[test]
    fn test_short_tokens_excluded() {
        // "aws" and "go" fall under the four-letter token floor
        let report = analyze("aws go expert", "aws go java");
        assert_eq!(report.total_job_keywords, 1);
        assert!(report.missing_keywords.iter().any(|m| m == "java"));
    }

    #[test]
    fn test_match_and_missing_are_disjoint() {
        let report = analyze(
            "experienced python developer shipping microservices",
            "python golang microservices kafka",
        );
        for m in &report.matched_keywords {
            assert!(!report.missing_keywords.contains(m));
        }
        assert!(report.match_score <= 100);
    }

    #[test]
    fn test_score_is_floor_percentage() {
        // 1 of 3 keywords matched -> 33
        let report = analyze("knows python well", "python golang kafka");
        assert_eq!(report.match_score, 33);
    }

    #[test]
    fn test_lists_capped_at_fifteen() {
        let job = (b'a'..=b'z')
            .map(|c| format!("keyword{}", c as char))
            .collect::<Vec<_>>()
            .join(" ");
        let report = analyze("nothing shared", &job);
        assert_eq!(report.missing_keywords.len(), 15);
        assert_eq!(report.total_job_keywords, 26);
    }
}
