//! The analysis report structure

use crate::analysis::job_match::JobAnalysis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured result of one analysis call.
///
/// Field names are stable; downstream consumers (transport layers, UIs)
/// depend on them. When `valid` is false the numeric fields are present
/// and zero so consumers never special-case absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub valid: bool,

    /// Failure reason; only set when `valid` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Whitespace-separated tokens of the raw input.
    pub word_count: usize,

    /// Detected skills grouped by category, taken from the top 20 hits
    /// by occurrence count. Categories with no hits are omitted.
    pub skills: BTreeMap<String, Vec<String>>,

    /// Total distinct skills detected, before the top-20 truncation.
    pub skill_count: usize,

    /// Title-cased professional verbs found, at most 10.
    pub keywords: Vec<String>,

    /// ATS compatibility score, 0..=100.
    pub ats_score: u8,

    /// Extracted years of experience, 0..=60.
    pub experience_years: u32,

    /// Job-description comparison; absent when none was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_analysis: Option<JobAnalysis>,

    /// Improvement suggestions, 1..=8 entries.
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// The failure shape: everything zeroed, the message echoed as the
    /// single recommendation.
    pub fn invalid(word_count: usize, message: String) -> Self {
        Self {
            valid: false,
            message: Some(message.clone()),
            word_count,
            skills: BTreeMap::new(),
            skill_count: 0,
            keywords: Vec::new(),
            ats_score: 0,
            experience_years: 0,
            job_analysis: None,
            recommendations: vec![message],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_report_shape() {
        let report = AnalysisReport::invalid(3, "Resume too short (3 words). Minimum 50 required.".to_string());
        assert!(!report.valid);
        assert_eq!(report.word_count, 3);
        assert_eq!(report.ats_score, 0);
        assert_eq!(report.skill_count, 0);
        assert!(report.skills.is_empty());
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.message.as_deref(), report.recommendations.first().map(|s| s.as_str()));
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let mut report = AnalysisReport::invalid(0, "too short".to_string());
        report.valid = true;
        report.message = None;

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("message").is_none());
        assert!(json.get("job_analysis").is_none());
        assert_eq!(json["word_count"], 0);
    }
}
