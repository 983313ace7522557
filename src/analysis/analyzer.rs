//! Analysis orchestrator
//!
//! [`Analyzer`] builds the static machinery once (skill automaton,
//! feature regexes, stop-word set) and then answers any number of
//! `analyze` calls. A call is pure: no I/O, no clocks, no mutation, so
//! one `Analyzer` can be shared across threads freely.

use crate::analysis::ats;
use crate::analysis::features::FeatureExtractor;
use crate::analysis::job_match::JobMatcher;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::recommend::{self, RecommendationInput};
use crate::analysis::report::AnalysisReport;
use crate::analysis::skills::{SkillDetector, SkillHit};
use crate::error::Result;
use log::debug;
use std::collections::BTreeMap;

/// Resumes with fewer whitespace-separated words are rejected.
pub const MIN_WORD_COUNT: usize = 50;

/// Only the top hits by occurrence count are reported in `skills`.
const MAX_SKILLS_SHOWN: usize = 20;

/// At most this many professional verbs are surfaced as `keywords`.
const MAX_KEYWORDS: usize = 10;

pub struct Analyzer {
    detector: SkillDetector,
    features: FeatureExtractor,
    matcher: JobMatcher,
}

impl Analyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            detector: SkillDetector::new()?,
            features: FeatureExtractor::new()?,
            matcher: JobMatcher::new(),
        })
    }

    /// Analyze a resume, optionally against a job description. An empty
    /// or whitespace-only `job_description` means no matching requested.
    ///
    /// Never fails: inputs that cannot be analyzed come back as a report
    /// with `valid == false`.
    pub fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisReport {
        let word_count = resume_text.split_whitespace().count();

        if word_count < MIN_WORD_COUNT {
            let message = format!(
                "Resume too short ({} words). Minimum {} required.",
                word_count, MIN_WORD_COUNT
            );
            debug!("Rejecting resume: {}", message);
            return AnalysisReport::invalid(word_count, message);
        }

        let normalized = NormalizedText::new(resume_text);

        let hits = self.detector.detect(&normalized.lower);
        let skill_count = hits.len();
        let skills = group_by_category(&hits);
        debug!("Detected {} distinct skills", skill_count);

        let features = self.features.extract(resume_text, &normalized.lower);

        let keywords: Vec<String> = self
            .features
            .found_verbs(&normalized.lower)
            .iter()
            .take(MAX_KEYWORDS)
            .map(|v| title_case(v))
            .collect();

        let ats_score = ats::ats_score(skill_count, &features);

        let job_analysis = if job_description.trim().is_empty() {
            None
        } else {
            Some(self.matcher.analyze(&normalized, job_description))
        };

        let recommendations = recommend::generate(RecommendationInput {
            ats_score,
            skill_count,
            word_count,
            experience_years: features.experience_years,
            job_analysis: job_analysis.as_ref(),
        });

        AnalysisReport {
            valid: true,
            message: None,
            word_count,
            skills,
            skill_count,
            keywords,
            ats_score,
            experience_years: features.experience_years,
            job_analysis,
            recommendations,
        }
    }
}

/// Group the top hits into category -> names, preserving count order
/// within each category. Categories without hits get no key.
fn group_by_category(hits: &[SkillHit]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for hit in hits.iter().take(MAX_SKILLS_SHOWN) {
        grouped
            .entry(hit.category.to_string())
            .or_default()
            .push(hit.name.clone());
    }
    grouped
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new().unwrap()
    }

    fn pad_to_words(base: &str, words: usize) -> String {
        let current = base.split_whitespace().count();
        let mut text = base.to_string();
        for _ in current..words {
            text.push_str(" filler");
        }
        text
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let report = analyzer().analyze("", "");
        assert!(!report.valid);
        assert!(report.message.as_deref().unwrap().contains("too short"));
        assert_eq!(report.ats_score, 0);
        assert_eq!(report.skill_count, 0);
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn test_minimum_length_no_skills() {
        let text = "word ".repeat(60);
        let report = analyzer().analyze(&text, "");
        assert!(report.valid);
        assert_eq!(report.word_count, 60);
        assert_eq!(report.skill_count, 0);
        // 10 (skills floor) + 10 (length outside all bands)
        assert_eq!(report.ats_score, 20);
        assert_eq!(report.experience_years, 0);
        assert!(report.job_analysis.is_none());
    }

    #[test]
    fn test_forty_nine_words_rejected_fifty_accepted() {
        let a = analyzer();
        let just_short = "word ".repeat(MIN_WORD_COUNT - 1);
        assert!(!a.analyze(&just_short, "").valid);

        let just_enough = "word ".repeat(MIN_WORD_COUNT);
        assert!(a.analyze(&just_enough, "").valid);
    }

    #[test]
    fn test_rich_resume_report() {
        let base = "Experienced engineer with Python, Docker, Kubernetes and AWS; \
                    led a team and developed services; 7 years of experience. \
                    Email: a@b.co. Phone: 555-555-5555.";
        let text = pad_to_words(base, 400);
        let report = analyzer().analyze(&text, "");

        assert!(report.valid);
        assert!(report.skill_count >= 4);
        let all_skills: Vec<&String> = report.skills.values().flatten().collect();
        for skill in ["Python", "Docker", "Kubernetes", "AWS"] {
            assert!(all_skills.iter().any(|s| *s == skill), "missing {}", skill);
        }
        assert_eq!(report.experience_years, 7);
        // contact 10 + length 20 + skills 20 + verbs >= 4
        assert!(report.ats_score >= 54);
        assert!(report.ats_score <= 100);
        assert!(report.job_analysis.is_none());
        assert!(report.keywords.iter().any(|k| k == "Led"));
        assert!(report.keywords.iter().any(|k| k == "Developed"));
    }

    #[test]
    fn test_purity_identical_inputs_identical_reports() {
        let a = analyzer();
        let text = pad_to_words("Python developer with Docker and 3 years of experience", 120);
        let job = "python docker rust kafka";

        let first = a.analyze(&text, job);
        let second = a.analyze(&text, job);
        assert_eq!(first, second);
    }

    #[test]
    fn test_skill_monotonicity() {
        let a = analyzer();
        let base = pad_to_words("Working daily with Python and Docker pipelines", 100);
        let before = a.analyze(&base, "");

        // Mentioning a new catalog skill adds exactly one distinct skill
        let with_new = format!("{} Kubernetes", base);
        let after = a.analyze(&with_new, "");
        assert_eq!(after.skill_count, before.skill_count + 1);

        // Re-mentioning an existing skill leaves the distinct count alone
        let with_repeat = format!("{} Python Python", base);
        let repeat = a.analyze(&with_repeat, "");
        assert_eq!(repeat.skill_count, before.skill_count);
    }

    #[test]
    fn test_word_boundary_scenarios() {
        let a = analyzer();
        let text = pad_to_words("I use nosql and csharp tooling every day", 60);
        let report = a.analyze(&text, "");
        let all_skills: Vec<&String> = report.skills.values().flatten().collect();
        assert!(!all_skills.iter().any(|s| *s == "SQL"));
        assert!(!all_skills.iter().any(|s| *s == "C#"));
    }

    #[test]
    fn test_job_analysis_only_when_requested() {
        let a = analyzer();
        let text = pad_to_words("Python and Docker background", 100);

        let without = a.analyze(&text, "");
        assert!(without.job_analysis.is_none());

        let with = a.analyze(&text, "python docker terraform");
        let job = with.job_analysis.expect("job analysis requested");
        assert!(job.match_score <= 100);

        // Removing the job description changes nothing else
        let base_without = a.analyze(&text, "");
        assert_eq!(without.ats_score, base_without.ats_score);
        assert_eq!(without.skills, base_without.skills);
        assert_eq!(with.ats_score, without.ats_score);
        assert_eq!(with.skills, without.skills);
        assert_eq!(with.word_count, without.word_count);
    }

    #[test]
    fn test_skills_map_has_no_empty_categories() {
        let text = pad_to_words("Python, Rust, PostgreSQL and Docker experience", 120);
        let report = analyzer().analyze(&text, "");
        for (category, names) in &report.skills {
            assert!(!names.is_empty(), "empty category {}", category);
        }
    }

    #[test]
    fn test_recommendation_bounds() {
        let a = analyzer();
        for text in [
            "word ".repeat(60),
            pad_to_words("Python Docker Kubernetes AWS Git Linux React SQL", 500),
        ] {
            let report = a.analyze(&text, "");
            assert!(!report.recommendations.is_empty());
            assert!(report.recommendations.len() <= 8);
        }
    }

    #[test]
    fn test_keywords_are_title_cased_and_capped() {
        let text = pad_to_words(
            "experience responsible managed developed implemented achieved \
             improved led created designed collaborated",
            80,
        );
        let report = analyzer().analyze(&text, "");
        assert_eq!(report.keywords.len(), 10);
        assert_eq!(report.keywords[0], "Experience");
        for k in &report.keywords {
            assert!(k.chars().next().unwrap().is_uppercase());
        }
    }
}
