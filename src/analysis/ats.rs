//! ATS compatibility rubric
//!
//! Five bounded sub-scores summed and clamped to 100. The coefficients
//! are fixed; reports must be reproducible across runs and machines.

use crate::analysis::features::ResumeFeatures;

/// Per-component score breakdown. Component maxima: skills 40, length
/// 20, verbs 20, contact 10, structure 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtsBreakdown {
    pub skill_diversity: u8,
    pub content_length: u8,
    pub professional_keywords: u8,
    pub contact_info: u8,
    pub structure: u8,
}

impl AtsBreakdown {
    pub fn compute(skill_count: usize, features: &ResumeFeatures) -> Self {
        Self {
            skill_diversity: skill_diversity(skill_count),
            content_length: content_length(features.word_count),
            professional_keywords: (2 * features.verb_hits).min(20) as u8,
            contact_info: contact_info(features.has_email, features.has_phone),
            structure: (2 * features.section_hits).min(10) as u8,
        }
    }

    /// Total score, clamped to [0, 100].
    pub fn total(&self) -> u8 {
        let sum = self.skill_diversity as u32
            + self.content_length as u32
            + self.professional_keywords as u32
            + self.contact_info as u32
            + self.structure as u32;
        sum.min(100) as u8
    }
}

/// Compute the final ATS score for a resume.
pub fn ats_score(skill_count: usize, features: &ResumeFeatures) -> u8 {
    AtsBreakdown::compute(skill_count, features).total()
}

fn skill_diversity(skill_count: usize) -> u8 {
    match skill_count {
        n if n >= 10 => 40,
        n if n >= 6 => 30,
        n if n >= 3 => 20,
        _ => 10,
    }
}

fn content_length(word_count: usize) -> u8 {
    match word_count {
        300..=800 => 20,
        200..=1000 => 15,
        _ => 10,
    }
}

fn contact_info(has_email: bool, has_phone: bool) -> u8 {
    let mut score = 0;
    if has_email {
        score += 5;
    }
    if has_phone {
        score += 5;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(word_count: usize, verb_hits: usize) -> ResumeFeatures {
        ResumeFeatures {
            word_count,
            verb_hits,
            ..Default::default()
        }
    }

    #[test]
    fn test_skill_diversity_tiers() {
        assert_eq!(skill_diversity(0), 10);
        assert_eq!(skill_diversity(2), 10);
        assert_eq!(skill_diversity(3), 20);
        assert_eq!(skill_diversity(6), 30);
        assert_eq!(skill_diversity(10), 40);
        assert_eq!(skill_diversity(50), 40);
    }

    #[test]
    fn test_content_length_tiers() {
        assert_eq!(content_length(60), 10);
        assert_eq!(content_length(250), 15);
        assert_eq!(content_length(300), 20);
        assert_eq!(content_length(800), 20);
        assert_eq!(content_length(900), 15);
        assert_eq!(content_length(1500), 10);
    }

    #[test]
    fn test_verb_score_caps_at_twenty() {
        let b = AtsBreakdown::compute(0, &features(60, 11));
        assert_eq!(b.professional_keywords, 20);
        let b = AtsBreakdown::compute(0, &features(60, 4));
        assert_eq!(b.professional_keywords, 8);
    }

    #[test]
    fn test_structure_caps_at_ten() {
        let f = ResumeFeatures {
            word_count: 60,
            section_hits: 8,
            ..Default::default()
        };
        assert_eq!(AtsBreakdown::compute(0, &f).structure, 10);
    }

    #[test]
    fn test_contact_info() {
        assert_eq!(contact_info(false, false), 0);
        assert_eq!(contact_info(true, false), 5);
        assert_eq!(contact_info(true, true), 10);
    }

    #[test]
    fn test_minimal_resume_scores_twenty() {
        // No skills, short text, no verbs, no contact, no sections
        assert_eq!(ats_score(0, &features(60, 0)), 20);
    }

    #[test]
    fn test_total_never_exceeds_hundred() {
        let f = ResumeFeatures {
            word_count: 500,
            experience_years: 10,
            has_email: true,
            has_phone: true,
            section_hits: 8,
            verb_hits: 11,
        };
        assert_eq!(ats_score(25, &f), 100);
    }
}
