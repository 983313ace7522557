//! Rule-based recommendation synthesis
//!
//! Rules fire in a fixed order against the partial report; the final
//! list is capped at eight entries and never empty.

use crate::analysis::job_match::JobAnalysis;

/// Maximum number of recommendations emitted.
const MAX_RECOMMENDATIONS: usize = 8;

/// Inputs the rule table looks at.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    pub ats_score: u8,
    pub skill_count: usize,
    pub word_count: usize,
    pub experience_years: u32,
    pub job_analysis: Option<&'a JobAnalysis>,
}

pub fn generate(input: RecommendationInput<'_>) -> Vec<String> {
    let mut recommendations = Vec::new();

    if input.ats_score < 60 {
        recommendations.push(
            "Improve ATS compatibility by adding more relevant technical skills and keywords"
                .to_string(),
        );
    }

    if input.skill_count < 5 {
        recommendations
            .push("Add more technical skills relevant to your target role".to_string());
    } else if input.skill_count < 8 {
        recommendations
            .push("Consider adding more diverse skills to strengthen your profile".to_string());
    }

    if input.word_count < 200 {
        recommendations.push(
            "Expand your resume with more detailed job descriptions and achievements".to_string(),
        );
    } else if input.word_count > 1000 {
        recommendations
            .push("Consider condensing your resume for better readability".to_string());
    }

    if let Some(job) = input.job_analysis {
        if job.match_score < 40 {
            recommendations.push(
                "Incorporate more keywords from the job description to improve relevance"
                    .to_string(),
            );
        } else if job.match_score < 60 {
            recommendations.push(
                "Add some missing keywords naturally into your experience descriptions"
                    .to_string(),
            );
        }
    }

    if input.experience_years == 0 {
        recommendations.push(
            "Clearly mention your years of experience in your summary or job titles".to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Your resume looks well-structured! Keep it updated with recent skills and achievements"
                .to_string(),
        );
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
