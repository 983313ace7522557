//! Resume analysis engine
//!
//! The pure core: static vocabulary tables, text normalization, skill
//! detection, feature extraction, the ATS rubric, job-description
//! matching, recommendations, and the orchestrating [`analyzer::Analyzer`].

pub mod analyzer;
pub mod ats;
pub mod catalog;
pub mod features;
pub mod job_match;
pub mod normalize;
pub mod recommend;
pub mod report;
pub mod skills;

pub use analyzer::Analyzer;
pub use catalog::SkillCategory;
pub use job_match::JobAnalysis;
pub use report::AnalysisReport;
pub use skills::SkillHit;
