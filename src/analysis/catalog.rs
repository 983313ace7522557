//! Static vocabulary tables: the skill catalog, professional verbs,
//! section markers, and the job-matching stop-word set.
//!
//! These tables are the recognition ceiling of the whole tool. They are
//! process-lifetime constants; every analysis call reads them, none
//! mutates them. Each catalog entry commits to exactly one category and
//! keeps it stable regardless of surrounding text.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Programming,
    #[serde(rename = "Web Technologies")]
    WebTechnologies,
    Databases,
    #[serde(rename = "Cloud & DevOps")]
    CloudDevOps,
    #[serde(rename = "Data Science & AI")]
    DataScienceAI,
    Mobile,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::WebTechnologies => "Web Technologies",
            SkillCategory::Databases => "Databases",
            SkillCategory::CloudDevOps => "Cloud & DevOps",
            SkillCategory::DataScienceAI => "Data Science & AI",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized skills in catalog order. The display name is the canonical
/// form used in reports; matching is case-insensitive with word
/// boundaries, so `c++`, `Vue.JS` and `PYTHON` all resolve to their
/// canonical entries.
pub const SKILL_CATALOG: &[(&str, SkillCategory)] = &[
    // Programming languages
    ("Python", SkillCategory::Programming),
    ("Java", SkillCategory::Programming),
    ("JavaScript", SkillCategory::Programming),
    ("TypeScript", SkillCategory::Programming),
    ("C++", SkillCategory::Programming),
    ("C#", SkillCategory::Programming),
    ("PHP", SkillCategory::Programming),
    ("Ruby", SkillCategory::Programming),
    ("Go", SkillCategory::Programming),
    ("Swift", SkillCategory::Programming),
    ("Kotlin", SkillCategory::Programming),
    ("Rust", SkillCategory::Programming),
    // Web technologies
    ("HTML", SkillCategory::WebTechnologies),
    ("CSS", SkillCategory::WebTechnologies),
    ("React", SkillCategory::WebTechnologies),
    ("Angular", SkillCategory::WebTechnologies),
    ("Vue.js", SkillCategory::WebTechnologies),
    ("Node.js", SkillCategory::WebTechnologies),
    ("Express", SkillCategory::WebTechnologies),
    ("Django", SkillCategory::WebTechnologies),
    ("Flask", SkillCategory::WebTechnologies),
    ("FastAPI", SkillCategory::WebTechnologies),
    ("Laravel", SkillCategory::WebTechnologies),
    // Databases
    ("SQL", SkillCategory::Databases),
    ("MySQL", SkillCategory::Databases),
    ("PostgreSQL", SkillCategory::Databases),
    ("MongoDB", SkillCategory::Databases),
    ("Redis", SkillCategory::Databases),
    ("SQLite", SkillCategory::Databases),
    ("Oracle", SkillCategory::Databases),
    ("Cassandra", SkillCategory::Databases),
    ("DynamoDB", SkillCategory::Databases),
    // Cloud & DevOps
    ("AWS", SkillCategory::CloudDevOps),
    ("Azure", SkillCategory::CloudDevOps),
    ("Google Cloud", SkillCategory::CloudDevOps),
    ("Docker", SkillCategory::CloudDevOps),
    ("Kubernetes", SkillCategory::CloudDevOps),
    ("Jenkins", SkillCategory::CloudDevOps),
    ("Git", SkillCategory::CloudDevOps),
    ("GitHub", SkillCategory::CloudDevOps),
    ("GitLab", SkillCategory::CloudDevOps),
    ("CI/CD", SkillCategory::CloudDevOps),
    // Data science & AI
    ("Machine Learning", SkillCategory::DataScienceAI),
    ("Data Analysis", SkillCategory::DataScienceAI),
    ("Pandas", SkillCategory::DataScienceAI),
    ("NumPy", SkillCategory::DataScienceAI),
    ("TensorFlow", SkillCategory::DataScienceAI),
    ("PyTorch", SkillCategory::DataScienceAI),
    ("Scikit-learn", SkillCategory::DataScienceAI),
    // Mobile
    ("React Native", SkillCategory::Mobile),
    ("Flutter", SkillCategory::Mobile),
    ("Android", SkillCategory::Mobile),
    ("iOS", SkillCategory::Mobile),
    ("Xamarin", SkillCategory::Mobile),
    // Other technologies
    ("Linux", SkillCategory::Other),
    ("REST API", SkillCategory::Other),
    ("GraphQL", SkillCategory::Other),
    ("Microservices", SkillCategory::Other),
    ("Agile", SkillCategory::Other),
    ("Scrum", SkillCategory::Other),
    ("Apache", SkillCategory::Other),
    ("Nginx", SkillCategory::Other),
];

/// Action words taken as evidence of professional voice. Matched as
/// substrings of the lowercased text; the ATS rubric coefficients are
/// tuned to this exact membership.
pub const PROFESSIONAL_VERBS: &[&str] = &[
    "experience",
    "responsible",
    "managed",
    "developed",
    "implemented",
    "achieved",
    "improved",
    "led",
    "created",
    "designed",
    "collaborated",
];

/// Lowercase substrings whose presence counts as a resume section.
pub const SECTION_MARKERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "projects",
    "certifications",
    "awards",
];

/// Common words excluded from job-description keyword overlap.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old",
    "see", "two", "who", "boy", "did", "does", "let", "put", "say", "she", "too", "use", "will",
    "work", "team", "company", "role", "position", "candidate", "must", "should", "able", "with",
    "have", "this", "that", "they", "from", "would", "there", "been", "many", "some", "time",
    "very", "when", "come", "here", "just", "like", "long", "make", "over", "such", "take",
    "than", "them", "well", "were",
];
