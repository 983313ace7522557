//! Text normalization
//!
//! Two derived views of the raw input: the case-folded text (skill
//! detection works on this directly so multi-word names survive), and
//! the alphabetic token list used by the job matcher. No stemming, no
//! unicode normalization.

/// Minimum length for an alphabetic token to be kept.
pub const MIN_TOKEN_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct NormalizedText {
    /// Entire input, case-folded, otherwise unchanged.
    pub lower: String,
    /// Maximal runs of alphabetic characters, lowercased, length >= 4.
    pub tokens_alpha: Vec<String>,
}

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        Self {
            lower: text.to_lowercase(),
            tokens_alpha: alpha_tokens(text),
        }
    }
}

/// Split text into maximal alphabetic runs, lowercased, dropping runs
/// shorter than [`MIN_TOKEN_LEN`].
pub fn alpha_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|run| run.chars().count() >= MIN_TOKEN_LEN)
        .map(|run| run.to_lowercase())
        .collect()
}
