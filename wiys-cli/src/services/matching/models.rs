use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of evaluating a candidate against the user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: Uuid,
    pub compatibility_score: u8, // 0..=99
    pub summary: String,
    pub shared_keywords: Vec<String>, // lowercase, no duplicates
}

impl MatchResult {
    /// Create a result with a fresh id
    pub fn new(compatibility_score: u8, summary: String, shared_keywords: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            compatibility_score,
            summary,
            shared_keywords,
        }
    }

    /// Short label for the score, e.g. "Compatibility: 87%"
    pub fn headline(&self) -> String {
        format!("Compatibility: {}%", self.compatibility_score)
    }

    /// Check if a keyword is shared (case-insensitive)
    pub fn shares(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.shared_keywords.iter().any(|k| *k == keyword)
    }

    /// Text offered to the share sheet
    pub fn share_text(&self) -> String {
        format!("WIYS result: {}", self.summary)
    }
}
