//! Core compatibility functions
//! Score = min(cap, base + bonus * |shared keywords|)

use crate::services::config::ScoringConfig;
use std::collections::HashSet;

/// Shown in the summary when two profiles share no hobbies
pub const NO_SHARED_KEYWORDS: &str = "awaiting discovery";

/// Case-insensitive intersection of two hobby lists
/// Returns lowercase keywords, deduplicated, in the order they first
/// appear in `own`
pub fn shared_keywords(own: &[String], other: &[String]) -> Vec<String> {
    let other_lookup: HashSet<String> = other.iter().map(|h| h.to_lowercase()).collect();

    let mut seen = HashSet::new();
    let mut shared = Vec::new();

    for hobby in own {
        let lowered = hobby.to_lowercase();
        if other_lookup.contains(&lowered) && seen.insert(lowered.clone()) {
            shared.push(lowered);
        }
    }

    shared
}

/// Apply the keyword bonus to a base score and clamp to the cap
pub fn compute_score(base: u32, shared_count: usize, scoring: &ScoringConfig) -> u8 {
    let shared_count = u32::try_from(shared_count).unwrap_or(u32::MAX);
    let bonus = scoring.keyword_bonus.saturating_mul(shared_count);
    let score = base.saturating_add(bonus).min(scoring.score_cap());

    // score_cap() is at most 99
    score as u8
}

/// Narrative shown under the score
pub fn build_summary(candidate_name: &str, score: u8, shared: &[String]) -> String {
    let vibrations = if shared.is_empty() {
        NO_SHARED_KEYWORDS.to_string()
    } else {
        shared.join(", ")
    };

    format!(
        "Your energy with {} looks {}% compatible! Shared vibrations: {}.",
        candidate_name, score, vibrations
    )
}
