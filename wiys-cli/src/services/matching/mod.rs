// Matching service for computing profile compatibility
//
// Pure business logic: the only impurity is the injected random source
// and the fresh result id.

pub mod core;
pub mod models;

// Re-export commonly used types
pub use models::MatchResult;

use crate::profile::{CandidateProfile, UserProfile};
use crate::random::RandomSource;
use crate::services::config::ScoringConfig;
use log::debug;

/// Evaluate a candidate against the user's profile
/// Neither profile is modified
pub fn evaluate_match<R: RandomSource + ?Sized>(
    profile: &UserProfile,
    candidate: &CandidateProfile,
    scoring: &ScoringConfig,
    rng: &mut R,
) -> MatchResult {
    let (lo, hi) = scoring.base_range();
    let base = rng.next_in_range(lo, hi).clamp(lo, hi);

    let shared = core::shared_keywords(&profile.hobbies, &candidate.hobbies);
    let score = core::compute_score(base, shared.len(), scoring);
    let summary = core::build_summary(&candidate.name, score, &shared);

    debug!(
        "Match '{}' vs '{}': base {}, {} shared, final {}",
        profile.name,
        candidate.name,
        base,
        shared.len(),
        score
    );

    MatchResult::new(score, summary, shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use crate::random::testing::ScriptedSource;
    use chrono::NaiveDate;

    fn user(hobbies: &[&str]) -> UserProfile {
        UserProfile::new(
            "Luna",
            NaiveDate::from_ymd_opt(1994, 4, 16).unwrap(),
            "Product Designer",
            hobbies.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn candidate(hobbies: &[&str]) -> CandidateProfile {
        CandidateProfile::new(
            "Sol",
            NaiveDate::from_ymd_opt(1991, 11, 2).unwrap(),
            "Pilot",
            hobbies.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_one_shared_hobby() {
        let mut rng = ScriptedSource::new(&[70]);
        let result = evaluate_match(
            &user(&["Yoga", "Travel"]),
            &candidate(&["yoga", "Reading"]),
            &ScoringConfig::default(),
            &mut rng,
        );

        assert_eq!(result.shared_keywords, vec!["yoga"]);
        assert_eq!(result.compatibility_score, 73);
        assert!(result.summary.contains("yoga"));
        assert!(result.summary.contains("Sol"));
        assert!(result.summary.contains("73%"));
        assert_eq!(rng.requested, vec![(55, 98)]);
    }

    #[test]
    fn test_no_shared_hobbies() {
        let mut rng = ScriptedSource::new(&[61]);
        let result = evaluate_match(
            &user(&["Chess"]),
            &candidate(&[]),
            &ScoringConfig::default(),
            &mut rng,
        );

        assert!(result.shared_keywords.is_empty());
        assert_eq!(result.compatibility_score, 61);
        assert!(result.summary.contains(super::core::NO_SHARED_KEYWORDS));
    }

    #[test]
    fn test_high_base_is_capped() {
        let mut rng = ScriptedSource::new(&[98]);
        let result = evaluate_match(
            &user(&["Yoga", "Jazz", "Hiking"]),
            &candidate(&["JAZZ", "hiking", "yoga"]),
            &ScoringConfig::default(),
            &mut rng,
        );

        assert_eq!(result.shared_keywords.len(), 3);
        assert_eq!(result.compatibility_score, 99);
    }

    #[test]
    fn test_out_of_range_draw_is_clamped() {
        struct Wild;
        impl RandomSource for Wild {
            fn next_in_range(&mut self, _lo: u32, _hi: u32) -> u32 {
                5000
            }
        }

        let result = evaluate_match(
            &user(&[]),
            &candidate(&[]),
            &ScoringConfig::default(),
            &mut Wild,
        );
        assert_eq!(result.compatibility_score, 98);
    }

    #[test]
    fn test_score_always_in_range() {
        let mut rng = RngSource::seeded(2024);
        let profile = user(&["Yoga", "Travel", "Cooking", "Jazz"]);
        let other = candidate(&["yoga", "travel", "cooking", "jazz"]);

        for _ in 0..500 {
            let result = evaluate_match(&profile, &other, &ScoringConfig::default(), &mut rng);
            assert!(result.compatibility_score <= 99);
            assert!(result.compatibility_score >= 67);
        }
    }

    #[test]
    fn test_inputs_untouched_and_ids_unique() {
        let profile = user(&["Yoga"]);
        let other = candidate(&["YOGA"]);
        let before = (profile.clone(), other.clone());

        let mut rng = RngSource::seeded(9);
        let first = evaluate_match(&profile, &other, &ScoringConfig::default(), &mut rng);
        let second = evaluate_match(&profile, &other, &ScoringConfig::default(), &mut rng);

        assert_eq!((profile, other), before);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_result_helpers() {
        let result = MatchResult::new(87, "summary".to_string(), vec!["yoga".to_string()]);
        assert_eq!(result.headline(), "Compatibility: 87%");
        assert!(result.shares("YOGA"));
        assert!(!result.shares("jazz"));
        assert_eq!(result.share_text(), "WIYS result: summary");
    }
}
