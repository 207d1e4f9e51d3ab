//! Service configuration with builder pattern
//!
//! Groups the scoring constants and the simulated response delays of the
//! mock services, with presets for normal use and for tests.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hard upper bound of a compatibility score
pub const SCORE_CEILING: u32 = 99;

/// Configuration for the soulmate and auth services
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub scoring: ScoringConfig,
    pub delays: DelayConfig,
}

/// Constants of the compatibility formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Lowest base score drawn at random (inclusive)
    pub base_min: u32,
    /// Highest base score drawn at random (inclusive)
    pub base_max: u32,
    /// Points added per shared keyword
    pub keyword_bonus: u32,
    /// Final score cap, never above [`SCORE_CEILING`]
    pub max_score: u32,
}

/// Simulated latency of the mock services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    pub visual: Duration,
    pub matching: Duration,
    pub sign_in: Duration,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_min: 55,
            base_max: 98,
            keyword_bonus: 3,
            max_score: SCORE_CEILING,
        }
    }
}

impl ScoringConfig {
    /// Base score range, ordered so that `lo <= hi`
    pub fn base_range(&self) -> (u32, u32) {
        if self.base_min <= self.base_max {
            (self.base_min, self.base_max)
        } else {
            (self.base_max, self.base_min)
        }
    }

    /// Effective cap on the final score
    pub fn score_cap(&self) -> u32 {
        self.max_score.min(SCORE_CEILING)
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            visual: Duration::from_millis(1200),
            matching: Duration::from_millis(1000),
            sign_in: Duration::from_millis(1000),
        }
    }
}

impl DelayConfig {
    /// No simulated latency (for testing)
    pub fn instant() -> Self {
        Self {
            visual: Duration::ZERO,
            matching: Duration::ZERO,
            sign_in: Duration::ZERO,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            delays: DelayConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Create a new builder for ServiceConfig
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Default scoring, no delays
    pub fn instant() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            delays: DelayConfig::instant(),
        }
    }
}

/// Builder for ServiceConfig
#[derive(Debug)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    /// Configure scoring
    pub fn scoring_config(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Set the inclusive range the base score is drawn from
    pub fn base_score_range(mut self, min: u32, max: u32) -> Self {
        self.config.scoring.base_min = min;
        self.config.scoring.base_max = max;
        self
    }

    /// Set points per shared keyword
    pub fn keyword_bonus(mut self, bonus: u32) -> Self {
        self.config.scoring.keyword_bonus = bonus;
        self
    }

    /// Set the final score cap
    pub fn max_score(mut self, max: u32) -> Self {
        self.config.scoring.max_score = max;
        self
    }

    /// Configure all delays
    pub fn delay_config(mut self, delays: DelayConfig) -> Self {
        self.config.delays = delays;
        self
    }

    pub fn visual_delay(mut self, delay: Duration) -> Self {
        self.config.delays.visual = delay;
        self
    }

    pub fn match_delay(mut self, delay: Duration) -> Self {
        self.config.delays.matching = delay;
        self
    }

    pub fn sign_in_delay(mut self, delay: Duration) -> Self {
        self.config.delays.sign_in = delay;
        self
    }

    /// Remove all simulated latency
    pub fn instant(mut self) -> Self {
        self.config.delays = DelayConfig::instant();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

impl Default for ServiceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
