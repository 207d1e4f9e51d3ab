//! Soulmate service seam
//!
//! The trait is what the session layer talks to. The mock implementation
//! wraps the pure matching and content functions and adds a simulated
//! response delay.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::config::ServiceConfig;
use super::content::{self, ContentCatalog, GeneratedVisual, Quote};
use super::matching::{self, MatchResult};
use crate::error::SoulmateError;
use crate::profile::{CandidateProfile, UserProfile};
use crate::random::{RandomSource, RngSource};

/// Boxed random source shared by a service
pub type SharedRandom = Box<dyn RandomSource + Send>;

#[async_trait]
pub trait SoulmateService: Send + Sync {
    /// Generate a soulmate visual for the user's profile
    async fn generate_visual(
        &self,
        profile: &UserProfile,
    ) -> Result<GeneratedVisual, SoulmateError>;

    /// Score a candidate against the user's profile
    async fn evaluate_match(
        &self,
        profile: &UserProfile,
        candidate: &CandidateProfile,
    ) -> Result<MatchResult, SoulmateError>;

    /// Quote for the given calendar day
    fn quote_of_the_day(&self, date: NaiveDate) -> Quote;
}

/// In-memory soulmate service with simulated latency
pub struct MockSoulmateService {
    catalog: Arc<ContentCatalog>,
    config: ServiceConfig,
    rng: Mutex<SharedRandom>,
}

impl MockSoulmateService {
    pub fn new(catalog: Arc<ContentCatalog>, config: ServiceConfig, rng: SharedRandom) -> Self {
        Self {
            catalog,
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Default catalog and config, seeded when a seed is given
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(
            Arc::new(ContentCatalog::default()),
            ServiceConfig::default(),
            Box::new(RngSource::from_seed_option(seed)),
        )
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run `f` with exclusive access to the random source.
    /// The lock is released before returning, never held across an await.
    fn draw<T>(
        &self,
        f: impl FnOnce(&mut (dyn RandomSource + Send)) -> T,
    ) -> Result<T, SoulmateError> {
        let mut rng = self.rng.lock().map_err(|_| SoulmateError::Unavailable {
            reason: "random source is poisoned".to_string(),
        })?;
        Ok(f(&mut **rng))
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl SoulmateService for MockSoulmateService {
    async fn generate_visual(
        &self,
        profile: &UserProfile,
    ) -> Result<GeneratedVisual, SoulmateError> {
        debug!("Generating visual for '{}'", profile.name);

        let visual = self.draw(|rng| content::generate_visual(&self.catalog, profile, rng))?;
        simulate_latency(self.config.delays.visual).await;

        Ok(visual)
    }

    async fn evaluate_match(
        &self,
        profile: &UserProfile,
        candidate: &CandidateProfile,
    ) -> Result<MatchResult, SoulmateError> {
        debug!("Evaluating '{}' against '{}'", candidate.name, profile.name);

        // Names are validated upstream; still refuse to summarize a nameless candidate
        candidate.validate()?;

        simulate_latency(self.config.delays.matching).await;
        self.draw(|rng| matching::evaluate_match(profile, candidate, &self.config.scoring, rng))
    }

    fn quote_of_the_day(&self, date: NaiveDate) -> Quote {
        self.catalog.quote_of_the_day(&date).clone()
    }
}
