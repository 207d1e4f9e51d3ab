//! Caller-side session state
//!
//! Plays the part of the presentation layer's view model: it owns the
//! user's profile, the visual history and the latest match result, and it
//! guards against re-entrant requests. The services it calls stay
//! stateless.

pub mod gate;

pub use gate::{GateStats, PendingRequest, RequestGate, RequestState};

use chrono::{Local, NaiveDate};
use log::{info, warn};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::SoulmateError;
use crate::profile::{CandidateProfile, ProfileError, UserProfile};
use crate::services::{
    AuthError, AuthMethod, AuthService, AuthSession, GeneratedVisual, MatchResult, Quote,
    SoulmateService,
};

pub const VISUAL_FAILED_MESSAGE: &str = "Could not create a visual. Please try again later.";
pub const MATCH_FAILED_MESSAGE: &str = "Could not calculate compatibility.";

/// Which part of the app the user is in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AppFlow {
    #[default]
    Onboarding,
    ProfileSetup,
    Main,
}

/// Everything the presentation layer renders
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    pub flow: AppFlow,
    pub auth: Option<AuthSession>,
    pub profile: Option<UserProfile>,
    /// Generated visuals, newest first
    pub history: Vec<GeneratedVisual>,
    pub current_visual: Option<GeneratedVisual>,
    pub current_match: Option<MatchResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Another request is still pending
    Busy,
    /// The action needs a completed profile
    MissingProfile,
    InvalidProfile(ProfileError),
    Auth(AuthError),
    Service(SoulmateError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Busy => write!(f, "another request is still in progress"),
            SessionError::MissingProfile => write!(f, "complete your profile first"),
            SessionError::InvalidProfile(err) => write!(f, "invalid profile: {}", err),
            SessionError::Auth(err) => write!(f, "sign-in failed: {}", err),
            SessionError::Service(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ProfileError> for SessionError {
    fn from(err: ProfileError) -> Self {
        SessionError::InvalidProfile(err)
    }
}

pub struct SoulmateSession {
    auth: Arc<dyn AuthService>,
    soulmate: Arc<dyn SoulmateService>,
    gate: RequestGate,
    state: Mutex<SessionState>,
}

impl SoulmateSession {
    pub fn new(auth: Arc<dyn AuthService>, soulmate: Arc<dyn SoulmateService>) -> Self {
        Self {
            auth,
            soulmate,
            gate: RequestGate::new(),
            state: Mutex::new(SessionState::default()),
        }
    }

    // A panic elsewhere must not lock the UI out of its own state
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> SessionState {
        self.state().clone()
    }

    pub fn flow(&self) -> AppFlow {
        self.state().flow
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state().profile.clone()
    }

    pub fn history(&self) -> Vec<GeneratedVisual> {
        self.state().history.clone()
    }

    pub fn current_visual(&self) -> Option<GeneratedVisual> {
        self.state().current_visual.clone()
    }

    pub fn current_match(&self) -> Option<MatchResult> {
        self.state().current_match.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state().error_message.clone()
    }

    pub fn request_state(&self) -> RequestState {
        self.gate.state()
    }

    pub fn gate_stats(&self) -> GateStats {
        self.gate.stats()
    }

    pub async fn sign_in(&self, method: AuthMethod) -> Result<AuthSession, SessionError> {
        let _pending = self.gate.try_begin().ok_or(SessionError::Busy)?;
        self.state().error_message = None;

        match self.auth.sign_in(method).await {
            Ok(session) => {
                let mut state = self.state();
                state.auth = Some(session.clone());
                state.flow = if state.profile.is_none() {
                    AppFlow::ProfileSetup
                } else {
                    AppFlow::Main
                };
                Ok(session)
            }
            Err(err) => {
                warn!("Sign-in failed: {}", err);
                self.state().error_message = Some(err.to_string());
                Err(SessionError::Auth(err))
            }
        }
    }

    /// Store the profile captured during setup and enter the main flow
    pub fn complete_profile(&self, profile: UserProfile) -> Result<(), SessionError> {
        profile.validate()?;

        let mut state = self.state();
        if state.auth.is_none() {
            state.auth = Some(AuthSession::new(profile.name.clone()));
        }
        info!("Profile completed for '{}'", profile.name);
        state.profile = Some(profile);
        state.flow = AppFlow::Main;
        Ok(())
    }

    pub fn update_profile(&self, profile: UserProfile) -> Result<(), SessionError> {
        profile.validate()?;
        self.state().profile = Some(profile);
        Ok(())
    }

    pub async fn generate_visual(&self) -> Result<GeneratedVisual, SessionError> {
        let profile = self.profile().ok_or(SessionError::MissingProfile)?;
        let _pending = self.gate.try_begin().ok_or(SessionError::Busy)?;

        match self.soulmate.generate_visual(&profile).await {
            Ok(visual) => {
                let mut state = self.state();
                state.current_visual = Some(visual.clone());
                state.history.insert(0, visual.clone());
                Ok(visual)
            }
            Err(err) => {
                warn!("Visual generation failed: {}", err);
                self.state().error_message = Some(VISUAL_FAILED_MESSAGE.to_string());
                Err(SessionError::Service(err))
            }
        }
    }

    pub async fn evaluate_match(
        &self,
        candidate: &CandidateProfile,
    ) -> Result<MatchResult, SessionError> {
        let profile = self.profile().ok_or(SessionError::MissingProfile)?;
        candidate.validate()?;
        let _pending = self.gate.try_begin().ok_or(SessionError::Busy)?;

        match self.soulmate.evaluate_match(&profile, candidate).await {
            Ok(result) => {
                self.state().current_match = Some(result.clone());
                Ok(result)
            }
            Err(err) => {
                warn!("Match evaluation failed: {}", err);
                self.state().error_message = Some(MATCH_FAILED_MESSAGE.to_string());
                Err(SessionError::Service(err))
            }
        }
    }

    pub fn reset_match_result(&self) {
        self.state().current_match = None;
    }

    /// Sign out and forget everything
    pub fn logout(&self) {
        self.auth.logout();
        *self.state() = SessionState::default();
    }

    pub fn quote_of_the_day(&self) -> Quote {
        self.quote_for(Local::now().date_naive())
    }

    pub fn quote_for(&self, date: NaiveDate) -> Quote {
        self.soulmate.quote_of_the_day(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        ContentCatalog, MockAuthService, MockSoulmateService, ServiceConfig,
    };
    use crate::random::RngSource;
    use async_trait::async_trait;
    use std::time::Duration;

    fn session_with(config: ServiceConfig) -> SoulmateSession {
        let auth = Arc::new(MockAuthService::new(config.delays.sign_in));
        let soulmate = Arc::new(MockSoulmateService::new(
            Arc::new(ContentCatalog::default()),
            config,
            Box::new(RngSource::seeded(7)),
        ));
        SoulmateSession::new(auth, soulmate)
    }

    fn instant_session() -> SoulmateSession {
        session_with(ServiceConfig::instant())
    }

    fn candidate(name: &str) -> CandidateProfile {
        CandidateProfile::new(
            name,
            NaiveDate::from_ymd_opt(1993, 3, 3).unwrap(),
            "Chef",
            vec!["Yoga".to_string()],
        )
    }

    struct OfflineService;

    #[async_trait]
    impl SoulmateService for OfflineService {
        async fn generate_visual(
            &self,
            _profile: &UserProfile,
        ) -> Result<GeneratedVisual, SoulmateError> {
            Err(SoulmateError::Unavailable {
                reason: "offline".to_string(),
            })
        }

        async fn evaluate_match(
            &self,
            _profile: &UserProfile,
            _candidate: &CandidateProfile,
        ) -> Result<MatchResult, SoulmateError> {
            Err(SoulmateError::Unavailable {
                reason: "offline".to_string(),
            })
        }

        fn quote_of_the_day(&self, _date: NaiveDate) -> Quote {
            Quote::new("Offline.", "Nobody")
        }
    }

    #[tokio::test]
    async fn test_sign_in_moves_to_profile_setup() {
        let session = instant_session();
        assert_eq!(session.flow(), AppFlow::Onboarding);

        let auth = session.sign_in(AuthMethod::Google).await.unwrap();
        assert_eq!(auth.display_name, "Google Explorer");
        assert_eq!(session.flow(), AppFlow::ProfileSetup);
    }

    #[tokio::test]
    async fn test_sign_in_with_profile_goes_to_main() {
        let session = instant_session();
        session.complete_profile(UserProfile::sample()).unwrap();

        session.sign_in(AuthMethod::Apple).await.unwrap();
        assert_eq!(session.flow(), AppFlow::Main);
    }

    #[tokio::test]
    async fn test_failed_sign_in_sets_error_message() {
        let session = instant_session();
        let err = session
            .sign_in(AuthMethod::Email {
                email: String::new(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Auth(AuthError::InvalidCredentials));
        assert_eq!(
            session.error_message().as_deref(),
            Some("Check your email or password.")
        );
        assert_eq!(session.flow(), AppFlow::Onboarding);
    }

    #[test]
    fn test_complete_profile_creates_session() {
        let session = instant_session();
        session.complete_profile(UserProfile::sample()).unwrap();

        let state = session.snapshot();
        assert_eq!(state.flow, AppFlow::Main);
        assert_eq!(state.auth.unwrap().display_name, "Luna");
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let session = instant_session();
        let mut profile = UserProfile::sample();
        profile.hobbies.clear();

        assert_eq!(
            session.complete_profile(profile),
            Err(SessionError::InvalidProfile(ProfileError::NoHobbies))
        );
        assert!(session.profile().is_none());
        assert_eq!(session.flow(), AppFlow::Onboarding);
    }

    #[test]
    fn test_update_profile_replaces() {
        let session = instant_session();
        session.complete_profile(UserProfile::sample()).unwrap();

        let mut updated = UserProfile::sample();
        updated.occupation = "Illustrator".to_string();
        session.update_profile(updated).unwrap();
        assert_eq!(session.profile().unwrap().occupation, "Illustrator");
    }

    #[tokio::test]
    async fn test_actions_need_profile() {
        let session = instant_session();
        assert_eq!(
            session.generate_visual().await.unwrap_err(),
            SessionError::MissingProfile
        );
        assert_eq!(
            session.evaluate_match(&candidate("Sol")).await.unwrap_err(),
            SessionError::MissingProfile
        );
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let session = instant_session();
        session.complete_profile(UserProfile::sample()).unwrap();

        let first = session.generate_visual().await.unwrap();
        let second = session.generate_visual().await.unwrap();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
        assert_eq!(session.current_visual().unwrap().id, second.id);
    }

    #[tokio::test]
    async fn test_evaluate_match_stores_result() {
        let session = instant_session();
        session.complete_profile(UserProfile::sample()).unwrap();

        let result = session.evaluate_match(&candidate("Sol")).await.unwrap();
        assert_eq!(result.shared_keywords, vec!["yoga"]);
        assert_eq!(session.current_match(), Some(result));

        session.reset_match_result();
        assert!(session.current_match().is_none());
    }

    #[tokio::test]
    async fn test_blank_candidate_rejected_before_service() {
        let session = instant_session();
        session.complete_profile(UserProfile::sample()).unwrap();

        assert_eq!(
            session.evaluate_match(&candidate("")).await.unwrap_err(),
            SessionError::InvalidProfile(ProfileError::BlankName)
        );
        assert_eq!(session.gate_stats().requests_started, 0);
    }

    #[tokio::test]
    async fn test_concurrent_request_is_rejected() {
        let config = ServiceConfig::builder()
            .instant()
            .visual_delay(Duration::from_millis(100))
            .build();
        let session = Arc::new(session_with(config));
        session.complete_profile(UserProfile::sample()).unwrap();

        let background = session.clone();
        let handle = tokio::spawn(async move { background.generate_visual().await });

        // Give the spawned task time to enter the gate
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(session.request_state(), RequestState::Pending);
        assert_eq!(
            session.evaluate_match(&candidate("Sol")).await.unwrap_err(),
            SessionError::Busy
        );

        assert!(handle.await.unwrap().is_ok());
        assert_eq!(session.request_state(), RequestState::Idle);
        assert_eq!(session.history().len(), 1);

        let stats = session.gate_stats();
        assert_eq!(stats.requests_started, 1);
        assert_eq!(stats.requests_rejected, 1);
    }

    #[tokio::test]
    async fn test_service_failure_surfaces_message() {
        let session = SoulmateSession::new(
            Arc::new(MockAuthService::new(Duration::ZERO)),
            Arc::new(OfflineService),
        );
        session.complete_profile(UserProfile::sample()).unwrap();

        let err = session.generate_visual().await.unwrap_err();
        assert!(matches!(err, SessionError::Service(_)));
        assert_eq!(session.error_message().as_deref(), Some(VISUAL_FAILED_MESSAGE));
        assert!(session.history().is_empty());

        session.evaluate_match(&candidate("Sol")).await.unwrap_err();
        assert_eq!(session.error_message().as_deref(), Some(MATCH_FAILED_MESSAGE));
        assert_eq!(session.request_state(), RequestState::Idle);
    }

    #[tokio::test]
    async fn test_logout_resets_everything() {
        let session = instant_session();
        session.sign_in(AuthMethod::Apple).await.unwrap();
        session.complete_profile(UserProfile::sample()).unwrap();
        session.generate_visual().await.unwrap();
        session.evaluate_match(&candidate("Sol")).await.unwrap();

        session.logout();

        let state = session.snapshot();
        assert_eq!(state.flow, AppFlow::Onboarding);
        assert!(state.auth.is_none());
        assert!(state.profile.is_none());
        assert!(state.history.is_empty());
        assert!(state.current_visual.is_none());
        assert!(state.current_match.is_none());
    }

    #[test]
    fn test_quote_for_date() {
        let session = instant_session();
        let jan_first = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let jan_fifth = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(session.quote_for(jan_first), session.quote_for(jan_fifth));
        assert!(!session.quote_of_the_day().text.is_empty());
    }
}
