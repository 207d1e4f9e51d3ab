//! Mock sign-in service
//!
//! Produces an opaque session for the session layer. Nothing in the
//! matching or content services reads it.

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// How the user chose to sign in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    Apple,
    Google,
    Email { email: String, password: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub id: Uuid,
    pub display_name: String,
}

impl AuthSession {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    Cancelled,
    Generic,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Check your email or password."),
            AuthError::Cancelled => write!(f, "Sign-in was cancelled."),
            AuthError::Generic => write!(f, "Something unexpected happened. Please try again."),
        }
    }
}

impl std::error::Error for AuthError {}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_in(&self, method: AuthMethod) -> Result<AuthSession, AuthError>;
    fn logout(&self);
}

/// Accepts any Apple/Google sign-in and any non-empty email/password pair
pub struct MockAuthService {
    delay: Duration,
    active: Mutex<Option<AuthSession>>,
}

impl MockAuthService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            active: Mutex::new(None),
        }
    }

    /// Session established by the last successful sign-in
    pub fn active_session(&self) -> Option<AuthSession> {
        self.active.lock().ok().and_then(|active| active.clone())
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

/// Display name for an email sign-in: everything before the first '@'
fn email_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn sign_in(&self, method: AuthMethod) -> Result<AuthSession, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let session = match method {
            AuthMethod::Apple => AuthSession::new("Apple User"),
            AuthMethod::Google => AuthSession::new("Google Explorer"),
            AuthMethod::Email { email, password } => {
                if email.is_empty() || password.is_empty() {
                    debug!("Rejected email sign-in with missing credentials");
                    return Err(AuthError::InvalidCredentials);
                }
                AuthSession::new(email_display_name(&email))
            }
        };

        let mut active = self.active.lock().map_err(|_| AuthError::Generic)?;
        *active = Some(session.clone());
        info!("Signed in as '{}'", session.display_name);

        Ok(session)
    }

    fn logout(&self) {
        if let Ok(mut active) = self.active.lock() {
            *active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(email: &str, password: &str) -> AuthMethod {
        AuthMethod::Email {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_provider_sign_in() {
        let auth = MockAuthService::new(Duration::ZERO);

        let apple = auth.sign_in(AuthMethod::Apple).await.unwrap();
        assert_eq!(apple.display_name, "Apple User");

        let google = auth.sign_in(AuthMethod::Google).await.unwrap();
        assert_eq!(google.display_name, "Google Explorer");
        assert_eq!(auth.active_session(), Some(google));
    }

    #[tokio::test]
    async fn test_email_sign_in_uses_local_part() {
        let auth = MockAuthService::new(Duration::ZERO);
        let session = auth.sign_in(email("luna@example.com", "secret")).await.unwrap();
        assert_eq!(session.display_name, "luna");

        let session = auth.sign_in(email("no-at-sign", "secret")).await.unwrap();
        assert_eq!(session.display_name, "no-at-sign");
    }

    #[tokio::test]
    async fn test_missing_credentials_rejected() {
        let auth = MockAuthService::new(Duration::ZERO);

        assert_eq!(
            auth.sign_in(email("", "secret")).await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.sign_in(email("luna@example.com", "")).await,
            Err(AuthError::InvalidCredentials)
        );
        assert!(auth.active_session().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let auth = MockAuthService::new(Duration::ZERO);
        auth.sign_in(AuthMethod::Apple).await.unwrap();
        assert!(auth.active_session().is_some());

        auth.logout();
        assert!(auth.active_session().is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Check your email or password."
        );
        assert_eq!(AuthError::Cancelled.to_string(), "Sign-in was cancelled.");
    }
}
