//! Failure channel of the soulmate services

use crate::profile::ProfileError;

/// Error reported by a [`SoulmateService`](crate::services::SoulmateService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoulmateError {
    /// Caller passed a profile that fails a precondition
    InvalidInput(ProfileError),
    /// A catalog was built without entries
    EmptyCatalog { catalog: &'static str },
    /// The service could not produce a result
    Unavailable { reason: String },
}

impl std::fmt::Display for SoulmateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoulmateError::InvalidInput(err) => write!(f, "invalid profile: {}", err),
            SoulmateError::EmptyCatalog { catalog } => {
                write!(f, "{} catalog must contain at least one entry", catalog)
            }
            SoulmateError::Unavailable { reason } => {
                write!(f, "soulmate service unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for SoulmateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SoulmateError::InvalidInput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProfileError> for SoulmateError {
    fn from(err: ProfileError) -> Self {
        SoulmateError::InvalidInput(err)
    }
}
