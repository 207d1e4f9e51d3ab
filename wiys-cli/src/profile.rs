//! Profile types and upstream input validation
//!
//! The user's own profile and a candidate profile carry the same fields but
//! are separate types, so a profile can never be scored against itself by
//! accident.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The signed-in user's own profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub occupation: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

/// A profile being evaluated against the user's own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

/// Profile input rejected before it reaches the services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    /// Name is empty or whitespace
    BlankName,
    /// Occupation is empty or whitespace
    BlankOccupation,
    /// No hobbies were selected
    NoHobbies,
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::BlankName => write!(f, "name cannot be empty"),
            ProfileError::BlankOccupation => write!(f, "occupation cannot be empty"),
            ProfileError::NoHobbies => write!(f, "select at least one hobby"),
        }
    }
}

impl std::error::Error for ProfileError {}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        occupation: impl Into<String>,
        hobbies: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date,
            occupation: occupation.into(),
            hobbies,
        }
    }

    /// Demo profile used when no profile has been configured
    pub fn sample() -> Self {
        Self::new(
            "Luna",
            NaiveDate::from_ymd_opt(1994, 4, 16).unwrap_or_default(),
            "Product Designer",
            vec![
                "Yoga".to_string(),
                "Photography".to_string(),
                "Synthwave".to_string(),
            ],
        )
    }

    /// Profile setup requires a name, an occupation and at least one hobby
    pub fn validate(&self) -> Result<(), ProfileError> {
        if is_blank(&self.name) {
            return Err(ProfileError::BlankName);
        }
        if is_blank(&self.occupation) {
            return Err(ProfileError::BlankOccupation);
        }
        if self.hobbies.iter().all(|h| is_blank(h)) {
            return Err(ProfileError::NoHobbies);
        }
        Ok(())
    }
}

impl CandidateProfile {
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        occupation: impl Into<String>,
        hobbies: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date,
            occupation: occupation.into(),
            hobbies,
        }
    }

    /// Only the name is required for a candidate
    pub fn validate(&self) -> Result<(), ProfileError> {
        if is_blank(&self.name) {
            return Err(ProfileError::BlankName);
        }
        Ok(())
    }
}

/// Split comma-separated hobby input into trimmed, non-empty entries
pub fn parse_hobbies(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
