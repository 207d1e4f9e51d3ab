//! WIYS: Who is your soulmate?
//!
//! Compatibility scoring and soulmate content generation. The pure core
//! lives in [`services::matching`] and [`services::content`]; the async
//! service seams, the caller-side [`session`] and the [`cli`] driver are
//! built around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod random;
pub mod services;
pub mod session;

pub use error::SoulmateError;
pub use profile::{CandidateProfile, ProfileError, UserProfile};
pub use random::{RandomSource, RngSource};
pub use session::SoulmateSession;
