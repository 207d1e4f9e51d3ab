// Business logic services layer
//
// Compatibility scoring and content generation, plus the async service
// seams (soulmate, auth) that the session layer calls into.

pub mod auth;
pub mod config;
pub mod content;
pub mod matching;
pub mod soulmate;

pub use auth::{AuthError, AuthMethod, AuthService, AuthSession, MockAuthService};
pub use config::{DelayConfig, ScoringConfig, ServiceConfig};
pub use content::{ContentCatalog, GeneratedVisual, PaletteColor, Quote, VisualPalette};
pub use matching::MatchResult;
pub use soulmate::{MockSoulmateService, SoulmateService};
