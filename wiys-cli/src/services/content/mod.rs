// Content service: daily quotes and soulmate visuals
//
// Selection over a fixed, read-only catalog. Quotes are deterministic by
// day-of-year; palettes and hobby snippets come from the injected random
// source.

pub mod catalog;
pub mod color;
pub mod models;

// Re-export commonly used types
pub use catalog::ContentCatalog;
pub use color::Rgba;
pub use models::{GeneratedVisual, PaletteColor, Quote, VisualPalette};

use crate::profile::UserProfile;
use crate::random::{RandomSource, pick_index};
use log::debug;

/// Used in the description when the profile lists no hobbies
pub const NO_HOBBY_SNIPPET: &str = "the passions you share";

/// Generate a soulmate visual for the user's profile
pub fn generate_visual<R: RandomSource + ?Sized>(
    catalog: &ContentCatalog,
    profile: &UserProfile,
    rng: &mut R,
) -> GeneratedVisual {
    let palette = catalog.pick_palette(rng).clone();

    let hobby = pick_index(rng, profile.hobbies.len())
        .and_then(|i| profile.hobbies.get(i))
        .map(|h| h.to_lowercase())
        .unwrap_or_else(|| NO_HOBBY_SNIPPET.to_string());

    let description = format!(
        "A soulmate portrait for {} in a {} texture, highlighting {}.",
        profile.name, palette.mood, hobby
    );

    debug!(
        "Generated visual for '{}' with palette '{}'",
        profile.name, palette.mood
    );

    GeneratedVisual::new(description, palette)
}
