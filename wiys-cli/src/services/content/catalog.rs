//! Fixed palette and quote catalogs
//!
//! Built once at startup and shared read-only. Construction rejects empty
//! catalogs, so every selection below has an entry to return.

use chrono::Datelike;
use log::warn;

use super::models::{Quote, VisualPalette};
use crate::error::SoulmateError;
use crate::random::{RandomSource, pick_index};

/// Read-only catalog of visual palettes and daily quotes
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCatalog {
    palettes: Vec<VisualPalette>,
    quotes: Vec<Quote>,
}

impl ContentCatalog {
    /// Build a catalog from custom entries
    ///
    /// # Errors
    /// Returns [`SoulmateError::EmptyCatalog`] if either list is empty
    pub fn new(palettes: Vec<VisualPalette>, quotes: Vec<Quote>) -> Result<Self, SoulmateError> {
        if palettes.is_empty() {
            return Err(SoulmateError::EmptyCatalog { catalog: "palette" });
        }
        if quotes.is_empty() {
            return Err(SoulmateError::EmptyCatalog { catalog: "quote" });
        }
        Ok(Self { palettes, quotes })
    }

    pub fn palettes(&self) -> &[VisualPalette] {
        &self.palettes
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Quote for a 1-based day-of-year ordinal
    /// `None` (ordinal could not be computed) selects the first quote
    pub fn quote_for_ordinal(&self, ordinal: Option<u32>) -> &Quote {
        let index = match ordinal {
            Some(ordinal) => ordinal as usize % self.quotes.len(),
            None => {
                warn!("No day-of-year available, using the first quote");
                0
            }
        };
        &self.quotes[index]
    }

    /// Quote of the day: rotates daily, same day-of-year gives the same quote
    pub fn quote_of_the_day<D: Datelike>(&self, date: &D) -> &Quote {
        self.quote_for_ordinal(Some(date.ordinal()))
    }

    /// Uniformly random palette
    pub fn pick_palette<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &VisualPalette {
        pick_index(rng, self.palettes.len())
            .and_then(|i| self.palettes.get(i))
            .unwrap_or(&self.palettes[0])
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self {
            palettes: default_palettes(),
            quotes: default_quotes(),
        }
    }
}

fn default_palettes() -> Vec<VisualPalette> {
    vec![
        VisualPalette::new(
            &["#FF9A9E", "#FAD0C4", "#FBC2EB"],
            "sparkles",
            "romantic aurora",
        ),
        VisualPalette::new(
            &["#A18CD1", "#FBC2EB", "#8EC5FC"],
            "moon.stars",
            "dreamy twilight",
        ),
        VisualPalette::new(
            &["#6A85B6", "#BAC8E0", "#F6D6FF"],
            "cloud.sun.rain",
            "soft serenity",
        ),
        VisualPalette::new(
            &["#F5E6CA", "#F28FAD", "#9B5DE5"],
            "heart.circle",
            "cosmic heartbeat",
        ),
    ]
}

fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Your soulmate might be closer than you think 💫", "WIYS"),
        Quote::new("Two energies orbiting the same dream.", "Astral Journal"),
        Quote::new("Love is a frequency: tune in daily.", "Celestial Notes"),
        Quote::new("Some connections bend time itself.", "Stellar Whisper"),
    ]
}
