use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::{Rgba, decode_hex};

/// One gradient stop of a visual palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub hex: String,
    #[serde(default = "full_opacity")]
    pub opacity: f64, // 0.0..=1.0
}

fn full_opacity() -> f64 {
    1.0
}

impl PaletteColor {
    /// Fully opaque color
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            opacity: full_opacity(),
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Decoded components, with `opacity` applied to alpha
    pub fn rgba(&self) -> Rgba {
        let decoded = decode_hex(&self.hex);
        Rgba {
            alpha: decoded.alpha * self.opacity.clamp(0.0, 1.0),
            ..decoded
        }
    }
}

/// Gradient, icon and mood used to render a soulmate visual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualPalette {
    /// Gradient stops, rendered in order
    pub color_stops: Vec<PaletteColor>,
    /// Key into the renderer's icon set
    pub icon_name: String,
    pub mood: String,
}

impl VisualPalette {
    pub fn new(hexes: &[&str], icon_name: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            color_stops: hexes.iter().map(|hex| PaletteColor::new(*hex)).collect(),
            icon_name: icon_name.into(),
            mood: mood.into(),
        }
    }
}

/// A generated soulmate portrait description with its palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVisual {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub palette: VisualPalette,
}

impl GeneratedVisual {
    /// Create a visual stamped with a fresh id and the current time
    pub fn new(description: String, palette: VisualPalette) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            description,
            palette,
        }
    }

    /// Creation time in local time, e.g. "Apr 16, 2025, 9:41 PM"
    pub fn formatted_date(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%b %-d, %Y, %-I:%M %p")
            .to_string()
    }
}

/// Entry of the daily quote catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}
