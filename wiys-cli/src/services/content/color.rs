//! Hex color decoding for palette stops

use serde::Serialize;

/// Color components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    /// Mid gray, used for anything that does not decode
    pub const FALLBACK: Rgba = Rgba {
        red: 0.5,
        green: 0.5,
        blue: 0.5,
        alpha: 1.0,
    };
}

/// Decode `#RGB`, `#RRGGBB` or `#AARRGGBB` (the `#` is optional)
pub fn decode_hex(hex: &str) -> Rgba {
    let sanitized = hex.trim().replace('#', "");

    if sanitized.is_empty() || !sanitized.chars().all(|c| c.is_ascii_hexdigit()) {
        return Rgba::FALLBACK;
    }

    let value = match u64::from_str_radix(&sanitized, 16) {
        Ok(value) => value,
        Err(_) => return Rgba::FALLBACK,
    };

    let channel = |shift: u32, mask: u64, max: f64| ((value >> shift) & mask) as f64 / max;

    match sanitized.len() {
        // 12-bit RGB
        3 => Rgba {
            red: channel(8, 0xF, 15.0),
            green: channel(4, 0xF, 15.0),
            blue: channel(0, 0xF, 15.0),
            alpha: 1.0,
        },
        // 24-bit RGB
        6 => Rgba {
            red: channel(16, 0xFF, 255.0),
            green: channel(8, 0xFF, 255.0),
            blue: channel(0, 0xFF, 255.0),
            alpha: 1.0,
        },
        // 32-bit ARGB
        8 => Rgba {
            red: channel(16, 0xFF, 255.0),
            green: channel(8, 0xFF, 255.0),
            blue: channel(0, 0xFF, 255.0),
            alpha: channel(24, 0xFF, 255.0),
        },
        _ => Rgba::FALLBACK,
    }
}
