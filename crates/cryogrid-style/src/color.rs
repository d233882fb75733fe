#![forbid(unsafe_code)]

//! Hex parsing and perceptual color utilities.
//!
//! Lightness is HSL lightness on a 0..=255 integer scale with round-half-up
//! math; the vial renderer's light-text/dark-text threshold was tuned on that
//! scale. The luminance/contrast helpers follow WCAG 2.x.

use std::fmt;

use cryogrid_paint::Rgba;

/// Disc lightness below which labels switch to light text.
pub const DARK_DISC_LIGHTNESS: u8 = 160;

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Empty input.
    Empty,
    /// Unsupported digit count (supported: 3, 6, or 8).
    BadLength(usize),
    /// A character outside `[0-9a-fA-F]`.
    BadDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::BadLength(n) => write!(f, "unsupported hex color length {n}"),
            Self::BadDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex(s: &str) -> Result<Rgba, ColorParseError> {
    let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if digits.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let mut nibbles = [0u8; 8];
    let mut count = 0usize;
    for c in digits.chars() {
        let nibble = c.to_digit(16).ok_or(ColorParseError::BadDigit(c))? as u8;
        if count >= nibbles.len() {
            return Err(ColorParseError::BadLength(digits.chars().count()));
        }
        nibbles[count] = nibble;
        count += 1;
    }

    match count {
        3 => {
            let ch = |n: u8| n << 4 | n;
            Ok(Rgba::rgb(ch(nibbles[0]), ch(nibbles[1]), ch(nibbles[2])))
        }
        6 | 8 => {
            let byte = |i: usize| nibbles[i] << 4 | nibbles[i + 1];
            let a = if count == 8 { byte(6) } else { 255 };
            Ok(Rgba::rgba(byte(0), byte(2), byte(4), a))
        }
        n => Err(ColorParseError::BadLength(n)),
    }
}

/// HSL lightness scaled to 0..=255, rounding half up.
#[must_use]
pub fn lightness(c: Rgba) -> u8 {
    let max = c.r().max(c.g()).max(c.b()) as u16;
    let min = c.r().min(c.g()).min(c.b()) as u16;
    ((max + min + 1) / 2) as u8
}

/// Whether a fill is dark enough to require light text on top of it.
#[must_use]
pub fn is_dark(c: Rgba) -> bool {
    lightness(c) < DARK_DISC_LIGHTNESS
}

/// WCAG relative luminance in 0.0..=1.0.
#[must_use]
pub fn relative_luminance(c: Rgba) -> f64 {
    fn channel(v: u8) -> f64 {
        let s = v as f64 / 255.0;
        if s <= 0.039_28 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(c.r()) + 0.7152 * channel(c.g()) + 0.0722 * channel(c.b())
}

/// WCAG contrast ratio between two colors, in 1.0..=21.0.
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Pick whichever of `light` or `dark` reads better on `bg`.
#[must_use]
pub fn best_text_color(bg: Rgba, light: Rgba, dark: Rgba) -> Rgba {
    if contrast_ratio(bg, light) >= contrast_ratio(bg, dark) {
        light
    } else {
        dark
    }
}
