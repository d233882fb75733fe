#![forbid(unsafe_code)]

//! Per-cell view model and the pure decisions derived from it.
//!
//! [`CellPayload`] is supplied by the host per cell index and never mutated
//! here. Decoding is deliberately lenient: numeric fields may arrive as JSON
//! numbers or as numeric strings, and anything unparseable coerces to zero —
//! a defective record degrades visual fidelity, never correctness of the data
//! the host owns.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};

/// Read-only view model for one grid cell.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CellPayload {
    /// Free-form status text ("In Stock", "Removed 2024-11-02", ...).
    pub status: String,
    /// Current volume. Lenient: number or numeric string, else 0.
    #[serde(deserialize_with = "lenient_f64")]
    pub volume: f64,
    /// Capacity. Lenient like `volume`.
    #[serde(rename = "vol_max", deserialize_with = "lenient_f64")]
    pub vol_max: f64,
    /// Specimen type name, looked up in the type color registry.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Short label, preferred over `name` when non-empty.
    pub short: String,
    /// Full sample name.
    pub name: String,
    /// Optional feature annotation shown as a second label line.
    pub feature: String,
}

impl CellPayload {
    /// Decode a payload from JSON, degrading to an empty payload on failure.
    #[must_use]
    pub fn from_json(s: &str) -> Self {
        serde_json::from_str(s).unwrap_or_default()
    }
}

/// Number-or-string coercion; anything else becomes 0.0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Num(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Num(v) if v.is_finite() => v,
        Lenient::Num(_) => 0.0,
        Lenient::Text(s) => s.trim().parse().unwrap_or(0.0),
        Lenient::Other(_) => 0.0,
    })
}

/// Status classification for the cell background.
///
/// Classes are recognized by substring markers in the free-form status text,
/// in both the English and Chinese record forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// Present in the freezer.
    InStock,
    /// Temporarily taken out.
    Removed,
    /// Permanently discarded.
    Discarded,
}

impl StatusClass {
    /// Classify a status string. `Removed` wins over `Discarded` when both
    /// markers appear; the removed background takes precedence.
    #[must_use]
    pub fn of(status: &str) -> Self {
        if status.contains("Removed") || status.contains("取出") {
            Self::Removed
        } else if is_discarded(status) {
            Self::Discarded
        } else {
            Self::InStock
        }
    }
}

/// Whether a status carries the discarded marker.
///
/// Kept separate from [`StatusClass::of`] because the low-volume warning
/// checks for discard regardless of which background class won.
#[must_use]
pub fn is_discarded(status: &str) -> bool {
    status.contains("Discarded") || status.contains("报废")
}

/// Ring fill ratio, always within `[0, 1]`.
///
/// `vol_max <= 0` (or any non-finite input) yields 0 with no division.
#[must_use]
pub fn fill_ratio(volume: f64, vol_max: f64) -> f64 {
    if !volume.is_finite() || !vol_max.is_finite() || vol_max <= 0.0 {
        return 0.0;
    }
    (volume / vol_max).clamp(0.0, 1.0)
}

/// Whether the low-volume warning badge applies.
#[must_use]
pub fn low_volume(payload: &CellPayload) -> bool {
    payload.vol_max > 0.0
        && fill_ratio(payload.volume, payload.vol_max) < 0.3
        && !is_discarded(&payload.status)
}

/// Truncate a label to at most `max_chars` characters.
///
/// Longer text keeps `max_chars - 1` characters plus a `..` marker (cell
/// labels use 5 for the main line and 6 for the feature line).
#[must_use]
pub fn truncate_label(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("..");
    Cow::Owned(out)
}
