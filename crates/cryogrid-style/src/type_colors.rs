#![forbid(unsafe_code)]

//! Specimen type → color registry.
//!
//! The host database supplies per-type hex colors; the registry parses and
//! caches them and falls back to a neutral gray for unknown types or
//! unparseable entries. Lookups never fail.

use ahash::AHashMap;
use tracing::warn;

use cryogrid_paint::Rgba;

use crate::color::parse_hex;

/// Fallback color for unknown specimen types (`#8E8E93`).
pub const DEFAULT_TYPE_COLOR: Rgba = Rgba::rgb(0x8E, 0x8E, 0x93);

/// Mapping from specimen type name to its disc color.
#[derive(Debug, Clone, Default)]
pub struct TypeColorRegistry {
    colors: AHashMap<String, Rgba>,
}

impl TypeColorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(type name, hex color)` pairs.
    ///
    /// Unparseable colors are skipped; the type then resolves to
    /// [`DEFAULT_TYPE_COLOR`] like any unknown type.
    pub fn from_hex_pairs<I, N, H>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
        H: AsRef<str>,
    {
        let mut registry = Self::new();
        for (name, hex) in pairs {
            registry.insert_hex(name, hex.as_ref());
        }
        registry
    }

    /// Insert one type with a parsed color.
    pub fn insert(&mut self, name: impl Into<String>, color: Rgba) {
        self.colors.insert(name.into(), color);
    }

    /// Insert one type from a hex string, skipping unparseable input.
    pub fn insert_hex(&mut self, name: impl Into<String>, hex: &str) {
        let name = name.into();
        match parse_hex(hex) {
            Ok(color) => {
                self.colors.insert(name, color);
            }
            Err(err) => {
                warn!(type_name = %name, %hex, %err, "skipping unparseable type color");
            }
        }
    }

    /// Replace all entries from `(type name, hex color)` pairs.
    ///
    /// Used when the host's type table changes at runtime.
    pub fn refresh<I, N, H>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
        H: AsRef<str>,
    {
        self.colors.clear();
        for (name, hex) in pairs {
            self.insert_hex(name, hex.as_ref());
        }
    }

    /// Look up the color for a type, defaulting for unknown names.
    #[must_use]
    pub fn color_for(&self, type_name: &str) -> Rgba {
        self.colors
            .get(type_name)
            .copied()
            .unwrap_or(DEFAULT_TYPE_COLOR)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
