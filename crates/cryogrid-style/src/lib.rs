#![forbid(unsafe_code)]

//! Style types for CryoGrid with semantic theming.
//!
//! # Role in CryoGrid
//! `cryogrid-style` is the shared vocabulary for colors and theming. Widgets
//! use these types to stay visually consistent without dragging in rendering
//! or host-toolkit dependencies.
//!
//! # This crate provides
//! - [`Theme`] — semantic color slots with light/dark presets and a builder.
//! - Hex parsing and perceptual color utilities ([`lightness`],
//!   [`best_text_color`], [`contrast_ratio`]).
//! - [`TypeColorRegistry`] — specimen type → color with a safe default.
//!
//! # How it fits in the system
//! Themes are externally owned and may be swapped at runtime; widgets take a
//! `&Theme` per paint or expose a `refresh_theme` entry point instead of
//! caching derived colors.

pub mod color;
pub mod theme;
pub mod type_colors;

pub use color::{
    ColorParseError, best_text_color, contrast_ratio, is_dark, lightness, parse_hex,
    relative_luminance,
};
pub use theme::{Theme, ThemeBuilder};
pub use type_colors::{DEFAULT_TYPE_COLOR, TypeColorRegistry};
