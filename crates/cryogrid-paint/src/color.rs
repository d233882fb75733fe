#![forbid(unsafe_code)]

//! Packed RGBA color.

/// A packed RGBA color, 8 bits per channel (`0xRRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(u32);

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    /// Create a color from channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Create an opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// The same color with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.0 & 0xFFFF_FF00 | a as u32)
    }

    /// Whether the color paints nothing (alpha is zero).
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Raw packed value.
    #[inline]
    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }
}
