#![forbid(unsafe_code)]

//! Theme system with semantic color slots.
//!
//! A [`Theme`] names every color the widgets need by role rather than value.
//! Themes are owned by the host and may be swapped at runtime; widgets
//! re-read slots on every paint (or via their `refresh_theme` entry points)
//! rather than caching derived values.

use cryogrid_paint::Rgba;

/// Semantic color slots for the inventory UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Accent fill for chips and primary actions.
    pub accent: Rgba,
    /// Text on accent-colored surfaces.
    pub btn_text: Rgba,
    /// Primary text.
    pub text_main: Rgba,
    /// Secondary/dimmed text.
    pub text_sub: Rgba,
    /// Window background.
    pub bg_main: Rgba,
    /// Panel/card background.
    pub bg_panel: Rgba,
    /// Input field background.
    pub bg_input: Rgba,
    /// Hairline borders.
    pub border: Rgba,
    /// Placeholder ring for empty wells.
    pub well_ring: Rgba,
    /// Cell background for removed samples.
    pub status_bg_removed: Rgba,
    /// Cell background for discarded samples.
    pub status_bg_discarded: Rgba,
    /// Cell background for in-stock samples. May be fully transparent, in
    /// which case in-stock cells paint no background at all.
    pub status_bg_instock: Rgba,
    /// Whether this is a dark theme (drives selection-outline contrast).
    pub dark: bool,
}

impl Theme {
    /// The light preset.
    #[must_use]
    pub fn light() -> Self {
        Self {
            accent: Rgba::rgb(0x00, 0x7A, 0xFF),
            btn_text: Rgba::WHITE,
            text_main: Rgba::rgb(0x1D, 0x1D, 0x1F),
            text_sub: Rgba::rgb(0x6E, 0x6E, 0x73),
            bg_main: Rgba::rgb(0xF5, 0xF5, 0xF7),
            bg_panel: Rgba::WHITE,
            bg_input: Rgba::rgb(0xEC, 0xEC, 0xEE),
            border: Rgba::rgb(0xD2, 0xD2, 0xD7),
            well_ring: Rgba::rgb(0xC7, 0xC7, 0xCC),
            status_bg_removed: Rgba::rgb(0xFF, 0xF4, 0xE5),
            status_bg_discarded: Rgba::rgb(0xFD, 0xED, 0xEE),
            status_bg_instock: Rgba::TRANSPARENT,
            dark: false,
        }
    }

    /// The dark preset.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            accent: Rgba::rgb(0x0A, 0x84, 0xFF),
            btn_text: Rgba::WHITE,
            text_main: Rgba::rgb(0xF5, 0xF5, 0xF7),
            text_sub: Rgba::rgb(0x98, 0x98, 0x9D),
            bg_main: Rgba::rgb(0x1C, 0x1C, 0x1E),
            bg_panel: Rgba::rgb(0x2C, 0x2C, 0x2E),
            bg_input: Rgba::rgb(0x3A, 0x3A, 0x3C),
            border: Rgba::rgb(0x48, 0x48, 0x4A),
            well_ring: Rgba::rgb(0x48, 0x48, 0x4A),
            status_bg_removed: Rgba::rgb(0x3A, 0x2E, 0x1E),
            status_bg_discarded: Rgba::rgb(0x3A, 0x1E, 0x22),
            status_bg_instock: Rgba::rgba(0x0A, 0x84, 0xFF, 0x18),
            dark: true,
        }
    }

    /// Start building a theme from the light preset.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::from_theme(Self::light())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Builder for customizing a [`Theme`] slot by slot.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Start from an existing theme.
    #[must_use]
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Set the accent slot.
    #[must_use]
    pub fn accent(mut self, c: Rgba) -> Self {
        self.theme.accent = c;
        self
    }

    /// Set the primary text slot.
    #[must_use]
    pub fn text_main(mut self, c: Rgba) -> Self {
        self.theme.text_main = c;
        self
    }

    /// Set the panel background slot.
    #[must_use]
    pub fn bg_panel(mut self, c: Rgba) -> Self {
        self.theme.bg_panel = c;
        self
    }

    /// Set the in-stock cell background slot.
    #[must_use]
    pub fn status_bg_instock(mut self, c: Rgba) -> Self {
        self.theme.status_bg_instock = c;
        self
    }

    /// Set the removed cell background slot.
    #[must_use]
    pub fn status_bg_removed(mut self, c: Rgba) -> Self {
        self.theme.status_bg_removed = c;
        self
    }

    /// Set the discarded cell background slot.
    #[must_use]
    pub fn status_bg_discarded(mut self, c: Rgba) -> Self {
        self.theme.status_bg_discarded = c;
        self
    }

    /// Set the dark flag.
    #[must_use]
    pub fn dark(mut self, dark: bool) -> Self {
        self.theme.dark = dark;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}
