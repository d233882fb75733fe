#![forbid(unsafe_code)]

//! Floating info card: a tooltip-style overlay anchored near the pointer.
//!
//! The card never receives input; it shows rich per-cell detail on hover and
//! is hidden by the host when the pointer leaves. Placement prefers
//! below-right of the anchor and flips per axis when the card would leave
//! the screen, so the card is always fully visible.

use cryogrid_core::geometry::{Point, Rect};
use cryogrid_paint::{Canvas, DrawCmd, FontSpec, Rgba, TextAlign};
use cryogrid_style::Theme;
use unicode_width::UnicodeWidthStr;

/// Preferred offset from the anchor, both axes.
pub const ANCHOR_OFFSET: f32 = 20.0;
/// Gap between the anchor and the card after a flip.
pub const FLIP_GAP: f32 = 10.0;
/// Inner padding around the text block.
pub const PADDING: f32 = 10.0;
/// Vertical advance per content line.
pub const LINE_HEIGHT: f32 = 18.0;
/// Horizontal advance per display column.
///
/// Width measurement is deliberately font-independent: display columns per
/// line (wide CJK glyphs count as two) times a fixed advance. The card only
/// needs a stable, slightly generous box, not shaped text metrics.
pub const COLUMN_ADVANCE: f32 = 7.5;

const CARD_RADIUS: f32 = 10.0;
const SHADOW_OFFSET: f32 = 2.0;
const FONT: FontSpec = FontSpec::regular(9.0);

/// Visual style for the card surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    /// Card fill.
    pub bg: Rgba,
    /// Hairline border.
    pub border: Rgba,
    /// Body text.
    pub text: Rgba,
    /// Drop shadow fill (pre-multiplied alpha in the color itself).
    pub shadow: Rgba,
}

impl CardStyle {
    /// Derive the card style from a theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let shadow_alpha = if theme.dark { 80 } else { 30 };
        Self {
            bg: theme.bg_panel,
            border: theme.border,
            text: theme.text_main,
            shadow: Rgba::rgba(0, 0, 0, shadow_alpha),
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self::for_theme(&Theme::light())
    }
}

/// Measure a multi-line content block.
///
/// Returns `(width, height)` including padding. Empty content still yields
/// one line so the card never collapses to a sliver.
#[must_use]
pub fn measure(content: &str) -> (f32, f32) {
    let mut lines = 0u32;
    let mut max_cols = 0usize;
    for line in content.lines() {
        lines += 1;
        max_cols = max_cols.max(line.width());
    }
    lines = lines.max(1);
    let width = max_cols as f32 * COLUMN_ADVANCE + 2.0 * PADDING;
    let height = lines as f32 * LINE_HEIGHT + 2.0 * PADDING;
    (width, height)
}

/// Place a card of the given size near `anchor` within `screen`.
///
/// The preferred position is `anchor + (20, 20)`; each axis independently
/// flips to the other side of the anchor when the card would overflow, then
/// clamps to the screen edge as a last resort.
#[must_use]
pub fn place(anchor: Point, width: f32, height: f32, screen: Rect) -> Rect {
    let mut x = anchor.x + ANCHOR_OFFSET;
    if x + width > screen.right() {
        x = anchor.x - width - FLIP_GAP;
    }
    let mut y = anchor.y + ANCHOR_OFFSET;
    if y + height > screen.bottom() {
        y = anchor.y - height - FLIP_GAP;
    }
    x = x.max(screen.left());
    y = y.max(screen.top());
    Rect::new(x, y, width, height)
}

/// The floating info card state.
#[derive(Debug, Clone, Default)]
pub struct InfoCard {
    content: String,
    rect: Option<Rect>,
    style: CardStyle,
}

impl InfoCard {
    /// Create a hidden card with the default (light) style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the card near `anchor`, constrained to `screen`.
    ///
    /// Returns the placed bounds.
    pub fn show_at(&mut self, anchor: Point, content: impl Into<String>, screen: Rect) -> Rect {
        self.content = content.into();
        let (w, h) = measure(&self.content);
        let rect = place(anchor, w, h, screen);
        self.rect = Some(rect);
        rect
    }

    /// Hide the card. Content is retained for a later `show_at`.
    pub fn hide(&mut self) {
        self.rect = None;
    }

    /// Whether the card is currently shown.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.rect.is_some()
    }

    /// Placed bounds while visible.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Current content text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Re-derive the surface colors from a theme.
    pub fn refresh_theme(&mut self, theme: &Theme) {
        self.style = CardStyle::for_theme(theme);
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Paint the card. Hidden cards paint nothing.
    ///
    /// Order: drop shadow, surface, border, then one text run per line.
    #[must_use]
    pub fn render(&self) -> Vec<DrawCmd> {
        let Some(rect) = self.rect else {
            return Vec::new();
        };
        let mut canvas = Canvas::new();

        let shadow = Rect::new(
            rect.x,
            rect.y + SHADOW_OFFSET,
            rect.width,
            rect.height,
        );
        canvas.rounded_rect(shadow, CARD_RADIUS, self.style.shadow);
        canvas.rounded_rect(rect, CARD_RADIUS, self.style.bg);
        canvas.rounded_rect_outline(rect, CARD_RADIUS, self.style.border, 1.0);

        let mut line_y = rect.y + PADDING;
        for line in self.content.lines() {
            let line_rect = Rect::new(
                rect.x + PADDING,
                line_y,
                rect.width - 2.0 * PADDING,
                LINE_HEIGHT,
            );
            canvas.text(line_rect, line, self.style.text, FONT, TextAlign::Center);
            line_y += LINE_HEIGHT;
        }

        canvas.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn measurement_scales_with_lines_and_columns() {
        let (w1, h1) = measure("ab");
        let (w2, h2) = measure("ab\ncdef");
        assert_eq!(h2 - h1, LINE_HEIGHT);
        assert_eq!(w2 - w1, 2.0 * COLUMN_ADVANCE);
    }

    #[test]
    fn wide_glyphs_count_as_two_columns() {
        let (narrow, _) = measure("ab");
        let (wide, _) = measure("取出");
        assert_eq!(wide - narrow, 2.0 * COLUMN_ADVANCE);
    }

    #[test]
    fn empty_content_still_has_one_line() {
        let (_, h) = measure("");
        assert_eq!(h, LINE_HEIGHT + 2.0 * PADDING);
    }

    #[test]
    fn prefers_below_right_of_the_anchor() {
        let rect = place(Point::new(100.0, 100.0), 120.0, 60.0, SCREEN);
        assert_eq!(rect.x, 120.0);
        assert_eq!(rect.y, 120.0);
    }

    #[test]
    fn flips_left_near_the_right_edge() {
        let anchor = Point::new(760.0, 100.0);
        let rect = place(anchor, 120.0, 60.0, SCREEN);
        assert_eq!(rect.x, anchor.x - 120.0 - FLIP_GAP);
        assert_eq!(rect.y, 120.0);
        assert!(rect.right() <= SCREEN.right());
    }

    #[test]
    fn flips_up_near_the_bottom_edge() {
        let anchor = Point::new(100.0, 580.0);
        let rect = place(anchor, 120.0, 60.0, SCREEN);
        assert_eq!(rect.x, 120.0);
        assert_eq!(rect.y, anchor.y - 60.0 - FLIP_GAP);
        assert!(rect.bottom() <= SCREEN.bottom());
    }

    #[test]
    fn flips_both_axes_in_the_corner() {
        let anchor = Point::new(790.0, 590.0);
        let rect = place(anchor, 120.0, 60.0, SCREEN);
        assert!(rect.right() <= SCREEN.right());
        assert!(rect.bottom() <= SCREEN.bottom());
        assert!(rect.x >= SCREEN.left());
        assert!(rect.y >= SCREEN.top());
    }

    #[test]
    fn hidden_card_paints_nothing() {
        let card = InfoCard::new();
        assert!(!card.visible());
        assert!(card.render().is_empty());
    }

    #[test]
    fn render_orders_shadow_surface_border_text() {
        let mut card = InfoCard::new();
        card.show_at(Point::new(50.0, 50.0), "Name: BL21\nVol: 2.5 mL", SCREEN);
        let cmds = card.render();
        assert!(matches!(cmds[0], DrawCmd::RoundedRect { .. })); // shadow
        assert!(matches!(cmds[1], DrawCmd::RoundedRect { .. })); // surface
        assert!(matches!(cmds[2], DrawCmd::RoundedRectOutline { .. }));
        let texts = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Text { .. }))
            .count();
        assert_eq!(texts, 2);
    }

    #[test]
    fn hide_retains_content_for_reshow() {
        let mut card = InfoCard::new();
        card.show_at(Point::new(10.0, 10.0), "detail", SCREEN);
        card.hide();
        assert!(!card.visible());
        assert_eq!(card.content(), "detail");
        let rect = card.show_at(Point::new(10.0, 10.0), "detail", SCREEN);
        assert_eq!(card.rect(), Some(rect));
    }

    #[test]
    fn theme_swap_recolors_the_surface() {
        let mut card = InfoCard::new();
        card.refresh_theme(&Theme::dark());
        assert_eq!(card.style().bg, Theme::dark().bg_panel);
        assert_eq!(card.style().shadow.a(), 80);
        card.refresh_theme(&Theme::light());
        assert_eq!(card.style().shadow.a(), 30);
    }
}
