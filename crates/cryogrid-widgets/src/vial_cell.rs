#![forbid(unsafe_code)]

//! Cryovial cell renderer.
//!
//! Renders one grid cell as an ordered display list: status background, ring
//! gauge, type-colored center disc, label(s), low-volume badge, selection
//! outline. The function is pure — `(rect, payload, theme, type colors)` in,
//! `Vec<DrawCmd>` out — so every layout and color decision is testable
//! without a rasterizer.
//!
//! Layer order is significant (each layer paints over the previous), and the
//! layers are independent: a missing or defaulted payload field never aborts
//! the layers after it.

use cryogrid_core::geometry::{Point, Rect};
use cryogrid_paint::{Canvas, DrawCmd, FontSpec, Rgba, TextAlign};
use cryogrid_style::{Theme, TypeColorRegistry, is_dark};

use crate::payload::{CellPayload, StatusClass, fill_ratio, low_volume, truncate_label};

/// Inset of the cell background / selection outline.
const CELL_INSET: f32 = 2.0;
/// Corner radius of the cell background / selection outline.
const CELL_RADIUS: f32 = 12.0;
/// Inset of the empty-slot placeholder ring.
const EMPTY_RING_INSET: f32 = 8.0;
/// Margin around the ring gauge.
const GAUGE_MARGIN: f32 = 6.0;
/// Stroke width of the ring gauge.
const RING_WIDTH: f32 = 5.0;
/// Gap between the ring and the center disc.
const DISC_GAP: f32 = 2.0;
/// Diameter of the low-volume badge.
const BADGE_SIZE: f32 = 14.0;
/// Fill ratio below which the warning badge appears.
pub const LOW_VOLUME_THRESHOLD: f64 = 0.3;

/// Ring gauge track (translucent black on both themes).
const TRACK_COLOR: Rgba = Rgba::rgba(0, 0, 0, 20);
/// Ring gauge progress stroke.
const PROGRESS_COLOR: Rgba = Rgba::BLACK;
/// Warning badge fill (`#D93025`).
const BADGE_FILL: Rgba = Rgba::rgb(0xD9, 0x30, 0x25);
/// Selection outline stroke width.
const SELECTION_WIDTH: f32 = 3.0;

/// Render one cell into a display list.
///
/// `payload` of `None` means an empty slot and draws only the background-free
/// dashed placeholder ring.
#[must_use]
pub fn render_cell(
    rect: Rect,
    payload: Option<&CellPayload>,
    selected: bool,
    theme: &Theme,
    type_colors: &TypeColorRegistry,
) -> Vec<DrawCmd> {
    let mut canvas = Canvas::new();

    // 1. Status background.
    if let Some(data) = payload {
        let bg = match StatusClass::of(&data.status) {
            StatusClass::Removed => theme.status_bg_removed,
            StatusClass::Discarded => theme.status_bg_discarded,
            StatusClass::InStock => theme.status_bg_instock,
        };
        if !bg.is_transparent() {
            canvas.rounded_rect(rect.inset(CELL_INSET), CELL_RADIUS, bg);
        }
    }

    let Some(data) = payload else {
        // 2. Empty slot: dashed placeholder ring, nothing else.
        let radius = (rect.width.min(rect.height) / 2.0 - EMPTY_RING_INSET).max(1.0);
        canvas.ring(rect.center(), radius, theme.well_ring, 1.0, true);
        return canvas.finish();
    };

    // 3. Ring gauge: full track, then the progress arc from 12 o'clock
    // clockwise. No arc at all when capacity is absent.
    let gauge = rect.inset(GAUGE_MARGIN);
    let center = gauge.center();
    let radius = gauge.width.min(gauge.height) / 2.0;
    canvas.ring(center, radius, TRACK_COLOR, RING_WIDTH, false);

    if data.vol_max > 0.0 {
        let ratio = fill_ratio(data.volume, data.vol_max);
        canvas.arc(
            center,
            radius,
            0.0,
            (ratio * 360.0) as f32,
            PROGRESS_COLOR,
            RING_WIDTH,
            true,
        );
    }

    // 4. Center disc colored by specimen type.
    let disc_fill = type_colors.color_for(&data.type_name);
    let disc_radius = (radius - RING_WIDTH / 2.0 - DISC_GAP).max(1.0);
    canvas.disc(center, disc_radius, disc_fill);

    // 5. Label(s) on the disc.
    let text_color = if is_dark(disc_fill) {
        Rgba::WHITE
    } else {
        theme.text_main
    };
    let short = data.short.trim();
    let name = data.name.trim();
    let main_text = truncate_label(if short.is_empty() { name } else { short }, 5);
    let text_rect = Rect::new(
        center.x - disc_radius,
        center.y - disc_radius,
        disc_radius * 2.0,
        disc_radius * 2.0,
    );

    let feature = data.feature.trim();
    if feature.is_empty() {
        canvas.text(
            text_rect,
            main_text,
            text_color,
            FontSpec::bold(10.0),
            TextAlign::Center,
        );
    } else {
        // Stacked: bold short label over a smaller, slightly faded feature.
        let feature = truncate_label(feature, 6);
        let top = Rect::new(
            text_rect.x,
            text_rect.y + text_rect.height * 0.15,
            text_rect.width,
            text_rect.height * 0.4,
        );
        canvas.text(
            top,
            main_text,
            text_color,
            FontSpec::bold(9.0),
            TextAlign::CenterBottom,
        );
        let bottom = Rect::new(
            text_rect.x,
            text_rect.y + text_rect.height * 0.55,
            text_rect.width,
            text_rect.height * 0.3,
        );
        canvas.text(
            bottom,
            feature,
            text_color.with_alpha(200),
            FontSpec::regular(7.0),
            TextAlign::CenterTop,
        );
    }

    // 6. Low-volume warning badge near the upper-right of the ring.
    if low_volume(data) {
        let badge_center = Point::new(center.x + radius * 0.7, center.y - radius * 0.7);
        canvas.disc(badge_center, BADGE_SIZE / 2.0, BADGE_FILL);
        let badge_rect = Rect::new(
            badge_center.x - BADGE_SIZE / 2.0,
            badge_center.y - BADGE_SIZE / 2.0,
            BADGE_SIZE,
            BADGE_SIZE,
        );
        canvas.text(
            badge_rect,
            "!",
            Rgba::WHITE,
            FontSpec::bold(9.0),
            TextAlign::Center,
        );
    }

    // 7. Selection outline, contrasting with the theme's light/dark class.
    if selected {
        let outline = if theme.dark { Rgba::WHITE } else { Rgba::BLACK };
        canvas.rounded_rect_outline(rect.inset(CELL_INSET), CELL_RADIUS, outline, SELECTION_WIDTH);
    }

    canvas.finish()
}
