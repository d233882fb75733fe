#![forbid(unsafe_code)]

//! The draw-command display list and its recorder.
//!
//! A widget's paint routine is a pure function from state to an ordered
//! `Vec<DrawCmd>`. Order is significant: each command paints over the ones
//! before it, and a rasterizer must replay them in sequence.

use cryogrid_core::geometry::{Point, Rect};
use smallvec::SmallVec;

use crate::color::Rgba;

/// Font selection for text commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Point size.
    pub size_pt: f32,
    /// Bold weight.
    pub bold: bool,
}

impl FontSpec {
    /// Create a font spec.
    #[inline]
    #[must_use]
    pub const fn new(size_pt: f32, bold: bool) -> Self {
        Self { size_pt, bold }
    }

    /// Regular weight at the given size.
    #[inline]
    #[must_use]
    pub const fn regular(size_pt: f32) -> Self {
        Self::new(size_pt, false)
    }

    /// Bold weight at the given size.
    #[inline]
    #[must_use]
    pub const fn bold(size_pt: f32) -> Self {
        Self::new(size_pt, true)
    }
}

/// Text alignment within a command's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Centered both ways.
    Center,
    /// Horizontally centered, hugging the bottom edge.
    CenterBottom,
    /// Horizontally centered, hugging the top edge.
    CenterTop,
}

/// One entry in the display list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled rounded rectangle.
    RoundedRect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f32,
        /// Fill color.
        fill: Rgba,
    },

    /// Stroked rounded rectangle.
    RoundedRectOutline {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f32,
        /// Stroke color.
        color: Rgba,
        /// Stroke width.
        width: f32,
    },

    /// Filled circle.
    Disc {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Fill color.
        fill: Rgba,
    },

    /// Stroked circle.
    Ring {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Stroke color.
        color: Rgba,
        /// Stroke width.
        width: f32,
        /// Dashed stroke (placeholder outlines).
        dashed: bool,
    },

    /// Circular arc.
    ///
    /// Angles are in degrees. `start_deg` 0 is 12 o'clock and a positive
    /// sweep runs clockwise.
    Arc {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Start angle, degrees from 12 o'clock.
        start_deg: f32,
        /// Clockwise sweep, degrees.
        sweep_deg: f32,
        /// Stroke color.
        color: Rgba,
        /// Stroke width.
        width: f32,
        /// Round the stroke caps.
        rounded_caps: bool,
    },

    /// Text within a rectangle.
    Text {
        /// Layout bounds.
        rect: Rect,
        /// The string to draw.
        text: String,
        /// Text color.
        color: Rgba,
        /// Font selection.
        font: FontSpec,
        /// Alignment within `rect`.
        align: TextAlign,
    },
}

/// Records draw commands in paint order.
///
/// Backed by a `SmallVec` sized for a typical vial cell (background, track,
/// arc, disc, labels, badge, outline) so the common case never allocates.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    cmds: SmallVec<[DrawCmd; 12]>,
}

impl Canvas {
    /// Create an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a filled rounded rectangle.
    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, fill: Rgba) {
        self.cmds.push(DrawCmd::RoundedRect { rect, radius, fill });
    }

    /// Record a stroked rounded rectangle.
    pub fn rounded_rect_outline(&mut self, rect: Rect, radius: f32, color: Rgba, width: f32) {
        self.cmds.push(DrawCmd::RoundedRectOutline {
            rect,
            radius,
            color,
            width,
        });
    }

    /// Record a filled circle.
    pub fn disc(&mut self, center: Point, radius: f32, fill: Rgba) {
        self.cmds.push(DrawCmd::Disc {
            center,
            radius,
            fill,
        });
    }

    /// Record a stroked circle.
    pub fn ring(&mut self, center: Point, radius: f32, color: Rgba, width: f32, dashed: bool) {
        self.cmds.push(DrawCmd::Ring {
            center,
            radius,
            color,
            width,
            dashed,
        });
    }

    /// Record a circular arc.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        color: Rgba,
        width: f32,
        rounded_caps: bool,
    ) {
        self.cmds.push(DrawCmd::Arc {
            center,
            radius,
            start_deg,
            sweep_deg,
            color,
            width,
            rounded_caps,
        });
    }

    /// Record a text run.
    pub fn text(
        &mut self,
        rect: Rect,
        text: impl Into<String>,
        color: Rgba,
        font: FontSpec,
        align: TextAlign,
    ) {
        self.cmds.push(DrawCmd::Text {
            rect,
            text: text.into(),
            color,
            font,
            align,
        });
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Consume the canvas, yielding the display list in paint order.
    #[must_use]
    pub fn finish(self) -> Vec<DrawCmd> {
        self.cmds.into_vec()
    }
}
