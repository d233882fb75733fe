#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Pixel-space coordinates (0-indexed, origin at top-left, `f32` like the
//! painting layer expects). Rectangles are (x, y, width, height) with
//! exclusive right/bottom edges.

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle for widget bounds, painting, and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// Width and height never go negative; an over-large margin collapses the
    /// rectangle to zero size around its center.
    #[must_use]
    pub fn inset(&self, margin: f32) -> Rect {
        let width = (self.width - 2.0 * margin).max(0.0);
        let height = (self.height - 2.0 * margin).max(0.0);
        Rect {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(r.center(), Point::new(5.0, 10.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
        assert!(!r.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn inset_shrinks_symmetrically() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0).inset(6.0);
        assert_eq!(r, Rect::new(6.0, 6.0, 88.0, 38.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert!(r.is_empty());
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
        // Collapsed around the original center.
        assert_eq!(r.x, 5.0);
        assert_eq!(r.y, 5.0);
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(5.0, 5.0, 0.0, 10.0);
        assert!(r.is_empty());
        assert!(!r.contains(Point::new(5.0, 5.0)));
    }
}
