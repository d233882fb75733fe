#![forbid(unsafe_code)]

//! Drag-to-relocate sample grid.
//!
//! The grid announces *intent*: a completed drag from one occupied cell to a
//! different cell yields a [`Relocation`], and the host decides whether the
//! move is legal and updates its own store before pushing fresh content back
//! in. The grid never mutates its contents during a drag, so a rejected move
//! needs no rollback.

use cryogrid_core::event::{Event, EventOutcome, PointerKind};
use cryogrid_core::geometry::{Point, Rect};
use tracing::debug;

/// A completed drag between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    /// Source row.
    pub src_row: usize,
    /// Source column.
    pub src_col: usize,
    /// Destination row.
    pub dst_row: usize,
    /// Destination column.
    pub dst_col: usize,
}

/// Fixed-shape grid of optional cell contents with drag-to-relocate.
#[derive(Debug, Clone)]
pub struct RelocatableGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
    origin: Point,
    cell_width: f32,
    cell_height: f32,
    drag_source: Option<(usize, usize)>,
    pending: Vec<Relocation>,
}

impl<T> RelocatableGrid<T> {
    /// Create an empty grid of the given shape.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, || None);
        Self {
            rows,
            cols,
            cells,
            origin: Point::new(0.0, 0.0),
            cell_width: 64.0,
            cell_height: 64.0,
            drag_source: None,
            pending: Vec::new(),
        }
    }

    /// Set the on-screen geometry used for hit testing.
    pub fn set_geometry(&mut self, origin: Point, cell_width: f32, cell_height: f32) {
        self.origin = origin;
        self.cell_width = cell_width;
        self.cell_height = cell_height;
    }

    /// Row count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The screen rectangle of a cell, if in range.
    #[must_use]
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Rect::new(
            self.origin.x + col as f32 * self.cell_width,
            self.origin.y + row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        ))
    }

    /// Hit-test a point to a cell position.
    #[must_use]
    pub fn cell_at(&self, pos: Point) -> Option<(usize, usize)> {
        if pos.x < self.origin.x || pos.y < self.origin.y {
            return None;
        }
        let col = ((pos.x - self.origin.x) / self.cell_width) as usize;
        let row = ((pos.y - self.origin.y) / self.cell_height) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Put content into a cell, returning the previous occupant.
    pub fn set_content(&mut self, row: usize, col: usize, content: T) -> Option<T> {
        let idx = self.index(row, col)?;
        self.cells[idx].replace(content)
    }

    /// Borrow a cell's content.
    #[must_use]
    pub fn content(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get(self.index(row, col)?)?.as_ref()
    }

    /// Remove and return a cell's content.
    pub fn take_content(&mut self, row: usize, col: usize) -> Option<T> {
        let idx = self.index(row, col)?;
        self.cells[idx].take()
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.drag_source = None;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag_source.is_some()
    }

    /// The drag source, while a drag is in progress.
    #[must_use]
    pub fn drag_source(&self) -> Option<(usize, usize)> {
        self.drag_source
    }

    /// Press at a point: arms a drag when the cell under it is occupied.
    ///
    /// Pressing an empty well or the space between cells arms nothing.
    pub fn press(&mut self, pos: Point) {
        self.drag_source = self
            .cell_at(pos)
            .filter(|&(r, c)| self.content(r, c).is_some());
    }

    /// Complete a drag at a point.
    ///
    /// Returns the relocation when the drop lands on a cell other than the
    /// source. Dropping outside the grid or back on the source cell cancels
    /// silently. Either way the drag is disarmed and the grid's own contents
    /// are untouched.
    pub fn drop_at(&mut self, pos: Point) -> Option<Relocation> {
        let (src_row, src_col) = self.drag_source.take()?;
        let (dst_row, dst_col) = self.cell_at(pos)?;
        if (dst_row, dst_col) == (src_row, src_col) {
            return None;
        }
        let relocation = Relocation {
            src_row,
            src_col,
            dst_row,
            dst_col,
        };
        debug!(
            src_row, src_col, dst_row, dst_col,
            "relocation requested"
        );
        self.pending.push(relocation);
        Some(relocation)
    }

    /// Cancel any drag in progress.
    pub fn cancel_drag(&mut self) {
        self.drag_source = None;
    }

    /// Drain pending relocation requests.
    #[must_use]
    pub fn poll_events(&mut self) -> Vec<Relocation> {
        std::mem::take(&mut self.pending)
    }

    /// Route a pointer event through the press/drag/drop cycle.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        let Event::Pointer(pointer) = event else {
            return EventOutcome::Ignored;
        };
        match pointer.kind {
            PointerKind::Down => {
                self.press(pointer.pos);
                if self.drag_source.is_some() {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerKind::Drag => {
                if self.drag_source.is_some() {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerKind::Up => {
                if self.drag_source.is_some() {
                    let _ = self.drop_at(pointer.pos);
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerKind::Moved => EventOutcome::Ignored,
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}
