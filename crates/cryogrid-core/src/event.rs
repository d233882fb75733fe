#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event types used throughout CryoGrid for
//! input handling. All events derive `Clone` and `PartialEq` for use in tests
//! and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are pixel-space and 0-indexed.
//! - Wheel input carries a coarse direction, not raw deltas; widgets only
//!   ever step by one notch.
//! - `Tick` events drive time-based behavior (press-and-hold auto-repeat)
//!   from the host's UI timer. There is no thread anywhere in this crate.

use bitflags::bitflags;

use crate::geometry::Point;
use web_time::Instant;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A pointer (mouse) event.
    Pointer(PointerEvent),

    /// A wheel-rotation event.
    Wheel(WheelEvent),

    /// A keyboard event.
    Key(KeyEvent),

    /// Input focus gained (`true`) or lost (`false`).
    Focus(bool),

    /// UI timer tick carrying the current instant.
    Tick(Instant),
}

/// What a widget did with an event.
///
/// `Ignored` leaves the event for the ancestor scrollable container, so a
/// page-scroll gesture continues uninterrupted past an unfocused control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The widget handled the event; stop propagation.
    Consumed,
    /// The widget declined the event; let the parent handle it.
    Ignored,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerKind,

    /// Button involved, if any.
    pub button: PointerButton,

    /// Position in pixel space.
    pub pos: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[must_use]
    pub const fn new(kind: PointerKind, button: PointerButton, pos: Point) -> Self {
        Self {
            kind,
            button,
            pos,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a left-button press at the given position.
    #[must_use]
    pub const fn left_down(pos: Point) -> Self {
        Self::new(PointerKind::Down, PointerButton::Left, pos)
    }

    /// Create a left-button release at the given position.
    #[must_use]
    pub const fn left_up(pos: Point) -> Self {
        Self::new(PointerKind::Up, PointerButton::Left, pos)
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed down.
    Down,

    /// Button released.
    Up,

    /// Pointer moved with a button held.
    Drag,

    /// Pointer moved with no button held.
    Moved,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left button (the drag/select button).
    #[default]
    Left,

    /// Right button.
    Right,

    /// Middle button.
    Middle,

    /// No button (for `Moved` events).
    None,
}

/// A wheel-rotation event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Rotation direction.
    pub delta: WheelDelta,

    /// Position in pixel space.
    pub pos: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Create a new wheel event with no modifiers.
    #[must_use]
    pub const fn new(delta: WheelDelta, pos: Point) -> Self {
        Self {
            delta,
            pos,
            modifiers: Modifiers::NONE,
        }
    }

    /// One notch upward at the origin (test helper shape).
    #[must_use]
    pub const fn up() -> Self {
        Self::new(WheelDelta::Up, Point::new(0.0, 0.0))
    }

    /// One notch downward at the origin (test helper shape).
    #[must_use]
    pub const fn down() -> Self {
        Self::new(WheelDelta::Down, Point::new(0.0, 0.0))
    }
}

/// Wheel rotation direction, one notch at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDelta {
    /// Away from the user.
    Up,
    /// Toward the user.
    Down,
}

/// A keyboard event.
///
/// Deliberately minimal: the widgets in this crate only need free-text entry
/// and the confirm key for the tag picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,
}

bitflags! {
    /// Modifier keys that can be held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}
