#![forbid(unsafe_code)]

//! Core types for CryoGrid widgets.
//!
//! # Role in CryoGrid
//! `cryogrid-core` is the shared vocabulary for input and geometry. Widgets
//! consume these types to stay toolkit-agnostic: events are plain data, and
//! geometry is pixel-space `f32` suitable for any rasterizer the host wires
//! up.
//!
//! # This crate provides
//! - [`Event`] and friends: pointer, wheel, key, focus, and timer-tick input.
//! - [`EventOutcome`]: whether a widget consumed an event or left it for the
//!   ancestor scroll container.
//! - [`Point`] and [`Rect`]: pixel-space geometry for hit tests and painting.

pub mod event;
pub mod geometry;

pub use event::{
    Event, EventOutcome, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerKind,
    WheelDelta, WheelEvent,
};
pub use geometry::{Point, Rect};
