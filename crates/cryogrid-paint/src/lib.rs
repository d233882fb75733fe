#![forbid(unsafe_code)]

//! Painting primitives for CryoGrid widgets.
//!
//! # Role in CryoGrid
//! `cryogrid-paint` is the kernel of the presentation layer: a packed RGBA
//! color type and an ordered display list of draw commands. Widgets compute
//! *what* to draw as plain data; the host's rasterizer decides *how*. That
//! split keeps every layout and color decision testable without a GUI
//! toolkit in the loop.
//!
//! # This crate provides
//! - [`Rgba`] packed color with channel accessors.
//! - [`DrawCmd`] — the display list vocabulary (rounded rects, discs, rings,
//!   arcs, text). Order within a list is paint order: later commands paint
//!   over earlier ones.
//! - [`Canvas`] — a small recorder that widgets push commands into.
//! - [`FontSpec`] and [`TextAlign`] for label commands.

pub mod color;
pub mod command;

pub use color::Rgba;
pub use command::{Canvas, DrawCmd, FontSpec, TextAlign};
