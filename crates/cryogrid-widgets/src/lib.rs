#![forbid(unsafe_code)]

//! Inventory widgets for CryoGrid.
//!
//! # Role in CryoGrid
//! This crate holds the custom widgets of the sample-inventory UI: the
//! resistance-tag editor, the cryovial cell renderer, the capsule stepper,
//! the floating info card, and the drag-to-relocate grid. Each widget is a
//! plain state struct: input arrives as [`cryogrid_core::Event`] values,
//! output leaves as typed event payloads and [`cryogrid_paint::DrawCmd`]
//! display lists. No toolkit types anywhere.
//!
//! # Conventions
//! - `handle_event` returns [`cryogrid_core::EventOutcome::Ignored`] when an
//!   event should scroll the surrounding page instead (the focus-gated wheel
//!   policy in [`wheel`]).
//! - Notifications are drained from each widget's `poll_events`; hosts
//!   re-read state rather than receiving payload-heavy callbacks.
//! - Every stateful widget exposes `refresh_theme` / `refresh_language` so
//!   runtime theme or language swaps never require reconstruction.

pub mod grid;
pub mod info_card;
pub mod payload;
pub mod stepper;
pub mod tag_editor;
pub mod vial_cell;
pub mod wheel;

pub use grid::{RelocatableGrid, Relocation};
pub use info_card::{CardStyle, InfoCard};
pub use payload::{CellPayload, StatusClass, fill_ratio, is_discarded, low_volume, truncate_label};
pub use stepper::{Stepper, StepperEvent, StepperStyle};
pub use tag_editor::{Tag, TagEditor, TagEditorEvent, TagPicker, TagRow, tags_from_json, tags_to_json};
pub use vial_cell::render_cell;
pub use wheel::{WheelRouting, wheel_policy};
