#![forbid(unsafe_code)]

//! CryoGrid public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for hosts. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use cryogrid_core::event::{
    Event, EventOutcome, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerKind,
    WheelDelta, WheelEvent,
};
pub use cryogrid_core::geometry::{Point, Rect};

// --- Paint re-exports ------------------------------------------------------

pub use cryogrid_paint::{Canvas, DrawCmd, FontSpec, Rgba, TextAlign};

// --- Style re-exports ------------------------------------------------------

pub use cryogrid_style::{
    ColorParseError, Theme, ThemeBuilder, TypeColorRegistry, best_text_color, is_dark,
    lightness, parse_hex,
};

// --- i18n re-exports -------------------------------------------------------

pub use cryogrid_i18n::{I18nError, StringCatalog};

// --- Widget re-exports -----------------------------------------------------

pub use cryogrid_widgets::{
    CardStyle, CellPayload, InfoCard, RelocatableGrid, Relocation, StatusClass, Stepper,
    StepperEvent, StepperStyle, Tag, TagEditor, TagEditorEvent, TagPicker, TagRow,
    WheelRouting, fill_ratio, low_volume, render_cell, tags_from_json, tags_to_json,
    wheel_policy,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CellPayload, DrawCmd, Event, EventOutcome, InfoCard, Point, Rect, RelocatableGrid,
        Relocation, Rgba, Stepper, StepperEvent, StringCatalog, TagEditor, TagEditorEvent,
        Theme, TypeColorRegistry, render_cell,
    };

    pub use crate::{core, i18n, paint, style, widgets};
}

pub use cryogrid_core as core;
pub use cryogrid_i18n as i18n;
pub use cryogrid_paint as paint;
pub use cryogrid_style as style;
pub use cryogrid_widgets as widgets;
