#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for CryoGrid.
//!
//! Provides externalized string storage with key-based lookup and locale
//! fallback chains.
//!
//! # Role in CryoGrid
//! `cryogrid-i18n` isolates localization concerns so widgets can remain
//! deterministic while still supporting multiple languages. Widgets resolve
//! every user-visible string through [`StringCatalog::get_or`], which
//! degrades to a caller-supplied literal rather than ever surfacing a
//! lookup failure to the UI.

pub mod catalog;

pub use catalog::{I18nError, StringCatalog};
