//! Keycode dataset wiring.
//!
//! This module wraps the keycode table on disk (for example
//! `data/keycodes.json`) so the resolver, enumerator and page builder share
//! one validated, immutable snapshot. Types here mirror the dataset fields;
//! callers use `KeyTable` for lookups.

pub mod index;
pub mod model;

pub use index::KeyTable;
pub use model::{KeyEventRecord, KeyLocation, KeyTableFile};

/// Default relative path to the bundled keycode dataset.
pub const DEFAULT_DATASET_PATH: &str = "data/keycodes.json";

/// Dataset compiled into the library; used when no override is configured.
pub const BUNDLED_DATASET: &str = include_str!("../../data/keycodes.json");
