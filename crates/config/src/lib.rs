//! Crosshair parameter model
//!
//! This crate is the single source of truth for a crosshair configuration:
//! - [`model::CrosshairConfig`] - the immutable parameter snapshot
//! - [`model::RawInput`] / [`model::FieldUpdate`] - raw form values and their normalization
//! - [`presets`] - named configurations of well-known players
//! - [`record::PersistedRecord`] - flat record for share links and local storage
//! - [`store`] - settings stores and startup resolution

pub mod color;
pub mod constants;
pub mod error;
pub mod model;
pub mod presets;
pub mod record;
pub mod store;
pub mod style;

pub use color::{Rgb, BLACK};
pub use constants::*;
pub use error::ConfigError;
pub use model::{CrosshairConfig, FieldUpdate, RawInput};
pub use presets::{Preset, PRESETS};
pub use record::PersistedRecord;
pub use store::{load_or_none, resolve_initial, FileStore, MemoryStore, SettingsStore};
pub use style::CrosshairStyle;
