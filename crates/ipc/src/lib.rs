//! IPC message protocol for the crosshair configurator
//!
//! Defines the JSON messages exchanged between a UI (browser page, CLI) and
//! the session that owns the crosshair state.

mod error;
mod messages;

pub use error::IpcError;
pub use messages::*;
