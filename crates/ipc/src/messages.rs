//! Message enums for communication between a UI and the crosshair core.

use crosshair_config::{CrosshairConfig, FieldUpdate, PersistedRecord};
use crosshair_render::{CanvasSize, DrawPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::IpcError;

/// Error code for a preset id that is not in the table.
pub const ERROR_UNKNOWN_PRESET: &str = "unknown_preset";

/// Error code for a message that could not be decoded.
pub const ERROR_INVALID_MESSAGE: &str = "invalid_message";

/// Messages from the UI to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToCore {
    /// An input widget changed
    UpdateField(FieldUpdate),

    /// A preset button was pressed
    ApplyPreset { id: String },

    /// Settings decoded by a persistence adapter
    LoadRecord(PersistedRecord),

    /// Back to the default crosshair
    Reset,

    /// The preview canvas changed size
    Resize(CanvasSize),

    /// Ask for the share link query string
    RequestShareQuery,

    /// Ask for the preset ids
    ListPresets,
}

/// Messages from the core to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CoreToUi {
    /// Result of one render-and-serialize pass
    Frame {
        config: CrosshairConfig,
        primitives: Vec<DrawPrimitive>,
        command: String,
    },

    /// Query string for a share link, without the leading `?`
    ShareQuery { query: String },

    /// Available preset ids, in display order
    Presets { ids: Vec<String> },

    /// Error notification
    Error { code: String, message: String },
}

impl CoreToUi {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        CoreToUi::Error {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Decode a UI message from JSON.
pub fn decode_ui_message(json: &str) -> Result<UiToCore, IpcError> {
    if json.trim().is_empty() {
        return Err(IpcError::EmptyMessage);
    }
    serde_json::from_str(json).map_err(IpcError::Decode)
}

/// Encode core messages as a JSON array.
pub fn encode_core_messages(messages: &[CoreToUi]) -> Result<String, IpcError> {
    serde_json::to_string(messages).map_err(IpcError::Encode)
}
