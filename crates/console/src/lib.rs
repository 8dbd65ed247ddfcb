//! Console command serializer
//!
//! Maps a [`crosshair_config::CrosshairConfig`] to the semicolon-joined
//! command line players paste into the game console.
//!
//! ```
//! use crosshair_config::CrosshairConfig;
//!
//! let line = crosshair_console::console_command(&CrosshairConfig::default()).to_string();
//! assert!(line.starts_with("cl_crosshairsize 5; "));
//! ```

pub mod codes;
pub mod command;

pub use codes::{style_code, style_code_for_name, FALLBACK_STYLE_CODE};
pub use command::{console_command, CommandToken, ConsoleCommand};
