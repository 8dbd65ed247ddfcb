//! Console variable names and numeric style codes.

use crosshair_config::CrosshairStyle;

pub const CVAR_SIZE: &str = "cl_crosshairsize";
pub const CVAR_GAP: &str = "cl_crosshairgap";
pub const CVAR_THICKNESS: &str = "cl_crosshairthickness";
pub const CVAR_ALPHA: &str = "cl_crosshairalpha";
pub const CVAR_DRAW_OUTLINE: &str = "cl_crosshair_drawoutline";
pub const CVAR_OUTLINE_THICKNESS: &str = "cl_crosshair_outlinethickness";
pub const CVAR_COLOR: &str = "cl_crosshaircolor";
pub const CVAR_COLOR_R: &str = "cl_crosshaircolor_r";
pub const CVAR_COLOR_G: &str = "cl_crosshaircolor_g";
pub const CVAR_COLOR_B: &str = "cl_crosshaircolor_b";
pub const CVAR_STYLE: &str = "cl_crosshairstyle";
pub const CVAR_DOT: &str = "cl_crosshairdot";

/// `cl_crosshaircolor` value that enables the custom RGB channels.
pub const CUSTOM_COLOR_MODE: u8 = 5;

/// Code used for style names the game has no mapping for.
pub const FALLBACK_STYLE_CODE: u8 = 4;

/// Game style code. Classic and t-style share a code, so the mapping
/// cannot be inverted.
pub fn style_code(style: CrosshairStyle) -> u8 {
    match style {
        CrosshairStyle::Classic => 4,
        CrosshairStyle::Dot => 2,
        CrosshairStyle::TStyle => 4,
        CrosshairStyle::Circle => 0,
        CrosshairStyle::Square => 3,
    }
}

/// Game style code for a raw style name; unknown names get the fallback.
pub fn style_code_for_name(name: &str) -> u8 {
    name.parse::<CrosshairStyle>()
        .map(style_code)
        .unwrap_or(FALLBACK_STYLE_CODE)
}
