//! Defaults, value bounds, slider ranges, and persisted record keys.

use std::ops::RangeInclusive;

use crate::color::Rgb;
use crate::style::CrosshairStyle;

// === Defaults ===

/// Default arm length in pixels.
pub const DEFAULT_SIZE: u32 = 5;

/// Default gap in pixels (negative pulls the arms over the center).
pub const DEFAULT_GAP: i32 = -3;

/// Default primary stroke width in pixels.
pub const DEFAULT_THICKNESS: u32 = 1;

/// Default outline thickness in pixels.
pub const DEFAULT_OUTLINE: u32 = 1;

/// Default opacity (0..=255).
pub const DEFAULT_OPACITY: u8 = 200;

/// Default crosshair color.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0x50, 0xFA, 0x7B);

/// Default shape style.
pub const DEFAULT_STYLE: CrosshairStyle = CrosshairStyle::Classic;

/// Opacity assumed when a persisted record has no `opacity` key.
pub const RECORD_MISSING_OPACITY: u8 = 255;

/// Outline assumed when a persisted record has no `outline` key.
pub const RECORD_MISSING_OUTLINE: u32 = 0;

// === Value bounds ===
// Normalization clamps to these. Anything inside is a valid config and
// survives a persisted round trip unchanged.

pub const MIN_SIZE: i64 = 0;
pub const MAX_SIZE: i64 = u32::MAX as i64;

pub const MIN_GAP: i64 = i32::MIN as i64;
pub const MAX_GAP: i64 = i32::MAX as i64;

pub const MIN_THICKNESS: i64 = 0;
pub const MAX_THICKNESS: i64 = u32::MAX as i64;

pub const MIN_OUTLINE: i64 = 0;
pub const MAX_OUTLINE: i64 = u32::MAX as i64;

pub const MIN_OPACITY: i64 = 0;
pub const MAX_OPACITY: i64 = u8::MAX as i64;

// === Slider ranges ===
// What the form controls offer. A hint for UIs, never a normalization rule.

pub const SLIDER_SIZE: RangeInclusive<i64> = 0..=20;
pub const SLIDER_GAP: RangeInclusive<i64> = -10..=10;
pub const SLIDER_THICKNESS: RangeInclusive<i64> = 0..=10;
pub const SLIDER_OUTLINE: RangeInclusive<i64> = 0..=3;
pub const SLIDER_OPACITY: RangeInclusive<i64> = 0..=255;

// === Persisted record keys ===

pub const KEY_SIZE: &str = "size";
pub const KEY_GAP: &str = "gap";
pub const KEY_THICKNESS: &str = "thickness";
pub const KEY_OPACITY: &str = "opacity";
pub const KEY_OUTLINE: &str = "outline";
pub const KEY_COLOR: &str = "color";
pub const KEY_STYLE: &str = "style";
pub const KEY_DOT: &str = "dot";

/// Key under which browser builds keep the settings record in local storage.
pub const STORAGE_KEY: &str = "crosshairSettings";
