//! The crosshair parameter model and raw-input normalization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgb;
use crate::constants::*;
use crate::error::ConfigError;
use crate::style::CrosshairStyle;

/// A complete crosshair configuration.
///
/// This is a plain value: renderers and serializers take it by reference and
/// never see a half-updated snapshot. Mutation goes through [`Self::apply`],
/// which returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairConfig {
    /// Arm length in pixels (radius offset for circle/square)
    pub size: u32,
    /// Signed distance from center to the start of each arm
    pub gap: i32,
    /// Primary stroke width in pixels
    pub thickness: u32,
    /// Outline width added on each side; 0 disables the outline pass
    pub outline_thickness: u32,
    /// Opacity 0..=255, shared by outline and primary passes
    pub opacity: u8,
    /// Primary color
    pub color: Rgb,
    /// Shape family
    pub style: CrosshairStyle,
    /// Draw an extra filled dot at the center
    pub draw_center_dot: bool,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            gap: DEFAULT_GAP,
            thickness: DEFAULT_THICKNESS,
            outline_thickness: DEFAULT_OUTLINE,
            opacity: DEFAULT_OPACITY,
            color: DEFAULT_COLOR,
            style: DEFAULT_STYLE,
            draw_center_dot: false,
        }
    }
}

/// Raw values as a form or persisted record hands them over.
///
/// `None` means the value was not supplied and the field default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub size: Option<String>,
    pub gap: Option<String>,
    pub thickness: Option<String>,
    pub outline: Option<String>,
    pub opacity: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
    pub draw_center_dot: Option<bool>,
}

/// A single-field change coming from an input widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    Size(String),
    Gap(String),
    Thickness(String),
    Outline(String),
    Opacity(String),
    Color(String),
    Style(String),
    DrawCenterDot(bool),
}

impl CrosshairConfig {
    /// Build a config from raw strings, clamping or substituting defaults.
    ///
    /// Never fails: malformed numbers take the field default, numbers
    /// outside the value bounds clamp to them, bad hex digits count as 0
    /// and unknown styles become classic. Slider ranges do not apply here.
    pub fn from_raw(raw: &RawInput) -> Self {
        let defaults = Self::default();
        Self {
            size: normalize_u32(KEY_SIZE, raw.size.as_deref(), defaults.size, MIN_SIZE, MAX_SIZE),
            gap: normalize_int(KEY_GAP, raw.gap.as_deref(), defaults.gap as i64, MIN_GAP, MAX_GAP)
                as i32,
            thickness: normalize_u32(
                KEY_THICKNESS,
                raw.thickness.as_deref(),
                defaults.thickness,
                MIN_THICKNESS,
                MAX_THICKNESS,
            ),
            outline_thickness: normalize_u32(
                KEY_OUTLINE,
                raw.outline.as_deref(),
                defaults.outline_thickness,
                MIN_OUTLINE,
                MAX_OUTLINE,
            ),
            opacity: normalize_int(
                KEY_OPACITY,
                raw.opacity.as_deref(),
                defaults.opacity as i64,
                MIN_OPACITY,
                MAX_OPACITY,
            ) as u8,
            color: raw
                .color
                .as_deref()
                .map(Rgb::from_hex_lossy)
                .unwrap_or(defaults.color),
            style: raw
                .style
                .as_deref()
                .map(CrosshairStyle::parse_lossy)
                .unwrap_or(defaults.style),
            draw_center_dot: raw.draw_center_dot.unwrap_or(defaults.draw_center_dot),
        }
    }

    /// Return a copy with one field replaced by a normalized raw value.
    ///
    /// A malformed number keeps the current value rather than the default.
    pub fn apply(mut self, update: &FieldUpdate) -> Self {
        match update {
            FieldUpdate::Size(v) => {
                self.size = normalize_u32(KEY_SIZE, Some(v), self.size, MIN_SIZE, MAX_SIZE);
            }
            FieldUpdate::Gap(v) => {
                self.gap = normalize_int(KEY_GAP, Some(v), self.gap as i64, MIN_GAP, MAX_GAP) as i32;
            }
            FieldUpdate::Thickness(v) => {
                self.thickness =
                    normalize_u32(KEY_THICKNESS, Some(v), self.thickness, MIN_THICKNESS, MAX_THICKNESS);
            }
            FieldUpdate::Outline(v) => {
                self.outline_thickness = normalize_u32(
                    KEY_OUTLINE,
                    Some(v),
                    self.outline_thickness,
                    MIN_OUTLINE,
                    MAX_OUTLINE,
                );
            }
            FieldUpdate::Opacity(v) => {
                self.opacity =
                    normalize_int(KEY_OPACITY, Some(v), self.opacity as i64, MIN_OPACITY, MAX_OPACITY)
                        as u8;
            }
            FieldUpdate::Color(v) => self.color = Rgb::from_hex_lossy(v),
            FieldUpdate::Style(v) => self.style = CrosshairStyle::parse_lossy(v),
            FieldUpdate::DrawCenterDot(v) => self.draw_center_dot = *v,
        }
        self
    }

    /// Alpha fraction shared by both passes.
    pub fn alpha(&self) -> f32 {
        self.opacity as f32 / 255.0
    }

    /// Whether the outline pass runs.
    pub fn has_outline(&self) -> bool {
        self.outline_thickness > 0
    }

    /// Distance from center to the outer end of an arm (circle/square radius).
    ///
    /// May be negative when the gap pulls the shape past the center.
    pub fn reach(&self) -> i64 {
        self.gap as i64 + self.size as i64
    }
}

/// Strict base-10 parse of a numeric field.
pub fn parse_int_field(field: &'static str, raw: &str) -> Result<i64, ConfigError> {
    raw.trim().parse::<i64>().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn normalize_int(field: &'static str, raw: Option<&str>, fallback: i64, min: i64, max: i64) -> i64 {
    let Some(raw) = raw else {
        return fallback.clamp(min, max);
    };
    match parse_int_field(field, raw) {
        Ok(v) => {
            let clamped = v.clamp(min, max);
            if clamped != v {
                debug!("{field}={v} out of range, clamped to {clamped}");
            }
            clamped
        }
        Err(e) => {
            debug!("{e}, using {fallback}");
            fallback.clamp(min, max)
        }
    }
}

fn normalize_u32(field: &'static str, raw: Option<&str>, fallback: u32, min: i64, max: i64) -> u32 {
    normalize_int(field, raw, fallback as i64, min, max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(size: &str, gap: &str) -> RawInput {
        RawInput {
            size: Some(size.into()),
            gap: Some(gap.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = CrosshairConfig::default();
        assert_eq!(config.size, 5);
        assert_eq!(config.gap, -3);
        assert_eq!(config.opacity, 200);
        assert_eq!(config.color.to_hex(), "50FA7B");
        assert_eq!(config.style, CrosshairStyle::Classic);
        assert!(!config.draw_center_dot);
    }

    #[test]
    fn test_from_raw_parses_fields() {
        let input = RawInput {
            size: Some("7".into()),
            gap: Some(" -2 ".into()),
            thickness: Some("0".into()),
            outline: Some("2".into()),
            opacity: Some("128".into()),
            color: Some("#00FF00".into()),
            style: Some("circle".into()),
            draw_center_dot: Some(true),
        };
        let config = CrosshairConfig::from_raw(&input);
        assert_eq!(config.size, 7);
        assert_eq!(config.gap, -2);
        assert_eq!(config.thickness, 0);
        assert_eq!(config.outline_thickness, 2);
        assert_eq!(config.opacity, 128);
        assert_eq!(config.color, Rgb::new(0, 255, 0));
        assert_eq!(config.style, CrosshairStyle::Circle);
        assert!(config.draw_center_dot);
    }

    #[test]
    fn test_from_raw_keeps_values_past_slider_ranges() {
        let config = CrosshairConfig::from_raw(&raw("25", "-12"));
        assert_eq!(config.size, 25);
        assert_eq!(config.gap, -12);
        assert!(!SLIDER_SIZE.contains(&25));
    }

    #[test]
    fn test_from_raw_clamps_to_value_bounds() {
        let config = CrosshairConfig::from_raw(&RawInput {
            opacity: Some("300".into()),
            thickness: Some("-4".into()),
            outline: Some("-1".into()),
            ..Default::default()
        });
        assert_eq!(config.opacity, 255);
        assert_eq!(config.thickness, 0);
        assert_eq!(config.outline_thickness, 0);

        let config = CrosshairConfig::from_raw(&raw("99999999999", "-99999999999"));
        assert_eq!(config.size, u32::MAX);
        assert_eq!(config.gap, i32::MIN);
    }

    #[test]
    fn test_from_raw_substitutes_defaults_for_garbage() {
        let config = CrosshairConfig::from_raw(&raw("five", ""));
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.gap, DEFAULT_GAP);
    }

    #[test]
    fn test_from_raw_unknown_style_becomes_classic() {
        let config = CrosshairConfig::from_raw(&RawInput {
            style: Some("banana".into()),
            ..Default::default()
        });
        assert_eq!(config.style, CrosshairStyle::Classic);
    }

    #[test]
    fn test_apply_returns_updated_copy() {
        let before = CrosshairConfig::default();
        let after = before.apply(&FieldUpdate::Size("9".into()));
        assert_eq!(before.size, DEFAULT_SIZE);
        assert_eq!(after.size, 9);
        assert_eq!(after.gap, before.gap);
    }

    #[test]
    fn test_apply_keeps_current_value_on_garbage() {
        let config = CrosshairConfig::default().apply(&FieldUpdate::Opacity("40".into()));
        let config = config.apply(&FieldUpdate::Opacity("lots".into()));
        assert_eq!(config.opacity, 40);
    }

    #[test]
    fn test_alpha_and_reach() {
        let config = CrosshairConfig {
            opacity: 255,
            size: 3,
            gap: -3,
            ..Default::default()
        };
        assert_eq!(config.alpha(), 1.0);
        assert_eq!(config.reach(), 0);
        assert_eq!(CrosshairConfig { opacity: 0, ..config }.alpha(), 0.0);
    }

    #[test]
    fn test_field_update_json_shape() {
        let json = serde_json::to_string(&FieldUpdate::DrawCenterDot(true)).unwrap();
        assert_eq!(json, r#"{"field":"drawCenterDot","value":true}"#);
        let update: FieldUpdate = serde_json::from_str(r#"{"field":"gap","value":"-1"}"#).unwrap();
        assert_eq!(update, FieldUpdate::Gap("-1".into()));
    }

    #[test]
    fn test_parse_int_field_reports_field() {
        let err = parse_int_field(KEY_GAP, "x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for gap: \"x\"");
    }
}
