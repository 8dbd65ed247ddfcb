//! Flat persisted form of a crosshair config.
//!
//! The same record backs share links (URL query string) and the local
//! settings store (JSON). Values are kept as strings, exactly as the form
//! controls report them, and normalized only when turned back into a
//! [`CrosshairConfig`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::model::{CrosshairConfig, RawInput};

/// Key/value record with keys `size, gap, thickness, opacity, outline,
/// color, style, dot`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub opacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub outline: Option<String>,
    /// Hex digits without the leading `#`
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub style: Option<String>,
    /// "1" or "0"
    #[serde(
        default,
        alias = "drawDot",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub dot: Option<String>,
}

/// Any JSON scalar, as older stores wrote numbers and booleans unquoted.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Str(s) => s,
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => (if b { "1" } else { "0" }).to_string(),
    }))
}

/// Treats empty values like missing ones.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl PersistedRecord {
    /// Capture every field of a config.
    pub fn from_config(config: &CrosshairConfig) -> Self {
        Self {
            size: Some(config.size.to_string()),
            gap: Some(config.gap.to_string()),
            thickness: Some(config.thickness.to_string()),
            opacity: Some(config.opacity.to_string()),
            outline: Some(config.outline_thickness.to_string()),
            color: Some(config.color.to_hex()),
            style: Some(config.style.as_str().to_string()),
            dot: Some((if config.draw_center_dot { "1" } else { "0" }).to_string()),
        }
    }

    /// Rebuild a normalized config.
    ///
    /// A missing `opacity` means fully opaque and a missing `outline` means
    /// no outline; an explicit "0" is kept as 0. Other missing fields take
    /// the usual defaults.
    pub fn to_config(&self) -> CrosshairConfig {
        let raw = RawInput {
            size: self.size.clone(),
            gap: self.gap.clone(),
            thickness: self.thickness.clone(),
            opacity: Some(
                present(&self.opacity)
                    .map(str::to_string)
                    .unwrap_or_else(|| RECORD_MISSING_OPACITY.to_string()),
            ),
            outline: Some(
                present(&self.outline)
                    .map(str::to_string)
                    .unwrap_or_else(|| RECORD_MISSING_OUTLINE.to_string()),
            ),
            color: self.color.clone(),
            style: self.style.clone(),
            draw_center_dot: Some(matches!(
                self.dot.as_deref().map(str::trim),
                Some("1") | Some("true")
            )),
        };
        CrosshairConfig::from_raw(&raw)
    }

    fn pairs(&self) -> [(&'static str, Option<&str>); 8] {
        [
            (KEY_SIZE, self.size.as_deref()),
            (KEY_GAP, self.gap.as_deref()),
            (KEY_THICKNESS, self.thickness.as_deref()),
            (KEY_OPACITY, self.opacity.as_deref()),
            (KEY_OUTLINE, self.outline.as_deref()),
            (KEY_COLOR, self.color.as_deref()),
            (KEY_STYLE, self.style.as_deref()),
            (KEY_DOT, self.dot.as_deref()),
        ]
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            KEY_SIZE => Some(&mut self.size),
            KEY_GAP => Some(&mut self.gap),
            KEY_THICKNESS => Some(&mut self.thickness),
            KEY_OPACITY => Some(&mut self.opacity),
            KEY_OUTLINE => Some(&mut self.outline),
            KEY_COLOR => Some(&mut self.color),
            KEY_STYLE => Some(&mut self.style),
            KEY_DOT => Some(&mut self.dot),
            _ => None,
        }
    }

    /// Encode as `size=..&gap=..&...` in fixed key order.
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{key}={}", urlencoding::encode(v))))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decode a URL query string, with or without the leading `?`.
    ///
    /// Returns `None` when there is no `size` parameter, meaning the URL
    /// does not carry crosshair settings. Unknown keys are ignored and the
    /// first occurrence of a repeated key wins.
    pub fn from_query_string(query: &str) -> Option<Self> {
        let query = query.trim();
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut record = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            if let Some(slot) = record.slot_mut(&key) {
                if slot.is_none() {
                    *slot = Some(decode_component(value));
                }
            }
        }

        record.size.is_some().then_some(record)
    }

    /// Full share link for a page URL without query.
    pub fn share_url(&self, base: &str) -> String {
        format!("{}?{}", base.trim_end_matches('?'), self.to_query_string())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Form-urlencoded decoding: `+` is a space, malformed escapes pass through.
fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|c| c.into_owned())
        .unwrap_or(spaced)
}

impl From<&CrosshairConfig> for PersistedRecord {
    fn from(config: &CrosshairConfig) -> Self {
        Self::from_config(config)
    }
}
