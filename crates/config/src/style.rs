//! Crosshair shape styles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Shape family used to draw the reticle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrosshairStyle {
    /// Four arms around the center
    #[default]
    Classic,
    /// A single filled dot
    Dot,
    /// Classic without the top arm
    TStyle,
    /// A stroked circle
    Circle,
    /// A stroked square
    Square,
}

impl CrosshairStyle {
    pub const ALL: [CrosshairStyle; 5] = [
        CrosshairStyle::Classic,
        CrosshairStyle::Dot,
        CrosshairStyle::TStyle,
        CrosshairStyle::Circle,
        CrosshairStyle::Square,
    ];

    /// Name as it appears in form values and persisted records.
    pub fn as_str(self) -> &'static str {
        match self {
            CrosshairStyle::Classic => "classic",
            CrosshairStyle::Dot => "dot",
            CrosshairStyle::TStyle => "t-style",
            CrosshairStyle::Circle => "circle",
            CrosshairStyle::Square => "square",
        }
    }

    /// Parse a style name, falling back to classic for anything unknown.
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: ConfigError| {
            warn!("{e}, falling back to {}", Self::default().as_str());
            Self::default()
        })
    }
}

impl FromStr for CrosshairStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownStyle(name.to_string()))
    }
}

impl std::fmt::Display for CrosshairStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for style in CrosshairStyle::ALL {
            assert_eq!(style.as_str().parse::<CrosshairStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        let err = "crossbow".parse::<CrosshairStyle>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStyle(ref s) if s == "crossbow"));
    }

    #[test]
    fn test_lossy_parse_falls_back_to_classic() {
        assert_eq!(CrosshairStyle::parse_lossy("banana"), CrosshairStyle::Classic);
        assert_eq!(CrosshairStyle::parse_lossy(""), CrosshairStyle::Classic);
        assert_eq!(CrosshairStyle::parse_lossy(" T-Style "), CrosshairStyle::TStyle);
    }

    #[test]
    fn test_serde_uses_form_names() {
        let json = serde_json::to_string(&CrosshairStyle::TStyle).unwrap();
        assert_eq!(json, "\"t-style\"");
    }
}
