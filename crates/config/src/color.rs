//! 24-bit RGB color and hex conversion.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque 24-bit color. Alpha always comes from the config's opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, never failing.
    ///
    /// Digits that are not hex count as 0, as do missing digits. Anything
    /// past the sixth digit is ignored.
    pub fn from_hex_lossy(s: &str) -> Self {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);

        let mut digits = [0u8; 6];
        for (slot, c) in digits.iter_mut().zip(t.chars()) {
            *slot = c.to_digit(16).map(|d| d as u8).unwrap_or(0);
        }

        Self {
            r: digits[0] << 4 | digits[1],
            g: digits[2] << 4 | digits[3],
            b: digits[4] << 4 | digits[5],
        }
    }

    /// Strict parse; `None` unless the input is exactly six hex digits.
    pub fn from_hex(s: &str) -> Option<Self> {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);
        if t.len() != 6 || !t.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self::from_hex_lossy(t))
    }

    /// Uppercase `RRGGBB` without the leading marker.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` string for canvas fill/stroke styles.
    pub fn to_css(self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }

    /// Normalised `[r, g, b, a]` floats in 0.0..=1.0.
    pub fn to_rgba_f32(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha.clamp(0.0, 1.0),
        ]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

// Serialized as the marker-less hex string used in share links.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_hex_lossy(&s))
    }
}
