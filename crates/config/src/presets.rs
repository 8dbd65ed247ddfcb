//! Named crosshair presets from well-known players.

use crate::color::Rgb;
use crate::model::CrosshairConfig;
use crate::style::CrosshairStyle;

/// A named, static crosshair configuration.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Identifier used by preset buttons and the CLI
    pub id: &'static str,
    pub config: CrosshairConfig,
}

const fn classic(
    size: u32,
    gap: i32,
    thickness: u32,
    color: Rgb,
    outline_thickness: u32,
    opacity: u8,
    draw_center_dot: bool,
) -> CrosshairConfig {
    CrosshairConfig {
        size,
        gap,
        thickness,
        outline_thickness,
        opacity,
        color,
        style: CrosshairStyle::Classic,
        draw_center_dot,
    }
}

const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
const MINT: Rgb = Rgb::new(0x50, 0xFA, 0x7B);

pub const PRESETS: &[Preset] = &[
    Preset {
        id: "s1mple",
        config: classic(7, -3, 1, MINT, 1, 200, false),
    },
    Preset {
        id: "niko",
        config: classic(4, -2, 0, GREEN, 1, 255, true),
    },
    Preset {
        id: "zywoo",
        config: classic(3, -3, 1, GREEN, 1, 255, false),
    },
    Preset {
        id: "device",
        config: classic(5, -3, 1, MINT, 0, 200, false),
    },
    Preset {
        id: "electronic",
        config: classic(5, -1, 1, Rgb::new(0x00, 0xFF, 0xFF), 1, 255, false),
    },
    Preset {
        id: "twistzz",
        config: classic(4, -3, 0, GREEN, 1, 255, false),
    },
    Preset {
        id: "ropz",
        config: CrosshairConfig {
            style: CrosshairStyle::Dot,
            ..classic(2, 1, 1, Rgb::new(0xFF, 0xFF, 0xFF), 1, 255, false)
        },
    },
    Preset {
        id: "m0nesy",
        config: classic(6, -2, 1, Rgb::new(0xFF, 0xFF, 0x00), 1, 220, false),
    },
];

/// Look up a preset by id (case-insensitive).
pub fn find(id: &str) -> Option<&'static Preset> {
    let id = id.trim();
    PRESETS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// All preset ids in table order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset() {
        let niko = find("NiKo").unwrap();
        assert_eq!(niko.config.size, 4);
        assert_eq!(niko.config.thickness, 0);
        assert!(niko.config.draw_center_dot);

        let ropz = find("ropz").unwrap();
        assert_eq!(ropz.config.style, CrosshairStyle::Dot);
        assert_eq!(ropz.config.color, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(find("nobody").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut all: Vec<_> = ids().collect();
        let count = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), count);
        assert_eq!(count, 8);
    }
}
