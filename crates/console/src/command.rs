//! Console command serialization.

use std::fmt;

use crosshair_config::CrosshairConfig;
use serde::{Deserialize, Serialize};

use crate::codes::*;

/// Separator between tokens in the single-line command.
pub const TOKEN_SEPARATOR: &str = "; ";

/// One `cvar value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandToken {
    pub cvar: String,
    pub value: String,
}

impl CommandToken {
    fn new(cvar: &str, value: impl ToString) -> Self {
        Self {
            cvar: cvar.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cvar, self.value)
    }
}

/// The full command sequence for one config, in the game's expected order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleCommand {
    tokens: Vec<CommandToken>,
}

impl ConsoleCommand {
    pub fn tokens(&self) -> &[CommandToken] {
        &self.tokens
    }

    /// Value of a cvar, if present.
    pub fn get(&self, cvar: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.cvar == cvar)
            .map(|t| t.value.as_str())
    }

    /// One command per line, for an autoexec-style `.cfg` file.
    pub fn to_cfg(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.to_string());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for ConsoleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(TOKEN_SEPARATOR)?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Build the 12-token command for a config.
pub fn console_command(config: &CrosshairConfig) -> ConsoleCommand {
    let color = config.color;
    let tokens = vec![
        CommandToken::new(CVAR_SIZE, config.size),
        CommandToken::new(CVAR_GAP, config.gap),
        CommandToken::new(CVAR_THICKNESS, config.thickness),
        CommandToken::new(CVAR_ALPHA, config.opacity),
        CommandToken::new(CVAR_DRAW_OUTLINE, u8::from(config.has_outline())),
        CommandToken::new(CVAR_OUTLINE_THICKNESS, config.outline_thickness),
        CommandToken::new(CVAR_COLOR, CUSTOM_COLOR_MODE),
        CommandToken::new(CVAR_COLOR_R, color.r),
        CommandToken::new(CVAR_COLOR_G, color.g),
        CommandToken::new(CVAR_COLOR_B, color.b),
        CommandToken::new(CVAR_STYLE, style_code(config.style)),
        CommandToken::new(CVAR_DOT, u8::from(config.draw_center_dot)),
    ];
    tracing::trace!("Built {} console tokens", tokens.len());
    ConsoleCommand { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosshair_config::{CrosshairStyle, FieldUpdate, RawInput, Rgb};

    const ORDER: [&str; 12] = [
        CVAR_SIZE,
        CVAR_GAP,
        CVAR_THICKNESS,
        CVAR_ALPHA,
        CVAR_DRAW_OUTLINE,
        CVAR_OUTLINE_THICKNESS,
        CVAR_COLOR,
        CVAR_COLOR_R,
        CVAR_COLOR_G,
        CVAR_COLOR_B,
        CVAR_STYLE,
        CVAR_DOT,
    ];

    fn example() -> CrosshairConfig {
        CrosshairConfig {
            size: 5,
            gap: -3,
            thickness: 1,
            outline_thickness: 1,
            opacity: 200,
            color: Rgb::from_hex_lossy("50FA7B"),
            style: CrosshairStyle::Classic,
            draw_center_dot: false,
        }
    }

    #[test]
    fn test_reference_command() {
        assert_eq!(
            console_command(&example()).to_string(),
            "cl_crosshairsize 5; cl_crosshairgap -3; cl_crosshairthickness 1; \
             cl_crosshairalpha 200; cl_crosshair_drawoutline 1; \
             cl_crosshair_outlinethickness 1; cl_crosshaircolor 5; \
             cl_crosshaircolor_r 80; cl_crosshaircolor_g 250; cl_crosshaircolor_b 123; \
             cl_crosshairstyle 4; cl_crosshairdot 0"
        );
    }

    #[test]
    fn test_token_count_and_order() {
        for style in CrosshairStyle::ALL {
            for dot in [false, true] {
                let config = CrosshairConfig {
                    style,
                    draw_center_dot: dot,
                    ..example()
                };
                let line = console_command(&config).to_string();
                let tokens: Vec<&str> = line.split("; ").collect();
                assert_eq!(tokens.len(), 12);
                for (token, cvar) in tokens.iter().zip(ORDER) {
                    assert_eq!(token.split(' ').next(), Some(cvar));
                }
            }
        }
    }

    #[test]
    fn test_draw_outline_follows_thickness() {
        for outline in 0..=3 {
            let config = CrosshairConfig {
                outline_thickness: outline,
                ..example()
            };
            let cmd = console_command(&config);
            let expected = if outline > 0 { "1" } else { "0" };
            assert_eq!(cmd.get(CVAR_DRAW_OUTLINE), Some(expected));
            assert_eq!(cmd.get(CVAR_OUTLINE_THICKNESS), Some(outline.to_string().as_str()));
        }
    }

    #[test]
    fn test_unknown_style_string_serializes_as_classic_code() {
        let from_raw = CrosshairConfig::from_raw(&RawInput {
            style: Some("pentagram".into()),
            ..Default::default()
        });
        assert_eq!(console_command(&from_raw).get(CVAR_STYLE), Some("4"));

        let updated = example().apply(&FieldUpdate::Style("???".into()));
        assert_eq!(console_command(&updated).get(CVAR_STYLE), Some("4"));
    }

    #[test]
    fn test_dot_flag() {
        let config = CrosshairConfig {
            draw_center_dot: true,
            style: CrosshairStyle::Square,
            ..example()
        };
        let cmd = console_command(&config);
        assert_eq!(cmd.get(CVAR_DOT), Some("1"));
        assert_eq!(cmd.get(CVAR_STYLE), Some("3"));
    }

    #[test]
    fn test_cfg_lines() {
        let cfg = console_command(&example()).to_cfg();
        let lines: Vec<&str> = cfg.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "cl_crosshairsize 5");
        assert_eq!(lines[11], "cl_crosshairdot 0");
        assert!(cfg.ends_with('\n'));
    }

    #[test]
    fn test_tokens_serialize_as_json() {
        let json = serde_json::to_value(console_command(&example())).unwrap();
        assert_eq!(json["tokens"][7]["cvar"], "cl_crosshaircolor_r");
        assert_eq!(json["tokens"][7]["value"], "80");
    }
}
