//! Application configuration: environment variables and command line flags

use std::path::PathBuf;

use std::ops::RangeInclusive;

use crosshair_config::{
    model::parse_int_field, CrosshairStyle, FieldUpdate, Rgb, SLIDER_GAP, SLIDER_OPACITY,
    SLIDER_OUTLINE, SLIDER_SIZE, SLIDER_THICKNESS,
};
use tracing::warn;
use crosshair_ipc::UiToCore;
use crosshair_render::CanvasSize;

use crate::error::AppError;

/// Environment variable overriding the settings file location
pub const ENV_STORE: &str = "CROSSHAIR_STORE";

/// Environment variable holding the tracing filter
pub const ENV_LOG: &str = "CROSSHAIR_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

const STORE_FILE_NAME: &str = "settings.json";

pub const USAGE: &str = "\
Usage: crosshair [OPTIONS]

Prints the console command for the current crosshair. Settings come from
--query, else the settings file, else defaults; flags are applied on top
and changes are saved back.

Options:
  --preset ID         start from a named preset
  --query QUERY       load settings from a share link or its query string
  --size N            line length (usually 0..20)
  --gap N             distance from center (usually -10..10)
  --thickness N       line width (usually 0..10)
  --outline N         outline width (usually 0..3)
  --opacity N         alpha (0..255)
  --color HEX         RRGGBB, with or without '#'
  --style NAME        classic, dot, t-style, circle or square
  --dot / --no-dot    toggle the center dot
  --canvas WxH        preview size (default 200x200)
  --png PATH          write a preview image
  --cfg PATH          write the commands one per line
  --share             print the share link query string
  --list-presets      list presets with their commands and exit
  --no-save           do not read or write the settings file
  --store PATH        settings file location
  -h, --help          show this help

Environment:
  CROSSHAIR_STORE     settings file location (overridden by --store)
  CROSSHAIR_LOG       log filter, e.g. debug or crosshair_config=trace
";

/// Settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub store_path: PathBuf,
    pub log_filter: String,
}

impl EnvConfig {
    /// Parse from environment variables CROSSHAIR_STORE and CROSSHAIR_LOG
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        let store_path = match non_empty(ENV_STORE) {
            Some(path) => PathBuf::from(path),
            None => default_store_path(&non_empty),
        };
        Self {
            store_path,
            log_filter: non_empty(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// `$XDG_CONFIG_HOME/crosshair/settings.json`, falling back to
/// `$HOME/.config/...`, then the working directory.
fn default_store_path(var: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = var("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("crosshair").join(STORE_FILE_NAME);
    }
    if let Some(home) = var("HOME").or_else(|| var("USERPROFILE")) {
        return PathBuf::from(home)
            .join(".config")
            .join("crosshair")
            .join(STORE_FILE_NAME);
    }
    PathBuf::from(STORE_FILE_NAME)
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    ListPresets,
    Run(RunArgs),
}

/// Flags for a normal run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    pub preset: Option<String>,
    pub query: Option<String>,
    /// Validated field overrides, in command line order
    pub updates: Vec<FieldUpdate>,
    pub canvas: CanvasSize,
    pub png: Option<PathBuf>,
    pub cfg: Option<PathBuf>,
    pub share: bool,
    pub no_save: bool,
    pub store: Option<PathBuf>,
}

impl RunArgs {
    /// Session messages for the requested changes: preset first, then overrides
    pub fn messages(&self) -> Vec<UiToCore> {
        self.preset
            .iter()
            .map(|id| UiToCore::ApplyPreset { id: id.clone() })
            .chain(self.updates.iter().cloned().map(UiToCore::UpdateField))
            .collect()
    }

    /// The query part of `--query`, accepting a full share link
    pub fn query_string(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(|q| q.split_once('?').map_or(q, |(_, query)| query))
    }
}

/// Parse command line arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<Invocation, AppError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut run = RunArgs::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| AppError::Usage(format!("{name} needs a value")))
        };
        match flag.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--list-presets" => return Ok(Invocation::ListPresets),
            "--preset" => run.preset = Some(value("--preset")?),
            "--query" => run.query = Some(value("--query")?),
            "--size" => run
                .updates
                .push(FieldUpdate::Size(int(value("--size")?, "size", SLIDER_SIZE)?)),
            "--gap" => run
                .updates
                .push(FieldUpdate::Gap(int(value("--gap")?, "gap", SLIDER_GAP)?)),
            "--thickness" => run
                .updates
                .push(FieldUpdate::Thickness(int(value("--thickness")?, "thickness", SLIDER_THICKNESS)?)),
            "--outline" => run
                .updates
                .push(FieldUpdate::Outline(int(value("--outline")?, "outline", SLIDER_OUTLINE)?)),
            "--opacity" => run
                .updates
                .push(FieldUpdate::Opacity(int(value("--opacity")?, "opacity", SLIDER_OPACITY)?)),
            "--color" => {
                let hex = value("--color")?;
                if Rgb::from_hex(&hex).is_none() {
                    return Err(AppError::Usage(format!("invalid color {hex:?}")));
                }
                run.updates.push(FieldUpdate::Color(hex));
            }
            "--style" => {
                let style: CrosshairStyle = value("--style")?.parse()?;
                run.updates.push(FieldUpdate::Style(style.as_str().to_string()));
            }
            "--dot" => run.updates.push(FieldUpdate::DrawCenterDot(true)),
            "--no-dot" => run.updates.push(FieldUpdate::DrawCenterDot(false)),
            "--canvas" => run.canvas = parse_canvas(&value("--canvas")?)?,
            "--png" => run.png = Some(PathBuf::from(value("--png")?)),
            "--cfg" => run.cfg = Some(PathBuf::from(value("--cfg")?)),
            "--share" => run.share = true,
            "--no-save" => run.no_save = true,
            "--store" => run.store = Some(PathBuf::from(value("--store")?)),
            other => return Err(AppError::Usage(format!("unknown argument {other:?}"))),
        }
    }

    Ok(Invocation::Run(run))
}

/// Reject non-integers up front. Values past the slider range are allowed
/// with a warning; the model only clamps to what the field can hold.
fn int(raw: String, field: &'static str, slider: RangeInclusive<i64>) -> Result<String, AppError> {
    let value = parse_int_field(field, &raw)?;
    if !slider.contains(&value) {
        warn!(
            "{field}={value} is outside the usual {}..={} range",
            slider.start(),
            slider.end()
        );
    }
    Ok(raw)
}

fn parse_canvas(raw: &str) -> Result<CanvasSize, AppError> {
    let invalid = || AppError::Usage(format!("canvas must look like 200x200, got {raw:?}"));
    let (w, h) = raw.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: u32 = w.trim().parse().map_err(|_| invalid())?;
    let height: u32 = h.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok(CanvasSize::new(width, height))
}
