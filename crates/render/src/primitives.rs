//! Draw primitive descriptors.
//!
//! Each primitive carries its own paint and line width, so a backend never
//! depends on state left behind by an earlier draw call.

use crosshair_config::Rgb;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::HAIRLINE_WIDTH;

/// Color plus alpha for a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Rgb,
    /// Alpha fraction 0.0..=1.0
    pub alpha: f32,
}

impl Paint {
    pub fn new(color: Rgb, alpha: f32) -> Self {
        Self {
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// CSS color string for canvas `fillStyle`/`strokeStyle`.
    pub fn to_css(&self) -> String {
        self.color.to_css(self.alpha)
    }

    /// Straight (non-premultiplied) RGBA floats.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        self.color.to_rgba_f32(self.alpha)
    }
}

/// Paint and width of a stroked outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub paint: Paint,
    /// Line width in pixels as configured; may be 0
    pub width: f32,
}

impl Stroke {
    /// Width a backend should actually draw with.
    ///
    /// Canvas contexts ignore a zero line width, so thinner strokes are
    /// drawn as a one-pixel hairline.
    pub fn effective_width(&self) -> f32 {
        self.width.max(HAIRLINE_WIDTH)
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// How a full-circle arc is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ArcMode {
    Fill(Paint),
    Stroke(Stroke),
}

/// One drawing operation, in back-to-front order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawPrimitive {
    /// Clear the rectangle from the origin to `(width, height)`
    Clear { width: f32, height: f32 },
    /// Segments stroked as a single path; overlaps are painted once
    Lines { segments: Vec<Segment>, stroke: Stroke },
    /// Full circle, filled or stroked
    Arc { center: Vec2, radius: f32, mode: ArcMode },
    /// Stroked axis-aligned rectangle
    Rect { origin: Vec2, size: Vec2, stroke: Stroke },
}

impl DrawPrimitive {
    /// Paint used by this primitive, `None` for `Clear`.
    pub fn paint(&self) -> Option<Paint> {
        match self {
            DrawPrimitive::Clear { .. } => None,
            DrawPrimitive::Lines { stroke, .. } | DrawPrimitive::Rect { stroke, .. } => {
                Some(stroke.paint)
            }
            DrawPrimitive::Arc { mode, .. } => Some(match mode {
                ArcMode::Fill(paint) => *paint,
                ArcMode::Stroke(stroke) => stroke.paint,
            }),
        }
    }

    /// Conservative pixel bounds `(min, max)` touched by this primitive.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match self {
            DrawPrimitive::Clear { width, height } => (Vec2::ZERO, Vec2::new(*width, *height)),
            DrawPrimitive::Lines { segments, stroke } => {
                let pad = Vec2::splat(stroke.effective_width() / 2.0 + 1.0);
                let (min, max) = segments.iter().fold(
                    (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
                    |(min, max), s| (min.min(s.from).min(s.to), max.max(s.from).max(s.to)),
                );
                (min - pad, max + pad)
            }
            DrawPrimitive::Arc {
                center,
                radius,
                mode,
            } => {
                let half_width = match mode {
                    ArcMode::Fill(_) => 0.0,
                    ArcMode::Stroke(stroke) => stroke.effective_width() / 2.0,
                };
                let reach = Vec2::splat(radius + half_width + 1.0);
                (*center - reach, *center + reach)
            }
            DrawPrimitive::Rect {
                origin,
                size,
                stroke,
            } => {
                let pad = Vec2::splat(stroke.effective_width() / 2.0 + 1.0);
                (*origin - pad, *origin + *size + pad)
            }
        }
    }
}
