//! Crosshair geometry: config in, ordered draw primitives out.
//!
//! A render pass is
//! 1. clear the canvas,
//! 2. draw the shape in black at `thickness + 2 * outline` if the outline is on,
//! 3. draw the shape in the configured color at `thickness`,
//! 4. draw the center dot on top if enabled.
//!
//! Both shape passes use identical geometry, so the outline is centered on
//! the primary stroke and only its width differs.

use crosshair_config::{CrosshairConfig, CrosshairStyle, BLACK};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::primitives::{ArcMode, DrawPrimitive, Paint, Segment, Stroke};

/// Size of the drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Render a config centered on the canvas.
pub fn render(config: &CrosshairConfig, canvas: CanvasSize) -> Vec<DrawPrimitive> {
    render_at(config, canvas.center(), canvas)
}

/// Render a config around an explicit center point.
pub fn render_at(config: &CrosshairConfig, center: Vec2, canvas: CanvasSize) -> Vec<DrawPrimitive> {
    let mut primitives = Vec::with_capacity(4);
    primitives.push(DrawPrimitive::Clear {
        width: canvas.width as f32,
        height: canvas.height as f32,
    });

    let alpha = config.alpha();
    let thickness = config.thickness as f32;

    if config.has_outline() {
        let outline = Stroke {
            paint: Paint::new(BLACK, alpha),
            width: thickness + config.outline_thickness as f32 * 2.0,
        };
        push_shape(&mut primitives, config, center, outline);
    }

    let primary = Paint::new(config.color, alpha);
    push_shape(
        &mut primitives,
        config,
        center,
        Stroke {
            paint: primary,
            width: thickness,
        },
    );

    if config.draw_center_dot {
        primitives.push(dot(center, thickness, primary));
    }

    trace!(
        "Rendered {} primitives for {} crosshair",
        primitives.len(),
        config.style
    );
    primitives
}

/// Filled dot whose radius is one pixel more than the line width.
fn dot(center: Vec2, line_width: f32, paint: Paint) -> DrawPrimitive {
    DrawPrimitive::Arc {
        center,
        radius: line_width + 1.0,
        mode: ArcMode::Fill(paint),
    }
}

fn push_shape(out: &mut Vec<DrawPrimitive>, config: &CrosshairConfig, center: Vec2, stroke: Stroke) {
    let size = config.size as f32;
    let gap = config.gap as f32;
    // Circle and square collapse to a point rather than inverting.
    let reach = config.reach().max(0) as f32;

    let shape = match config.style {
        CrosshairStyle::Classic => DrawPrimitive::Lines {
            segments: arms(center, size, gap, true),
            stroke,
        },
        CrosshairStyle::TStyle => DrawPrimitive::Lines {
            segments: arms(center, size, gap, false),
            stroke,
        },
        CrosshairStyle::Dot => dot(center, stroke.width, stroke.paint),
        CrosshairStyle::Circle => DrawPrimitive::Arc {
            center,
            radius: reach,
            mode: ArcMode::Stroke(stroke),
        },
        CrosshairStyle::Square => DrawPrimitive::Rect {
            origin: center - Vec2::splat(reach),
            size: Vec2::splat(reach * 2.0),
            stroke,
        },
    };
    out.push(shape);
}

/// Arms running from `gap` to `gap + size` out from the center:
/// left, right, then top (optional) and bottom.
fn arms(center: Vec2, size: f32, gap: f32, with_top: bool) -> Vec<Segment> {
    let Vec2 { x: cx, y: cy } = center;
    let mut segments = Vec::with_capacity(4);
    segments.push(Segment::new(
        Vec2::new(cx - gap - size, cy),
        Vec2::new(cx - gap, cy),
    ));
    segments.push(Segment::new(
        Vec2::new(cx + gap, cy),
        Vec2::new(cx + gap + size, cy),
    ));
    if with_top {
        segments.push(Segment::new(
            Vec2::new(cx, cy - gap - size),
            Vec2::new(cx, cy - gap),
        ));
    }
    segments.push(Segment::new(
        Vec2::new(cx, cy + gap),
        Vec2::new(cx, cy + gap + size),
    ));
    segments
}
