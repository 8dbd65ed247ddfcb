//! Software rasterizer for draw primitives.
//!
//! Every primitive becomes a signed distance function; pixel coverage is
//! `0.5 - distance` clamped to 0..=1, sampled at pixel centers. Strokes use
//! butt caps like a canvas 2D context.

use glam::Vec2;
use tracing::debug;

use crate::primitives::{ArcMode, DrawPrimitive, Segment};
use crate::surface::CpuSurface;

/// Apply primitives to the surface in order.
pub fn rasterize(primitives: &[DrawPrimitive], surface: &mut CpuSurface) {
    for primitive in primitives {
        draw(primitive, surface);
    }
    debug!(
        "Rasterized {} primitives onto {}x{} surface",
        primitives.len(),
        surface.width,
        surface.height
    );
}

/// Apply one primitive to the surface.
pub fn draw(primitive: &DrawPrimitive, surface: &mut CpuSurface) {
    match primitive {
        DrawPrimitive::Clear { width, height } => {
            surface.clear_rect(0, 0, width.ceil() as u32, height.ceil() as u32);
        }
        DrawPrimitive::Lines { segments, stroke } => {
            let half = stroke.effective_width() / 2.0;
            fill_sdf(surface, primitive, stroke.paint.to_rgba_f32(), |p| {
                segments
                    .iter()
                    .map(|s| segment_distance(p, s, half))
                    .fold(f32::INFINITY, f32::min)
            });
        }
        DrawPrimitive::Arc {
            center,
            radius,
            mode: ArcMode::Fill(paint),
        } => {
            fill_sdf(surface, primitive, paint.to_rgba_f32(), |p| {
                p.distance(*center) - radius
            });
        }
        DrawPrimitive::Arc {
            center,
            radius,
            mode: ArcMode::Stroke(stroke),
        } => {
            if *radius <= 0.0 {
                return;
            }
            let half = stroke.effective_width() / 2.0;
            fill_sdf(surface, primitive, stroke.paint.to_rgba_f32(), |p| {
                (p.distance(*center) - radius).abs() - half
            });
        }
        DrawPrimitive::Rect {
            origin,
            size,
            stroke,
        } => {
            if size.x <= 0.0 && size.y <= 0.0 {
                return;
            }
            let half_extent = *size / 2.0;
            let center = *origin + half_extent;
            let half = stroke.effective_width() / 2.0;
            fill_sdf(surface, primitive, stroke.paint.to_rgba_f32(), |p| {
                box_distance(p - center, half_extent).abs() - half
            });
        }
    }
}

/// Blend `color` over every pixel inside the primitive's bounds, weighted
/// by the coverage the distance function gives at the pixel center.
fn fill_sdf<F>(surface: &mut CpuSurface, primitive: &DrawPrimitive, color: [f32; 4], distance: F)
where
    F: Fn(Vec2) -> f32,
{
    let (min, max) = primitive.bounds();
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil().max(0.0) as u32).min(surface.width);
    let y1 = (max.y.ceil().max(0.0) as u32).min(surface.height);

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (0.5 - distance(p)).clamp(0.0, 1.0);
            if coverage > 0.0 {
                surface.blend_pixel(x, y, color, coverage);
            }
        }
    }
}

/// Signed distance from `p` to an axis-aligned box centered on the origin.
fn box_distance(p: Vec2, half_extent: Vec2) -> f32 {
    let q = p.abs() - half_extent;
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
}

/// Signed distance to a butt-capped stroke of half width `half` along `segment`.
fn segment_distance(p: Vec2, segment: &Segment, half: f32) -> f32 {
    let length = segment.length();
    if length <= f32::EPSILON {
        // Zero-length subpaths paint nothing with butt caps.
        return f32::INFINITY;
    }
    let dir = (segment.to - segment.from) / length;
    let rel = p - (segment.from + segment.to) / 2.0;
    let local = Vec2::new(rel.dot(dir), rel.dot(dir.perp()));
    box_distance(local, Vec2::new(length / 2.0, half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{render, CanvasSize};
    use crate::primitives::{Paint, Stroke};
    use crosshair_config::{CrosshairConfig, CrosshairStyle, Rgb};

    fn alpha_at(surface: &CpuSurface, x: u32, y: u32) -> f32 {
        surface.get_pixel(x, y).unwrap()[3]
    }

    fn red_stroke(width: f32) -> Stroke {
        Stroke {
            paint: Paint::new(Rgb::new(255, 0, 0), 1.0),
            width,
        }
    }

    #[test]
    fn test_box_distance() {
        let half = Vec2::new(2.0, 1.0);
        assert_eq!(box_distance(Vec2::ZERO, half), -1.0);
        assert_eq!(box_distance(Vec2::new(3.0, 0.0), half), 1.0);
        assert_eq!(box_distance(Vec2::new(5.0, 5.0), half), 5.0);
    }

    #[test]
    fn test_horizontal_line_coverage() {
        let mut surface = CpuSurface::new(20, 20);
        let line = DrawPrimitive::Lines {
            segments: vec![Segment::new(Vec2::new(2.0, 10.5), Vec2::new(12.0, 10.5))],
            stroke: red_stroke(1.0),
        };
        draw(&line, &mut surface);

        assert!((alpha_at(&surface, 5, 10) - 1.0).abs() < 1e-6);
        assert_eq!(alpha_at(&surface, 5, 9), 0.0);
        assert_eq!(alpha_at(&surface, 5, 11), 0.0);
        // Butt caps stop at the segment ends.
        assert_eq!(alpha_at(&surface, 1, 10), 0.0);
        assert_eq!(alpha_at(&surface, 12, 10), 0.0);
    }

    #[test]
    fn test_overlapping_segments_blend_once() {
        let mut surface = CpuSurface::new(10, 10);
        let stroke = Stroke {
            paint: Paint::new(Rgb::new(255, 255, 255), 0.5),
            width: 1.0,
        };
        let lines = DrawPrimitive::Lines {
            segments: vec![
                Segment::new(Vec2::new(0.0, 5.5), Vec2::new(10.0, 5.5)),
                Segment::new(Vec2::new(5.5, 0.0), Vec2::new(5.5, 10.0)),
            ],
            stroke,
        };
        draw(&lines, &mut surface);
        assert!((alpha_at(&surface, 5, 5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_filled_disc() {
        let mut surface = CpuSurface::new(20, 20);
        let disc = DrawPrimitive::Arc {
            center: Vec2::new(10.0, 10.0),
            radius: 3.0,
            mode: ArcMode::Fill(Paint::new(Rgb::new(0, 255, 0), 1.0)),
        };
        draw(&disc, &mut surface);
        assert!((alpha_at(&surface, 9, 9) - 1.0).abs() < 1e-6);
        assert_eq!(alpha_at(&surface, 15, 10), 0.0);
    }

    #[test]
    fn test_zero_radius_ring_and_empty_rect_draw_nothing() {
        let mut surface = CpuSurface::new(10, 10);
        draw(
            &DrawPrimitive::Arc {
                center: Vec2::new(5.0, 5.0),
                radius: 0.0,
                mode: ArcMode::Stroke(red_stroke(4.0)),
            },
            &mut surface,
        );
        draw(
            &DrawPrimitive::Rect {
                origin: Vec2::new(5.0, 5.0),
                size: Vec2::ZERO,
                stroke: red_stroke(4.0),
            },
            &mut surface,
        );
        assert!(surface.pixels().iter().all(|p| p[3] == 0.0));
    }

    #[test]
    fn test_square_outline_leaves_interior_empty() {
        let mut surface = CpuSurface::new(40, 40);
        draw(
            &DrawPrimitive::Rect {
                origin: Vec2::new(10.0, 10.0),
                size: Vec2::new(20.0, 20.0),
                stroke: red_stroke(2.0),
            },
            &mut surface,
        );
        assert!(alpha_at(&surface, 10, 20) > 0.9);
        assert_eq!(alpha_at(&surface, 20, 20), 0.0);
    }

    #[test]
    fn test_rasterize_full_render_with_outline() {
        let config = CrosshairConfig {
            size: 6,
            gap: 2,
            thickness: 2,
            outline_thickness: 1,
            opacity: 255,
            color: Rgb::new(0, 255, 0),
            style: CrosshairStyle::Classic,
            draw_center_dot: false,
        };
        let canvas = CanvasSize::new(40, 40);
        let mut surface = CpuSurface::new(40, 40);
        surface.fill([1.0, 0.0, 1.0, 1.0]);
        rasterize(&render(&config, canvas), &mut surface);

        // Clear wipes the stale background.
        assert_eq!(alpha_at(&surface, 0, 0), 0.0);
        // Arm core is the primary color.
        let core = surface.get_straight(26, 19).unwrap();
        assert!(core[1] > 0.99 && core[0] < 0.01);
        // Just outside the primary stroke is the black outline.
        let edge = surface.get_straight(26, 21).unwrap();
        assert!(edge[3] > 0.99 && edge[1] < 0.01);
        // Center stays empty with a positive gap.
        assert_eq!(alpha_at(&surface, 20, 20), 0.0);
    }
}
