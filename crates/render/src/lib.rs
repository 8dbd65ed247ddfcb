//! Crosshair rendering - geometry and rasterization
//!
//! This crate turns a [`crosshair_config::CrosshairConfig`] into pixels:
//! - [`geometry`] - the pure config-to-primitives renderer
//! - [`primitives`] - tagged draw descriptors consumed by any backend
//! - [`surface`] - CPU RGBA surface with PNG export
//! - [`raster`] - software rasterizer applying primitives to a surface

pub mod constants;
pub mod error;
pub mod geometry;
pub mod primitives;
pub mod raster;
pub mod surface;

pub use constants::*;
pub use error::RenderError;
pub use geometry::{render, render_at, CanvasSize};
pub use primitives::{ArcMode, DrawPrimitive, Paint, Segment, Stroke};
pub use raster::rasterize;
pub use surface::CpuSurface;
