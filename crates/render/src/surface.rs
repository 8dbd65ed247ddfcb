//! CPU surface for previews - premultiplied f32 RGBA storage

use crate::constants::TRANSPARENT;
use crate::error::RenderError;

/// A CPU RGBA surface.
///
/// Pixels are stored premultiplied as `[r, g, b, a]` f32 so source-over
/// blending stays a single multiply-add per channel.
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order
    pixels: Vec<[f32; 4]>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; pixel_count],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Fill the whole surface with a straight-alpha color
    pub fn fill(&mut self, color: [f32; 4]) {
        self.pixels.fill(premultiply(color));
    }

    /// Reset a rectangle (clipped to the surface) to transparent black
    pub fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y.min(y_end)..y_end {
            let start = (row as usize) * (self.width as usize);
            self.pixels[start + x.min(x_end) as usize..start + x_end as usize].fill(TRANSPARENT);
        }
    }

    /// Get a premultiplied pixel, `None` if out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Get a pixel converted back to straight alpha
    pub fn get_straight(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.get_pixel(x, y).map(unpremultiply)
    }

    /// Source-over blend of a straight-alpha color scaled by `coverage`.
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], coverage: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[index];

        let src_alpha = color[3] * coverage.clamp(0.0, 1.0);
        let inv_src_alpha = 1.0 - src_alpha;

        self.pixels[index] = [
            color[0] * src_alpha + dst[0] * inv_src_alpha,
            color[1] * src_alpha + dst[1] * inv_src_alpha,
            color[2] * src_alpha + dst[2] * inv_src_alpha,
            src_alpha + dst[3] * inv_src_alpha,
        ];
    }

    /// Raw pixel data, e.g. for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Straight-alpha 8-bit RGBA bytes, row-major
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| unpremultiply(p).map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect()
    }

    #[cfg(feature = "png")]
    pub fn to_image(&self) -> Result<image::RgbaImage, RenderError> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8()).ok_or(
            RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            },
        )
    }

    /// Write the surface as a PNG file
    #[cfg(feature = "png")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.to_image()?.save(path)?;
        tracing::info!("Wrote {}x{} preview to {}", self.width, self.height, path.display());
        Ok(())
    }
}

fn premultiply(c: [f32; 4]) -> [f32; 4] {
    [c[0] * c[3], c[1] * c[3], c[2] * c[3], c[3]]
}

fn unpremultiply(p: [f32; 4]) -> [f32; 4] {
    let a = p[3];
    if a <= f32::EPSILON {
        return TRANSPARENT;
    }
    [p[0] / a, p[1] / a, p[2] / a, a]
}
