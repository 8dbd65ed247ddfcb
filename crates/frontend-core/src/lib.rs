//! Frontend core abstractions for the crosshair configurator
//!
//! Defines the `DrawBackend` trait that abstracts over the places a preview
//! can be drawn, and the `Session` that owns the current configuration and
//! answers UI messages.

mod session;

pub use session::{Frame, Session};

use crosshair_render::{rasterize, CanvasSize, CpuSurface, DrawPrimitive};

/// Errors that can occur in frontend operations
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// Message could not be decoded or encoded
    #[error("IPC error: {0}")]
    Ipc(#[from] crosshair_ipc::IpcError),

    /// Backend has no drawing context yet
    #[error("Backend is not ready")]
    NotReady,

    /// Invalid dimensions
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Trait for anything that can replay a list of draw primitives
pub trait DrawBackend {
    /// Get the current size of the drawing surface
    fn size(&self) -> CanvasSize;

    /// Apply primitives in order. The list starts with its own clear, so
    /// backends do not wipe the surface themselves.
    fn apply(&mut self, primitives: &[DrawPrimitive]) -> Result<(), FrontendError>;
}

impl DrawBackend for CpuSurface {
    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    fn apply(&mut self, primitives: &[DrawPrimitive]) -> Result<(), FrontendError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrontendError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        rasterize(primitives, self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosshair_config::CrosshairConfig;
    use crosshair_render::render;

    #[test]
    fn test_cpu_backend_reports_size() {
        let surface = CpuSurface::new(64, 32);
        assert_eq!(DrawBackend::size(&surface), CanvasSize::new(64, 32));
    }

    #[test]
    fn test_cpu_backend_draws_preview() {
        let mut surface = CpuSurface::new(50, 50);
        let primitives = render(&CrosshairConfig::default(), surface.size());
        surface.apply(&primitives).unwrap();
        assert!(surface.pixels().iter().any(|p| p[3] > 0.0));
    }

    #[test]
    fn test_cpu_backend_rejects_empty_surface() {
        let mut surface = CpuSurface::new(0, 10);
        let err = surface.apply(&[]).unwrap_err();
        assert!(matches!(err, FrontendError::InvalidDimensions { width: 0, height: 10 }));
    }
}
