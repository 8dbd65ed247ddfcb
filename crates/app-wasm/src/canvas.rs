//! Draw backend for an HTML canvas 2D context

use std::f64::consts::TAU;

use crosshair_frontend_core::{DrawBackend, FrontendError};
use crosshair_render::{ArcMode, CanvasSize, DrawPrimitive, Stroke};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub struct Canvas2dBackend {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dBackend {
    /// Look up a `<canvas>` by id and take its 2D context
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, FrontendError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| FrontendError::Backend(format!("no element with id {id:?}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FrontendError::Backend(format!("element {id:?} is not a canvas")))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or(FrontendError::NotReady)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FrontendError::Backend("unexpected 2d context type".into()))?;

        Ok(Self { canvas, ctx })
    }

    fn set_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(&stroke.paint.to_css());
        self.ctx.set_line_width(stroke.effective_width() as f64);
    }

    fn draw(&self, primitive: &DrawPrimitive) -> Result<(), FrontendError> {
        let ctx = &self.ctx;
        match primitive {
            DrawPrimitive::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawPrimitive::Lines { segments, stroke } => {
                self.set_stroke(stroke);
                ctx.begin_path();
                for segment in segments {
                    ctx.move_to(segment.from.x as f64, segment.from.y as f64);
                    ctx.line_to(segment.to.x as f64, segment.to.y as f64);
                }
                ctx.stroke();
            }
            DrawPrimitive::Arc {
                center,
                radius,
                mode,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .map_err(js_error)?;
                match mode {
                    ArcMode::Fill(paint) => {
                        ctx.set_fill_style_str(&paint.to_css());
                        ctx.fill();
                    }
                    ArcMode::Stroke(stroke) => {
                        self.set_stroke(stroke);
                        ctx.stroke();
                    }
                }
            }
            DrawPrimitive::Rect {
                origin,
                size,
                stroke,
            } => {
                self.set_stroke(stroke);
                ctx.stroke_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
            }
        }
        Ok(())
    }
}

impl DrawBackend for Canvas2dBackend {
    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas.width(), self.canvas.height())
    }

    fn apply(&mut self, primitives: &[DrawPrimitive]) -> Result<(), FrontendError> {
        self.ctx.set_line_cap("butt");
        for primitive in primitives {
            self.draw(primitive)?;
        }
        Ok(())
    }
}

fn js_error(e: JsValue) -> FrontendError {
    FrontendError::Backend(format!("{e:?}"))
}
