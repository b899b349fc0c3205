// Drawing surface the particle field renders to. The browser implementation
// wraps a canvas and its 2d context; tests swap in a recorder.

use crate::color::Color;
use crate::error::FieldError;
use crate::viewport::SurfaceSize;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub trait DrawSurface {
    /// Sets the backing store size and the on-screen CSS size.
    fn resize(&mut self, size: SurfaceSize) -> Result<(), FieldError>;

    /// Clears a `width` x `height` pixel region from the origin.
    fn clear(&mut self, width: u32, height: u32);

    fn set_global_alpha(&mut self, alpha: f64);

    /// Fills a circle in `color` with a same-colored shadow of `glow` pixels.
    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        glow: f64,
    ) -> Result<(), FieldError>;
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> Self {
        CanvasSurface { canvas, context }
    }

    // Looks up the canvas by id and grabs its 2d context. Either one missing
    // means the page doesn't want a particle background.
    pub fn from_document(document: &Document, canvas_id: &str) -> Option<CanvasSurface> {
        let canvas = document
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasSurface::new(canvas, context))
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, size: SurfaceSize) -> Result<(), FieldError> {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", size.css_width))?;
        style.set_property("height", &format!("{}px", size.css_height))?;
        Ok(())
    }

    fn clear(&mut self, width: u32, height: u32) {
        self.context
            .clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        glow: f64,
    ) -> Result<(), FieldError> {
        let css = color.to_css();
        self.context.begin_path();
        #[allow(deprecated)]
        self.context.set_fill_style(&JsValue::from_str(&css));
        self.context.set_shadow_blur(glow);
        self.context.set_shadow_color(&css);
        self.context.arc(x, y, radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}
