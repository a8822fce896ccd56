//! Canvas implementation over the browser 2D context

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::Canvas;
use crate::error::WheelError;

fn js_err(e: wasm_bindgen::JsValue) -> WheelError {
    WheelError::Canvas(format!("{e:?}"))
}

/// Canvas element together with its 2D context
pub struct Canvas2d {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Attach to the first `<canvas>` in the document
    pub fn from_document() -> Result<Self, WheelError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| WheelError::MissingResource("document".into()))?;
        let element: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .ok_or_else(|| WheelError::MissingResource("no canvas found".into()))?
            .dyn_into()
            .map_err(|_| WheelError::MissingResource("element is not a canvas".into()))?;
        Self::new(element)
    }

    pub fn new(element: HtmlCanvasElement) -> Result<Self, WheelError> {
        let ctx: CanvasRenderingContext2d = element
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or_else(|| WheelError::MissingResource("no canvas context found".into()))?
            .dyn_into()
            .map_err(|_| WheelError::MissingResource("context is not 2d".into()))?;
        Ok(Self { element, ctx })
    }

    /// Match the backing store to the displayed size; returns (width, height)
    pub fn resize(&self) -> (f64, f64) {
        let width = self.element.client_width().max(0) as u32;
        let height = self.element.client_height().max(0) as u32;
        self.element.set_width(width);
        self.element.set_height(height);
        (width as f64, height as f64)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.element.width() as f64, self.element.height() as f64)
    }
}

impl Canvas for Canvas2d {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), WheelError> {
        self.ctx.translate(x, y).map_err(js_err)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), WheelError> {
        self.ctx.rotate(angle).map_err(js_err)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), WheelError> {
        self.ctx.arc(x, y, radius, start, end).map_err(js_err)
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_shadow(&mut self, blur: f64, color: &str) {
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(color);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn center_text(&mut self) {
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), WheelError> {
        self.ctx.fill_text(text, x, y).map_err(js_err)
    }
}
