use pointcloud_core::Surface;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] over a canvas 2D context. Units are CSS pixels; the context
/// transform carries the device pixel ratio.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        configure_smoothing(&ctx);
        Self { ctx }
    }
}

/// Resizing the canvas resets context state, so this runs after every resize.
pub fn configure_smoothing(ctx: &web::CanvasRenderingContext2d) {
    ctx.set_image_smoothing_enabled(true);
    // web-sys has no binding for `imageSmoothingQuality`; set it via reflection.
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &wasm_bindgen::JsValue::from_str("imageSmoothingQuality"),
        &wasm_bindgen::JsValue::from_str("high"),
    );
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_fill(&mut self, css_color: &str) {
        self.ctx.set_fill_style_str(css_color);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}
