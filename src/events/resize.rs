use crate::constants::{LINE_CONTAINER_SELECTOR, LINE_SELECTOR};
use crate::dom;
use crate::render;
use pointcloud_core::{line_width_px, Animator};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ResizeWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub container: web::HtmlElement,
    pub animator: Rc<RefCell<Animator>>,
}

/// Re-measure the container on window resize: resize the canvas backing
/// store and hand the new viewport to the animator, which decides whether the
/// point set must be rebuilt.
pub fn wire_canvas_resize(w: ResizeWiring) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        if !w.container.is_connected() {
            return;
        }
        let viewport = dom::container_viewport(&w.container);
        dom::sync_canvas_backing_size(&w.canvas, &w.ctx, &viewport);
        render::configure_smoothing(&w.ctx);
        w.animator.borrow_mut().resize(viewport);
    });
}

fn sync_line_width(document: &web::Document) {
    if let (Some(container), Some(line)) = (
        dom::query(document, LINE_CONTAINER_SELECTOR),
        dom::query(document, LINE_SELECTOR),
    ) {
        let width = line_width_px(container.offset_width() as f64);
        dom::set_style(&line, "width", &format!("{width}px"));
    }
}

/// Keep the hero rule no wider than its container.
pub fn wire_line_width(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        sync_line_width(&doc);
    });
}
