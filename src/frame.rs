use crate::constants::{
    CONTAINER_SELECTOR, DATA_POINTER, DATA_VARIANT, DATA_WAVE_SPEED, PARTICLE_CANVAS_ID,
};
use crate::dom;
use crate::events;
use crate::render::CanvasSurface;
use anyhow::anyhow;
use instant::Instant;
use pointcloud_core::{Animator, AnimatorConfig, FrameMeter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Rc<RefCell<Animator>>,
    pub surface: CanvasSurface,
    pub container: web::HtmlElement,
    pub meter: FrameMeter,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // A detached container means the layout is gone; draw nothing.
        if !self.container.is_connected() {
            return;
        }
        let drawn = self.animator.borrow_mut().frame(&mut self.surface);
        if let Some(fps) = self.meter.tick(Instant::now()) {
            log::debug!("[cloud] {:.1} fps, {} dots", fps, drawn);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

/// Defaults overlaid with the canvas `data-*` attributes.
fn read_config(canvas: &web::HtmlCanvasElement) -> AnimatorConfig {
    let mut config = AnimatorConfig::default();
    let data = canvas.dataset();
    if let Some(raw) = data.get(DATA_VARIANT) {
        if let Err(e) = config.set_variant(&raw) {
            log::warn!("[cloud] {e}; using {:?}", config.variant);
        }
    }
    if let Some(raw) = data.get(DATA_WAVE_SPEED) {
        if let Err(e) = config.set_wave_speed(&raw) {
            log::warn!("[cloud] {e}; using {}", config.wave_speed);
        }
    }
    if let Some(raw) = data.get(DATA_POINTER) {
        config.set_pointer(&raw);
    }
    config
}

/// Set up the particle background and start its frame loop.
///
/// A page without the canvas or its container is left alone.
pub fn init_cloud(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(PARTICLE_CANVAS_ID) else {
        log::info!("[cloud] no #{PARTICLE_CANVAS_ID}; background disabled");
        return Ok(());
    };
    let Some(container) = dom::query(document, CONTAINER_SELECTOR) else {
        log::info!("[cloud] no {CONTAINER_SELECTOR} container; background disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{PARTICLE_CANVAS_ID} is not a canvas: {:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("not a 2d context: {:?}", e))?;

    let viewport = dom::container_viewport(&container);
    dom::sync_canvas_backing_size(&canvas, &ctx, &viewport);
    let config = read_config(&canvas);
    let animator = Rc::new(RefCell::new(Animator::new(
        viewport,
        config,
        rand::random(),
    )));
    log::info!(
        "[cloud] {} points for {:.0}x{:.0}{}",
        animator.borrow().cloud().len(),
        viewport.width,
        viewport.height,
        if viewport.mobile { " (mobile)" } else { "" }
    );

    let surface = CanvasSurface::new(ctx.clone());
    events::wire_pointer(&container, animator.clone());
    events::wire_canvas_resize(events::ResizeWiring {
        canvas,
        ctx,
        container: container.clone(),
        animator: animator.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        animator,
        surface,
        container,
        meter: FrameMeter::new(Instant::now()),
    }));
    start_loop(frame_ctx);
    Ok(())
}
