use crate::constants::{
    PARTICLE_CANVAS_ID, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    SCROLL_BACKGROUND_SELECTOR, SPOTLIGHT_ROOT_MARGIN, SPOTLIGHT_SELECTOR, VISIBLE_CLASS,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Build an observer whose callback receives each entry.
fn observer(
    threshold: f64,
    root_margin: &str,
    mut on_entry: impl FnMut(web::IntersectionObserverEntry) + 'static,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(entry);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let obs =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    callback.forget();
    match obs {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Fade sections in the first time they scroll into view.
fn wire_sections(document: &web::Document) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let Some(obs) = observer(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, |entry| {
        if !entry.is_intersecting() {
            return;
        }
        if let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "translateY(0)");
        }
    }) else {
        return;
    };
    for el in &targets {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", "translateY(20px)");
        dom::set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        obs.observe(el);
    }
}

/// Swap the particle background for the spotlight imagery once the spotlight
/// grid is on screen, and back again when scrolling up.
fn wire_spotlight(document: &web::Document) {
    let Some(spotlight) = dom::query(document, SPOTLIGHT_SELECTOR) else {
        return;
    };
    let background = dom::query(document, SCROLL_BACKGROUND_SELECTOR);
    let canvas = document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    let _ = spotlight.class_list().remove_1(VISIBLE_CLASS);
    if let Some(bg) = &background {
        let _ = bg.class_list().remove_1(VISIBLE_CLASS);
    }

    let target = spotlight.clone();
    let Some(obs) = observer(0.0, SPOTLIGHT_ROOT_MARGIN, move |entry| {
        let shown = entry.is_intersecting();
        let _ = target.class_list().toggle_with_force(VISIBLE_CLASS, shown);
        if let Some(bg) = &background {
            let _ = bg.class_list().toggle_with_force(VISIBLE_CLASS, shown);
        }
        if let Some(c) = &canvas {
            dom::set_style(c, "opacity", if shown { "0" } else { "1" });
            dom::set_style(c, "transition", "opacity 0.8s ease");
        }
    }) else {
        return;
    };
    obs.observe(&spotlight);
}

pub fn wire(document: &web::Document) {
    wire_sections(document);
    wire_spotlight(document);
}
