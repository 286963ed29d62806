use anyhow::anyhow;
use pointcloud_core::{is_mobile_width, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Every element matching `selector` that is an `HtmlElement`.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Like [`query_all`] but scoped to the descendants of `el`.
pub fn query_all_in(el: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = el.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query(root: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

#[inline]
pub fn text_of(el: &web::Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

/// The element an event was dispatched on, if it is an element.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

#[inline]
pub fn has_ancestor(el: &web::Element, selector: &str) -> bool {
    matches!(el.closest(selector), Ok(Some(_)))
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Passive listener; the handler may not cancel the event.
pub fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, handler: impl FnMut(web::Event) + 'static) {
    add_listener(el, "click", handler);
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: i32) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("timer rejected: {:?}", e))?;
    Ok(())
}

/// Resolve once the document has been parsed.
pub async fn ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("DOMContentLoaded rejected: {:?}", e))?;
    Ok(())
}

pub fn enable_smooth_scroll(document: &web::Document) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_style(&root, "scroll-behavior", "smooth");
    }
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| *d > 0.0)
        .unwrap_or(1.0)
}

/// Measure the layout container and classify the window as mobile or not.
pub fn container_viewport(container: &web::HtmlElement) -> Viewport {
    let inner_width = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX);
    Viewport::new(
        container.offset_width() as f64,
        container.offset_height() as f64,
        is_mobile_width(inner_width),
    )
}

/// Match the canvas CSS size to the container and its backing store to
/// CSS size * devicePixelRatio, keeping drawing units in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
) {
    let dpr = device_pixel_ratio();
    set_style(canvas, "width", &format!("{}px", viewport.width));
    set_style(canvas, "height", &format!("{}px", viewport.height));
    canvas.set_width(((viewport.width * dpr) as u32).max(1));
    canvas.set_height(((viewport.height * dpr) as u32).max(1));
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}
