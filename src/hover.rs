use crate::constants::{
    BOX_HOVER_BG, BOX_PRESS_MS, BOX_RAISED, BOX_REST_BG, CONTENT_BOX_SELECTOR, LINK_SELECTOR,
};
use crate::dom;
use web_sys as web;

fn wire_content_boxes(document: &web::Document) {
    for bx in dom::query_all(document, CONTENT_BOX_SELECTOR) {
        let el = bx.clone();
        dom::add_listener(&bx, "mouseenter", move |_ev| {
            dom::set_style(
                &el,
                "transition",
                "background-color 0.3s ease, transform 0.3s ease",
            );
            dom::set_style(&el, "background-color", BOX_HOVER_BG);
            dom::set_style(&el, "transform", BOX_RAISED);
            dom::set_style(&el, "cursor", "pointer");
        });

        let el = bx.clone();
        dom::add_listener(&bx, "mouseleave", move |_ev| {
            dom::set_style(&el, "background-color", BOX_REST_BG);
            dom::set_style(&el, "transform", "translateY(0)");
        });

        let el = bx.clone();
        dom::add_click_listener(&bx, move |_ev| {
            dom::set_style(&el, "transform", "scale(0.98)");
            let pressed = el.clone();
            dom::set_timeout(BOX_PRESS_MS, move || {
                dom::set_style(&pressed, "transform", BOX_RAISED);
            });
        });
    }
}

fn wire_links(document: &web::Document) {
    for link in dom::query_all(document, LINK_SELECTOR) {
        let el = link.clone();
        dom::add_listener(&link, "mouseenter", move |_ev| {
            dom::set_style(&el, "transition", "opacity 0.2s ease");
            dom::set_style(&el, "opacity", "0.7");
        });
        let el = link.clone();
        dom::add_listener(&link, "mouseleave", move |_ev| {
            dom::set_style(&el, "opacity", "1");
        });
    }
}

pub fn wire(document: &web::Document) {
    wire_content_boxes(document);
    wire_links(document);
}
