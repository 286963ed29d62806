use crate::constants::{NAV_ITEM_SELECTOR, NAV_PRESS_RESET_MS, NAV_PRESS_SCALE};
use crate::dom;
use pointcloud_core::section_for_label;
use web_sys as web;

fn scroll_to(document: &web::Document, selector: &str) {
    let Some(section) = dom::query(document, selector) else {
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Press feedback on nav items, then scroll to the section the label names.
pub fn wire(document: &web::Document) {
    for item in dom::query_all(document, NAV_ITEM_SELECTOR) {
        let el = item.clone();
        let doc = document.clone();
        dom::add_click_listener(&item, move |_ev| {
            dom::set_style(&el, "transition", "transform 0.2s ease");
            dom::set_style(&el, "transform", NAV_PRESS_SCALE);
            let pressed = el.clone();
            dom::set_timeout(NAV_PRESS_RESET_MS, move || {
                dom::set_style(&pressed, "transform", "scale(1)");
            });
            if let Some(selector) = section_for_label(&dom::text_of(&el)) {
                scroll_to(&doc, selector);
            }
        });
    }
}
