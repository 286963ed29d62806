use crate::dom;
use crate::input::{self, PointerThrottle};
use pointcloud_core::Animator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct PointerWiring {
    container: web::HtmlElement,
    animator: Rc<RefCell<Animator>>,
    throttle: Rc<RefCell<PointerThrottle>>,
}

/// Track the pointer over `container` for the pinch effect.
pub fn wire_pointer(container: &web::HtmlElement, animator: Rc<RefCell<Animator>>) {
    let w = PointerWiring {
        container: container.clone(),
        animator,
        throttle: Rc::new(RefCell::new(PointerThrottle::default())),
    };
    wire_mousemove(&w);
    wire_mouseleave(&w);
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let target = w.container.clone();
    dom::add_passive_listener(&target, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = w.container.get_bounding_client_rect();
        let pos = input::pointer_in_container(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
        );
        if w.throttle.borrow_mut().record(pos) {
            schedule_flush(&w);
        }
    });
}

fn wire_mouseleave(w: &PointerWiring) {
    let w = w.clone();
    let target = w.container.clone();
    dom::add_passive_listener(&target, "mouseleave", move |_ev: web::Event| {
        w.throttle.borrow_mut().leave();
        w.animator.borrow_mut().clear_pointer();
    });
}

/// Apply the newest recorded position on the next animation frame.
fn schedule_flush(w: &PointerWiring) {
    let Some(window) = web::window() else {
        w.throttle.borrow_mut().flush();
        return;
    };
    let throttle = w.throttle.clone();
    let animator = w.animator.clone();
    let cb = Closure::once_into_js(move || {
        if let Some(pos) = throttle.borrow_mut().flush() {
            animator.borrow_mut().set_pointer(pos);
        }
    });
    if window
        .request_animation_frame(cb.unchecked_ref())
        .is_err()
    {
        w.throttle.borrow_mut().flush();
    }
}
