//! Team page: typewriter headline, flipping cards and the role filter.

use crate::constants::{
    ACTIVE_CLASS, FLIPPED_CLASS, ROLE_FILTER_SELECTOR, TEAM_CARD_SELECTOR, TYPING_MAX_ATTEMPTS,
    TYPING_RETRY_MS, TYPING_SELECTOR,
};
use crate::dom;
use pointcloud_core::{role_visible, TypingEffect, TYPING_WORDS};
use std::rc::Rc;
use web_sys as web;

/// The headline may be injected after load, so poll for it a bounded number of times.
async fn find_typing_target(document: &web::Document) -> anyhow::Result<Option<web::HtmlElement>> {
    for _ in 0..TYPING_MAX_ATTEMPTS {
        if let Some(el) = dom::query(document, TYPING_SELECTOR) {
            return Ok(Some(el));
        }
        dom::sleep(TYPING_RETRY_MS).await?;
    }
    Ok(None)
}

async fn run_typing(document: web::Document) -> anyhow::Result<()> {
    let Some(el) = find_typing_target(&document).await? else {
        log::debug!("[typing] no {} element", TYPING_SELECTOR);
        return Ok(());
    };
    let Some(mut effect) = TypingEffect::new(TYPING_WORDS) else {
        return Ok(());
    };
    loop {
        let step = effect.step();
        el.set_text_content(Some(&step.text));
        let ms = i32::try_from(step.delay.as_millis()).unwrap_or(i32::MAX);
        dom::sleep(ms).await?;
    }
}

fn wire_cards(cards: &[web::HtmlElement]) {
    for card in cards {
        let el = card.clone();
        dom::add_click_listener(card, move |_ev| {
            let _ = el.class_list().toggle(FLIPPED_CLASS);
        });
    }
}

fn wire_role_filter(document: &web::Document, cards: Rc<Vec<web::HtmlElement>>) {
    let buttons = Rc::new(dom::query_all(document, ROLE_FILTER_SELECTOR));
    for button in buttons.iter() {
        let el = button.clone();
        let buttons = buttons.clone();
        let cards = cards.clone();
        dom::add_click_listener(button, move |_ev| {
            for b in buttons.iter() {
                let _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            let _ = el.class_list().add_1(ACTIVE_CLASS);

            let label = dom::text_of(&el);
            for card in cards.iter() {
                let show = role_visible(&label, card.get_attribute("data-role").as_deref());
                dom::set_style(card, "display", if show { "" } else { "none" });
            }
            log::debug!("[team] role filter {label:?}");
        });
    }
}

pub fn wire(document: &web::Document) {
    let cards = dom::query_all(document, TEAM_CARD_SELECTOR);
    if !cards.is_empty() {
        wire_cards(&cards);
        wire_role_filter(document, Rc::new(cards));
    }

    let doc = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = run_typing(doc).await {
            log::error!("[typing] {e:?}");
        }
    });
}
