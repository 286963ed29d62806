// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn typing_lookup_gives_up_after_five_seconds() {
    assert_eq!(TYPING_RETRY_MS as u32 * TYPING_MAX_ATTEMPTS, 5_000);
}

#[test]
fn class_names_are_bare_and_selectors_are_dotted() {
    for class in [
        DROPDOWN_ITEM_CLASS,
        ACTIVE_CLASS,
        HIDDEN_CLASS,
        EXPANDED_CLASS,
        VISIBLE_CLASS,
        FLIPPED_CLASS,
    ] {
        assert!(!class.starts_with('.'), "{class}");
    }
    for selector in [
        CONTAINER_SELECTOR,
        NAV_ITEM_SELECTOR,
        DROPDOWN_SELECTOR,
        DROPDOWN_MENU_SELECTOR,
        TABLE_ROW_SELECTOR,
        TEAM_CARD_SELECTOR,
        TYPING_SELECTOR,
    ] {
        assert!(selector.starts_with('.'), "{selector}");
    }
}

#[test]
fn portfolio_all_button_is_the_active_filter() {
    assert_eq!(ALL_FILTER_SELECTOR, format!("{ROLE_FILTER_SELECTOR}.{ACTIVE_CLASS}"));
}

#[test]
fn reveal_observer_fires_early() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}
