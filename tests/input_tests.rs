// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

#[test]
fn first_move_schedules_a_flush() {
    let mut t = PointerThrottle::default();
    assert!(!t.is_pending());
    assert!(t.record(DVec2::new(10.0, 20.0)));
    assert!(t.is_pending());
}

#[test]
fn moves_within_a_frame_coalesce_to_the_latest() {
    let mut t = PointerThrottle::default();
    assert!(t.record(DVec2::new(1.0, 1.0)));
    assert!(!t.record(DVec2::new(2.0, 2.0)));
    assert!(!t.record(DVec2::new(3.0, 4.0)));

    assert_eq!(t.flush(), Some(DVec2::new(3.0, 4.0)));
    assert!(!t.is_pending());
    // Nothing new since the flush.
    assert_eq!(t.flush(), None);
}

#[test]
fn next_move_after_flush_schedules_again() {
    let mut t = PointerThrottle::default();
    t.record(DVec2::ZERO);
    t.flush();
    assert!(t.record(DVec2::new(5.0, 5.0)));
}

#[test]
fn leaving_before_the_flush_drops_the_position() {
    let mut t = PointerThrottle::default();
    t.record(DVec2::new(7.0, 8.0));
    t.leave();
    assert!(t.is_pending());
    assert_eq!(t.flush(), None);
    assert!(!t.is_pending());
}

#[test]
fn client_coordinates_become_container_relative() {
    let p = pointer_in_container(150.0, 90.0, 100.0, 40.0);
    assert_eq!(p, DVec2::new(50.0, 50.0));

    // Above and left of the container is negative, not clamped.
    let q = pointer_in_container(10.0, 5.0, 100.0, 40.0);
    assert_eq!(q, DVec2::new(-90.0, -35.0));
}
