// Host-side tests for the page behavior rules (filters, typing, navigation).

use instant::Instant;
use pointcloud_core::{
    is_mobile_width, role_visible, section_for_label, Facet, FacetFilter, FrameMeter,
    TypingEffect, TYPING_WORDS,
};
use std::time::Duration;

struct Row {
    stage: Option<&'static str>,
    category: Option<&'static str>,
}

fn rows() -> Vec<Row> {
    vec![
        Row { stage: Some("Seed"), category: Some("Bio") },
        Row { stage: Some("Seed"), category: Some("AI") },
        Row { stage: Some("Series A"), category: Some("Bio") },
        Row { stage: Some("Series A"), category: Some("Climate") },
        Row { stage: None, category: Some("Bio") },
    ]
}

fn visible(filter: &FacetFilter) -> Vec<usize> {
    rows()
        .iter()
        .enumerate()
        .filter(|(_, r)| filter.matches(r.stage, r.category))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn facets_combine_with_and() {
    let mut f = FacetFilter::default();
    f.select(Facet::Stage, "Seed");
    assert_eq!(visible(&f), vec![0, 1]);
    f.select(Facet::Category, "Bio");
    assert_eq!(visible(&f), vec![0]);
    f.select(Facet::Stage, "Series A");
    assert_eq!(visible(&f), vec![2]);
}

#[test]
fn reapplying_a_filter_is_idempotent() {
    let mut f = FacetFilter::default();
    f.select(Facet::Category, "Bio");
    let once = visible(&f);
    f.select(Facet::Category, "Bio");
    assert_eq!(visible(&f), once);
    assert_eq!(visible(&f), once);
}

#[test]
fn all_restores_every_row() {
    let mut f = FacetFilter::default();
    f.select(Facet::Stage, "Seed");
    f.select(Facet::Category, "AI");
    assert!(f.is_active());
    f.clear();
    assert!(!f.is_active());
    assert_eq!(visible(&f), vec![0, 1, 2, 3, 4]);
}

#[test]
fn row_without_stage_fails_active_stage() {
    let mut f = FacetFilter::default();
    f.select(Facet::Category, "Bio");
    assert!(visible(&f).contains(&4));
    f.select(Facet::Stage, "Seed");
    assert!(!visible(&f).contains(&4));
}

#[test]
fn role_filter_shows_all_or_exact_role() {
    assert!(role_visible("All", Some("Advisor")));
    assert!(role_visible("Advisor", Some("Advisor")));
    assert!(!role_visible("Advisor", Some("Partner")));
}

#[test]
fn typing_effect_types_holds_deletes_and_advances() {
    let mut fx = TypingEffect::new(["ab", "c"]).unwrap();
    let steps: Vec<(String, u64)> = (0..8)
        .map(|_| {
            let s = fx.step();
            (s.text, s.delay.as_millis() as u64)
        })
        .collect();
    let expect = [
        ("a", 100),
        ("ab", 2000),
        ("a", 50),
        ("", 300),
        ("c", 2000),
        ("", 300),
        ("a", 100),
        ("ab", 2000),
    ];
    for (got, (text, ms)) in steps.iter().zip(expect.iter()) {
        assert_eq!(got.0, *text);
        assert_eq!(got.1, *ms);
    }
}

#[test]
fn typing_effect_uses_site_words() {
    let mut fx = TypingEffect::new(TYPING_WORDS).unwrap();
    assert_eq!(fx.current_word(), "founders");
    for _ in 0.."founders".len() {
        fx.step();
    }
    assert!(fx.is_deleting());
    assert!(TypingEffect::new(Vec::<String>::new()).is_none());
    assert!(TypingEffect::new([""]).is_none());
}

#[test]
fn nav_labels_map_to_sections() {
    assert_eq!(section_for_label("  Bios "), Some(".bottom-content"));
    assert_eq!(section_for_label("Portfolio"), Some(".content-boxes"));
    assert_eq!(section_for_label("Team"), Some(".subheading"));
    assert_eq!(section_for_label("Our Approach"), Some(".hero-content"));
    assert_eq!(section_for_label("Contact"), None);
}

#[test]
fn mobile_breakpoint_is_inclusive() {
    assert!(is_mobile_width(768.0));
    assert!(!is_mobile_width(769.0));
}

#[test]
fn frame_meter_reports_once_per_window() {
    let t0 = Instant::now();
    let mut meter = FrameMeter::with_window(t0, Duration::from_secs(1));
    for i in 1..60 {
        assert_eq!(meter.tick(t0 + Duration::from_millis(i * 16)), None);
    }
    let fps = meter.tick(t0 + Duration::from_secs(1)).unwrap();
    assert!((fps - 60.0).abs() < 1e-9);
    assert_eq!(meter.tick(t0 + Duration::from_millis(1016)), None);
}
