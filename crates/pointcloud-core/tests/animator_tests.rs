// Host-side tests for the frame contract of the animator.

use glam::DVec2;
use pointcloud_core::surface::{DrawOp, Recorder};
use pointcloud_core::{
    Animator, AnimatorConfig, ColorVariant, PointKind, Viewport, DOT_FILL, WAVE_SPEED,
};

fn animator(w: f64, h: f64) -> Animator {
    Animator::new(Viewport::desktop(w, h), AnimatorConfig::default(), 42)
}

#[test]
fn resize_below_threshold_keeps_point_set() {
    let mut a = animator(1000.0, 800.0);
    let before = a.cloud().len();
    let before_normal = a.cloud().count_of(|k| k == PointKind::Normal);
    let first = a.cloud().points[0].base;

    // +18.75% area
    assert!(!a.resize(Viewport::desktop(1000.0, 950.0)));
    assert_eq!(a.cloud().len(), before);
    assert_eq!(a.cloud().points[0].base, first);
    assert_eq!(a.viewport().height, 950.0);
    assert_eq!(a.projector().center, DVec2::new(500.0, 475.0));

    // +25% against the area of the last generation, not the last resize
    assert!(a.resize(Viewport::desktop(1000.0, 1000.0)));
    assert_eq!(a.cloud().area, 1_000_000.0);
    assert_ne!(
        a.cloud().count_of(|k| k == PointKind::Normal),
        before_normal
    );
}

#[test]
fn shrinking_past_threshold_regenerates() {
    let mut a = animator(1000.0, 1000.0);
    assert!(!a.resize(Viewport::desktop(1000.0, 810.0)));
    assert!(a.resize(Viewport::desktop(1000.0, 790.0)));
}

#[test]
fn empty_start_regenerates_once_laid_out() {
    let mut a = animator(0.0, 0.0);
    assert!(a.cloud().is_empty());
    let mut rec = Recorder::default();
    assert_eq!(a.frame(&mut rec), 0);
    assert!(a.resize(Viewport::desktop(1280.0, 720.0)));
    assert!(!a.cloud().is_empty());
}

#[test]
fn one_step_moves_every_flow_depth_but_no_base_depth() {
    let mut a = animator(1920.0, 1080.0);
    let base_before: Vec<f64> = a.cloud().points.iter().map(|p| p.base.z).collect();
    let z0: Vec<f64> = a.update().iter().map(|f| f.pos.z).collect();
    a.advance();
    assert!((a.time() - WAVE_SPEED).abs() < 1e-15);
    let z1: Vec<f64> = a.update().iter().map(|f| f.pos.z).collect();

    assert_eq!(z0.len(), z1.len());
    assert!(z0.iter().zip(&z1).all(|(a, b)| a != b));
    let base_after: Vec<f64> = a.cloud().points.iter().map(|p| p.base.z).collect();
    assert_eq!(base_before, base_after);
}

#[test]
fn flow_keeps_base_xy_without_pointer() {
    let mut a = animator(1280.0, 720.0);
    let bases: Vec<_> = a.cloud().points.iter().map(|p| p.base).collect();
    for (f, b) in a.update().iter().zip(&bases) {
        assert_eq!(f.pos.x, b.x);
        assert_eq!(f.pos.y, b.y);
    }
}

#[test]
fn distant_pointer_changes_nothing() {
    let mut a = animator(1280.0, 720.0);
    let plain: Vec<_> = a.update().iter().map(|f| f.pos).collect();
    a.set_pointer(DVec2::new(-5000.0, -5000.0));
    let pinched: Vec<_> = a.update().iter().map(|f| f.pos).collect();
    assert_eq!(plain, pinched);
}

#[test]
fn pointer_pinches_nearby_points_until_cleared() {
    let mut a = animator(1280.0, 720.0);
    let plain: Vec<_> = a.update().iter().map(|f| f.pos).collect();
    a.set_pointer(DVec2::new(640.0, 360.0));
    let pinched: Vec<_> = a.update().iter().map(|f| f.pos).collect();
    assert!(plain.iter().zip(&pinched).any(|(p, q)| p != q));
    a.clear_pointer();
    assert_eq!(a.pointer(), None);
    let released: Vec<_> = a.update().iter().map(|f| f.pos).collect();
    assert_eq!(plain, released);
}

#[test]
fn disabled_pointer_config_ignores_pointer() {
    let mut cfg = AnimatorConfig::default();
    cfg.set_pointer("off");
    let mut a = Animator::new(Viewport::desktop(1280.0, 720.0), cfg, 42);
    let plain: Vec<_> = a.update().iter().map(|f| f.pos).collect();
    a.set_pointer(DVec2::new(640.0, 360.0));
    let after: Vec<_> = a.update().iter().map(|f| f.pos).collect();
    assert_eq!(plain, after);
}

#[test]
fn planned_dots_are_culled_and_depth_ordered() {
    let mut a = animator(1920.0, 1080.0);
    let total = a.cloud().len();
    let dots = a.plan().to_vec();
    assert!(!dots.is_empty());
    assert!(dots.len() < total, "lattice corners should fall off screen");
    for d in &dots {
        assert!(d.x > -30.0 && d.x < 1950.0);
        assert!(d.y > -30.0 && d.y < 1110.0);
        assert!(d.radius >= 0.2);
        assert!(d.alpha > 0.0 && d.alpha <= 1.0);
    }
    assert!(dots.windows(2).all(|w| w[0].z <= w[1].z));
}

#[test]
fn frame_clears_draws_and_resets_alpha() {
    let mut a = animator(800.0, 600.0);
    let mut rec = Recorder::default();
    let drawn = a.frame(&mut rec);
    assert_eq!(
        rec.ops.first(),
        Some(&DrawOp::Clear {
            width: 800.0,
            height: 600.0
        })
    );
    assert_eq!(rec.ops.get(1), Some(&DrawOp::Fill(DOT_FILL.to_string())));
    assert_eq!(rec.ops.last(), Some(&DrawOp::Alpha(1.0)));
    assert_eq!(rec.circles().count(), drawn);
    assert!((a.time() - WAVE_SPEED).abs() < 1e-15);
}

#[test]
fn top_bright_variant_raises_upper_alpha() {
    let flat = Animator::new(Viewport::desktop(800.0, 600.0), AnimatorConfig::default(), 1)
        .plan()
        .to_vec();
    let cfg = AnimatorConfig {
        variant: ColorVariant::TopBright,
        ..AnimatorConfig::default()
    };
    let bright = Animator::new(Viewport::desktop(800.0, 600.0), cfg, 1)
        .plan()
        .to_vec();
    assert_eq!(flat.len(), bright.len());
    let upper_flat: f64 = flat.iter().filter(|d| d.y < 200.0).map(|d| d.alpha).sum();
    let upper_bright: f64 = bright.iter().filter(|d| d.y < 200.0).map(|d| d.alpha).sum();
    assert!(upper_bright > upper_flat);
}
