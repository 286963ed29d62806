//! Projection, culling, depth ordering and per-dot styling for one frame.

use crate::config::ColorVariant;
use crate::constants::{
    CAMERA_DISTANCE, DOT_BASE_ALPHA, DOT_DEPTH_GROWTH, DOT_INTENSITY_ALPHA, DOT_MIN_RADIUS,
    TOP_BRIGHTNESS_BOOST,
};
use crate::points::PointKind;
use crate::projection::Projector;
use glam::DVec3;

/// Scene position of a point for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct FlowPoint {
    pub pos: DVec3,
    pub kind: PointKind,
}

/// A filled circle ready to be drawn, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f64,
    pub alpha: f64,
}

/// Rendering parameters per point kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindStyle {
    pub base_radius: f64,
}

const NORMAL_STYLE: KindStyle = KindStyle { base_radius: 0.7 };
const SECONDARY_STYLE: KindStyle = KindStyle { base_radius: 0.5 };
const DISTURBANCE_STYLE: KindStyle = KindStyle { base_radius: 0.6 };

#[inline]
pub fn style_for(kind: PointKind) -> &'static KindStyle {
    match kind {
        PointKind::Normal => &NORMAL_STYLE,
        PointKind::Secondary => &SECONDARY_STYLE,
        PointKind::Disturbance(_) => &DISTURBANCE_STYLE,
    }
}

/// Slow brightness shimmer that drifts across the screen.
#[inline]
pub fn pulse(t: f64, sx: f64, sy: f64) -> f64 {
    0.7 + (t * 2.0 + sx * 0.005 + sy * 0.005).sin() * 0.3
}

#[inline]
pub fn dot_radius(kind: PointKind, z: f64) -> f64 {
    (style_for(kind).base_radius + (5.0 - z) * DOT_DEPTH_GROWTH).max(DOT_MIN_RADIUS)
}

/// Shading from depth and surface folding, scaled by `pulse`.
pub fn dot_intensity(pulse: f64, z: f64) -> f64 {
    let base = pulse * 0.85;
    let depth = (0.9 - z / CAMERA_DISTANCE).clamp(0.15, 1.0);
    let fold = (1.0 - z.abs() * 0.3).max(0.6);
    base * depth * fold
}

pub fn dot_alpha(intensity: f64, sy: f64, height: f64, variant: ColorVariant) -> f64 {
    let boost = match variant {
        ColorVariant::Flat => 0.0,
        ColorVariant::TopBright if height > 0.0 => (1.0 - sy / height) * TOP_BRIGHTNESS_BOOST,
        ColorVariant::TopBright => 0.0,
    };
    (DOT_BASE_ALPHA + (intensity + boost) * DOT_INTENSITY_ALPHA).min(1.0)
}

/// Project, cull and style `flow` into `out`, ordered by ascending depth.
pub fn plan_dots(
    flow: &[FlowPoint],
    projector: &Projector,
    t: f64,
    cull_margin: f64,
    variant: ColorVariant,
    out: &mut Vec<Dot>,
) {
    out.clear();
    let height = projector.size.y;
    for fp in flow {
        let s = projector.to_screen(fp.pos);
        if !projector.in_bounds(s, cull_margin) {
            continue;
        }
        let z = fp.pos.z;
        let intensity = dot_intensity(pulse(t, s.x, s.y), z);
        out.push(Dot {
            x: s.x,
            y: s.y,
            z,
            radius: dot_radius(fp.kind, z),
            alpha: dot_alpha(intensity, s.y, height, variant),
        });
    }
    out.sort_by(|a, b| a.z.total_cmp(&b.z));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_never_below_floor() {
        assert_eq!(dot_radius(PointKind::Secondary, 100.0), DOT_MIN_RADIUS);
        assert!((dot_radius(PointKind::Normal, 5.0) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn alpha_is_capped() {
        assert_eq!(dot_alpha(10.0, 0.0, 100.0, ColorVariant::Flat), 1.0);
    }

    #[test]
    fn top_bright_only_affects_upper_rows() {
        let flat = dot_alpha(0.3, 0.0, 100.0, ColorVariant::Flat);
        let top = dot_alpha(0.3, 0.0, 100.0, ColorVariant::TopBright);
        let bottom = dot_alpha(0.3, 100.0, 100.0, ColorVariant::TopBright);
        assert!(top > flat);
        assert!((bottom - flat).abs() < 1e-12);
    }
}
