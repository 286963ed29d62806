//! Point cloud generation.
//!
//! A cloud is built from three passes over a square lattice centered on the
//! origin: a dense primary wave surface, a sparser secondary surface lifted
//! above it, and a handful of circular ripple patches placed at random. The
//! first two passes are fully determined by the viewport; only the ripple
//! patches consume randomness.

use crate::constants::*;
use crate::viewport::Viewport;
use glam::{DVec2, DVec3};
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::FRAC_PI_4;

/// Which generation pass produced a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointKind {
    Normal,
    Secondary,
    /// Carries the index of the ripple patch the point belongs to.
    Disturbance(u16),
}

#[derive(Clone, Debug)]
pub struct CloudPoint {
    /// Lattice coordinates, in grid units.
    pub grid: DVec2,
    /// Scene-space rest position; `z` is the static shape of the surface.
    pub base: DVec3,
    /// Per-layer tag. Not used by the animation.
    pub amplitude: f64,
    pub kind: PointKind,
}

impl CloudPoint {
    fn new(gx: f64, gy: f64, base_z: f64, amplitude: f64, kind: PointKind) -> Self {
        Self {
            grid: DVec2::new(gx, gy),
            base: DVec3::new(gx * SCENE_SCALE, gy * SCENE_SCALE, base_z),
            amplitude,
            kind,
        }
    }
}

/// Lattice dimensions derived from a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeParams {
    pub scale_factor: f64,
    pub mobile_reduction: f64,
    pub grid_size: f64,
    pub main_spacing: f64,
    pub secondary_spacing: f64,
}

impl LatticeParams {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let scale_factor = viewport.scale_factor();
        let mobile_reduction = viewport.mobile_reduction();
        let grid_size = (BASE_GRID_SIZE * mobile_reduction * scale_factor).floor();
        let main_spacing = BASE_SPACING / mobile_reduction * scale_factor;
        Self {
            scale_factor,
            mobile_reduction,
            grid_size,
            main_spacing,
            secondary_spacing: main_spacing * SECONDARY_SPACING_RATIO,
        }
    }

    pub fn disturbance_count(&self) -> usize {
        (DISTURBANCE_MAX_COUNT * self.scale_factor.min(1.0) * self.mobile_reduction).floor() as usize
    }

    pub fn disturbance_spacing(&self) -> f64 {
        self.secondary_spacing * DISTURBANCE_SPACING_RATIO
    }
}

/// A circular ripple patch in grid units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RipplePatch {
    pub center: DVec2,
    pub radius: f64,
}

pub type RipplePatches = SmallVec<[RipplePatch; 8]>;

/// Samples along one lattice axis: `start, start + step, ...` up to `end`.
///
/// Positions are computed from the index so long walks do not drift.
pub fn lattice_axis(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && end >= start {
        ((end - start) / step + 1e-9).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| start + i as f64 * step)
}

/// Depth of the primary surface at a lattice node.
pub fn primary_depth(x: f64, y: f64) -> f64 {
    let d = x.hypot(y);
    let radial = (d * 0.15).sin() * WAVE_AMPLITUDE * (-d * 0.015).exp();
    radial
        + (x * 0.1).sin() * 0.6
        + (y * 0.08).cos() * 0.5
        + ((x + y) * 0.05).sin() * 0.4
        + ((x - y) * 0.06).cos() * 0.3
        + (x * 0.12 + y * 0.07).sin() * 0.35
        + (d * 0.08).cos() * 0.25
}

/// Depth of the secondary surface, including its constant lift.
pub fn secondary_depth(x: f64, y: f64) -> f64 {
    let d = x.hypot(y);
    let radial = (d * 0.12 + FRAC_PI_4).cos() * WAVE_AMPLITUDE * 0.8 * (-d * 0.012).exp();
    radial
        + (x * 0.09).cos() * 0.5
        + (y * 0.06).sin() * 0.4
        + ((x * 2.0 + y) * 0.04).sin() * 0.3
        + ((x + y * 2.0) * 0.05).cos() * 0.25
        + SECONDARY_DEPTH_OFFSET
}

/// Depth of a ripple sample at `dist` from its patch center.
#[inline]
pub fn ripple_depth(dist: f64, radius: f64) -> f64 {
    (dist * 0.3).cos() * (1.0 - dist / radius)
}

pub fn primary_layer(params: &LatticeParams, out: &mut Vec<CloudPoint>) {
    let g = params.grid_size;
    for x in lattice_axis(-g, g, params.main_spacing) {
        for y in lattice_axis(-g, g, params.main_spacing) {
            out.push(CloudPoint::new(
                x,
                y,
                primary_depth(x, y),
                AMPLITUDE_NORMAL,
                PointKind::Normal,
            ));
        }
    }
}

pub fn secondary_layer(params: &LatticeParams, out: &mut Vec<CloudPoint>) {
    let g = params.grid_size;
    for x in lattice_axis(-g, g, params.secondary_spacing) {
        for y in lattice_axis(-g, g, params.secondary_spacing) {
            out.push(CloudPoint::new(
                x,
                y,
                secondary_depth(x, y),
                AMPLITUDE_SECONDARY,
                PointKind::Secondary,
            ));
        }
    }
}

/// Pick ripple patch centers and radii.
pub fn ripple_patches<R: Rng + ?Sized>(params: &LatticeParams, rng: &mut R) -> RipplePatches {
    let spread = params.grid_size * DISTURBANCE_CENTER_SPREAD;
    (0..params.disturbance_count())
        .map(|_| {
            let cx = (rng.gen::<f64>() - 0.5) * spread;
            let cy = (rng.gen::<f64>() - 0.5) * spread;
            let radius = (DISTURBANCE_RADIUS_MIN + rng.gen::<f64>() * DISTURBANCE_RADIUS_SPAN)
                * params.scale_factor;
            RipplePatch {
                center: DVec2::new(cx, cy),
                radius,
            }
        })
        .collect()
}

pub fn disturbance_layer(
    params: &LatticeParams,
    patches: &[RipplePatch],
    out: &mut Vec<CloudPoint>,
) {
    let step = params.disturbance_spacing();
    for (i, patch) in patches.iter().enumerate() {
        let c = patch.center;
        let r = patch.radius;
        for x in lattice_axis(c.x - r, c.x + r, step) {
            for y in lattice_axis(c.y - r, c.y + r, step) {
                let dist = (x - c.x).hypot(y - c.y);
                if dist <= r {
                    out.push(CloudPoint::new(
                        x,
                        y,
                        ripple_depth(dist, r),
                        AMPLITUDE_DISTURBANCE,
                        PointKind::Disturbance(i as u16),
                    ));
                }
            }
        }
    }
}

/// Points plus the patches that shaped the disturbance layer.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    pub points: Vec<CloudPoint>,
    pub patches: RipplePatches,
    pub area: f64,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn count_of(&self, pred: impl Fn(PointKind) -> bool) -> usize {
        self.points.iter().filter(|p| pred(p.kind)).count()
    }
}

/// Build a fresh cloud for `viewport`.
pub fn generate<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> PointCloud {
    if viewport.is_degenerate() {
        return PointCloud::default();
    }
    let params = LatticeParams::for_viewport(viewport);
    let patches = ripple_patches(&params, rng);
    let mut points = Vec::new();
    primary_layer(&params, &mut points);
    secondary_layer(&params, &mut points);
    disturbance_layer(&params, &patches, &mut points);
    log::debug!(
        "[cloud] generated {} points for {:.0}x{:.0} (grid={} spacing={:.3} patches={})",
        points.len(),
        viewport.width,
        viewport.height,
        params.grid_size,
        params.main_spacing,
        patches.len()
    );
    PointCloud {
        points,
        patches,
        area: viewport.area(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_axis_is_inclusive_of_end() {
        let xs: Vec<f64> = lattice_axis(-1.0, 1.0, 0.5).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn lattice_axis_with_zero_step_is_empty() {
        assert_eq!(lattice_axis(-1.0, 1.0, 0.0).count(), 0);
    }

    #[test]
    fn ripple_depth_fades_to_zero_at_edge() {
        assert!(ripple_depth(25.0, 25.0).abs() < 1e-12);
        assert!((ripple_depth(0.0, 25.0) - 1.0).abs() < 1e-12);
    }
}
