//! Per-frame wave field and the pointer pinch.

use crate::constants::{PINCH_DEPTH_PULL, PINCH_SCREEN_STEP, WAVE_PHASE_RATE};
use crate::points::CloudPoint;
use crate::projection::Projector;
use glam::{DVec2, DVec3};

/// Surface undulation added on top of a point's static depth at time `t`.
pub fn wave_offset(grid: DVec2, t: f64) -> f64 {
    let (gx, gy) = (grid.x, grid.y);
    let p = t * WAVE_PHASE_RATE;
    (gx * 0.3 + p).sin() * 0.3
        + (gy * 0.25 + p * 0.8).cos() * 0.25
        + ((gx + gy) * 0.2 + p * 1.2).sin() * 0.2
        + ((gx - gy) * 0.15 + p * 0.6).cos() * 0.15
        + (gx * 0.35 + gy * 0.18 + p * 1.5).sin() * 0.18
        + (gy * 0.28 - gx * 0.12 + p * 0.9).cos() * 0.12
        + ((gx * 2.0 + gy) * 0.08 + p * 2.0).sin() * 0.1
}

/// Scene position of `point` at time `t` before any pointer influence.
#[inline]
pub fn flow_position(point: &CloudPoint, t: f64) -> DVec3 {
    DVec3::new(
        point.base.x,
        point.base.y,
        point.base.z + wave_offset(point.grid, t),
    )
}

/// Radius and strength of the pointer pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pinch {
    pub radius: f64,
    pub strength: f64,
}

impl Pinch {
    /// Cubic falloff weight for a screen distance; zero at and beyond the radius.
    #[inline]
    pub fn influence(&self, dist: f64) -> f64 {
        if dist <= 0.0 || dist >= self.radius {
            return 0.0;
        }
        let k = 1.0 - dist / self.radius;
        k * k * k
    }

    /// Pull `pos` toward `pointer` in screen space.
    ///
    /// Returns the point unchanged when it projects onto the pointer or lies
    /// outside the radius. Otherwise the point is drawn slightly toward the
    /// viewer and its scene `x, y` are solved at the new depth so that its
    /// screen position moves straight at the pointer, never past it.
    ///
    /// The approach is strict only to f64 resolution: just inside the radius
    /// the step can round away and the point stays where it was.
    pub fn apply(&self, pos: DVec3, pointer: DVec2, projector: &Projector) -> DVec3 {
        let screen = projector.to_screen(pos);
        let delta = pointer - screen;
        let dist_sq = delta.length_squared();
        if dist_sq <= 0.0 || dist_sq >= self.radius * self.radius {
            return pos;
        }
        let dist = dist_sq.sqrt();
        let strength = self.strength * self.influence(dist);
        if strength <= 0.0 {
            return pos;
        }
        let step = (strength * PINCH_SCREEN_STEP).min(dist);
        let target = screen + delta / dist * step;
        let z = pos.z - strength * PINCH_DEPTH_PULL;
        let xy = projector.to_scene(target, z);
        DVec3::new(xy.x, xy.y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn influence_is_cubic() {
        let pinch = Pinch {
            radius: 100.0,
            strength: 3.0,
        };
        assert!((pinch.influence(50.0) - 0.125).abs() < 1e-12);
        assert_eq!(pinch.influence(0.0), 0.0);
        assert_eq!(pinch.influence(100.0), 0.0);
    }
}
