//! Fixed focal-length perspective projection from scene space to CSS pixels.

use crate::constants::{CAMERA_DISTANCE, PROJECTION_SCALE};
use crate::viewport::Viewport;
use glam::{DVec2, DVec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub scale: f64,
    pub center: DVec2,
    pub size: DVec2,
}

impl Projector {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            scale: viewport.width.min(viewport.height) * PROJECTION_SCALE,
            center: DVec2::new(viewport.width * 0.5, viewport.height * 0.5),
            size: DVec2::new(viewport.width, viewport.height),
        }
    }

    /// Pixels per scene unit at depth `z`. Larger `z` shrinks the point.
    #[inline]
    pub fn projected_scale(&self, z: f64) -> f64 {
        self.scale / (1.0 + z / CAMERA_DISTANCE)
    }

    /// Screen position of a scene point. Screen `y` grows downward.
    #[inline]
    pub fn to_screen(&self, p: DVec3) -> DVec2 {
        let s = self.projected_scale(p.z);
        DVec2::new(self.center.x + p.x * s, self.center.y - p.y * s)
    }

    /// Scene `x, y` that lands on `screen` at depth `z`.
    #[inline]
    pub fn to_scene(&self, screen: DVec2, z: f64) -> DVec2 {
        let s = self.projected_scale(z);
        DVec2::new((screen.x - self.center.x) / s, (self.center.y - screen.y) / s)
    }

    /// True when `screen` lies within `margin` pixels of the drawing area.
    #[inline]
    pub fn in_bounds(&self, screen: DVec2, margin: f64) -> bool {
        screen.x > -margin
            && screen.x < self.size.x + margin
            && screen.y > -margin
            && screen.y < self.size.y + margin
    }
}
