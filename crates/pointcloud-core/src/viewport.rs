//! Container metrics cached once per resize.
//!
//! The web frontend measures the layout container when the page loads and on
//! every window resize, then hands a [`Viewport`] to the animator. Nothing in
//! the per-frame path queries the DOM for sizes.

use crate::constants::{
    LINE_FULL_WIDTH_PX, LINE_MAX_WIDTH_PX, MOBILE_MAX_WIDTH, MOBILE_REDUCTION, REFERENCE_HEIGHT,
    REFERENCE_WIDTH,
};

/// Size of the drawing area in CSS pixels plus the mobile flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub mobile: bool,
}

impl Viewport {
    pub fn new(width: f64, height: f64, mobile: bool) -> Self {
        Self {
            width,
            height,
            mobile,
        }
    }

    /// Viewport with the mobile flag cleared.
    pub fn desktop(width: f64, height: f64) -> Self {
        Self::new(width, height, false)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when either side is zero, negative or not a number.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Diagonal relative to the 1920x1080 reference.
    pub fn scale_factor(&self) -> f64 {
        self.width.hypot(self.height) / REFERENCE_WIDTH.hypot(REFERENCE_HEIGHT)
    }

    pub fn mobile_reduction(&self) -> f64 {
        if self.mobile {
            MOBILE_REDUCTION
        } else {
            1.0
        }
    }
}

#[inline]
pub fn is_mobile_width(window_inner_width: f64) -> bool {
    window_inner_width <= MOBILE_MAX_WIDTH
}

/// Relative area change between two generations.
///
/// A zero previous area counts as an unbounded change as soon as the new area
/// is positive, so a cloud first built for an empty container is rebuilt once
/// the layout settles.
pub fn area_change(last_area: f64, new_area: f64) -> f64 {
    if last_area <= 0.0 {
        return if new_area > 0.0 { f64::INFINITY } else { 0.0 };
    }
    (new_area - last_area).abs() / last_area
}

/// Whether a resize ends the current layout epoch.
#[inline]
pub fn should_regenerate(last_area: f64, new_area: f64, threshold: f64) -> bool {
    area_change(last_area, new_area) > threshold
}

/// CSS width of the decorative hero rule for a given container width.
pub fn line_width_px(container_width: f64) -> f64 {
    if container_width < LINE_MAX_WIDTH_PX {
        container_width
    } else {
        LINE_FULL_WIDTH_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_viewport_has_unit_scale() {
        let vp = Viewport::desktop(1920.0, 1080.0);
        assert!((vp.scale_factor() - 1.0).abs() < 1e-12);
        assert!(!vp.mobile);
        assert_eq!(vp.mobile_reduction(), 1.0);
    }

    #[test]
    fn zero_last_area_regenerates_once_layout_exists() {
        assert!(should_regenerate(0.0, 100.0, 0.2));
        assert!(!should_regenerate(0.0, 0.0, 0.2));
    }

    #[test]
    fn line_width_caps_at_full_width() {
        assert_eq!(line_width_px(900.0), 900.0);
        assert_eq!(line_width_px(1185.0), LINE_FULL_WIDTH_PX);
        assert_eq!(line_width_px(1600.0), LINE_FULL_WIDTH_PX);
    }
}
