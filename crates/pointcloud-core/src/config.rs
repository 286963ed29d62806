//! Animator settings with defaults from [`crate::constants`].
//!
//! The web frontend overlays values read from `data-*` attributes on the
//! canvas element; each parser here accepts the raw attribute string.

use crate::constants::{
    CULL_MARGIN_PX, POINTER_RADIUS_PX, POINTER_STRENGTH, REGENERATE_AREA_CHANGE, WAVE_SPEED,
};
use crate::error::ParseError;
use crate::wave::Pinch;
use std::str::FromStr;

/// How dot opacity reacts to vertical screen position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorVariant {
    /// Uniform color across the canvas.
    #[default]
    Flat,
    /// Dots near the top of the canvas are drawn more opaque.
    TopBright,
}

impl FromStr for ColorVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "flat" => Ok(Self::Flat),
            "top-bright" => Ok(Self::TopBright),
            other => Err(ParseError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub wave_speed: f64,
    pub pointer_radius: f64,
    pub pointer_strength: f64,
    pub pointer_enabled: bool,
    pub cull_margin: f64,
    pub regenerate_threshold: f64,
    pub variant: ColorVariant,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            wave_speed: WAVE_SPEED,
            pointer_radius: POINTER_RADIUS_PX,
            pointer_strength: POINTER_STRENGTH,
            pointer_enabled: true,
            cull_margin: CULL_MARGIN_PX,
            regenerate_threshold: REGENERATE_AREA_CHANGE,
            variant: ColorVariant::Flat,
        }
    }
}

impl AnimatorConfig {
    pub fn pinch(&self) -> Pinch {
        Pinch {
            radius: self.pointer_radius,
            strength: self.pointer_strength,
        }
    }

    pub fn set_variant(&mut self, raw: &str) -> Result<(), ParseError> {
        self.variant = raw.parse()?;
        Ok(())
    }

    pub fn set_wave_speed(&mut self, raw: &str) -> Result<(), ParseError> {
        self.wave_speed = parse_positive("wave-speed", raw)?;
        Ok(())
    }

    /// `off`, `false` and `0` disable the pinch; anything else enables it.
    pub fn set_pointer(&mut self, raw: &str) {
        self.pointer_enabled = !matches!(raw.trim(), "off" | "false" | "0");
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<f64, ParseError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ParseError::InvalidNumber {
            name: name.to_string(),
            value: raw.to_string(),
        }),
    }
}
