//! Drawing surface abstraction.
//!
//! The browser build implements [`Surface`] over a 2D canvas context; tests
//! use a recorder. Coordinates are CSS pixels.

use crate::constants::DOT_FILL;
use crate::raster::Dot;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill(&mut self, css_color: &str);
    fn set_alpha(&mut self, alpha: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

/// Clear the surface and draw `dots` in order, leaving global alpha at 1.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, width: f64, height: f64, dots: &[Dot]) {
    surface.clear(width, height);
    if !dots.is_empty() {
        surface.set_fill(DOT_FILL);
        for d in dots {
            surface.set_alpha(d.alpha);
            surface.fill_circle(d.x, d.y, d.radius);
        }
    }
    surface.set_alpha(1.0);
}

/// A surface that records the calls made on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Fill(String),
    Alpha(f64),
    Circle { x: f64, y: f64, radius: f64 },
}

impl Recorder {
    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { x, y, radius } => Some((*x, *y, *radius)),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn set_fill(&mut self, css_color: &str) {
        self.ops.push(DrawOp::Fill(css_color.to_string()));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ops.push(DrawOp::Alpha(alpha));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::Circle { x, y, radius });
    }
}
