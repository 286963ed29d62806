//! Owned animation state for one canvas.
//!
//! The [`Animator`] holds everything the frame loop needs: the point set for
//! the current layout epoch, simulated time, the latest pointer position and
//! the cached viewport. The web frontend keeps a single instance behind an
//! `Rc<RefCell<_>>` and calls [`Animator::frame`] once per display refresh.

use crate::config::AnimatorConfig;
use crate::points::{self, PointCloud};
use crate::projection::Projector;
use crate::raster::{self, Dot, FlowPoint};
use crate::surface::{self, Surface};
use crate::viewport::{self, Viewport};
use crate::wave;
use glam::DVec2;
use rand::prelude::*;

pub struct Animator {
    config: AnimatorConfig,
    viewport: Viewport,
    projector: Projector,
    cloud: PointCloud,
    time: f64,
    pointer: Option<DVec2>,
    rng: StdRng,
    flow: Vec<FlowPoint>,
    dots: Vec<Dot>,
}

impl Animator {
    pub fn new(viewport: Viewport, config: AnimatorConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cloud = points::generate(&viewport, &mut rng);
        Self {
            config,
            projector: Projector::new(&viewport),
            viewport,
            flow: Vec::with_capacity(cloud.len()),
            dots: Vec::with_capacity(cloud.len()),
            cloud,
            time: 0.0,
            pointer: None,
            rng,
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    /// Pointer position in container CSS pixels.
    pub fn set_pointer(&mut self, pos: DVec2) {
        self.pointer = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Adopt new container metrics.
    ///
    /// The projection always follows the new size. The point set is rebuilt
    /// only when the area moved by more than the configured threshold since
    /// the last generation; returns whether that happened.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        self.projector = Projector::new(&viewport);
        let regenerate = viewport::should_regenerate(
            self.cloud.area,
            viewport.area(),
            self.config.regenerate_threshold,
        );
        if regenerate {
            self.cloud = points::generate(&viewport, &mut self.rng);
            log::info!(
                "[cloud] regenerated {} points for {:.0}x{:.0}",
                self.cloud.len(),
                viewport.width,
                viewport.height
            );
        }
        regenerate
    }

    /// Scene positions of every point at the current time.
    pub fn update(&mut self) -> &[FlowPoint] {
        let t = self.time;
        let pinch = self.config.pinch();
        let pointer = self.pointer.filter(|_| self.config.pointer_enabled);
        let projector = &self.projector;
        self.flow.clear();
        self.flow.extend(self.cloud.points.iter().map(|p| {
            let mut pos = wave::flow_position(p, t);
            if let Some(ptr) = pointer {
                pos = pinch.apply(pos, ptr, projector);
            }
            FlowPoint { pos, kind: p.kind }
        }));
        &self.flow
    }

    /// Dots for the current time, culled and depth-ordered.
    pub fn plan(&mut self) -> &[Dot] {
        self.update();
        raster::plan_dots(
            &self.flow,
            &self.projector,
            self.time,
            self.config.cull_margin,
            self.config.variant,
            &mut self.dots,
        );
        &self.dots
    }

    pub fn advance(&mut self) {
        self.time += self.config.wave_speed;
    }

    /// Render one frame to `surface` and step simulated time.
    ///
    /// Returns the number of dots drawn.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        self.plan();
        surface::paint(
            surface,
            self.viewport.width,
            self.viewport.height,
            &self.dots,
        );
        self.advance();
        self.dots.len()
    }
}
