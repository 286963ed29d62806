//! Platform-independent logic behind the site runtime: the flowing point
//! cloud animation and the decision rules of the page behaviors. The web
//! frontend owns the DOM; everything here runs and is tested on the host.

pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod meter;
pub mod nav;
pub mod points;
pub mod projection;
pub mod raster;
pub mod surface;
pub mod typing;
pub mod viewport;
pub mod wave;

pub use animator::Animator;
pub use config::{AnimatorConfig, ColorVariant};
pub use constants::*;
pub use error::ParseError;
pub use filter::{role_visible, Accordion, Facet, FacetFilter, ALL_LABEL};
pub use meter::FrameMeter;
pub use nav::section_for_label;
pub use points::{generate, CloudPoint, LatticeParams, PointCloud, PointKind, RipplePatch};
pub use projection::Projector;
pub use raster::{Dot, FlowPoint};
pub use surface::{paint, Surface};
pub use typing::{TypingEffect, TypingStep};
pub use viewport::{is_mobile_width, line_width_px, should_regenerate, Viewport};
pub use wave::Pinch;
