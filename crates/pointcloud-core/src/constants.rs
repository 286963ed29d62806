// Shared tuning constants for the point cloud and the page behaviors.

// Viewport reference and mobile heuristic
pub const REFERENCE_WIDTH: f64 = 1920.0;
pub const REFERENCE_HEIGHT: f64 = 1080.0;
pub const MOBILE_MAX_WIDTH: f64 = 768.0; // window inner width at or below this counts as mobile
pub const MOBILE_REDUCTION: f64 = 0.5; // halves grid extent and doubles spacing on mobile

// Lattice
pub const BASE_GRID_SIZE: f64 = 55.0; // half-extent at scale 1.0
pub const BASE_SPACING: f64 = 0.70;
pub const SECONDARY_SPACING_RATIO: f64 = 1.8;
pub const SCENE_SCALE: f64 = 0.12; // grid units -> scene units
pub const WAVE_AMPLITUDE: f64 = 2.0;
pub const SECONDARY_DEPTH_OFFSET: f64 = 1.2;

// Disturbance patches
pub const DISTURBANCE_MAX_COUNT: f64 = 6.0;
pub const DISTURBANCE_CENTER_SPREAD: f64 = 1.5; // multiplied by grid size around the origin
pub const DISTURBANCE_RADIUS_MIN: f64 = 20.0;
pub const DISTURBANCE_RADIUS_SPAN: f64 = 15.0;
pub const DISTURBANCE_SPACING_RATIO: f64 = 1.5; // relative to secondary spacing

// Per-layer amplitude tags
pub const AMPLITUDE_NORMAL: f64 = 0.8;
pub const AMPLITUDE_SECONDARY: f64 = 0.6;
pub const AMPLITUDE_DISTURBANCE: f64 = 0.5;

// Animation
pub const WAVE_SPEED: f64 = 0.004; // simulated time added per frame
pub const WAVE_PHASE_RATE: f64 = 3.0;
pub const REGENERATE_AREA_CHANGE: f64 = 0.2;

// Projection
pub const PROJECTION_SCALE: f64 = 0.15; // of min(width, height)
pub const CAMERA_DISTANCE: f64 = 8.0;
pub const CULL_MARGIN_PX: f64 = 30.0;

// Pointer pinch
pub const POINTER_RADIUS_PX: f64 = 180.0;
pub const POINTER_STRENGTH: f64 = 3.0;
pub const PINCH_SCREEN_STEP: f64 = 0.35; // pixels moved per unit of strength
pub const PINCH_DEPTH_PULL: f64 = 0.3;

// Dot styling
pub const DOT_FILL: &str = "rgba(1, 27, 49, 0.8)";
pub const DOT_MIN_RADIUS: f64 = 0.2;
pub const DOT_DEPTH_GROWTH: f64 = 0.08;
pub const DOT_BASE_ALPHA: f64 = 0.6;
pub const DOT_INTENSITY_ALPHA: f64 = 0.4;
pub const TOP_BRIGHTNESS_BOOST: f64 = 0.4;

// Frame-rate reporting window (seconds)
pub const FRAME_METER_WINDOW_SEC: f64 = 5.0;

// Typing effect (milliseconds)
pub const TYPE_DELAY_MS: u64 = 100;
pub const DELETE_DELAY_MS: u64 = 50;
pub const WORD_HOLD_MS: u64 = 2000;
pub const NEXT_WORD_DELAY_MS: u64 = 300;
pub const TYPING_WORDS: [&str; 5] = ["founders", "scientists", "researchers", "builders", "innovators"];

// Decorative rule under the hero
pub const LINE_MAX_WIDTH_PX: f64 = 1185.0;
pub const LINE_FULL_WIDTH_PX: f64 = 1185.002;
