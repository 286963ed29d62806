// DOM contract and interaction timings used by the web frontend.

// Particle background
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const CONTAINER_SELECTOR: &str = ".desktop";
pub const LAYOUT_SETTLE_MS: i32 = 100; // wait before measuring the container

// Canvas data attributes
pub const DATA_VARIANT: &str = "variant";
pub const DATA_WAVE_SPEED: &str = "waveSpeed"; // data-wave-speed
pub const DATA_POINTER: &str = "pointer";

// Navigation
pub const NAV_ITEM_SELECTOR: &str = ".nav-item";
pub const NAV_PRESS_SCALE: &str = "scale(0.95)";
pub const NAV_PRESS_RESET_MS: i32 = 200;

// Content boxes and links
pub const CONTENT_BOX_SELECTOR: &str = ".content-box";
pub const BOX_HOVER_BG: &str = "rgba(1, 27, 49, 0.5)";
pub const BOX_REST_BG: &str = "rgba(1, 27, 49, 0.35)";
pub const BOX_RAISED: &str = "translateY(-5px)";
pub const BOX_PRESS_MS: i32 = 150;
pub const LINK_SELECTOR: &str = ".link-blue, .link-default";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".content-box, .subheading, .section";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SPOTLIGHT_SELECTOR: &str = ".spotlight-container";
pub const SCROLL_BACKGROUND_SELECTOR: &str = ".scroll-background-image";
pub const SPOTLIGHT_ROOT_MARGIN: &str = "-100px 0px 0px 0px";
pub const VISIBLE_CLASS: &str = "visible";

// Hero rule
pub const LINE_CONTAINER_SELECTOR: &str = ".line-container";
pub const LINE_SELECTOR: &str = ".line";

// Portfolio table
pub const ALL_FILTER_SELECTOR: &str = ".filter.active";
pub const DROPDOWN_SELECTOR: &str = ".filter-dropdown";
pub const DROPDOWN_BUTTON_SELECTOR: &str = ".filter-dropdown-btn";
pub const DROPDOWN_MENU_SELECTOR: &str = ".dropdown-menu";
pub const DROPDOWN_ITEM_CLASS: &str = "dropdown-item";
pub const TABLE_ROW_SELECTOR: &str = ".table-row";
pub const COMPANY_CELL_SELECTOR: &str = ".table-cell.company";
pub const DETAIL_LINK_SELECTOR: &str = ".detail-link";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const EXPANDED_CLASS: &str = "expanded";

// Team page
pub const TYPING_SELECTOR: &str = ".typing-text";
pub const TYPING_RETRY_MS: i32 = 100;
pub const TYPING_MAX_ATTEMPTS: u32 = 50;
pub const TEAM_CARD_SELECTOR: &str = ".team-card";
pub const ROLE_FILTER_SELECTOR: &str = ".filter";
pub const FLIPPED_CLASS: &str = "is-flipped";
