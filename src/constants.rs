//! DOM hooks and cosmetic constants for the web front-end.

// Element ids expected in the host page
pub const CANVAS_ID: &str = "background-canvas";
pub const TOGGLE_ID: &str = "bg-toggle";
pub const TOGGLE_ACTIVE_CLASS: &str = "active";

// Canvas CSS backdrop behind the painted scene, per mode
pub const NEWTON_BACKGROUND: &str = "radial-gradient(ellipse at bottom, #2d1f10 0%, #1a1a2e 100%)";
pub const SPACE_BACKGROUND: &str =
    "radial-gradient(ellipse at top, #0c1428 0%, #060a14 50%, #0a0a0a 100%)";

// Frame-rate debug line cadence
pub const FPS_LOG_INTERVAL: u64 = 300;
