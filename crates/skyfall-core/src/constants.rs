//! Tuning constants for the scroll background.
//!
//! Everything here is a visual tuning knob rather than a physical quantity.
//! Values that callers may want to override at runtime are mirrored in
//! [`crate::SceneConfig`]; the rest are fixed look-and-feel choices.

use std::f64::consts::PI;

// Scroll windows
pub const CROSSFADE_START: f64 = 0.4; // parallax fully visible below this
pub const CROSSFADE_END: f64 = 0.6; // space scene fully visible above this
pub const ACTIVATION_START: f64 = 0.5; // attractor wakes up here

// Attractor body
pub const ATTRACTOR_EVENT_HORIZON: f64 = 70.0;
pub const ATTRACTOR_CORE_RADIUS: f64 = 130.0;
pub const ATTRACTOR_DISK_RADIUS: f64 = 250.0;
pub const ATTRACTOR_INITIAL_VELOCITY: [f64; 2] = [3.0, 2.5];
pub const DISK_PHASE_STEP: f64 = 0.015; // radians per drawn frame
pub const DISK_LOBES: usize = 3;
pub const DISK_LOBE_ALPHA: f64 = 0.35;
pub const DISK_ASPECT: f64 = 0.3; // minor/major axis of each lobe
pub const LENSING_HALO_SCALE: f64 = 1.5; // halo radius relative to disk radius
pub const PHOTON_RING_SCALE: f64 = 0.8; // ring radius relative to core radius

// Gravity integration (symbol particles)
pub const GRAVITY_STRENGTH: f64 = 8000.0; // k in min(cap, k / d^2)
pub const GRAVITY_CAP: f64 = 3.0;
pub const ACTIVE_DAMPING: f64 = 0.985;
pub const DORMANT_DAMPING: f64 = 0.995;
pub const RESPAWN_MARGIN: f64 = 100.0; // how far off-screen before a symbol is recycled
pub const EDGE_SPAWN_OFFSET: f64 = 50.0; // distance outside the edge for fresh symbols
pub const SPAWN_VELOCITY_SPAN: f64 = 1.0; // components drawn from +-span/2

// Symbol glyphs
pub const SYMBOL_SIZE_MIN: f64 = 20.0;
pub const SYMBOL_SIZE_SPAN: f64 = 25.0;
pub const SYMBOL_OPACITY_MIN: f64 = 0.5;
pub const SYMBOL_OPACITY_SPAN: f64 = 0.5;
pub const SYMBOL_SPIN_SPAN: f64 = 0.02;
pub const SYMBOL_GLOW_BLUR: f64 = 10.0;
pub const SYMBOL_FONT_FAMILY: &str = "'Courier New', monospace";
pub const MATH_SYMBOLS: [&str; 37] = [
    "∫", "∂", "∑", "π", "θ", "λ", "μ", "σ", "Δ", "∇", "α", "β", "γ", "ω", "∞", "√", "≈", "≠", "≤",
    "≥", "f(x)", "dy/dx", "lim", "sin", "cos", "tan", "log", "e^x", "x²", "x³", "∈", "∀", "∃",
    "⊂", "⊃", "Σ", "Φ",
];

// Dust
pub const DUST_RADIUS_MIN: f64 = 200.0;
pub const DUST_RADIUS_SPAN: f64 = 300.0;
pub const DUST_SIZE_MIN: f64 = 0.5;
pub const DUST_SIZE_SPAN: f64 = 1.5;
pub const DUST_SPEED_MIN: f64 = 0.5;
pub const DUST_SPEED_SPAN: f64 = 1.0;
pub const DUST_OPACITY_MIN: f64 = 0.3;
pub const DUST_OPACITY_SPAN: f64 = 0.6;
pub const DUST_HUE_MIN: f64 = 20.0;
pub const DUST_HUE_SPAN: f64 = 60.0;
pub const DUST_SWIRL: f64 = 0.8; // tangential px per tick

// Static stars
pub const STAR_SIZE_SPAN: f64 = 2.0;
pub const STAR_OPACITY_MIN: f64 = 0.3;
pub const STAR_OPACITY_SPAN: f64 = 0.7;
pub const STAR_TWINKLE_MIN: f64 = 0.01;
pub const STAR_TWINKLE_SPAN: f64 = 0.02;

// Shooting stars
pub const SHOOTING_ANGLE: f64 = PI * 0.75;
pub const SHOOTING_ANGLE_JITTER: f64 = 0.3;
pub const SHOOTING_SPEED_MIN: f64 = 4.0;
pub const SHOOTING_SPEED_SPAN: f64 = 6.0;
pub const SHOOTING_LENGTH_MIN: f64 = 60.0;
pub const SHOOTING_LENGTH_SPAN: f64 = 100.0;
pub const SHOOTING_LIFE_MIN: f64 = 80.0;
pub const SHOOTING_LIFE_SPAN: f64 = 120.0;
pub const SHOOTING_FADE_IN_TICKS: f64 = 15.0;
pub const SHOOTING_FADE_OUT_TICKS: f64 = 20.0;
pub const SHOOTING_ACTIVE_ON_RESET: f64 = 0.03;
pub const SHOOTING_ACTIVATE_PER_TICK: f64 = 0.002;
pub const SHOOTING_EXIT_LEFT: f64 = -200.0;

// Aurora
pub const AURORA_SAMPLE_STEP: f64 = 8.0;
pub const AURORA_OVERSCAN: f64 = 20.0;
pub const AURORA_PALETTE: [[u8; 3]; 5] = [
    [50, 220, 120],  // green
    [30, 200, 160],  // teal
    [80, 180, 220],  // cyan
    [120, 100, 220], // purple
    [60, 240, 100],  // bright green
];

// Newton vignette
pub const APPLE_LANDING_PROGRESS: f64 = 0.92;
pub const IMPACT_START: f64 = 0.95; // fall fraction at which the impact appears
pub const NEWTON_STAR_COUNT: usize = 150;
pub const NEWTON_DECOR_SEED: u64 = 0x6E65_7774_6F6E; // fixed so the vignette never reshuffles
