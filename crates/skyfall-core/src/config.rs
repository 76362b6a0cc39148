//! Runtime-tunable scene parameters.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("radii must satisfy event horizon < core < disk (got {horizon} / {core} / {disk})")]
    RadiusOrder { horizon: f64, core: f64, disk: f64 },
    #[error("event horizon must be positive (got {0})")]
    NonPositiveHorizon(f64),
    #[error("{name} damping must lie in (0, 1) (got {value})")]
    Damping { name: &'static str, value: f64 },
    #[error("gravity cap and strength must be positive (got cap {cap}, strength {strength})")]
    Gravity { cap: f64, strength: f64 },
    #[error("respawn margin must be non-negative (got {0})")]
    Margin(f64),
    #[error("aurora needs at least one ribbon")]
    NoAurora,
}

/// Pool sizes and physics knobs for a [`crate::Scene`].
///
/// `Default` is the stock look.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub symbol_count: usize,
    pub dust_count: usize,
    pub star_count: usize,
    pub shooting_star_count: usize,
    pub aurora_count: usize,

    pub event_horizon: f64,
    pub core_radius: f64,
    pub disk_radius: f64,
    pub attractor_velocity: [f64; 2],

    pub gravity_strength: f64,
    pub gravity_cap: f64,
    pub active_damping: f64,
    pub dormant_damping: f64,
    pub respawn_margin: f64,

    /// Start in the Newton vignette rather than the parallax scene.
    pub start_in_alternate: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            symbol_count: 60,
            dust_count: 200,
            star_count: 150,
            shooting_star_count: 4,
            aurora_count: 5,
            event_horizon: ATTRACTOR_EVENT_HORIZON,
            core_radius: ATTRACTOR_CORE_RADIUS,
            disk_radius: ATTRACTOR_DISK_RADIUS,
            attractor_velocity: ATTRACTOR_INITIAL_VELOCITY,
            gravity_strength: GRAVITY_STRENGTH,
            gravity_cap: GRAVITY_CAP,
            active_damping: ACTIVE_DAMPING,
            dormant_damping: DORMANT_DAMPING,
            respawn_margin: RESPAWN_MARGIN,
            start_in_alternate: true,
        }
    }
}

impl SceneConfig {
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must fail every check
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.event_horizon > 0.0) {
            return Err(ConfigError::NonPositiveHorizon(self.event_horizon));
        }
        if !(self.event_horizon < self.core_radius && self.core_radius < self.disk_radius) {
            return Err(ConfigError::RadiusOrder {
                horizon: self.event_horizon,
                core: self.core_radius,
                disk: self.disk_radius,
            });
        }
        for (name, value) in [
            ("active", self.active_damping),
            ("dormant", self.dormant_damping),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::Damping { name, value });
            }
        }
        if !(self.gravity_cap > 0.0 && self.gravity_strength > 0.0) {
            return Err(ConfigError::Gravity {
                cap: self.gravity_cap,
                strength: self.gravity_strength,
            });
        }
        if !(self.respawn_margin >= 0.0) {
            return Err(ConfigError::Margin(self.respawn_margin));
        }
        if self.aurora_count == 0 {
            return Err(ConfigError::NoAurora);
        }
        Ok(())
    }

    /// Upper bound on symbol speed once gravity is active:
    /// `v' = v * damping + a` with `|a| <= cap` converges below `cap / (1 - damping)`.
    pub fn max_symbol_speed(&self) -> f64 {
        self.gravity_cap / (1.0 - self.active_damping)
    }
}
