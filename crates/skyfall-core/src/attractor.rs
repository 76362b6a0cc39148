//! The bouncing black hole.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::math::clamp_soft;
use crate::paint::{Color, Gradient, Painter};
use crate::phase::{Phase, Viewport};
use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Clone, Debug)]
pub struct Attractor {
    pub position: DVec2,
    pub velocity: DVec2,
    pub event_horizon: f64,
    pub core_radius: f64,
    pub disk_radius: f64,
    disk_phase: f64,
    initial_velocity: DVec2,
}

impl Attractor {
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Self {
        Self {
            position: viewport.center(),
            velocity: DVec2::from_array(config.attractor_velocity),
            initial_velocity: DVec2::from_array(config.attractor_velocity),
            event_horizon: config.event_horizon,
            core_radius: config.core_radius,
            disk_radius: config.disk_radius,
            disk_phase: 0.0,
        }
    }

    #[inline]
    pub fn disk_phase(&self) -> f64 {
        self.disk_phase
    }

    /// True when `point` lies strictly inside the event horizon.
    #[inline]
    pub fn absorbs(&self, point: DVec2) -> bool {
        self.position.distance(point) < self.event_horizon
    }

    /// Moves the body while the phase is awake and reflects it off the
    /// viewport edges. Dormant frames leave it untouched.
    pub fn update(&mut self, phase: &Phase, viewport: Viewport) {
        if !phase.attractor_awake() {
            return;
        }
        self.position += self.velocity;
        let eh = self.event_horizon;

        if self.position.x - eh < 0.0 {
            self.velocity.x = self.velocity.x.abs();
        } else if self.position.x + eh > viewport.width {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y - eh < 0.0 {
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y + eh > viewport.height {
            self.velocity.y = -self.velocity.y.abs();
        }
        self.confine(viewport);
    }

    /// Clamps the horizon-inflated body into the viewport. Non-finite
    /// position restarts at the center, non-finite velocity at the
    /// configured launch velocity.
    pub fn confine(&mut self, viewport: Viewport) {
        if !self.position.is_finite() {
            log::debug!("[attractor] position went non-finite, recentering");
            self.position = viewport.center();
        }
        if !self.velocity.is_finite() {
            log::debug!("[attractor] velocity went non-finite, relaunching");
            self.velocity = self.initial_velocity;
        }
        let eh = self.event_horizon;
        self.position.x = clamp_soft(self.position.x, eh, viewport.width - eh);
        self.position.y = clamp_soft(self.position.y, eh, viewport.height - eh);
    }

    /// Paints the body from the outermost halo inwards. Advances the disk
    /// rotation clock only on frames where the body is visible; returns
    /// whether anything was painted.
    pub fn draw<P: Painter>(&mut self, painter: &mut P, phase: &Phase) -> bool {
        let fade = phase.activation;
        if fade <= 0.0 {
            return false;
        }
        self.disk_phase = (self.disk_phase + DISK_PHASE_STEP) % TAU;
        let c = self.position;

        // Gravitational lensing halo
        let halo_radius = self.disk_radius * LENSING_HALO_SCALE;
        let halo = Gradient::radial(c, self.event_horizon, halo_radius)
            .stop(0.0, Color::rgba(20, 20, 60, 0.4 * fade))
            .stop(0.5, Color::rgba(40, 20, 80, 0.2 * fade))
            .stop(1.0, Color::TRANSPARENT);
        painter.circle(c.x, c.y, halo_radius);
        painter.fill(&halo.into());

        // Accretion disk lobes, rotation accumulates per lobe
        painter.save();
        painter.translate(c.x, c.y);
        painter.set_global_alpha(DISK_LOBE_ALPHA);
        for i in 0..DISK_LOBES {
            painter.rotate(self.disk_phase + i as f64 * TAU / DISK_LOBES as f64);
            let lobe = Gradient::radial(DVec2::ZERO, self.core_radius, self.disk_radius)
                .stop(0.0, Color::rgba(255, 120, 0, 0.7 * fade))
                .stop(0.3, Color::rgba(255, 80, 0, 0.5 * fade))
                .stop(0.6, Color::rgba(200, 40, 100, 0.3 * fade))
                .stop(1.0, Color::TRANSPARENT);
            painter.oval(0.0, 0.0, self.disk_radius, self.disk_radius * DISK_ASPECT, 0.0);
            painter.fill(&lobe.into());
        }
        painter.restore();

        // Glow just outside the horizon
        let glow = Gradient::radial(c, self.event_horizon * 0.5, self.core_radius)
            .stop(0.0, Color::rgba(255, 150, 0, 0.9 * fade))
            .stop(0.5, Color::rgba(255, 100, 0, 0.6 * fade))
            .stop(1.0, Color::rgba(100, 20, 80, 0.3 * fade));
        painter.circle(c.x, c.y, self.core_radius);
        painter.fill(&glow.into());

        painter.circle(c.x, c.y, self.event_horizon);
        painter.fill(&Color::rgba(0, 0, 0, fade).into());

        // Photon sphere
        painter.circle(c.x, c.y, self.core_radius * PHOTON_RING_SCALE);
        painter.set_shadow(15.0, Color::rgba(255, 200, 100, 0.9 * fade));
        painter.stroke(&Color::rgba(255, 200, 100, 0.8 * fade).into(), 2.0);
        painter.clear_shadow();
        true
    }
}
