use super::FrameEnv;
use crate::constants::*;
use crate::math::{direction_to, polar, spread};
use crate::paint::{Color, Painter};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// A speck of dust spiralling into the attractor. Position is kept in the
/// attractor's local frame so the cloud travels with the body.
#[derive(Clone, Debug)]
pub struct DustParticle {
    pub offset: DVec2,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub hue: f64,
}

impl DustParticle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, event_horizon: f64) -> Self {
        let mut d = Self {
            offset: DVec2::ZERO,
            size: 0.0,
            speed: 0.0,
            opacity: 0.0,
            hue: 0.0,
        };
        d.respawn(rng, event_horizon);
        d
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, event_horizon: f64) {
        let min_radius = DUST_RADIUS_MIN.max(event_horizon * 2.0);
        self.offset = polar(rng.gen::<f64>() * TAU, spread(rng, min_radius, DUST_RADIUS_SPAN));
        self.size = spread(rng, DUST_SIZE_MIN, DUST_SIZE_SPAN);
        self.speed = spread(rng, DUST_SPEED_MIN, DUST_SPEED_SPAN);
        self.opacity = spread(rng, DUST_OPACITY_MIN, DUST_OPACITY_SPAN);
        self.hue = spread(rng, DUST_HUE_MIN, DUST_HUE_SPAN);
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.offset.length()
    }

    /// Radial fall plus a fixed sideways push, which reads as an inward spiral.
    pub fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv<'_>, rng: &mut R) {
        let horizon = env.attractor.event_horizon;
        match direction_to(self.offset, DVec2::ZERO) {
            Some((inward, _)) => {
                self.offset += inward * self.speed + inward.perp() * DUST_SWIRL;
            }
            None => {
                self.respawn(rng, horizon);
                return;
            }
        }
        if !self.offset.is_finite() || self.radius() < horizon {
            self.respawn(rng, horizon);
        }
    }

    pub fn draw<P: Painter>(&self, painter: &mut P, env: &FrameEnv<'_>) {
        let fade = env.phase.activation;
        if fade <= 0.0 {
            return;
        }
        let p = env.attractor.position + self.offset;
        painter.circle(p.x, p.y, self.size);
        painter.fill(&Color::hsla(self.hue, 80.0, 60.0, self.opacity * fade).into());
    }
}
