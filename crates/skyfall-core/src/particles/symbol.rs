use super::FrameEnv;
use crate::attractor::Attractor;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::math::{direction_to, jitter, spread};
use crate::paint::{Color, Painter, TextAlign};
use crate::phase::Viewport;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Capped inverse-square pull plus per-tick damping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    pub strength: f64,
    pub cap: f64,
    pub active_damping: f64,
    pub dormant_damping: f64,
    pub margin: f64,
}

impl From<&SceneConfig> for Gravity {
    fn from(c: &SceneConfig) -> Self {
        Self {
            strength: c.gravity_strength,
            cap: c.gravity_cap,
            active_damping: c.active_damping,
            dormant_damping: c.dormant_damping,
            margin: c.respawn_margin,
        }
    }
}

/// One active-regime velocity step: damp, then accelerate towards `center`
/// by `min(cap, strength / d^2)`. Coincident points get no pull.
#[inline]
pub fn gravity_step(velocity: DVec2, position: DVec2, center: DVec2, gravity: &Gravity) -> DVec2 {
    let damped = velocity * gravity.active_damping;
    match direction_to(position, center) {
        Some((dir, d)) => damped + dir * (gravity.strength / (d * d)).min(gravity.cap),
        None => damped,
    }
}

/// A math glyph drifting around the page and, later, falling into the
/// attractor.
#[derive(Clone, Debug)]
pub struct SymbolParticle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub glyph: &'static str,
    pub size: f64,
    pub opacity: f64,
    pub rotation: f64,
    pub spin: f64,
    font: String,
}

impl SymbolParticle {
    /// First spawn: anywhere inside the viewport.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let position = DVec2::new(
            rng.gen::<f64>() * viewport.width,
            rng.gen::<f64>() * viewport.height,
        );
        let mut s = Self {
            position,
            velocity: DVec2::ZERO,
            glyph: MATH_SYMBOLS[0],
            size: SYMBOL_SIZE_MIN,
            opacity: 1.0,
            rotation: 0.0,
            spin: 0.0,
            font: String::new(),
        };
        s.restyle(rng);
        s.velocity = random_drift(rng);
        s
    }

    /// Re-enters from a random edge, just outside the viewport, with a new
    /// look and a small random velocity.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: Viewport,
        attractor: &Attractor,
    ) {
        let (w, h) = (viewport.width, viewport.height);
        self.position = match rng.gen_range(0..4) {
            0 => DVec2::new(rng.gen::<f64>() * w, -EDGE_SPAWN_OFFSET),
            1 => DVec2::new(w + EDGE_SPAWN_OFFSET, rng.gen::<f64>() * h),
            2 => DVec2::new(rng.gen::<f64>() * w, h + EDGE_SPAWN_OFFSET),
            _ => DVec2::new(-EDGE_SPAWN_OFFSET, rng.gen::<f64>() * h),
        };
        // Only reachable on viewports too small to hold the attractor.
        if attractor.absorbs(self.position) {
            let out = direction_to(attractor.position, self.position)
                .map(|(dir, _)| dir)
                .unwrap_or(DVec2::X);
            self.position =
                attractor.position + out * (attractor.event_horizon + EDGE_SPAWN_OFFSET);
        }
        self.velocity = random_drift(rng);
        self.restyle(rng);
    }

    fn restyle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.glyph = MATH_SYMBOLS[rng.gen_range(0..MATH_SYMBOLS.len())];
        self.size = spread(rng, SYMBOL_SIZE_MIN, SYMBOL_SIZE_SPAN);
        self.opacity = spread(rng, SYMBOL_OPACITY_MIN, SYMBOL_OPACITY_SPAN);
        self.rotation = rng.gen::<f64>() * TAU;
        self.spin = jitter(rng, SYMBOL_SPIN_SPAN);
        self.font = format!("{:.1}px {}", self.size, SYMBOL_FONT_FAMILY);
    }

    pub fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv<'_>, rng: &mut R) {
        let g = &env.gravity;
        let vp = env.viewport;
        if env.phase.attractor_awake() {
            let attractor = env.attractor;
            self.velocity = gravity_step(self.velocity, self.position, attractor.position, g);
            self.position += self.velocity;

            if attractor.absorbs(self.position) {
                log::trace!("symbol {} absorbed", self.glyph);
                self.respawn(rng, vp, attractor);
            } else if self.position.x < -g.margin
                || self.position.x > vp.width + g.margin
                || self.position.y < -g.margin
                || self.position.y > vp.height + g.margin
            {
                self.respawn(rng, vp, attractor);
            }
        } else {
            self.velocity *= g.dormant_damping;
            self.position += self.velocity;
            if self.position.x < 0.0 {
                self.velocity.x = self.velocity.x.abs();
            } else if self.position.x > vp.width {
                self.velocity.x = -self.velocity.x.abs();
            }
            if self.position.y < 0.0 {
                self.velocity.y = self.velocity.y.abs();
            } else if self.position.y > vp.height {
                self.velocity.y = -self.velocity.y.abs();
            }
        }
        self.rotation = (self.rotation + self.spin) % TAU;

        if !self.position.is_finite() || !self.velocity.is_finite() || !self.rotation.is_finite() {
            log::debug!("symbol state went non-finite, respawning");
            self.respawn(rng, vp, env.attractor);
            self.rotation = 0.0;
        }
    }

    pub fn draw<P: Painter>(&self, painter: &mut P) {
        painter.save();
        painter.translate(self.position.x, self.position.y);
        painter.rotate(self.rotation);
        painter.set_shadow(SYMBOL_GLOW_BLUR, Color::rgba(100, 181, 246, 0.5));
        painter.fill_text(
            self.glyph,
            0.0,
            0.0,
            &self.font,
            TextAlign::Center,
            &Color::rgba(100, 181, 246, self.opacity).into(),
        );
        painter.restore();
    }
}

fn random_drift<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
    DVec2::new(
        jitter(rng, SPAWN_VELOCITY_SPAN),
        jitter(rng, SPAWN_VELOCITY_SPAN),
    )
}
