//! Pooled particle entities.
//!
//! The set of kinds is closed, so they share one [`Entity`] enum rather than
//! a trait object. Every kind exposes the same `update` / `draw` pair and
//! reads the rest of the world through a [`FrameEnv`].

mod dust;
mod shooting_star;
mod star;
mod symbol;

pub use dust::DustParticle;
pub use shooting_star::{envelope, ShootingStar};
pub use star::Star;
pub use symbol::{gravity_step, Gravity, SymbolParticle};

use crate::attractor::Attractor;
use crate::paint::Painter;
use crate::phase::{Phase, Viewport};
use rand::Rng;

/// Read-only view of the world handed to each entity for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameEnv<'a> {
    pub phase: Phase,
    /// Wall-clock milliseconds, sampled once per frame.
    pub now_ms: f64,
    pub viewport: Viewport,
    pub attractor: &'a Attractor,
    pub gravity: Gravity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Symbol,
    Dust,
    Star,
    ShootingStar,
}

#[derive(Clone, Debug)]
pub enum Entity {
    Symbol(SymbolParticle),
    Dust(DustParticle),
    Star(Star),
    ShootingStar(ShootingStar),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Symbol(_) => EntityKind::Symbol,
            Entity::Dust(_) => EntityKind::Dust,
            Entity::Star(_) => EntityKind::Star,
            Entity::ShootingStar(_) => EntityKind::ShootingStar,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv<'_>, rng: &mut R) {
        match self {
            Entity::Symbol(s) => s.update(env, rng),
            Entity::Dust(d) => d.update(env, rng),
            Entity::Star(_) => {}
            Entity::ShootingStar(s) => s.update(env, rng),
        }
    }

    pub fn draw<P: Painter>(&self, painter: &mut P, env: &FrameEnv<'_>) {
        match self {
            Entity::Symbol(s) => s.draw(painter),
            Entity::Dust(d) => d.draw(painter, env),
            Entity::Star(s) => s.draw(painter, env),
            Entity::ShootingStar(s) => s.draw(painter, env),
        }
    }
}
