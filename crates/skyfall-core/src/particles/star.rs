use super::FrameEnv;
use crate::constants::*;
use crate::math::spread;
use crate::paint::{Color, Painter};
use rand::Rng;

/// Background star of the space scene. Immutable once created; only its
/// drawn alpha changes.
#[derive(Clone, Debug)]
pub struct Star {
    /// Position as a fraction of the viewport, so resizes keep the field.
    pub u: f64,
    pub v: f64,
    pub size: f64,
    pub opacity: f64,
    /// Radians per millisecond.
    pub twinkle: f64,
}

impl Star {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            u: rng.gen(),
            v: rng.gen(),
            size: rng.gen::<f64>() * STAR_SIZE_SPAN,
            opacity: spread(rng, STAR_OPACITY_MIN, STAR_OPACITY_SPAN),
            twinkle: spread(rng, STAR_TWINKLE_MIN, STAR_TWINKLE_SPAN),
        }
    }

    /// `0.4..=1.0` brightness multiplier at `now_ms`.
    #[inline]
    pub fn twinkle_at(&self, now_ms: f64) -> f64 {
        (now_ms * self.twinkle).sin() * 0.3 + 0.7
    }

    pub fn draw<P: Painter>(&self, painter: &mut P, env: &FrameEnv<'_>) {
        let t = env.phase.transition;
        if t <= 0.0 {
            return;
        }
        let alpha = self.opacity * self.twinkle_at(env.now_ms) * t;
        painter.circle(self.u * env.viewport.width, self.v * env.viewport.height, self.size);
        painter.fill(&Color::rgba(255, 255, 255, alpha).into());
    }
}
