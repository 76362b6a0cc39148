use super::FrameEnv;
use crate::constants::*;
use crate::math::{jitter, spread};
use crate::paint::{Color, Gradient, Painter};
use crate::phase::Viewport;
use glam::DVec2;
use rand::Rng;

/// Opacity of a shooting star `life` ticks into a `max_life` tick flight:
/// ramps up over the first 15 ticks, down over the last 20.
pub fn envelope(life: f64, max_life: f64) -> f64 {
    let a = if life < SHOOTING_FADE_IN_TICKS {
        life / SHOOTING_FADE_IN_TICKS
    } else if life > max_life - SHOOTING_FADE_OUT_TICKS {
        (max_life - life) / SHOOTING_FADE_OUT_TICKS
    } else {
        1.0
    };
    a.clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub position: DVec2,
    pub angle: f64,
    pub speed: f64,
    pub length: f64,
    pub life: f64,
    pub max_life: f64,
    pub opacity: f64,
    pub active: bool,
}

impl ShootingStar {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let mut s = Self {
            position: DVec2::ZERO,
            angle: SHOOTING_ANGLE,
            speed: 0.0,
            length: 0.0,
            life: 0.0,
            max_life: 0.0,
            opacity: 0.0,
            active: false,
        };
        s.reset(rng, viewport);
        s
    }

    /// Fresh trajectory from the upper part of the sky. Most resets start
    /// idle and wait for a later activation roll.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        self.position = DVec2::new(
            rng.gen::<f64>() * viewport.width * 1.5,
            rng.gen::<f64>() * viewport.height * 0.4,
        );
        self.length = spread(rng, SHOOTING_LENGTH_MIN, SHOOTING_LENGTH_SPAN);
        self.speed = spread(rng, SHOOTING_SPEED_MIN, SHOOTING_SPEED_SPAN);
        self.angle = SHOOTING_ANGLE + jitter(rng, SHOOTING_ANGLE_JITTER);
        self.opacity = 0.0;
        self.life = 0.0;
        self.max_life = spread(rng, SHOOTING_LIFE_MIN, SHOOTING_LIFE_SPAN);
        self.active = rng.gen::<f64>() < SHOOTING_ACTIVE_ON_RESET;
    }

    #[inline]
    fn heading(&self) -> DVec2 {
        DVec2::new(self.angle.cos(), self.angle.sin())
    }

    pub fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv<'_>, rng: &mut R) {
        if !self.active {
            if rng.gen::<f64>() < SHOOTING_ACTIVATE_PER_TICK {
                self.active = true;
            }
            return;
        }
        self.life += 1.0;
        self.position += self.heading() * self.speed;
        self.opacity = envelope(self.life, self.max_life);

        if self.life > self.max_life
            || self.position.x < SHOOTING_EXIT_LEFT
            || self.position.y > env.viewport.height
            || !self.position.is_finite()
        {
            self.reset(rng, env.viewport);
        }
    }

    pub fn draw<P: Painter>(&self, painter: &mut P, env: &FrameEnv<'_>) {
        let fade = env.phase.fade_out;
        if fade <= 0.0 || !self.active || self.opacity <= 0.0 {
            return;
        }
        let head = self.position;
        let tail = head - self.heading() * self.length;
        let a = self.opacity * fade;

        let trail = Gradient::linear(head.x, head.y, tail.x, tail.y)
            .stop(0.0, Color::rgba(255, 255, 255, a * 0.8))
            .stop(0.3, Color::rgba(180, 220, 255, a * 0.4))
            .stop(1.0, Color::rgba(100, 180, 255, 0.0));
        painter.begin_path();
        painter.move_to(head.x, head.y);
        painter.line_to(tail.x, tail.y);
        painter.stroke(&trail.into(), 2.0);

        painter.circle(head.x, head.y, 2.0);
        painter.fill(&Color::rgba(255, 255, 255, a * 0.9).into());
    }
}
