use crate::constants::{AURORA_OVERSCAN, AURORA_PALETTE, AURORA_SAMPLE_STEP};
use crate::math::spread;
use crate::paint::{Color, Gradient, Painter};
use crate::phase::{Phase, Viewport};
use rand::Rng;
use std::f64::consts::TAU;

/// One waving band of the aurora. Only the parameters are stored; the shape
/// is evaluated from the frame time on every draw.
#[derive(Clone, Debug)]
pub struct AuroraRibbon {
    pub index: usize,
    /// Base height as a fraction of the viewport height.
    pub base: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub phase: f64,
    pub thickness: f64,
    pub color: [u8; 3],
}

impl AuroraRibbon {
    pub fn new<R: Rng + ?Sized>(index: usize, total: usize, rng: &mut R) -> Self {
        let total = total.max(1);
        Self {
            index,
            base: 0.08 + (index as f64 / total as f64) * 0.3,
            amplitude: spread(rng, 30.0, 50.0),
            frequency: spread(rng, 0.002, 0.003),
            speed: spread(rng, 0.0004, 0.0006),
            phase: rng.gen::<f64>() * TAU,
            thickness: spread(rng, 60.0, 80.0),
            color: AURORA_PALETTE[rng.gen_range(0..AURORA_PALETTE.len())],
        }
    }

    #[inline]
    fn clock(&self, now_ms: f64) -> f64 {
        now_ms * self.speed + self.phase
    }

    /// Top edge at `x`: a primary sine plus a faster, smaller secondary.
    pub fn top_edge(&self, x: f64, now_ms: f64, viewport: Viewport) -> f64 {
        let t = self.clock(now_ms);
        let primary = (x * self.frequency + t).sin() * self.amplitude;
        let secondary = (x * self.frequency * 1.7 + t * 1.3).sin() * self.amplitude * 0.4;
        viewport.height * self.base + primary + secondary
    }

    /// Bottom edge at `x`: the top edge pushed down by the thickness and a
    /// slow third wave.
    pub fn bottom_edge(&self, x: f64, now_ms: f64, viewport: Viewport) -> f64 {
        let t = self.clock(now_ms);
        let sag = (x * self.frequency * 0.8 + t * 0.7).sin() * 15.0;
        self.top_edge(x, now_ms, viewport) + self.thickness + sag
    }

    pub fn draw<P: Painter>(
        &self,
        painter: &mut P,
        phase: &Phase,
        viewport: Viewport,
        now_ms: f64,
    ) {
        let fade = phase.fade_out;
        if fade <= 0.0 {
            return;
        }
        let span = viewport.width + 2.0 * AURORA_OVERSCAN;
        let samples = (span / AURORA_SAMPLE_STEP).floor() as usize + 1;
        let x_at = |i: usize| -AURORA_OVERSCAN + i as f64 * AURORA_SAMPLE_STEP;

        painter.begin_path();
        painter.move_to(x_at(0), self.top_edge(x_at(0), now_ms, viewport));
        for i in 1..samples {
            let x = x_at(i);
            painter.line_to(x, self.top_edge(x, now_ms, viewport));
        }
        for i in (0..samples).rev() {
            let x = x_at(i);
            painter.line_to(x, self.bottom_edge(x, now_ms, viewport));
        }
        painter.close_path();

        let [r, g, b] = self.color;
        let base_y = viewport.height * self.base;
        let band = Gradient::linear(
            0.0,
            base_y - self.amplitude,
            0.0,
            base_y + self.thickness + self.amplitude,
        )
        .stop(0.0, Color::rgba(r, g, b, 0.0))
        .stop(0.3, Color::rgba(r, g, b, 0.06 * fade))
        .stop(0.5, Color::rgba(r, g, b, 0.1 * fade))
        .stop(0.7, Color::rgba(r, g, b, 0.06 * fade))
        .stop(1.0, Color::rgba(r, g, b, 0.0));
        painter.fill(&band.into());
    }
}
