//! The "utopia" layers: sky wash, aurora ribbons, mountain ridges and mist.
//!
//! Geometry here is generated once (and again on resize) and only redrawn per
//! frame, scaled by the phase's fade-out factor.

mod aurora;
mod mountain;

pub use aurora::AuroraRibbon;
pub use mountain::{MountainRidge, RidgeStyle, RIDGE_STYLES};

use crate::paint::{Color, Gradient, Painter};
use crate::phase::{Phase, Viewport};
use rand::Rng;

pub const MIST_HEIGHT: f64 = 100.0;

pub fn generate_mountains<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Vec<MountainRidge> {
    (0..RIDGE_STYLES.len() as u8)
        .map(|layer| MountainRidge::new(layer, rng, viewport))
        .collect()
}

pub fn generate_aurora<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<AuroraRibbon> {
    (0..count).map(|i| AuroraRibbon::new(i, count, rng)).collect()
}

/// Night-sky wash fading out with the parallax scene, then the deep-space
/// radial wash fading in over it.
pub fn draw_sky<P: Painter>(painter: &mut P, phase: &Phase, viewport: Viewport) {
    let (w, h) = (viewport.width, viewport.height);
    let night = 1.0 - phase.transition;
    if night > 0.0 {
        let sky = Gradient::linear(0.0, 0.0, 0.0, h)
            .stop(0.0, Color::rgba(5, 10, 30, 0.4 * night))
            .stop(0.3, Color::rgba(10, 20, 50, 0.3 * night))
            .stop(0.6, Color::rgba(15, 25, 55, 0.25 * night))
            .stop(1.0, Color::rgba(8, 12, 35, 0.35 * night));
        painter.fill_rect(0.0, 0.0, w, h, &sky.into());
    }
    let space = phase.transition;
    if space > 0.0 {
        let wash = Gradient::radial(viewport.center(), 0.0, h)
            .stop(0.0, Color::rgba(10, 10, 30, space))
            .stop(1.0, Color::rgba(0, 0, 0, space));
        painter.fill_rect(0.0, 0.0, w, h, &wash.into());
    }
}

/// Low mist glow hugging the bottom of the mountains.
pub fn draw_mist<P: Painter>(painter: &mut P, phase: &Phase, viewport: Viewport) {
    let night = 1.0 - phase.transition;
    if night <= 0.0 {
        return;
    }
    let top = viewport.height - MIST_HEIGHT;
    let mist = Gradient::linear(0.0, top, 0.0, viewport.height)
        .stop(0.0, Color::TRANSPARENT)
        .stop(0.4, Color::rgba(20, 40, 80, 0.1 * night))
        .stop(0.7, Color::rgba(15, 30, 60, 0.2 * night))
        .stop(1.0, Color::rgba(10, 15, 40, 0.3 * night));
    painter.fill_rect(0.0, top, viewport.width, MIST_HEIGHT, &mist.into());
}
