use crate::paint::{Color, Gradient, Painter};
use crate::phase::{Phase, Viewport};
use glam::DVec2;
use rand::Rng;

/// Per-layer look. Heights and the snow line are fractions of the viewport
/// height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RidgeStyle {
    pub peak_min: f64,
    pub peak_max: f64,
    pub color: [u8; 3],
    pub base_alpha: f64,
    pub snow_line: f64,
    /// Horizontal spacing between generated peaks, in px.
    pub spacing: f64,
}

pub const RIDGE_STYLES: [RidgeStyle; 3] = [
    // far
    RidgeStyle {
        peak_min: 0.15,
        peak_max: 0.3,
        color: [20, 30, 60],
        base_alpha: 0.6,
        snow_line: 0.35,
        spacing: 30.0,
    },
    // mid
    RidgeStyle {
        peak_min: 0.25,
        peak_max: 0.45,
        color: [15, 22, 48],
        base_alpha: 0.75,
        snow_line: 0.4,
        spacing: 50.0,
    },
    // near
    RidgeStyle {
        peak_min: 0.4,
        peak_max: 0.6,
        color: [8, 14, 32],
        base_alpha: 0.9,
        snow_line: 0.5,
        spacing: 70.0,
    },
];

const SNOWY_LAYERS: u8 = 2;
const MAJOR_PEAK_CHANCE: f64 = 0.4;

#[derive(Clone, Debug)]
pub struct MountainRidge {
    pub layer: u8,
    pub style: RidgeStyle,
    points: Vec<DVec2>,
}

impl MountainRidge {
    pub fn new<R: Rng + ?Sized>(layer: u8, rng: &mut R, viewport: Viewport) -> Self {
        let idx = (layer as usize).min(RIDGE_STYLES.len() - 1);
        let mut ridge = Self {
            layer,
            style: RIDGE_STYLES[idx],
            points: Vec::new(),
        };
        ridge.regenerate(rng, viewport);
        ridge
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Lays out a fresh silhouette spanning one segment past each edge.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        let s = &self.style;
        let segments = (w / s.spacing).floor().max(0.0) as usize + 2;
        let seg_width = w / (segments - 1) as f64;
        let (peak_min, peak_max) = (h * s.peak_min, h * s.peak_max);

        self.points.clear();
        self.points.extend((0..=segments).map(|i| {
            let x = i as f64 * seg_width - seg_width;
            let peak = peak_min + rng.gen::<f64>() * (peak_max - peak_min);
            let y = if rng.gen::<f64>() < MAJOR_PEAK_CHANCE {
                h - peak
            } else {
                h - peak * (0.5 + rng.gen::<f64>() * 0.35)
            };
            DVec2::new(x, y)
        }));
    }

    pub fn draw<P: Painter>(&self, painter: &mut P, phase: &Phase, viewport: Viewport) {
        let fade = phase.fade_out;
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return;
        };
        if fade <= 0.0 {
            return;
        }
        let (w, h) = (viewport.width, viewport.height);
        let [r, g, b] = self.style.color;
        let a = self.style.base_alpha * fade;

        // Silhouette
        painter.begin_path();
        painter.move_to(-10.0, h);
        painter.line_to(first.x, first.y);
        ridge_curve(painter, &self.points);
        painter.line_to(last.x, last.y);
        painter.line_to(w + 10.0, h);
        painter.close_path();

        let body = Gradient::linear(0.0, h * 0.15, 0.0, h)
            .stop(
                0.0,
                Color::rgba(r.saturating_add(15), g.saturating_add(20), b.saturating_add(40), a),
            )
            .stop(0.5, Color::rgba(r, g, b, a))
            .stop(
                1.0,
                Color::rgba(
                    r.saturating_sub(5),
                    g.saturating_sub(5),
                    b.saturating_add(10),
                    a * 0.9,
                ),
            );
        painter.fill(&body.into());

        if self.layer < SNOWY_LAYERS {
            self.draw_snow(painter, fade, h);
        }

        // Moonlit ridge line
        painter.begin_path();
        painter.move_to(first.x, first.y);
        ridge_curve(painter, &self.points);
        painter.stroke(&Color::rgba(100, 140, 200, 0.12 * fade).into(), 1.5);
    }

    fn draw_snow<P: Painter>(&self, painter: &mut P, fade: f64, height: f64) {
        let layer = self.layer as f64;
        let depth = 25.0 + layer * 10.0;
        let spread = 15.0 + layer * 5.0;
        let line = height * self.style.snow_line;

        painter.save();
        painter.begin_path();
        for p in self.points.iter().filter(|p| p.y < line) {
            painter.move_to(p.x - spread, p.y + depth);
            painter.quadratic_curve_to(p.x - 8.0, p.y + 3.0, p.x, p.y);
            painter.quadratic_curve_to(p.x + 8.0, p.y + 3.0, p.x + spread, p.y + depth);
        }
        painter.fill(&Color::rgba(200, 210, 230, 0.25 * fade).into());
        painter.restore();
    }
}

/// Quadratic segments through the midpoints of consecutive peaks, each peak
/// acting as the control point.
fn ridge_curve<P: Painter>(painter: &mut P, points: &[DVec2]) {
    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let mid = (prev + curr) * 0.5;
        painter.quadratic_curve_to(prev.x, prev.y, mid.x, mid.y);
    }
}
