//! The alternate "Newton under the tree" vignette.
//!
//! Only the apple listens to scroll progress. Everything else is a function
//! of the frame time and the viewport, with decorative randomness drawn once
//! from a fixed seed so nothing jitters between frames or sessions.

use crate::constants::*;
use crate::paint::{Color, Gradient, Painter, TextAlign};
use crate::phase::Viewport;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Linear fall fraction: reaches 1 at `progress = 0.92`.
#[inline]
pub fn fall_fraction(progress: f64) -> f64 {
    (progress / APPLE_LANDING_PROGRESS).clamp(0.0, 1.0)
}

/// Gravity-style ease-in of the fall fraction.
#[inline]
pub fn eased_fall(progress: f64) -> f64 {
    let f = fall_fraction(progress);
    f * f
}

#[inline]
pub fn apple_y(progress: f64, start_y: f64, target_y: f64) -> f64 {
    start_y + (target_y - start_y) * eased_fall(progress)
}

/// 0 until the apple has covered 95% of the fall, then ramps to 1 on landing.
#[inline]
pub fn impact_intensity(progress: f64) -> f64 {
    let f = fall_fraction(progress);
    if f < IMPACT_START {
        0.0
    } else {
        ((f - IMPACT_START) / (1.0 - IMPACT_START)).min(1.0)
    }
}

const HEAD_RADIUS: f64 = 14.0;
const APPLE_RADIUS: f64 = 8.0;

/// Anchor points of the illustration for one viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub tree_x: f64,
    pub ground_y: f64,
    pub trunk_top: f64,
    pub newton_x: f64,
    pub head_y: f64,
    pub branch_start_y: f64,
    pub branch_end_y: f64,
    pub apple_start_y: f64,
    pub apple_target_y: f64,
}

impl Layout {
    pub fn new(viewport: Viewport) -> Self {
        let tree_x = viewport.width * 0.9;
        let ground_y = viewport.height * 0.88;
        let trunk_top = ground_y - viewport.height * 0.35;
        let branch_start_y = trunk_top + 30.0;
        let branch_end_y = branch_start_y + 15.0;
        let head_y = ground_y - 58.0;
        Self {
            tree_x,
            ground_y,
            trunk_top,
            newton_x: tree_x - 30.0,
            head_y,
            branch_start_y,
            branch_end_y,
            apple_start_y: branch_end_y + 8.0,
            apple_target_y: head_y - HEAD_RADIUS - 6.0,
        }
    }

    pub fn apple(&self, progress: f64) -> DVec2 {
        DVec2::new(
            self.newton_x,
            apple_y(progress, self.apple_start_y, self.apple_target_y),
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct Cloud {
    u: f64,
    v: f64,
    width: f64,
    height: f64,
    speed: f64,
}

const CLOUDS: [Cloud; 3] = [
    Cloud {
        u: 0.15,
        v: 0.12,
        width: 120.0,
        height: 40.0,
        speed: 0.00003,
    },
    Cloud {
        u: 0.55,
        v: 0.08,
        width: 90.0,
        height: 30.0,
        speed: 0.00005,
    },
    Cloud {
        u: 0.8,
        v: 0.18,
        width: 100.0,
        height: 35.0,
        speed: 0.00002,
    },
];

// (dx, dy, rx, ry, rotation, alpha) relative to the moon center
const MARIA: [[f64; 6]; 4] = [
    [-12.0, -8.0, 10.0, 7.0, -0.3, 0.45],
    [8.0, 2.0, 12.0, 8.0, 0.5, 0.25],
    [-4.0, 14.0, 8.0, 5.0, 0.2, 0.35],
    [14.0, -14.0, 6.0, 4.0, -0.4, 0.15],
];

// (dx, dy, r, alpha)
const CRATERS: [[f64; 4]; 12] = [
    [-18.0, -12.0, 3.0, 0.55],
    [-14.0, 2.0, 2.0, 0.2],
    [-20.0, 10.0, 2.5, 0.4],
    [-6.0, -18.0, 2.0, 0.15],
    [4.0, -16.0, 3.5, 0.5],
    [16.0, -6.0, 2.5, 0.25],
    [20.0, 8.0, 2.0, 0.6],
    [8.0, 16.0, 3.0, 0.3],
    [-10.0, 20.0, 2.0, 0.45],
    [0.0, 5.0, 4.0, 0.35],
    [-22.0, -2.0, 1.5, 0.5],
    [12.0, 18.0, 1.5, 0.2],
];

const MOON_RADIUS: f64 = 28.0;

// (dx, dy, r) relative to the top of the trunk
const CANOPY: [[f64; 3]; 8] = [
    [0.0, -25.0, 55.0],
    [-40.0, -10.0, 45.0],
    [40.0, -10.0, 45.0],
    [-25.0, -45.0, 40.0],
    [25.0, -45.0, 40.0],
    [0.0, -55.0, 35.0],
    [-55.0, 5.0, 35.0],
    [55.0, 5.0, 35.0],
];
const CANOPY_COLORS: [u32; 5] = [0x0e3a0c, 0x0c3008, 0x124012, 0x0a2a08, 0x154515];

const GRASS_STEP: f64 = 12.0;
const GRASS_VARIANTS: usize = 256;
const BARK: Color = Color::hex(0x1e1408);

#[derive(Clone, Copy, Debug)]
struct FixedStar {
    u: f64,
    v: f64,
    radius: f64,
}

/// Fixed-seed decoration plus the drawing routine for the vignette.
#[derive(Clone, Debug)]
pub struct NewtonScene {
    stars: Vec<FixedStar>,
    /// Extra blade heights for the two blades drawn per grass tuft.
    grass: Vec<[f64; 2]>,
}

impl Default for NewtonScene {
    fn default() -> Self {
        Self::new()
    }
}

impl NewtonScene {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(NEWTON_DECOR_SEED);
        let stars = (0..NEWTON_STAR_COUNT)
            .map(|_| FixedStar {
                u: rng.gen(),
                v: rng.gen(),
                radius: rng.gen::<f64>() * 1.2 + 0.5,
            })
            .collect();
        let grass = (0..GRASS_VARIANTS)
            .map(|_| [rng.gen::<f64>() * 4.0, rng.gen::<f64>() * 3.0])
            .collect();
        Self { stars, grass }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// Paints the whole vignette back to front.
    pub fn draw<P: Painter>(
        &self,
        painter: &mut P,
        progress: f64,
        now_ms: f64,
        viewport: Viewport,
    ) {
        let layout = Layout::new(viewport);
        draw_sky(painter, viewport);
        self.draw_stars(painter, now_ms, viewport);
        draw_moon(painter, viewport);
        draw_clouds(painter, now_ms, viewport);
        draw_hills(painter, viewport);
        self.draw_ground(painter, viewport);
        draw_tree(painter, &layout);
        draw_figure(painter, &layout);
        draw_apple(painter, layout.apple(progress));
        let impact = impact_intensity(progress);
        if impact > 0.0 {
            draw_impact(painter, &layout, impact);
        }
    }

    fn draw_stars<P: Painter>(&self, painter: &mut P, now_ms: f64, viewport: Viewport) {
        for (i, s) in self.stars.iter().enumerate() {
            let twinkle = 0.5 + 0.5 * (now_ms * 0.002 + i as f64).sin();
            painter.circle(s.u * viewport.width, s.v * viewport.height * 0.6, s.radius);
            painter.fill(&Color::rgba(255, 255, 240, 0.3 + twinkle * 0.7).into());
        }
    }

    fn draw_ground<P: Painter>(&self, painter: &mut P, viewport: Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        let ground_y = h * 0.88;
        painter.fill_rect(0.0, ground_y, w, h * 0.12, &Color::hex(0x081a06).into());

        painter.begin_path();
        let tufts = (w / GRASS_STEP).ceil().max(0.0) as usize;
        for i in 0..tufts {
            let gx = i as f64 * GRASS_STEP;
            let [a, b] = self.grass[i % self.grass.len()];
            painter.move_to(gx, ground_y);
            painter.line_to(gx + 3.0, ground_y - 6.0 - a);
            painter.move_to(gx + 6.0, ground_y);
            painter.line_to(gx + 4.0, ground_y - 5.0 - b);
        }
        painter.stroke(&Color::hex(0x153a12).into(), 2.0);
    }
}

fn draw_sky<P: Painter>(painter: &mut P, viewport: Viewport) {
    let sky = Gradient::linear(0.0, 0.0, 0.0, viewport.height)
        .stop(0.0, Color::hex(0x05051a))
        .stop(0.3, Color::hex(0x0a0f2e))
        .stop(0.6, Color::hex(0x101835))
        .stop(0.8, Color::hex(0x0e1a1e))
        .stop(1.0, Color::hex(0x0a1a0d));
    painter.fill_rect(0.0, 0.0, viewport.width, viewport.height, &sky.into());
}

fn draw_moon<P: Painter>(painter: &mut P, viewport: Viewport) {
    let (mx, my) = (viewport.width * 0.12, viewport.height * 0.15);
    painter.circle(mx, my, MOON_RADIUS);
    painter.fill(&Color::hex(0xf5ecd0).into());

    painter.save();
    painter.circle(mx, my, MOON_RADIUS);
    painter.clip();
    for [dx, dy, rx, ry, rot, a] in MARIA {
        painter.oval(mx + dx, my + dy, rx, ry, rot);
        painter.fill(&Color::rgba(160, 150, 120, a).into());
    }
    for [dx, dy, r, a] in CRATERS {
        painter.circle(mx + dx, my + dy, r);
        painter.fill(&Color::rgba(140, 130, 100, a).into());
        // lit rim, nudged up-left
        painter.circle(mx + dx - 0.5, my + dy - 0.5, r + 0.5);
        painter.stroke(&Color::rgba(255, 250, 230, a * 0.25).into(), 0.5);
    }
    painter.restore();
}

fn draw_clouds<P: Painter>(painter: &mut P, now_ms: f64, viewport: Viewport) {
    let w = viewport.width;
    let puff = Color::rgba(30, 40, 60, 0.4).into();
    for c in CLOUDS {
        let cx = (c.u * w + now_ms * c.speed * w).rem_euclid(w + 200.0) - 100.0;
        let cy = c.v * viewport.height;
        painter.oval(cx, cy, c.width, c.height, 0.0);
        painter.fill(&puff);
        painter.oval(cx - c.width * 0.35, cy + 5.0, c.width * 0.6, c.height * 0.7, 0.0);
        painter.fill(&puff);
        painter.oval(cx + c.width * 0.3, cy + 3.0, c.width * 0.5, c.height * 0.8, 0.0);
        painter.fill(&puff);
    }
}

fn draw_hills<P: Painter>(painter: &mut P, viewport: Viewport) {
    let (w, h) = (viewport.width, viewport.height);
    let base = h * 0.72;

    painter.begin_path();
    painter.move_to(0.0, h);
    painter.quadratic_curve_to(w * 0.25, base - 60.0, w * 0.5, base - 20.0);
    painter.quadratic_curve_to(w * 0.75, base + 20.0, w, base - 40.0);
    painter.line_to(w, h);
    painter.close_path();
    painter.fill(&Color::hex(0x0f2a0c).into());

    painter.begin_path();
    painter.move_to(0.0, h);
    painter.quadratic_curve_to(w * 0.3, base + 10.0, w * 0.55, base + 40.0);
    painter.quadratic_curve_to(w * 0.8, base + 20.0, w, base + 50.0);
    painter.line_to(w, h);
    painter.close_path();
    painter.fill(&Color::hex(0x0a1f08).into());
}

fn draw_tree<P: Painter>(painter: &mut P, l: &Layout) {
    let (tx, base, top) = (l.tree_x, l.ground_y, l.trunk_top);
    let trunk_mid = base - (base - top) * 0.5;

    painter.begin_path();
    painter.move_to(tx - 12.0, base);
    painter.quadratic_curve_to(tx - 14.0, trunk_mid, tx - 8.0, top);
    painter.line_to(tx + 8.0, top);
    painter.quadratic_curve_to(tx + 14.0, trunk_mid, tx + 12.0, base);
    painter.close_path();
    painter.fill(&BARK.into());

    let grain = Color::rgba(30, 18, 8, 0.4).into();
    let mut y = top + 20.0;
    while y < base {
        painter.begin_path();
        painter.move_to(tx - 8.0, y);
        painter.quadratic_curve_to(tx, y - 4.0, tx + 8.0, y);
        painter.stroke(&grain, 1.0);
        y += 18.0;
    }

    // Branch the apple hangs from, ending right above the figure
    painter.begin_path();
    painter.move_to(tx - 5.0, l.branch_start_y);
    painter.quadratic_curve_to(tx - 40.0, l.branch_start_y - 8.0, l.newton_x, l.branch_end_y);
    painter.stroke(&BARK.into(), 6.0);

    painter.begin_path();
    painter.move_to(tx + 5.0, top + 40.0);
    painter.quadratic_curve_to(tx + 50.0, top + 25.0, tx + 75.0, top + 35.0);
    painter.stroke(&BARK.into(), 5.0);

    for (i, [dx, dy, r]) in CANOPY.iter().enumerate() {
        painter.circle(tx + dx, top + dy, *r);
        painter.fill(&Color::hex(CANOPY_COLORS[i % CANOPY_COLORS.len()]).into());
    }
    let leaves = Color::rgba(50, 160, 45, 0.3).into();
    for [dx, dy, r] in CANOPY {
        painter.circle(tx + dx, top + dy, r + 3.0);
        painter.fill(&leaves);
    }
}

fn draw_figure<P: Painter>(painter: &mut P, l: &Layout) {
    let (nx, base, hy) = (l.newton_x, l.ground_y, l.head_y);
    let hr = HEAD_RADIUS;

    // Coat
    painter.begin_path();
    painter.move_to(nx - 22.0, base);
    painter.line_to(nx + 28.0, base);
    painter.line_to(nx + 12.0, base - 42.0);
    painter.line_to(nx - 10.0, base - 42.0);
    painter.close_path();
    painter.fill(&Color::hex(0x2a1a12).into());

    painter.begin_path();
    painter.move_to(nx - 2.0, base - 42.0);
    painter.line_to(nx - 6.0, base - 30.0);
    painter.move_to(nx + 4.0, base - 42.0);
    painter.line_to(nx + 8.0, base - 30.0);
    painter.stroke(&Color::hex(0x3d2a1a).into(), 2.0);

    // Legs stretched out, with a shoe
    painter.begin_path();
    painter.move_to(nx - 16.0, base);
    painter.line_to(nx - 40.0, base - 4.0);
    painter.line_to(nx - 38.0, base + 4.0);
    painter.line_to(nx - 13.0, base + 4.0);
    painter.close_path();
    painter.fill(&Color::hex(0x1a1210).into());
    painter.oval(nx - 40.0, base, 6.0, 5.0, 0.0);
    painter.fill(&Color::hex(0x100c08).into());

    painter.circle(nx, hy, hr);
    painter.fill(&Color::hex(0xd4a574).into());

    // Wig: mirrored side curls, crown and parting
    let wig = Color::hex(0x4a4040).into();
    for side in [-1.0, 1.0] {
        let edge = nx + side * hr;
        painter.begin_path();
        painter.move_to(edge, hy - 4.0);
        painter.quadratic_curve_to(edge + side * 10.0, hy + 8.0, edge + side * 6.0, hy + 20.0);
        painter.quadratic_curve_to(edge + side * 12.0, hy + 30.0, edge + side * 4.0, hy + 40.0);
        painter.quadratic_curve_to(edge - side * 2.0, hy + 38.0, edge - side * 4.0, hy + 28.0);
        painter.quadratic_curve_to(edge + side * 2.0, hy + 18.0, edge - side * 2.0, hy + 6.0);
        painter.close_path();
        painter.fill(&wig);
    }
    painter.begin_path();
    painter.ellipse(nx, hy - hr + 2.0, hr + 4.0, 8.0, 0.0, PI, TAU);
    painter.fill(&wig);
    painter.begin_path();
    painter.move_to(nx, hy - hr + 4.0);
    painter.line_to(nx - 1.0, hy - hr - 2.0);
    painter.line_to(nx + 1.0, hy - hr - 2.0);
    painter.close_path();
    painter.fill(&wig);

    // Face
    painter.begin_path();
    painter.arc(nx - 4.0, hy - 2.0, 1.5, 0.0, TAU);
    painter.move_to(nx + 5.5, hy - 2.0);
    painter.arc(nx + 4.0, hy - 2.0, 1.5, 0.0, TAU);
    painter.fill(&Color::hex(0x2a1a10).into());
    painter.begin_path();
    painter.move_to(nx, hy);
    painter.line_to(nx - 1.0, hy + 3.0);
    painter.stroke(&Color::hex(0x8a6a4a).into(), 1.0);
}

fn draw_apple<P: Painter>(painter: &mut P, apple: DVec2) {
    let (ax, ay) = (apple.x, apple.y);
    let body = Gradient::radial_offset(apple - DVec2::splat(2.0), 1.0, apple, APPLE_RADIUS)
        .stop(0.0, Color::hex(0xe83030))
        .stop(0.7, Color::hex(0xc42020))
        .stop(1.0, Color::hex(0x8b1515));
    painter.circle(ax, ay, APPLE_RADIUS);
    painter.fill(&body.into());

    painter.circle(ax - 2.0, ay - 3.0, 3.0);
    painter.fill(&Color::rgba(255, 255, 255, 0.25).into());

    painter.begin_path();
    painter.move_to(ax, ay - APPLE_RADIUS);
    painter.line_to(ax + 1.0, ay - APPLE_RADIUS - 6.0);
    painter.stroke(&Color::hex(0x3d2817).into(), 2.0);

    painter.oval(ax + 4.0, ay - APPLE_RADIUS - 4.0, 5.0, 2.5, 0.4);
    painter.fill(&Color::hex(0x3a8a30).into());
}

fn draw_impact<P: Painter>(painter: &mut P, l: &Layout, intensity: f64) {
    let (ix, iy) = (l.newton_x, l.apple_target_y);

    let burst = Color::rgba(255, 230, 100, 0.7 * intensity).into();
    let outer = 22.0 + intensity * 10.0;
    for i in 0..8 {
        let angle = i as f64 / 8.0 * TAU - FRAC_PI_2;
        let dir = DVec2::new(angle.cos(), angle.sin());
        painter.begin_path();
        painter.move_to(ix + dir.x * 12.0, iy + dir.y * 12.0);
        painter.line_to(ix + dir.x * outer, iy + dir.y * outer);
        painter.stroke(&burst, 2.0);
    }

    // Thought bubble trailing up from the head
    let (nx, hy) = (l.newton_x, l.head_y);
    let trail = Color::rgba(255, 255, 255, 0.6 * intensity).into();
    painter.circle(nx + 18.0, hy - 20.0, 3.0);
    painter.fill(&trail);
    painter.circle(nx + 32.0, hy - 30.0, 5.0);
    painter.fill(&trail);

    let (bx, by) = (nx + 55.0, hy - 45.0);
    painter.oval(bx, by, 38.0, 22.0, 0.0);
    painter.fill(&Color::rgba(255, 255, 255, 0.75 * intensity).into());
    painter.stroke(&Color::rgba(200, 200, 200, 0.5 * intensity).into(), 1.0);

    painter.fill_text(
        "F = mg",
        bx,
        by,
        "italic 16px \"Courier New\", monospace",
        TextAlign::Center,
        &Color::rgba(30, 30, 30, intensity).into(),
    );
}
