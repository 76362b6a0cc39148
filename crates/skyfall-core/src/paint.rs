//! Abstract 2D painting surface.
//!
//! Draw routines in this crate only talk to [`Painter`]; the web front-end
//! maps it onto `CanvasRenderingContext2d` and tests record the calls.

use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::TAU;

#[inline]
fn unit(a: f64) -> f64 {
    if a.is_nan() {
        0.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

/// A color whose alpha is always inside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f64, s: f64, l: f64, a: f64 },
}

impl Color {
    pub const TRANSPARENT: Color = Color::Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a: unit(a) }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Color::Rgba {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    #[inline]
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Color::Hsla { h, s, l, a: unit(a) }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
            Color::Hsla { h, s, l, a } => format!("hsla({h}, {s}%, {l}%, {a})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientShape {
    Linear {
        from: DVec2,
        to: DVec2,
    },
    Radial {
        inner: DVec2,
        inner_radius: f64,
        outer: DVec2,
        outer_radius: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub shape: GradientShape,
    pub stops: SmallVec<[ColorStop; 5]>,
}

impl Gradient {
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            shape: GradientShape::Linear {
                from: DVec2::new(x0, y0),
                to: DVec2::new(x1, y1),
            },
            stops: SmallVec::new(),
        }
    }

    /// Concentric radial gradient around `center`.
    pub fn radial(center: DVec2, inner_radius: f64, outer_radius: f64) -> Self {
        Self::radial_offset(center, inner_radius, center, outer_radius)
    }

    pub fn radial_offset(inner: DVec2, inner_radius: f64, outer: DVec2, outer_radius: f64) -> Self {
        Self {
            shape: GradientShape::Radial {
                inner,
                inner_radius: inner_radius.max(0.0),
                outer,
                outer_radius: outer_radius.max(0.0),
            },
            stops: SmallVec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(ColorStop {
            offset: unit(offset),
            color,
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The drawing capabilities the scene needs from a 2D surface.
///
/// Paths follow canvas semantics: `begin_path` starts a new path, the path
/// commands append to it, and `fill`/`stroke`/`clip` consume the current one.
/// `save`/`restore` bracket transform, alpha, shadow and clip state.
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_shadow(&mut self, blur: f64, color: Color);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    );
    fn close_path(&mut self);

    fn fill(&mut self, paint: &Paint);
    fn stroke(&mut self, paint: &Paint, line_width: f64);
    fn clip(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint);
    /// Draws `text` vertically centered on `y`, horizontally per `align`.
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &str,
        align: TextAlign,
        paint: &Paint,
    );

    fn clear_shadow(&mut self) {
        self.set_shadow(0.0, Color::TRANSPARENT);
    }

    /// Starts a new path holding one full circle.
    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius.max(0.0), 0.0, TAU);
    }

    /// Starts a new path holding one full ellipse.
    fn oval(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64, rotation: f64) {
        self.begin_path();
        self.ellipse(x, y, radius_x.max(0.0), radius_y.max(0.0), rotation, 0.0, TAU);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped_on_construction() {
        assert_eq!(Color::rgba(1, 2, 3, 1.7).alpha(), 1.0);
        assert_eq!(Color::hsla(40.0, 80.0, 60.0, -0.2).alpha(), 0.0);
        assert_eq!(Color::rgba(1, 2, 3, f64::NAN).alpha(), 0.0);
    }

    #[test]
    fn css_strings() {
        assert_eq!(Color::hex(0x0a1b2c).to_css(), "rgba(10, 27, 44, 1)");
        assert_eq!(Color::hsla(20.0, 80.0, 60.0, 0.5).to_css(), "hsla(20, 80%, 60%, 0.5)");
    }

    #[test]
    fn gradient_stops_keep_order_and_clamp_offsets() {
        let g = Gradient::linear(0.0, 0.0, 0.0, 10.0)
            .stop(-1.0, Color::TRANSPARENT)
            .stop(2.0, Color::hex(0xffffff));
        let offsets: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 1.0]);
    }
}
