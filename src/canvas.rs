//! [`Painter`] backed by a browser 2D canvas context.

use skyfall_core::{Color, Gradient, GradientShape, Paint, Painter, TextAlign};
use web_sys as web;

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, gradient: &Gradient) -> Option<web::CanvasGradient> {
        let g = match gradient.shape {
            GradientShape::Linear { from, to } => {
                self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y)
            }
            GradientShape::Radial {
                inner,
                inner_radius,
                outer,
                outer_radius,
            } => match self.ctx.create_radial_gradient(
                inner.x,
                inner.y,
                inner_radius,
                outer.x,
                outer.y,
                outer_radius,
            ) {
                Ok(g) => g,
                Err(e) => {
                    log::debug!("[canvas] radial gradient rejected: {:?}", e);
                    return None;
                }
            },
        };
        for stop in &gradient.stops {
            _ = g.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        Some(g)
    }

    fn apply_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_css()),
            Paint::Gradient(g) => {
                if let Some(g) = self.gradient(g) {
                    self.ctx.set_fill_style_canvas_gradient(&g);
                }
            }
        }
    }

    fn apply_stroke(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_stroke_style_str(&c.to_css()),
            Paint::Gradient(g) => {
                if let Some(g) = self.gradient(g) {
                    self.ctx.set_stroke_style_canvas_gradient(&g);
                }
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        _ = self.ctx.rotate(angle);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0));
    }

    fn set_shadow(&mut self, blur: f64, color: Color) {
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(&color.to_css());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cx, cy, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        _ = self.ctx.arc(x, y, radius.max(0.0), start, end);
    }

    #[allow(clippy::too_many_arguments)]
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64, start: f64, end: f64) {
        _ = self
            .ctx
            .ellipse(x, y, rx.max(0.0), ry.max(0.0), rotation, start, end);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.fill();
    }

    fn stroke(&mut self, paint: &Paint, width: f64) {
        self.apply_stroke(paint);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &str,
        align: TextAlign,
        paint: &Paint,
    ) {
        self.ctx.set_font(font);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline("middle");
        self.apply_fill(paint);
        _ = self.ctx.fill_text(text, x, y);
    }
}
