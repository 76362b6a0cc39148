// Recording painter shared by the host-side tests. Every call is kept in
// order so tests can assert on what a frame actually drew.

#![allow(dead_code)]

use skyfall_core::{Color, Paint, Painter, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    GlobalAlpha(f64),
    Shadow(f64, Color),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Quad(f64, f64, f64, f64),
    Arc(f64, f64, f64),
    Ellipse(f64, f64, f64, f64),
    ClosePath,
    Fill(Paint),
    Stroke(Paint, f64),
    Clip,
    FillRect(f64, f64, f64, f64, Paint),
    Text(String, f64, f64),
}

#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
    depth: i32,
    pub max_depth: i32,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, _, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Save/restore pairs must balance by the end of a frame.
    pub fn balanced(&self) -> bool {
        self.depth == 0
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear(width, height));
    }
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.depth -= 1;
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn rotate(&mut self, radians: f64) {
        self.ops.push(Op::Rotate(radians));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::GlobalAlpha(alpha));
    }
    fn set_shadow(&mut self, blur: f64, color: Color) {
        self.ops.push(Op::Shadow(blur, color));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.ops.push(Op::Quad(cpx, cpy, x, y));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
        self.ops.push(Op::Arc(x, y, radius));
    }
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        _rotation: f64,
        _start: f64,
        _end: f64,
    ) {
        self.ops.push(Op::Ellipse(x, y, radius_x, radius_y));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn fill(&mut self, paint: &Paint) {
        self.ops.push(Op::Fill(paint.clone()));
    }
    fn stroke(&mut self, paint: &Paint, line_width: f64) {
        self.ops.push(Op::Stroke(paint.clone(), line_width));
    }
    fn clip(&mut self) {
        self.ops.push(Op::Clip);
    }
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
        self.ops.push(Op::FillRect(x, y, width, height, paint.clone()));
    }
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        _font: &str,
        _align: TextAlign,
        _paint: &Paint,
    ) {
        self.ops.push(Op::Text(text.to_string(), x, y));
    }
}
