use glam::DVec2;
use rand::Rng;

/// Unit vector and distance from `from` towards `to`.
///
/// Returns `None` when the points coincide or the distance is not finite, so
/// callers never divide by zero.
#[inline]
pub fn direction_to(from: DVec2, to: DVec2) -> Option<(DVec2, f64)> {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 && distance.is_finite() {
        Some((delta / distance, distance))
    } else {
        None
    }
}

/// Linear 0..1 ramp of `x` across `[start, end]`, clamped at both ends.
#[inline]
pub fn ramp(x: f64, start: f64, end: f64) -> f64 {
    ((x - start) / (end - start)).clamp(0.0, 1.0)
}

/// `max(lo, min(hi, v))`. Unlike `f64::clamp` this never panics when the
/// viewport is smaller than the body being clamped; `lo` wins.
#[inline]
pub fn clamp_soft(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

/// `min + U[0,1) * span`.
#[inline]
pub fn spread<R: Rng + ?Sized>(rng: &mut R, min: f64, span: f64) -> f64 {
    min + rng.gen::<f64>() * span
}

/// Uniform in `[-span / 2, span / 2)`.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * span
}

#[inline]
pub fn polar(angle: f64, radius: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin()) * radius
}
