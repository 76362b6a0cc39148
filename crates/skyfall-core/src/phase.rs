//! Scroll offset → scene blend factors.
//!
//! Everything here is a pure function of the page's scroll state and is
//! recomputed each frame; nothing is cached between frames.

use crate::constants::{ACTIVATION_START, CROSSFADE_END, CROSSFADE_START};
use crate::math::ramp;

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Raw scroll state as reported by the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Normalized scroll position in `[0, 1]`.
    ///
    /// A page that cannot scroll, or any non-finite input, maps to 0.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if !range.is_finite() || range <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }
}

/// 1 below the cross-fade window, 0 above it, linear in between.
#[inline]
pub fn fade_out(progress: f64) -> f64 {
    1.0 - transition_in(progress)
}

/// 0 below the cross-fade window, 1 above it, linear in between.
#[inline]
pub fn transition_in(progress: f64) -> f64 {
    ramp(progress, CROSSFADE_START, CROSSFADE_END)
}

/// `max(0, (progress - 0.5) * 2)`: zero up to the midpoint, 1 at full scroll.
#[inline]
pub fn activation(progress: f64) -> f64 {
    ((progress - ACTIVATION_START) * 2.0).max(0.0)
}

/// All blend factors for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub progress: f64,
    pub fade_out: f64,
    pub transition: f64,
    pub activation: f64,
}

impl Phase {
    pub fn from_progress(progress: f64) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            progress,
            fade_out: fade_out(progress),
            transition: transition_in(progress),
            activation: activation(progress),
        }
    }

    pub fn from_scroll(scroll: &ScrollMetrics) -> Self {
        Self::from_progress(scroll.progress())
    }

    /// The attractor and everything orbiting it moves from the midpoint on.
    #[inline]
    pub fn attractor_awake(&self) -> bool {
        self.progress >= ACTIVATION_START
    }
}
