//! Platform-free core of the skyfall scroll background.
//!
//! Nothing in here touches the DOM: the web front-end feeds in viewport size,
//! scroll state and a timestamp each frame and supplies a [`Painter`].

pub mod attractor;
pub mod config;
pub mod constants;
pub mod math;
pub mod newton;
pub mod paint;
pub mod parallax;
pub mod particles;
pub mod phase;
pub mod scene;

pub use attractor::Attractor;
pub use config::{ConfigError, SceneConfig};
pub use paint::{Color, Gradient, GradientShape, Paint, Painter, TextAlign};
pub use phase::{Phase, ScrollMetrics, Viewport};
pub use scene::{FrameStats, Scene};
