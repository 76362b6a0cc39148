// Host-side tests for the Newton vignette: the apple's fall and the
// fixed-seed decoration.

mod support;

use skyfall_core::newton::{
    apple_y, eased_fall, fall_fraction, impact_intensity, Layout, NewtonScene,
};
use skyfall_core::Viewport;
use support::{Op, RecordingPainter};

const VP: Viewport = Viewport {
    width: 1200.0,
    height: 800.0,
};

#[test]
fn apple_fall_is_quadratic_in_progress() {
    assert_eq!(fall_fraction(0.46), 0.5);
    assert_eq!(eased_fall(0.46), 0.25);
    assert_eq!(eased_fall(0.0), 0.0);
    assert_eq!(eased_fall(0.92), 1.0);
    assert_eq!(eased_fall(1.0), 1.0);
    assert_eq!(eased_fall(-0.3), 0.0);
}

#[test]
fn apple_y_interpolates_between_branch_and_head() {
    assert_eq!(apple_y(0.0, 100.0, 500.0), 100.0);
    assert_eq!(apple_y(0.46, 100.0, 500.0), 200.0);
    assert_eq!(apple_y(0.95, 100.0, 500.0), 500.0);

    let layout = Layout::new(VP);
    assert_eq!(layout.apple(0.0).y, layout.apple_start_y);
    assert_eq!(layout.apple(1.0).y, layout.apple_target_y);
    assert!(layout.apple_start_y < layout.apple_target_y);
    assert!(layout.apple_target_y < layout.head_y);
    assert_eq!(layout.apple(0.3).x, layout.newton_x);
}

#[test]
fn impact_only_near_landing() {
    assert_eq!(impact_intensity(0.0), 0.0);
    assert_eq!(impact_intensity(0.8), 0.0);
    assert!(impact_intensity(0.9) > 0.0);
    assert_eq!(impact_intensity(0.92), 1.0);
    assert_eq!(impact_intensity(1.0), 1.0);
}

#[test]
fn decoration_is_identical_across_instances() {
    let a = NewtonScene::new();
    let b = NewtonScene::default();
    assert_eq!(a.star_count(), 150);

    let mut pa = RecordingPainter::new();
    let mut pb = RecordingPainter::new();
    a.draw(&mut pa, 0.3, 1000.0, VP);
    b.draw(&mut pb, 0.3, 1000.0, VP);
    assert_eq!(pa.ops, pb.ops);
    assert!(pa.balanced());
}

#[test]
fn only_the_apple_follows_scroll() {
    let scene = NewtonScene::new();
    let mut early = RecordingPainter::new();
    let mut late = RecordingPainter::new();
    scene.draw(&mut early, 0.1, 500.0, VP);
    scene.draw(&mut late, 0.5, 500.0, VP);
    assert_eq!(early.ops.len(), late.ops.len());
    let differing = early
        .ops
        .iter()
        .zip(&late.ops)
        .filter(|(a, b)| a != b)
        .count();
    assert!(differing > 0 && differing < 10);
}

#[test]
fn landing_adds_the_impact_caption() {
    let scene = NewtonScene::new();
    let mut painter = RecordingPainter::new();
    scene.draw(&mut painter, 0.2, 0.0, VP);
    assert!(!painter.texts().contains(&"F = mg"));

    painter.reset();
    scene.draw(&mut painter, 1.0, 0.0, VP);
    assert!(painter.texts().contains(&"F = mg"));
    assert!(painter.balanced());
    assert!(painter.count(|op| matches!(op, Op::Clip)) >= 1, "moon shading is clipped");
}
