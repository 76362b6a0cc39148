// Host-side tests for mountains, aurora and the sky washes.

mod support;

use rand::rngs::StdRng;
use rand::SeedableRng;
use skyfall_core::parallax::{self, AuroraRibbon, MountainRidge, RIDGE_STYLES};
use skyfall_core::{Phase, Viewport};
use support::{Op, RecordingPainter};

const VP: Viewport = Viewport {
    width: 1200.0,
    height: 800.0,
};

#[test]
fn three_ridges_far_to_near() {
    let mut rng = StdRng::seed_from_u64(1);
    let ridges = parallax::generate_mountains(&mut rng, VP);
    assert_eq!(ridges.len(), 3);
    for (i, r) in ridges.iter().enumerate() {
        assert_eq!(r.layer as usize, i);
        assert_eq!(r.style, RIDGE_STYLES[i]);
    }
    assert!(RIDGE_STYLES[0].spacing < RIDGE_STYLES[2].spacing);
}

#[test]
fn ridge_points_span_past_both_edges() {
    let mut rng = StdRng::seed_from_u64(2);
    for layer in 0..3u8 {
        let ridge = MountainRidge::new(layer, &mut rng, VP);
        let pts = ridge.points();
        let first = pts.first().map(|p| p.x).unwrap_or(0.0);
        let last = pts.last().map(|p| p.x).unwrap_or(0.0);
        assert!(first < 0.0, "layer {layer} starts at {first}");
        assert!(last >= VP.width - 1e-9, "layer {layer} ends at {last}");
        assert!(pts.windows(2).all(|w| w[0].x < w[1].x));

        let style = ridge.style;
        for p in pts {
            assert!(p.y <= VP.height);
            assert!(p.y >= VP.height - VP.height * style.peak_max - 1e-9);
        }
    }
}

#[test]
fn regenerate_follows_the_new_width() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut ridge = MountainRidge::new(1, &mut rng, VP);
    let wide = ridge.points().len();
    ridge.regenerate(&mut rng, Viewport::new(400.0, 800.0));
    assert!(ridge.points().len() < wide);
    let last = ridge.points().last().map(|p| p.x).unwrap_or(0.0);
    assert!(last >= 400.0 - 1e-9);
}

#[test]
fn mountains_fade_with_the_parallax_scene() {
    let mut rng = StdRng::seed_from_u64(4);
    let ridge = MountainRidge::new(0, &mut rng, VP);
    let mut painter = RecordingPainter::new();
    ridge.draw(&mut painter, &Phase::from_progress(0.7), VP);
    assert!(painter.ops.is_empty());

    ridge.draw(&mut painter, &Phase::from_progress(0.1), VP);
    assert!(painter.balanced());
    assert!(painter.count(|op| matches!(op, Op::Fill(_))) >= 2, "body and snow");
    assert_eq!(painter.count(|op| matches!(op, Op::Stroke(..))), 1);
}

#[test]
fn near_ridge_has_no_snow() {
    let mut rng = StdRng::seed_from_u64(5);
    let ridge = MountainRidge::new(2, &mut rng, VP);
    let mut painter = RecordingPainter::new();
    ridge.draw(&mut painter, &Phase::from_progress(0.0), VP);
    assert_eq!(painter.count(|op| matches!(op, Op::Fill(_))), 1);
    assert_eq!(painter.count(|op| matches!(op, Op::Save)), 0);
}

#[test]
fn aurora_bands_stack_downwards() {
    let mut rng = StdRng::seed_from_u64(6);
    let ribbons = parallax::generate_aurora(&mut rng, 5);
    assert_eq!(ribbons.len(), 5);
    assert!(ribbons.windows(2).all(|w| w[0].base < w[1].base));
    for r in &ribbons {
        for x in [0.0, 300.0, 1199.0] {
            let top = r.top_edge(x, 5000.0, VP);
            let bottom = r.bottom_edge(x, 5000.0, VP);
            assert!(bottom > top, "thickness keeps bands open");
        }
    }
}

#[test]
fn aurora_shape_depends_only_on_time() {
    let mut rng = StdRng::seed_from_u64(7);
    let r = AuroraRibbon::new(0, 5, &mut rng);
    assert_eq!(r.top_edge(100.0, 42.0, VP), r.top_edge(100.0, 42.0, VP));
    assert_ne!(r.top_edge(100.0, 0.0, VP), r.top_edge(100.0, 10_000.0, VP));
}

#[test]
fn aurora_draws_one_closed_band() {
    let mut rng = StdRng::seed_from_u64(8);
    let r = AuroraRibbon::new(2, 5, &mut rng);
    let mut painter = RecordingPainter::new();
    r.draw(&mut painter, &Phase::from_progress(0.0), VP, 0.0);
    assert_eq!(painter.count(|op| matches!(op, Op::ClosePath)), 1);
    assert_eq!(painter.count(|op| matches!(op, Op::Fill(_))), 1);

    painter.reset();
    r.draw(&mut painter, &Phase::from_progress(1.0), VP, 0.0);
    assert!(painter.ops.is_empty());
}

#[test]
fn sky_washes_crossfade() {
    let rects = |progress: f64| {
        let mut painter = RecordingPainter::new();
        parallax::draw_sky(&mut painter, &Phase::from_progress(progress), VP);
        painter.count(|op| matches!(op, Op::FillRect(..)))
    };
    assert_eq!(rects(0.0), 1);
    assert_eq!(rects(0.5), 2);
    assert_eq!(rects(1.0), 1);

    let mut painter = RecordingPainter::new();
    parallax::draw_mist(&mut painter, &Phase::from_progress(1.0), VP);
    assert!(painter.ops.is_empty());
    parallax::draw_mist(&mut painter, &Phase::from_progress(0.0), VP);
    assert_eq!(painter.count(|op| matches!(op, Op::FillRect(..))), 1);
}
