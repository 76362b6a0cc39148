// Host-side tests for the frame driver: mode exclusivity, resize and
// configuration rejection.

mod support;

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skyfall_core::constants::LENSING_HALO_SCALE;
use skyfall_core::parallax::MIST_HEIGHT;
use skyfall_core::{
    Color, ConfigError, FrameStats, GradientShape, Paint, Phase, Scene, SceneConfig,
    ScrollMetrics, Viewport,
};
use support::{Op, RecordingPainter};

const VP: Viewport = Viewport {
    width: 1200.0,
    height: 800.0,
};

fn scene() -> Scene {
    Scene::new(SceneConfig::default(), VP, StdRng::seed_from_u64(42)).expect("default config")
}

fn symbol_positions(scene: &Scene) -> Vec<DVec2> {
    scene.symbols().map(|s| s.position).collect()
}

#[test]
fn default_config_validates() {
    assert_eq!(SceneConfig::default().validate(), Ok(()));
    let s = scene();
    assert_eq!(s.symbols().count(), 60);
    assert_eq!(s.dust().count(), 200);
    assert_eq!(s.mountains().len(), 3);
    assert_eq!(s.aurora().len(), 5);
    assert_eq!(s.config().star_count, 150);
    assert_eq!(s.newton().star_count(), 150);
}

#[test]
fn bad_configs_are_rejected() {
    let inverted = SceneConfig {
        event_horizon: 200.0,
        core_radius: 130.0,
        ..SceneConfig::default()
    };
    assert!(matches!(
        Scene::new(inverted, VP, StdRng::seed_from_u64(1)),
        Err(ConfigError::RadiusOrder { .. })
    ));

    let damping = SceneConfig {
        active_damping: 1.0,
        ..SceneConfig::default()
    };
    assert_eq!(
        damping.validate(),
        Err(ConfigError::Damping {
            name: "active",
            value: 1.0
        })
    );

    let nan = SceneConfig {
        event_horizon: f64::NAN,
        ..SceneConfig::default()
    };
    assert!(matches!(nan.validate(), Err(ConfigError::NonPositiveHorizon(_))));

    let no_aurora = SceneConfig {
        aurora_count: 0,
        ..SceneConfig::default()
    };
    assert_eq!(no_aurora.validate(), Err(ConfigError::NoAurora));
}

#[test]
fn starts_in_the_newton_vignette() {
    let s = scene();
    assert!(s.is_alternate());
}

#[test]
fn alternate_mode_freezes_the_parallax_world() {
    let mut s = scene();
    let symbols = symbol_positions(&s);
    let attractor = s.attractor().position;
    let disk = s.attractor().disk_phase();

    let mut painter = RecordingPainter::new();
    for i in 0..50 {
        let stats = s.frame_at(&mut painter, Phase::from_progress(1.0), i as f64 * 16.0);
        assert_eq!(
            stats,
            FrameStats {
                alternate: true,
                ..FrameStats::default()
            }
        );
    }
    assert_eq!(symbol_positions(&s), symbols);
    assert_eq!(s.attractor().position, attractor);
    assert_eq!(s.attractor().disk_phase(), disk);
    assert!(!painter.texts().is_empty(), "vignette still painted");
}

#[test]
fn parallax_mode_runs_every_layer() {
    let mut s = scene();
    s.set_alternate(false);
    let before = s.attractor().position;

    let mut painter = RecordingPainter::new();
    let stats = s.frame_at(&mut painter, Phase::from_progress(1.0), 0.0);
    assert!(!stats.alternate);
    assert_eq!(stats.attractor_updates, 1);
    assert_eq!(stats.attractor_draws, 1);
    assert_eq!(stats.mountain_draws, 3);
    assert_eq!(stats.aurora_draws, 5);
    // 4 shooting stars + 200 dust + 60 symbols
    assert_eq!(stats.entity_updates, 264);
    assert_ne!(s.attractor().position, before);
    assert!(painter.balanced());
    assert!(matches!(painter.ops.first(), Some(Op::Clear(w, h)) if *w == 1200.0 && *h == 800.0));
}

#[test]
fn dust_waits_for_the_attractor() {
    let mut s = scene();
    s.set_alternate(false);
    let mut painter = RecordingPainter::new();
    let stats = s.frame_at(&mut painter, Phase::from_progress(0.3), 0.0);
    assert_eq!(stats.entity_updates, 4 + 60);
    assert_eq!(stats.attractor_draws, 0, "a dormant attractor paints nothing");
    assert_eq!(painter.count(|op| matches!(op, Op::Ellipse(..))), 0);
    assert_eq!(s.attractor().position, VP.center());
}

#[test]
fn toggle_flips_modes() {
    let mut s = scene();
    assert!(!s.toggle_alternate());
    assert!(!s.is_alternate());
    assert!(s.toggle_alternate());
}

#[test]
fn scroll_metrics_drive_the_phase() {
    let mut s = scene();
    s.set_alternate(false);
    let top = ScrollMetrics {
        offset: 0.0,
        document_height: 4000.0,
        viewport_height: 800.0,
    };
    let mut painter = RecordingPainter::new();
    s.frame(&mut painter, &top, 0.0);
    assert_eq!(s.attractor().position, VP.center(), "dormant at the top of the page");

    let bottom = ScrollMetrics {
        offset: 3200.0,
        ..top
    };
    s.frame(&mut painter, &bottom, 16.0);
    assert_ne!(s.attractor().position, VP.center());
}

#[test]
fn resize_regenerates_and_confines() {
    let mut s = scene();
    s.attractor_mut().position = DVec2::new(1100.0, 700.0);
    let before = s.mountains()[0].points().len();

    let small = Viewport::new(500.0, 400.0);
    s.resize(small);
    assert_eq!(s.viewport(), small);
    assert!(s.mountains()[0].points().len() < before);
    let eh = s.attractor().event_horizon;
    assert_eq!(s.attractor().position, DVec2::new(500.0 - eh, 400.0 - eh));
}

#[test]
fn resize_to_same_size_is_a_no_op() {
    let mut s = scene();
    let points: Vec<DVec2> = s.mountains()[1].points().to_vec();
    s.resize(VP);
    assert_eq!(s.mountains()[1].points(), points.as_slice());
}

#[test]
fn symbols_stay_finite_over_a_long_scroll() {
    let mut s = scene();
    s.set_alternate(false);
    let mut painter = RecordingPainter::new();
    for i in 0..600 {
        let progress = (i as f64 / 300.0).min(1.0);
        painter.reset();
        s.frame_at(&mut painter, Phase::from_progress(progress), i as f64 * 16.0);
    }
    let eh = s.attractor().event_horizon;
    let center = s.attractor().position;
    for sym in s.symbols() {
        assert!(sym.position.is_finite() && sym.velocity.is_finite());
        assert!(sym.position.distance(center) >= eh);
    }
}

fn gradient_fill(op: &Op, stops: usize) -> bool {
    matches!(op, Op::Fill(Paint::Gradient(g))
        if g.stops.len() == stops && matches!(g.shape, GradientShape::Linear { .. }))
}

#[test]
fn layers_paint_back_to_front() {
    let mut s = scene();
    s.set_alternate(false);
    let halo_radius = s.attractor().disk_radius * LENSING_HALO_SCALE;
    let mist_top = VP.height - MIST_HEIGHT;
    // Everything is visible here: parallax half faded, attractor just awake.
    let phase = Phase::from_progress(0.55);

    let mut painter = RecordingPainter::new();
    let mut saw_trail = false;
    for i in 0..3000 {
        painter.reset();
        s.frame_at(&mut painter, phase, i as f64 * 16.0);
        let ops = &painter.ops;
        let first = |pred: &dyn Fn(&Op) -> bool| ops.iter().position(pred);
        let last = |pred: &dyn Fn(&Op) -> bool| ops.iter().rposition(pred);

        let sky = first(&|op| matches!(op, Op::FillRect(x, y, ..) if *x == 0.0 && *y == 0.0));
        let aurora = (first(&|op| gradient_fill(op, 5)), last(&|op| gradient_fill(op, 5)));
        let ridges = (first(&|op| gradient_fill(op, 3)), last(&|op| gradient_fill(op, 3)));
        let mist = first(&|op| matches!(op, Op::FillRect(_, y, ..) if *y == mist_top));
        let halo = first(&|op| matches!(op, Op::Arc(_, _, r) if *r == halo_radius));
        let dust = (
            first(&|op| matches!(op, Op::Fill(Paint::Solid(Color::Hsla { .. })))),
            last(&|op| matches!(op, Op::Fill(Paint::Solid(Color::Hsla { .. })))),
        );
        let text = first(&|op| matches!(op, Op::Text(..)));

        let (Some(sky), Some(mist), Some(halo), Some(text)) = (sky, mist, halo, text) else {
            panic!("frame {i} is missing a layer");
        };
        let (Some(aurora_first), Some(aurora_last)) = aurora else {
            panic!("frame {i} has no aurora");
        };
        let (Some(ridge_first), Some(ridge_last)) = ridges else {
            panic!("frame {i} has no mountains");
        };
        let (Some(dust_first), Some(dust_last)) = dust else {
            panic!("frame {i} has no dust");
        };

        assert_eq!(sky, 1, "sky comes right after the clear");
        assert!(sky < aurora_first && aurora_last < ridge_first);
        assert!(ridge_last < mist && mist < halo);
        assert!(halo < dust_first && dust_last < text);

        // Static stars sit between the mist and the attractor.
        let stars = ops[mist + 1..halo]
            .iter()
            .filter(|op| matches!(op, Op::Fill(_)))
            .count();
        assert_eq!(stars, s.config().star_count);

        for (idx, op) in ops.iter().enumerate() {
            if matches!(op, Op::Stroke(Paint::Gradient(_), _)) {
                assert!(ridge_last < idx && idx < mist, "trail at {idx} out of place");
                saw_trail = true;
            }
        }
        if saw_trail {
            break;
        }
    }
    assert!(saw_trail, "no shooting star crossed the sky");
}
