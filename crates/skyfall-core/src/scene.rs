//! Frame driver: owns every pool and paints one frame per call.

use crate::attractor::Attractor;
use crate::config::{ConfigError, SceneConfig};
use crate::newton::NewtonScene;
use crate::paint::Painter;
use crate::parallax::{self, AuroraRibbon, MountainRidge};
use crate::particles::{
    DustParticle, Entity, FrameEnv, Gravity, ShootingStar, Star, SymbolParticle,
};
use crate::phase::{Phase, ScrollMetrics, Viewport};
use rand::rngs::StdRng;
use rand::Rng;

/// Per-frame call counts, mostly useful to tests and debug logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub alternate: bool,
    pub attractor_updates: usize,
    pub attractor_draws: usize,
    pub mountain_draws: usize,
    pub aurora_draws: usize,
    pub entity_updates: usize,
    pub entity_draws: usize,
}

pub struct Scene<R: Rng = StdRng> {
    config: SceneConfig,
    gravity: Gravity,
    viewport: Viewport,
    rng: R,
    attractor: Attractor,
    mountains: Vec<MountainRidge>,
    aurora: Vec<AuroraRibbon>,
    shooting_stars: Vec<Entity>,
    stars: Vec<Entity>,
    dust: Vec<Entity>,
    symbols: Vec<Entity>,
    newton: NewtonScene,
    alternate: bool,
}

impl<R: Rng> Scene<R> {
    pub fn new(config: SceneConfig, viewport: Viewport, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let attractor = Attractor::new(&config, viewport);
        let horizon = attractor.event_horizon;

        let mountains = parallax::generate_mountains(&mut rng, viewport);
        let aurora = parallax::generate_aurora(&mut rng, config.aurora_count);
        let shooting_stars = (0..config.shooting_star_count)
            .map(|_| Entity::ShootingStar(ShootingStar::spawn(&mut rng, viewport)))
            .collect();
        let stars = (0..config.star_count)
            .map(|_| Entity::Star(Star::spawn(&mut rng)))
            .collect();
        let dust = (0..config.dust_count)
            .map(|_| Entity::Dust(DustParticle::spawn(&mut rng, horizon)))
            .collect();
        let symbols = (0..config.symbol_count)
            .map(|_| Entity::Symbol(SymbolParticle::spawn(&mut rng, viewport)))
            .collect();

        log::info!(
            "[scene] {}x{} symbols={} dust={} stars={} alternate={}",
            viewport.width,
            viewport.height,
            config.symbol_count,
            config.dust_count,
            config.star_count,
            config.start_in_alternate
        );
        Ok(Self {
            gravity: Gravity::from(&config),
            alternate: config.start_in_alternate,
            config,
            viewport,
            rng,
            attractor,
            mountains,
            aurora,
            shooting_stars,
            stars,
            dust,
            symbols,
            newton: NewtonScene::new(),
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn attractor(&self) -> &Attractor {
        &self.attractor
    }

    pub fn attractor_mut(&mut self) -> &mut Attractor {
        &mut self.attractor
    }

    pub fn mountains(&self) -> &[MountainRidge] {
        &self.mountains
    }

    pub fn aurora(&self) -> &[AuroraRibbon] {
        &self.aurora
    }

    pub fn symbols(&self) -> impl Iterator<Item = &SymbolParticle> {
        self.symbols.iter().filter_map(|e| match e {
            Entity::Symbol(s) => Some(s),
            _ => None,
        })
    }

    pub fn dust(&self) -> impl Iterator<Item = &DustParticle> {
        self.dust.iter().filter_map(|e| match e {
            Entity::Dust(d) => Some(d),
            _ => None,
        })
    }

    pub fn newton(&self) -> &NewtonScene {
        &self.newton
    }

    pub fn is_alternate(&self) -> bool {
        self.alternate
    }

    pub fn set_alternate(&mut self, alternate: bool) {
        self.alternate = alternate;
    }

    /// Flips between the parallax scene and the Newton vignette; returns the
    /// new mode.
    pub fn toggle_alternate(&mut self) -> bool {
        self.alternate = !self.alternate;
        log::info!("[scene] alternate={}", self.alternate);
        self.alternate
    }

    /// Regenerates size-dependent geometry and pulls the attractor back inside.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        log::debug!(
            "[scene] resize {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        for m in &mut self.mountains {
            m.regenerate(&mut self.rng, viewport);
        }
        self.attractor.confine(viewport);
    }

    /// One display refresh: derive the phase from the scroll state and paint.
    pub fn frame<P: Painter>(
        &mut self,
        painter: &mut P,
        scroll: &ScrollMetrics,
        now_ms: f64,
    ) -> FrameStats {
        self.frame_at(painter, Phase::from_scroll(scroll), now_ms)
    }

    /// Same as [`Scene::frame`] with an explicit phase.
    pub fn frame_at<P: Painter>(
        &mut self,
        painter: &mut P,
        phase: Phase,
        now_ms: f64,
    ) -> FrameStats {
        let vp = self.viewport;
        painter.clear(vp.width, vp.height);

        if self.alternate {
            self.newton.draw(painter, phase.progress, now_ms, vp);
            return FrameStats {
                alternate: true,
                ..FrameStats::default()
            };
        }

        let mut stats = FrameStats::default();

        self.attractor.update(&phase, vp);
        stats.attractor_updates += 1;

        // Back layers
        parallax::draw_sky(painter, &phase, vp);
        for ribbon in &self.aurora {
            ribbon.draw(painter, &phase, vp, now_ms);
            stats.aurora_draws += 1;
        }
        for ridge in &self.mountains {
            ridge.draw(painter, &phase, vp);
            stats.mountain_draws += 1;
        }
        {
            let env = FrameEnv {
                phase,
                now_ms,
                viewport: vp,
                attractor: &self.attractor,
                gravity: self.gravity,
            };
            for s in &mut self.shooting_stars {
                s.update(&env, &mut self.rng);
                s.draw(painter, &env);
                stats.entity_updates += 1;
                stats.entity_draws += 1;
            }
            parallax::draw_mist(painter, &phase, vp);
            if phase.transition > 0.0 {
                for s in &self.stars {
                    s.draw(painter, &env);
                    stats.entity_draws += 1;
                }
            }
        }

        if self.attractor.draw(painter, &phase) {
            stats.attractor_draws += 1;
        }

        // Foreground particles
        let env = FrameEnv {
            phase,
            now_ms,
            viewport: vp,
            attractor: &self.attractor,
            gravity: self.gravity,
        };
        if phase.progress > crate::constants::ACTIVATION_START {
            for d in &mut self.dust {
                d.update(&env, &mut self.rng);
                d.draw(painter, &env);
                stats.entity_updates += 1;
                stats.entity_draws += 1;
            }
        }
        for s in &mut self.symbols {
            s.update(&env, &mut self.rng);
            s.draw(painter, &env);
            stats.entity_updates += 1;
            stats.entity_draws += 1;
        }
        stats
    }
}
