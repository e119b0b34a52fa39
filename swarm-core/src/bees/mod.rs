//! This module contains a bees algorithm engine doing patch-based neighborhood
//! search over a multi-modal landscape: elite sites are exploited with tight
//! neighborhoods, other good sites with wider ones, and scouts keep exploring
//! the whole domain.

#[cfg(test)]
#[path = "../../tests/unit/bees/engine_test.rs"]
mod engine_test;

use crate::landscape::{Bounds, Float, LandscapeFn, Position};
use crate::utils::{compare_floats, Environment, GenericResult};
use crate::{EngineConfig, IterationStats, SwarmEngine};
use serde::Serialize;
use std::sync::Arc;

/// Fraction of the population treated as elite sites.
const ELITE_FRACTION: Float = 0.2;
/// Fraction of the population treated as good sites, elite included.
const GOOD_FRACTION: Float = 0.5;
/// Neighborhood radius per axis around an elite site.
const ELITE_RADIUS: Float = 10.;
/// Neighborhood radius per axis around an other good site.
const GOOD_RADIUS: Float = 25.;

/// A bees algorithm engine. The landscape is a maximization problem: the running
/// best score is monotonically non-decreasing and the population is reconstituted
/// to exactly its configured size on every tick.
pub struct BeesEngine {
    config: EngineConfig,
    environment: Arc<Environment>,
    bounds: Bounds,
    landscape: LandscapeFn,
    bees: Vec<Position>,
    best_position: Option<Position>,
    best_score: Float,
    iteration: usize,
}

/// A read-only view of the hive state for rendering collaborators.
#[derive(Clone, Debug, Serialize)]
pub struct BeesSnapshot {
    /// Current bee positions.
    pub bees: Vec<Position>,
    /// Position of the best site observed so far.
    pub best_position: Option<Position>,
    /// Best landscape value observed so far.
    pub best_score: Float,
}

impl BeesEngine {
    /// Creates a new instance of `BeesEngine` over the given landscape.
    pub fn new(
        bounds: Bounds,
        landscape: LandscapeFn,
        config: EngineConfig,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        config.validate()?;

        let mut engine = Self {
            config,
            environment,
            bounds,
            landscape,
            bees: Vec::default(),
            best_position: None,
            best_score: 0.,
            iteration: 0,
        };
        engine.rebuild();

        Ok(engine)
    }

    /// Returns current bee positions.
    pub fn bees(&self) -> &[Position] {
        &self.bees
    }

    fn rebuild(&mut self) {
        let random = self.environment.random.as_ref();

        self.bees = (0..self.config.population_size).map(|_| self.bounds.sample(random)).collect();
        self.best_position = None;
        self.best_score = 0.;
        self.iteration = 0;
    }

    fn neighbor(&self, site: &Position, radius: Float) -> Position {
        let random = self.environment.random.as_ref();

        Position::new(
            site.x + random.uniform_real(-radius, radius),
            site.y + random.uniform_real(-radius, radius),
        )
        .clamped(&self.bounds)
    }

    fn stats(&self) -> IterationStats {
        IterationStats {
            iteration: self.iteration,
            best_score: self.best_score,
            population_size: self.config.population_size,
        }
    }
}

impl SwarmEngine for BeesEngine {
    type Snapshot = BeesSnapshot;

    fn initialize(&mut self, config: EngineConfig) -> GenericResult<()> {
        config.validate()?;

        self.config = config;
        self.rebuild();

        Ok(())
    }

    fn tick(&mut self) -> IterationStats {
        if !self.config.is_running {
            return self.stats();
        }

        let size = self.config.population_size;

        let mut scored = self.bees.iter().map(|bee| (*bee, (self.landscape)(bee))).collect::<Vec<_>>();
        // stable descending sort keeps first-seen site on ties
        scored.sort_by(|a, b| compare_floats(b.1, a.1));

        if let Some(&(position, score)) = scored.first() {
            if score > self.best_score {
                self.best_score = score;
                self.best_position = Some(position);
            }
        }

        let elite_count = (ELITE_FRACTION * size as Float).floor() as usize;
        let good_count = (GOOD_FRACTION * size as Float).floor() as usize;

        let mut next = Vec::with_capacity(size);

        // local exploitation: elite sites survive and recruit a close neighbor each
        for (site, _) in scored.iter().take(elite_count) {
            next.push(*site);
            if next.len() < size {
                next.push(self.neighbor(site, ELITE_RADIUS));
            }
        }

        // wider search around remaining good sites while capacity lasts
        for (site, _) in scored.iter().take(good_count).skip(elite_count) {
            if next.len() < size {
                next.push(self.neighbor(site, GOOD_RADIUS));
            }
        }

        // global exploration: scouts refill the rest of the population
        let random = self.environment.random.as_ref();
        while next.len() < size {
            next.push(self.bounds.sample(random));
        }
        next.truncate(size);

        self.bees = next;
        self.iteration += 1;

        self.stats()
    }

    fn reset(&mut self) {
        self.rebuild();
    }

    fn name(&self) -> &'static str {
        "bees algorithm"
    }

    fn snapshot(&self) -> Self::Snapshot {
        BeesSnapshot { bees: self.bees.clone(), best_position: self.best_position, best_score: self.best_score }
    }
}
