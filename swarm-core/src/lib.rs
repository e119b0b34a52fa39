//! This crate provides population-based swarm metaheuristic simulation engines
//! sharing a tick-driven contract: each engine owns its population, applies a
//! stochastic update rule on every tick and emits convergence statistics which
//! an external driver forwards to rendering and telemetry consumers.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod aco;
pub mod bees;
pub mod driver;
pub mod gwo;
pub mod landscape;
pub mod narration;
pub mod prelude;
pub mod utils;

use crate::landscape::Float;
use crate::utils::GenericResult;
use serde::Serialize;

/// Specifies a configuration shared by all simulation engines.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Amount of candidate solutions kept in the population. Must stay invariant across ticks.
    pub population_size: usize,
    /// A simulation speed in `[0, 100]` range which drives tick cadence and interpolation rates.
    pub speed: u32,
    /// Specifies whether engine state is advanced on tick. A paused tick is a no-op.
    pub is_running: bool,
}

impl EngineConfig {
    /// Creates a new running configuration with the given population size and speed.
    pub fn new(population_size: usize, speed: u32) -> Self {
        Self { population_size, speed, is_running: true }
    }

    /// Checks common configuration invariants shared by all engines.
    pub(crate) fn validate(&self) -> GenericResult<()> {
        if self.population_size < 1 {
            return Err(format!("population size must be at least 1, got {}", self.population_size).into());
        }

        if self.speed > 100 {
            return Err(format!("speed must be in [0, 100] range, got {}", self.speed).into());
        }

        Ok(())
    }
}

/// Keeps track of the search progress emitted by an engine after each tick.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct IterationStats {
    /// Amount of completed iterations.
    pub iteration: usize,
    /// Best score discovered so far. Orientation is engine specific: tour distance
    /// (lower is better) for ant colony, distance to prey for grey wolves, landscape
    /// height (higher is better) for bees.
    pub best_score: Float,
    /// Current population size.
    pub population_size: usize,
}

/// A contract for a population-based simulation engine advanced by an external driver.
///
/// A tick is an atomic synchronous unit of work: no engine suspends mid-tick and
/// no state is shared between engines. Population and auxiliary matrices are owned
/// exclusively by the engine and mutated only from within [`SwarmEngine::tick`].
pub trait SwarmEngine {
    /// A read-only snapshot type exposed to rendering collaborators.
    type Snapshot;

    /// Discards current state and recreates population and auxiliary matrices from
    /// the given configuration. Fails fast on configuration which violates engine
    /// invariants, such as a too small population.
    fn initialize(&mut self, config: EngineConfig) -> GenericResult<()>;

    /// Advances the simulation by a single step and returns current statistics.
    /// When the engine is paused, returns statistics without changing any state.
    fn tick(&mut self) -> IterationStats;

    /// Recreates engine state from the last accepted configuration.
    fn reset(&mut self);

    /// Returns a human readable algorithm name.
    fn name(&self) -> &'static str;

    /// Specifies how often (in ticks) a driver should forward statistics to its sink.
    fn stats_interval(&self) -> usize {
        1
    }

    /// Returns a read-only snapshot of current state for drawing purposes.
    fn snapshot(&self) -> Self::Snapshot;
}
