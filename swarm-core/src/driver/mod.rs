//! This module contains a simulation driver which advances an engine at a cadence
//! derived from the configured speed and forwards resulting statistics to a sink.

#[cfg(test)]
#[path = "../../tests/unit/driver/driver_test.rs"]
mod driver_test;

use crate::narration::{fallback_narration, Narrator};
use crate::utils::{InfoLogger, Quota};
use crate::{IterationStats, SwarmEngine};
use std::sync::Arc;
use std::time::Duration;

/// Consumes engine statistics after forwarded ticks, e.g. a UI or telemetry layer.
pub trait StatsSink {
    /// Called with algorithm name and statistics of the completed tick.
    fn on_stats(&mut self, algorithm: &str, stats: &IterationStats);
}

impl<F: FnMut(&str, &IterationStats)> StatsSink for F {
    fn on_stats(&mut self, algorithm: &str, stats: &IterationStats) {
        (self)(algorithm, stats)
    }
}

/// Drives a simulation engine: calls `tick` in a synchronous loop, checks the
/// cancellation quota cooperatively between ticks and forwards statistics to the
/// sink at the engine's reporting interval. A tick is never aborted mid-flight.
pub struct SimulationDriver<E: SwarmEngine> {
    engine: E,
    sink: Box<dyn StatsSink>,
    logger: InfoLogger,
    narrator: Option<Box<dyn Narrator>>,
    quota: Option<Arc<dyn Quota>>,
    delay: Option<Duration>,
    ticks_processed: usize,
}

impl<E: SwarmEngine> SimulationDriver<E> {
    /// Creates a new instance of `SimulationDriver`.
    pub fn new(engine: E, sink: Box<dyn StatsSink>, logger: InfoLogger) -> Self {
        Self { engine, sink, logger, narrator: None, quota: None, delay: None, ticks_processed: 0 }
    }

    /// Sets a cooperative cancellation quota checked before each tick.
    pub fn with_quota(mut self, quota: Arc<dyn Quota>) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Sets a narrator used to comment on forwarded statistics.
    pub fn with_narrator(mut self, narrator: Box<dyn Narrator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    /// Enables real-time pacing: the driver sleeps between ticks for a delay
    /// derived from the given speed (lower speed means less frequent ticks).
    pub fn with_pacing(mut self, speed: u32) -> Self {
        self.delay = Some(tick_delay(speed));
        self
    }

    /// Returns a reference to the driven engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns a mutable reference to the driven engine for reconfiguration
    /// between ticks, such as pausing or changing population size.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Returns amount of ticks processed so far.
    pub fn ticks_processed(&self) -> usize {
        self.ticks_processed
    }

    /// Runs the simulation for at most the given amount of ticks, stopping earlier
    /// when the quota is reached. Returns statistics of the last processed tick.
    pub fn run(&mut self, max_ticks: usize) -> Option<IterationStats> {
        let mut last_stats = None;

        for _ in 0..max_ticks {
            if self.quota.as_ref().map_or(false, |quota| quota.is_reached()) {
                break;
            }

            let stats = self.engine.tick();
            self.ticks_processed += 1;

            if self.ticks_processed % self.engine.stats_interval() == 0 {
                self.sink.on_stats(self.engine.name(), &stats);
                self.narrate(&stats);
            }

            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }

            last_stats = Some(stats);
        }

        last_stats
    }

    fn narrate(&self, stats: &IterationStats) {
        if let Some(narrator) = self.narrator.as_ref() {
            let message = narrator
                .narrate(self.engine.name(), stats)
                .unwrap_or_else(|_| fallback_narration(self.engine.name(), stats));

            (self.logger)(&message);
        }
    }
}

/// Maps speed in `[0, 100]` range to a delay between ticks.
fn tick_delay(speed: u32) -> Duration {
    Duration::from_millis(5 + 2 * (100 - speed.min(100)) as u64)
}
