//! This module contains a seam for the external text-generation collaborator
//! which narrates simulation progress. Engines have zero dependency on it: a
//! failing or absent narrator degrades to a static message and never affects
//! simulation state.

use crate::utils::GenericResult;
use crate::IterationStats;

/// Produces a human readable commentary for algorithm progress. Implementations
/// may call external services and are allowed to fail; the driver isolates any
/// failure behind a static fallback.
pub trait Narrator {
    /// Returns a free-text commentary for the given algorithm statistics.
    fn narrate(&self, algorithm: &str, stats: &IterationStats) -> GenericResult<String>;
}

/// A narrator which formats a fixed summary from statistics and never fails.
#[derive(Default)]
pub struct StaticNarrator;

impl Narrator for StaticNarrator {
    fn narrate(&self, algorithm: &str, stats: &IterationStats) -> GenericResult<String> {
        Ok(fallback_narration(algorithm, stats))
    }
}

/// Returns a display string used when an external narrator is unavailable or fails.
pub fn fallback_narration(algorithm: &str, stats: &IterationStats) -> String {
    format!(
        "{algorithm}: iteration {}, best score {:.3}, population {}",
        stats.iteration, stats.best_score, stats.population_size
    )
}
