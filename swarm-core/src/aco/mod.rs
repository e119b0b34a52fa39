//! This module contains an ant colony optimization engine which solves a small
//! traveling-salesman instance: ants construct tours guided by a shared pheromone
//! trail which reinforces good edges and evaporates over time.

#[cfg(test)]
#[path = "../../tests/unit/aco/engine_test.rs"]
mod engine_test;

mod pheromone;
pub use self::pheromone::PheromoneMatrix;

use crate::landscape::{tour_distance, Float, Position};
use crate::utils::{compare_floats, Environment, GenericResult, Random};
use crate::{EngineConfig, IterationStats, SwarmEngine};
use serde::Serialize;
use std::sync::Arc;

/// Pheromone importance exponent (alpha).
const PHEROMONE_IMPORTANCE: i32 = 1;
/// Inverse distance importance exponent (beta).
const HEURISTIC_IMPORTANCE: i32 = 2;
/// Fraction of pheromone which evaporates from every edge each tick (rho).
const EVAPORATION_RATE: Float = 0.1;
/// Total amount of pheromone an ant distributes over its tour.
const DEPOSIT_FACTOR: Float = 100.;
/// Amount of pheromone assigned to every edge on (re)initialization.
const INITIAL_PHEROMONE: Float = 1.;

/// An ant colony optimization engine. City positions are fixed at construction;
/// the pheromone matrix and best known tour are recreated on reinitialization.
pub struct AcoEngine {
    config: EngineConfig,
    environment: Arc<Environment>,
    cities: Vec<Position>,
    pheromone: PheromoneMatrix,
    best_tour: Vec<usize>,
    best_distance: Float,
    iteration: usize,
}

/// A read-only view of ant colony state for rendering collaborators.
#[derive(Clone, Debug, Serialize)]
pub struct AcoSnapshot {
    /// City positions.
    pub cities: Vec<Position>,
    /// Pheromone levels per city pair.
    pub pheromone: Vec<Vec<Float>>,
    /// Best tour found so far as city indices.
    pub best_tour: Vec<usize>,
    /// Length of the best tour found so far.
    pub best_distance: Float,
}

impl AcoEngine {
    /// Creates a new instance of `AcoEngine` for the given traveling-salesman instance.
    pub fn new(cities: Vec<Position>, config: EngineConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        if cities.len() < 2 {
            return Err(format!("ant colony requires at least 2 cities, got {}", cities.len()).into());
        }

        config.validate()?;

        let pheromone = PheromoneMatrix::new(cities.len(), INITIAL_PHEROMONE);

        Ok(Self {
            config,
            environment,
            pheromone,
            cities,
            best_tour: Vec::default(),
            best_distance: Float::INFINITY,
            iteration: 0,
        })
    }

    /// Returns city positions.
    pub fn cities(&self) -> &[Position] {
        &self.cities
    }

    /// Returns the best tour found so far, empty before the first completed tick.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    fn construct_tour(&self) -> Vec<usize> {
        let size = self.cities.len();
        let random = self.environment.random.as_ref();

        let start = random.uniform_int(0, size as i32 - 1) as usize;
        let mut visited = vec![false; size];
        visited[start] = true;

        let mut tour = Vec::with_capacity(size);
        tour.push(start);

        while tour.len() < size {
            let current = tour[tour.len() - 1];
            let candidates = (0..size)
                .filter(|&city| !visited[city])
                .map(|city| (city, self.desirability(current, city)))
                .collect::<Vec<_>>();

            let next = select_roulette(&candidates, random);

            visited[next] = true;
            tour.push(next);
        }

        tour
    }

    fn desirability(&self, from: usize, to: usize) -> Float {
        // coincident cities would produce an infinite desirability otherwise
        let distance = self.cities[from].distance_to(&self.cities[to]).max(Float::EPSILON);

        self.pheromone.get(from, to).powi(PHEROMONE_IMPORTANCE) * (1. / distance).powi(HEURISTIC_IMPORTANCE)
    }

    fn rebuild(&mut self) {
        self.pheromone = PheromoneMatrix::new(self.cities.len(), INITIAL_PHEROMONE);
        self.best_tour = Vec::default();
        self.best_distance = Float::INFINITY;
        self.iteration = 0;
    }

    fn stats(&self) -> IterationStats {
        IterationStats {
            iteration: self.iteration,
            best_score: self.best_distance,
            population_size: self.config.population_size,
        }
    }
}

impl SwarmEngine for AcoEngine {
    type Snapshot = AcoSnapshot;

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

        let tours = (0..self.config.population_size)
            .map(|_| {
                let tour = self.construct_tour();
                let distance = tour_distance(&self.cities, &tour);
                (tour, distance)
            })
            .collect::<Vec<_>>();

        if let Some((tour, distance)) = tours.iter().min_by(|a, b| compare_floats(a.1, b.1)) {
            // ties do not replace the incumbent
            if *distance < self.best_distance {
                self.best_distance = *distance;
                self.best_tour = tour.clone();
            }
        }

        self.pheromone.evaporate(EVAPORATION_RATE);
        tours.iter().for_each(|(tour, distance)| {
            let deposit = DEPOSIT_FACTOR / distance.max(Float::EPSILON);
            (0..tour.len()).for_each(|idx| {
                let from = tour[idx];
                let to = tour[(idx + 1) % tour.len()];
                self.pheromone.deposit(from, to, deposit);
            });
        });

        self.iteration += 1;

        self.stats()
    }

    fn reset(&mut self) {
        self.rebuild();
    }

    fn name(&self) -> &'static str {
        "ant colony optimization"
    }

    fn snapshot(&self) -> Self::Snapshot {
        AcoSnapshot {
            cities: self.cities.clone(),
            pheromone: self.pheromone.dump(),
            best_tour: self.best_tour.clone(),
            best_distance: self.best_distance,
        }
    }
}

/// Performs roulette-wheel selection proportional to candidate weights. When the total
/// weight is degenerate (zero or non-finite), falls back deterministically to the last
/// candidate in iteration order.
fn select_roulette(candidates: &[(usize, Float)], random: &dyn Random) -> usize {
    debug_assert!(!candidates.is_empty());

    let total = candidates.iter().map(|(_, weight)| *weight).sum::<Float>();

    if !total.is_finite() || total <= 0. {
        return candidates[candidates.len() - 1].0;
    }

    let threshold = random.uniform_real(0., total);
    let mut accumulated = 0.;

    for &(city, weight) in candidates {
        accumulated += weight;
        if accumulated >= threshold {
            return city;
        }
    }

    candidates[candidates.len() - 1].0
}
