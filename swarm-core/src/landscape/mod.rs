//! This module contains fitness evaluation primitives shared by the engines:
//! a 2D position type, simulation bounds and multi-modal landscape functions.

#[cfg(test)]
#[path = "../../tests/unit/landscape/landscape_test.rs"]
mod landscape_test;

use crate::utils::Random;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Alias to a scalar floating type.
pub type Float = f64;

/// A 2D coordinate used by candidate solutions and city locations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: Float,
    /// Vertical coordinate.
    pub y: Float,
}

impl Position {
    /// Creates a new instance of `Position`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns Euclidean distance to other position.
    pub fn distance_to(&self, other: &Position) -> Float {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }

    /// Returns a copy of the position clamped into the given bounds.
    pub fn clamped(&self, bounds: &Bounds) -> Position {
        Position { x: self.x.clamp(0., bounds.width), y: self.y.clamp(0., bounds.height) }
    }
}

/// Specifies a rectangular simulation domain with origin at zero.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Bounds {
    /// Domain width.
    pub width: Float,
    /// Domain height.
    pub height: Float,
}

impl Bounds {
    /// Creates a new instance of `Bounds`.
    pub fn new(width: Float, height: Float) -> Self {
        Self { width, height }
    }

    /// Checks whether the position lies inside the domain.
    pub fn contains(&self, position: &Position) -> bool {
        (0. ..=self.width).contains(&position.x) && (0. ..=self.height).contains(&position.y)
    }

    /// Samples a uniformly random position from the whole domain.
    pub fn sample(&self, random: &dyn Random) -> Position {
        Position { x: random.uniform_real(0., self.width), y: random.uniform_real(0., self.height) }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { width: 600., height: 600. }
    }
}

/// A landscape function which calculates a fitness of a 2D position, higher is better.
pub type LandscapeFn = Arc<dyn Fn(&Position) -> Float + Send + Sync>;

/// Specifies a single Gaussian component of a multi-modal landscape.
#[derive(Clone, Copy, Debug)]
pub struct Peak {
    /// Peak center.
    pub center: Position,
    /// Landscape value at the center.
    pub amplitude: Float,
    /// Controls how fast the value falls off with distance from the center.
    pub spread: Float,
}

impl Peak {
    /// Creates a new instance of `Peak`.
    pub fn new(center: Position, amplitude: Float, spread: Float) -> Self {
        Self { center, amplitude, spread }
    }
}

/// Creates a non-negative landscape function as a sum of Gaussian peaks.
pub fn create_peaks_function(peaks: Vec<Peak>) -> LandscapeFn {
    Arc::new(move |position| {
        peaks.iter().fold(0., |acc, peak| {
            let distance = position.distance_to(&peak.center);
            acc + peak.amplitude * (-(distance * distance) / (2. * peak.spread * peak.spread)).exp()
        })
    })
}

/// Creates a default multi-modal landscape with a dominant peak at (300, 300)
/// and a few smaller local optima spread over the default domain.
pub fn create_default_landscape() -> LandscapeFn {
    create_peaks_function(vec![
        Peak::new(Position::new(300., 300.), 100., 80.),
        Peak::new(Position::new(120., 480.), 60., 50.),
        Peak::new(Position::new(480., 120.), 45., 40.),
        Peak::new(Position::new(520., 520.), 30., 35.),
    ])
}

/// Returns landscape function by its name.
pub fn get_landscape_by_name(name: &str) -> LandscapeFn {
    match name {
        "default" => create_default_landscape(),
        "single-peak" => create_peaks_function(vec![Peak::new(Position::new(300., 300.), 100., 80.)]),
        _ => panic!("unknown landscape name: `{name}`"),
    }
}

/// Calculates a total length of the closed tour over the given cities: the distance
/// includes the edge returning from the last visited city back to the first one.
pub fn tour_distance(cities: &[Position], tour: &[usize]) -> Float {
    if tour.len() < 2 {
        return 0.;
    }

    tour.windows(2).map(|pair| cities[pair[0]].distance_to(&cities[pair[1]])).sum::<Float>()
        + cities[tour[tour.len() - 1]].distance_to(&cities[tour[0]])
}
