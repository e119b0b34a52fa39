#[cfg(test)]
#[path = "../../tests/unit/aco/pheromone_test.rs"]
mod pheromone_test;

use crate::landscape::Float;

/// A symmetric matrix of pheromone levels indexed by city pair.
///
/// Invariants: `get(i, j) == get(j, i)` and every entry stays strictly positive,
/// as evaporation multiplies levels but never drives them to zero or below.
pub struct PheromoneMatrix {
    size: usize,
    data: Vec<Float>,
}

impl PheromoneMatrix {
    /// Creates a new instance of `PheromoneMatrix` with every entry set to the initial level.
    pub fn new(size: usize, initial: Float) -> Self {
        assert!(initial > 0.);

        Self { size, data: vec![initial; size * size] }
    }

    /// Returns amount of cities the matrix is indexed by.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Checks whether the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns pheromone level on the edge between two cities.
    pub fn get(&self, from: usize, to: usize) -> Float {
        self.data[from * self.size + to]
    }

    /// Evaporates pheromone on every edge by multiplying it with `1 - rate`.
    pub fn evaporate(&mut self, rate: Float) {
        debug_assert!((0. ..1.).contains(&rate));

        self.data.iter_mut().for_each(|value| *value *= 1. - rate);
    }

    /// Deposits the given amount on both directed edges of the city pair, keeping the matrix symmetric.
    pub fn deposit(&mut self, from: usize, to: usize, amount: Float) {
        self.data[from * self.size + to] += amount;
        self.data[to * self.size + from] += amount;
    }

    /// Dumps the matrix into a row-per-city representation.
    pub fn dump(&self) -> Vec<Vec<Float>> {
        self.data.chunks(self.size).map(<[Float]>::to_vec).collect()
    }
}
