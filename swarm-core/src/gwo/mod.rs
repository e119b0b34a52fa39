//! This module contains a grey wolf optimizer engine modeled as an explicit
//! five-phase state machine: the pack hierarchy (alpha/beta/delta/omega) is
//! re-ranked against a moving prey and wolves converge by averaging leader
//! positions with decaying stochastic coefficients.

#[cfg(test)]
#[path = "../../tests/unit/gwo/engine_test.rs"]
mod engine_test;

use crate::landscape::{Bounds, Float, Position};
use crate::utils::{compare_floats, Environment, GenericResult};
use crate::{EngineConfig, IterationStats, SwarmEngine};
use serde::Serialize;
use std::sync::Arc;

/// Amount of phase timer units each phase lasts.
const PHASE_DURATION: Float = 10.;
/// Iteration count over which the encircling coefficient decays from 2 to 0.
const COEFFICIENT_DECAY_SPAN: Float = 1000.;
/// Amount of pack leaders driving the position update.
const LEADERS_COUNT: usize = 3;

/// Specifies a phase of the grey wolf optimizer cycle. The cycle has no terminal
/// state and transitions in a fixed order on phase timer expiration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GwoPhase {
    /// Prey drifts along its closed curve.
    MovePrey,
    /// Wolf fitness scores are recomputed against the prey.
    Evaluate,
    /// The pack hierarchy is reassigned from scores.
    Rank,
    /// New target positions are derived from the three leaders.
    Calculate,
    /// Wolves commit the logical move; iteration counter advances.
    MoveWolves,
}

impl GwoPhase {
    /// Returns the next phase in the fixed transition order.
    pub fn next(&self) -> GwoPhase {
        match self {
            GwoPhase::MovePrey => GwoPhase::Evaluate,
            GwoPhase::Evaluate => GwoPhase::Rank,
            GwoPhase::Rank => GwoPhase::Calculate,
            GwoPhase::Calculate => GwoPhase::MoveWolves,
            GwoPhase::MoveWolves => GwoPhase::MovePrey,
        }
    }
}

/// Specifies a wolf's place in the pack hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WolfRank {
    /// Pack leader with the best (lowest) score.
    Alpha,
    /// Second best wolf.
    Beta,
    /// Third best wolf.
    Delta,
    /// Any other pack member.
    Omega,
}

#[derive(Clone, Copy)]
struct Wolf {
    position: Position,
    target: Position,
    score: Float,
    rank: WolfRank,
}

/// A read-only view of a single wolf for rendering collaborators.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct WolfState {
    /// Current interpolated position.
    pub position: Position,
    /// Distance to prey measured at the last evaluation.
    pub score: Float,
    /// Hierarchy rank assigned at the last ranking.
    pub rank: WolfRank,
}

/// A read-only view of the pack state for rendering collaborators.
#[derive(Clone, Debug, Serialize)]
pub struct GwoSnapshot {
    /// Pack members.
    pub wolves: Vec<WolfState>,
    /// Current prey position.
    pub prey: Position,
    /// Current phase of the cycle.
    pub phase: GwoPhase,
}

/// A grey wolf optimizer engine. The pack and hierarchy are owned exclusively by
/// the engine and recreated on reinitialization; a tick advances the phase timer
/// and interpolates movement, while the logical position update happens once per
/// full five-phase cycle.
pub struct GwoEngine {
    config: EngineConfig,
    environment: Arc<Environment>,
    bounds: Bounds,
    wolves: Vec<Wolf>,
    prey: Position,
    phase: GwoPhase,
    phase_timer: Float,
    clock: Float,
    iteration: usize,
}

impl GwoEngine {
    /// Creates a new instance of `GwoEngine` within the given simulation bounds.
    pub fn new(bounds: Bounds, config: EngineConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        validate_config(&config)?;

        let mut engine = Self {
            config,
            environment,
            bounds,
            wolves: Vec::default(),
            prey: Position::new(bounds.width / 2., bounds.height / 2.),
            phase: GwoPhase::MovePrey,
            phase_timer: 0.,
            clock: 0.,
            iteration: 0,
        };
        engine.rebuild();

        Ok(engine)
    }

    /// Returns the current phase of the cycle.
    pub fn phase(&self) -> GwoPhase {
        self.phase
    }

    fn rebuild(&mut self) {
        let random = self.environment.random.as_ref();

        self.wolves = (0..self.config.population_size)
            .map(|_| {
                let position = self.bounds.sample(random);
                Wolf { position, target: position, score: 0., rank: WolfRank::Omega }
            })
            .collect();

        self.phase = GwoPhase::MovePrey;
        self.phase_timer = 0.;
        self.clock = 0.;
        self.iteration = 0;
        self.prey = self.prey_position();
    }

    /// Calculates prey position on a Lissajous-like closed curve from the internal clock.
    fn prey_position(&self) -> Position {
        let (center_x, center_y) = (self.bounds.width / 2., self.bounds.height / 2.);
        let (radius_x, radius_y) = (self.bounds.width * 0.35, self.bounds.height * 0.35);

        Position::new(
            center_x + radius_x * (0.9 * self.clock).sin(),
            center_y + radius_y * (0.6 * self.clock + std::f64::consts::FRAC_PI_3).sin(),
        )
    }

    fn evaluate(&mut self) {
        let prey = self.prey;
        self.wolves.iter_mut().for_each(|wolf| wolf.score = wolf.position.distance_to(&prey));
    }

    fn rank(&mut self) {
        let mut order = (0..self.wolves.len()).collect::<Vec<_>>();
        // stable sort keeps first-seen wolf on score ties
        order.sort_by(|&a, &b| compare_floats(self.wolves[a].score, self.wolves[b].score));

        order.iter().enumerate().for_each(|(place, &idx)| {
            self.wolves[idx].rank = match place {
                0 => WolfRank::Alpha,
                1 => WolfRank::Beta,
                2 => WolfRank::Delta,
                _ => WolfRank::Omega,
            };
        });
    }

    fn calculate_targets(&mut self) {
        let leaders = self.leader_positions();
        if leaders.is_empty() {
            return;
        }

        let decay = 2. - 2. * (self.iteration as Float / COEFFICIENT_DECAY_SPAN);
        let random = self.environment.random.clone();

        for wolf in self.wolves.iter_mut() {
            let (sum_x, sum_y) = leaders.iter().fold((0., 0.), |(acc_x, acc_y), leader| {
                let r1 = random.uniform_real(0., 1.);
                let r2 = random.uniform_real(0., 1.);

                let a = 2. * decay * r1 - decay;
                let c = 2. * r2;

                let distance_x = (c * leader.x - wolf.position.x).abs();
                let distance_y = (c * leader.y - wolf.position.y).abs();

                (acc_x + leader.x - a * distance_x, acc_y + leader.y - a * distance_y)
            });

            let count = leaders.len() as Float;
            wolf.target = Position::new(sum_x / count, sum_y / count).clamped(&self.bounds);
        }
    }

    fn leader_positions(&self) -> Vec<Position> {
        [WolfRank::Alpha, WolfRank::Beta, WolfRank::Delta]
            .iter()
            .filter_map(|rank| self.wolves.iter().find(|wolf| wolf.rank == *rank))
            .map(|wolf| wolf.position)
            .take(LEADERS_COUNT)
            .collect()
    }

    fn interpolate_movement(&mut self) {
        let rate = movement_rate(self.config.speed);

        self.wolves.iter_mut().for_each(|wolf| {
            wolf.position = Position::new(
                wolf.position.x + (wolf.target.x - wolf.position.x) * rate,
                wolf.position.y + (wolf.target.y - wolf.position.y) * rate,
            );
        });
    }

    fn on_phase_entered(&mut self) {
        match self.phase {
            GwoPhase::MovePrey => {}
            GwoPhase::Evaluate => self.evaluate(),
            GwoPhase::Rank => self.rank(),
            GwoPhase::Calculate => self.calculate_targets(),
            GwoPhase::MoveWolves => self.iteration += 1,
        }
    }

    fn alpha_score(&self) -> Float {
        // zero sentinel until the first ranking assigns an alpha
        self.wolves.iter().find(|wolf| wolf.rank == WolfRank::Alpha).map_or(0., |wolf| wolf.score)
    }

    fn stats(&self) -> IterationStats {
        IterationStats {
            iteration: self.iteration,
            best_score: self.alpha_score(),
            population_size: self.config.population_size,
        }
    }
}

impl SwarmEngine for GwoEngine {
    type Snapshot = GwoSnapshot;

    fn initialize(&mut self, config: EngineConfig) -> GenericResult<()> {
        validate_config(&config)?;

        self.config = config;
        self.rebuild();

        Ok(())
    }

    fn tick(&mut self) -> IterationStats {
        if !self.config.is_running {
            return self.stats();
        }

        self.clock += clock_step(self.config.speed);

        match self.phase {
            GwoPhase::MovePrey => {
                self.prey = self.prey_position();
                self.interpolate_movement();
            }
            GwoPhase::MoveWolves => self.interpolate_movement(),
            _ => {}
        }

        self.phase_timer += phase_increment(self.config.speed);
        if self.phase_timer >= PHASE_DURATION {
            self.phase_timer = 0.;
            self.phase = self.phase.next();
            self.on_phase_entered();
        }

        self.stats()
    }

    fn reset(&mut self) {
        self.rebuild();
    }

    fn name(&self) -> &'static str {
        "grey wolf optimizer"
    }

    fn stats_interval(&self) -> usize {
        10
    }

    fn snapshot(&self) -> Self::Snapshot {
        GwoSnapshot {
            wolves: self
                .wolves
                .iter()
                .map(|wolf| WolfState { position: wolf.position, score: wolf.score, rank: wolf.rank })
                .collect(),
            prey: self.prey,
            phase: self.phase,
        }
    }
}

fn validate_config(config: &EngineConfig) -> GenericResult<()> {
    config.validate()?;

    if config.population_size < LEADERS_COUNT {
        return Err(format!(
            "grey wolf hierarchy requires at least {} wolves, got {}",
            LEADERS_COUNT, config.population_size
        )
        .into());
    }

    Ok(())
}

/// Maps speed to phase timer units consumed per tick: 1 at zero speed, 5 at full speed.
fn phase_increment(speed: u32) -> Float {
    1. + speed as Float / 100. * 4.
}

/// Maps speed to the linear interpolation rate of wolf movement per tick.
fn movement_rate(speed: u32) -> Float {
    0.05 + speed as Float / 100. * 0.2
}

/// Maps speed to the prey curve parameter step per tick.
fn clock_step(speed: u32) -> Float {
    0.01 + speed as Float / 100. * 0.04
}
