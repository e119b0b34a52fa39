//! This module reimports a common used types.

pub use crate::EngineConfig;
pub use crate::IterationStats;
pub use crate::SwarmEngine;

pub use crate::aco::AcoEngine;
pub use crate::bees::BeesEngine;
pub use crate::gwo::GwoEngine;

pub use crate::driver::SimulationDriver;
pub use crate::driver::StatsSink;

pub use crate::landscape::get_landscape_by_name;
pub use crate::landscape::Bounds;
pub use crate::landscape::Float;
pub use crate::landscape::LandscapeFn;
pub use crate::landscape::Position;

pub use crate::narration::Narrator;
pub use crate::narration::StaticNarrator;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::{Random, RandomGen};
