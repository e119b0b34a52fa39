#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which is called with some information regarding simulation progress.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of simulation environment, such as the randomness source and logging.
pub struct Environment {
    /// A wrapped random generator shared by engine internals.
    pub random: Arc<dyn Random>,
    /// A logger which is called with regular information messages.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates a new instance of `Environment` with randomness behavior driven by the seed:
    /// a deterministic, replayable source when it is set, an entropy one otherwise.
    pub fn new_with_seed(seed: Option<u64>, logger: InfoLogger) -> Self {
        let random: Arc<dyn Random> = match seed {
            Some(seed) => Arc::new(DefaultRandom::new(seed)),
            None => Arc::new(DefaultRandom::default()),
        };

        Self::new(random, logger)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new_with_seed(None, Arc::new(|msg: &str| println!("{msg}")))
    }
}
