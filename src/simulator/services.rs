use crate::input_modeling::UniformRng;

/// The simulator provides a uniform random number generator and a trial
/// counter to experiments during the execution of a run
#[derive(Debug, Clone, Default)]
pub struct Services {
    uniform_rng: UniformRng,
    trials_run: u64,
}

impl Services {
    pub fn new(uniform_rng: UniformRng) -> Self {
        Self {
            uniform_rng,
            trials_run: 0,
        }
    }

    pub fn uniform_rng(&mut self) -> &mut UniformRng {
        &mut self.uniform_rng
    }

    /// Total trials executed with these services, across all runs.
    pub fn trials_run(&self) -> u64 {
        self.trials_run
    }

    pub(crate) fn count_trial(&mut self) {
        self.trials_run += 1;
    }
}
