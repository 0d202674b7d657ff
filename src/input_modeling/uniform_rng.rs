use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The uniform random number generator behind every trial.  Experiments
/// never hold their own generator, they draw from the one passed in, so a
/// single seed reproduces an entire run.
#[derive(Debug, Clone)]
pub struct UniformRng {
    rng: Pcg64Mcg,
}

impl Default for UniformRng {
    fn default() -> Self {
        Self::from_seed(42)
    }
}

impl UniformRng {
    /// A deterministic generator, for reproducible runs and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// A generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Seeded when a seed is supplied, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn rng(&mut self) -> &mut Pcg64Mcg {
        &mut self.rng
    }
}
