//! The input modeling module provides the stochastic foundation of the
//! experiments: a seedable uniform random number generator, and the small
//! set of random variables (uniform faces, uniform indices, permutations)
//! that the trials sample.

pub mod random_variable;
pub mod uniform_rng;

pub use random_variable::shuffle;
pub use random_variable::Discrete as DiscreteRandomVariable;
pub use random_variable::Index as IndexRandomVariable;
pub use uniform_rng::UniformRng;
