//! The utilies module provides general capabilities, that may span the
//! input modeling, experiments, output analysis, and simulator modules.  The
//! utilities are centered around debugging/traceability and common
//! arithmetic.

pub mod errors;
pub mod logging;

use num_traits::Float;

use errors::ExperimentError;

/// When the `console_error_panic_hook` feature is enabled, we can call the
/// `set_panic_hook` function at least once during initialization, and then
/// we will get better error messages if our code ever panics.
///
/// For more details see
/// <https://github.com/rustwasm/console_error_panic_hook#readme>
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// This function converts a count to a Float, with an associated
/// `ExperimentError` returned for failed conversions
pub fn count_to_float<T: Float>(unconv: u64) -> Result<T, ExperimentError> {
    T::from(unconv).ok_or(ExperimentError::FloatConvError)
}

/// Share of `count` in `total`, as a percentage.  A zero total yields 0.0
/// rather than NaN.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
