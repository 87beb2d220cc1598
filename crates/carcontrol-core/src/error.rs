//! Construction-time validation errors.
//!
//! The tick path itself never fails: fault conditions are inputs to the
//! state machines, and every numeric output is clamped before it leaves the
//! controller. The only fatal condition is an invalid session configuration,
//! which must prevent the session from starting at all.

use carcontrol_limits::LimitsError;
use carcontrol_scheduler::CadenceError;
use thiserror::Error;

/// A controller could not be constructed from the given configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    /// A message cadence was invalid.
    #[error(transparent)]
    Cadence(#[from] CadenceError),

    /// The steering limit record was invalid.
    #[error(transparent)]
    Limits(#[from] LimitsError),

    /// A watchdog threshold must be a positive number of seconds.
    #[error("timing threshold `{name}` must be positive, got {value}")]
    InvalidThreshold {
        /// The offending field.
        name: &'static str,
        /// The offending value in seconds.
        value: f64,
    },

    /// Acceleration limits must form a non-empty range.
    #[error("acceleration limits invalid: min {min} must be below max {max}")]
    AccelLimits {
        /// Lower bound in m/s².
        min: f64,
        /// Upper bound in m/s².
        max: f64,
    },

    /// The steering power ramp must make progress toward zero.
    #[error("steering power ramp step must be nonzero")]
    ZeroPowerStep,
}
