//! Safety-limiting math for OpenCarControl.
//!
//! Two independent limiters live here:
//!
//! - [`limit_curvature`]: the ISO 11270 lateral acceleration/jerk clamp on a
//!   desired path curvature. Pure function, no state.
//! - [`SteerRateLimiter`] / [`DriverAwareLimiter`]: the driver-torque-aware
//!   steering torque rate limiter injected into torque-actuated platforms.
//!
//! # RT Safety
//!
//! Everything in this crate is allocation-free, O(1), and branch-bounded.
//! Given identical inputs the outputs are bit-for-bit reproducible; there is
//! no hidden state and no clock access.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod curvature;
pub mod rate_limit;

pub use curvature::{JERK_TIME_HORIZON, MAX_LATERAL_ACCEL, MAX_LATERAL_JERK, limit_curvature};
pub use rate_limit::{DriverAwareLimiter, SteerLimits, SteerRateLimiter};

use thiserror::Error;

/// Validation failures for limit parameter records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitsError {
    /// The torque ceiling must be positive.
    #[error("steer_max must be positive, got {0}")]
    NonPositiveSteerMax(i32),

    /// Per-frame slew deltas must be non-negative.
    #[error("steer delta `{name}` must be non-negative, got {value}")]
    NegativeDelta {
        /// Which delta failed validation.
        name: &'static str,
        /// The offending value.
        value: i32,
    },
}

/// A specialized `Result` for limit validation.
pub type LimitsResult<T = ()> = std::result::Result<T, LimitsError>;
