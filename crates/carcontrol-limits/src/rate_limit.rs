//! Driver-torque-aware steering torque rate limiter.
//!
//! Torque-actuated racks accept a signed torque command every steering
//! frame. Raw targets from the upstream policy must be slewed gently and
//! must yield to measured driver input; this module provides the limiter
//! seam and its standard implementation.

use crate::{LimitsError, LimitsResult};
use serde::{Deserialize, Serialize};

/// Calibration record for steering torque limiting.
///
/// All values are in raw actuator torque units per steering frame, except
/// the driver-input terms which are in measured torque units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteerLimits {
    /// Absolute torque ceiling.
    pub steer_max: i32,
    /// Maximum per-frame increase away from zero.
    pub delta_up: i32,
    /// Maximum per-frame decrease toward zero.
    pub delta_down: i32,
    /// Driver torque allowance before the window starts shifting.
    pub driver_allowance: f64,
    /// Scale applied to measured driver torque.
    pub driver_factor: f64,
    /// Gain on the driver-shifted allowance window.
    pub driver_multiplier: f64,
}

impl SteerLimits {
    /// Validate the record; all limiter implementations assume this passed.
    pub fn validate(&self) -> LimitsResult {
        if self.steer_max <= 0 {
            return Err(LimitsError::NonPositiveSteerMax(self.steer_max));
        }
        if self.delta_up < 0 {
            return Err(LimitsError::NegativeDelta {
                name: "delta_up",
                value: self.delta_up,
            });
        }
        if self.delta_down < 0 {
            return Err(LimitsError::NegativeDelta {
                name: "delta_down",
                value: self.delta_down,
            });
        }
        Ok(())
    }
}

impl Default for SteerLimits {
    fn default() -> Self {
        Self {
            steer_max: 300,
            delta_up: 4,
            delta_down: 10,
            driver_allowance: 80.0,
            driver_factor: 1.0,
            driver_multiplier: 3.0,
        }
    }
}

/// Capability seam for steering torque rate limiting.
///
/// One implementation per platform family; injected into the controller at
/// session construction. Implementations must be pure: same inputs, same
/// output, no internal state.
pub trait SteerRateLimiter {
    /// Limit a raw torque target.
    ///
    /// # Arguments
    ///
    /// * `desired_torque` - New raw torque target
    /// * `last_torque` - Torque applied on the previous steering frame
    /// * `driver_torque` - Measured driver steering torque
    /// * `limits` - Validated calibration record
    fn apply(
        &self,
        desired_torque: i32,
        last_torque: i32,
        driver_torque: f64,
        limits: &SteerLimits,
    ) -> i32;
}

/// Standard driver-aware limiter.
///
/// Applies, in order:
///
/// 1. A driver-shifted allowance window: measured driver torque shifts the
///    permitted command window against the command, so sustained driver
///    input wins over the controller.
/// 2. Asymmetric slew limiting relative to the last applied torque: ramping
///    away from zero is bounded by `delta_up`, unwinding toward zero by
///    `delta_down`, and the command may not cross zero faster than one
///    `delta_up` step.
///
/// The result is rounded to the nearest integer, half away from zero, and
/// is always within `±steer_max` inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverAwareLimiter;

impl SteerRateLimiter for DriverAwareLimiter {
    fn apply(
        &self,
        desired_torque: i32,
        last_torque: i32,
        driver_torque: f64,
        limits: &SteerLimits,
    ) -> i32 {
        let steer_max = f64::from(limits.steer_max);
        let delta_up = f64::from(limits.delta_up);
        let delta_down = f64::from(limits.delta_down);

        let driver_shift = driver_torque * limits.driver_factor;
        let driver_max =
            steer_max + (limits.driver_allowance + driver_shift) * limits.driver_multiplier;
        let driver_min =
            -steer_max + (-limits.driver_allowance + driver_shift) * limits.driver_multiplier;

        let max_allowed = steer_max.min(driver_max).max(0.0);
        let min_allowed = (-steer_max).max(driver_min).min(0.0);

        let mut torque = f64::from(desired_torque).min(max_allowed).max(min_allowed);

        let last = f64::from(last_torque);
        torque = if last_torque > 0 {
            torque
                .min(last + delta_up)
                .max((last - delta_down).max(-delta_up))
        } else {
            torque
                .min((last + delta_down).min(delta_up))
                .max(last - delta_up)
        };

        torque.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: SteerLimits = SteerLimits {
        steer_max: 300,
        delta_up: 4,
        delta_down: 10,
        driver_allowance: 80.0,
        driver_factor: 1.0,
        driver_multiplier: 3.0,
    };

    #[test]
    fn default_limits_validate() {
        assert_eq!(SteerLimits::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_ceiling() {
        let limits = SteerLimits {
            steer_max: 0,
            ..SteerLimits::default()
        };
        assert_eq!(limits.validate(), Err(LimitsError::NonPositiveSteerMax(0)));
    }

    #[test]
    fn rejects_negative_delta() {
        let limits = SteerLimits {
            delta_down: -1,
            ..SteerLimits::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(LimitsError::NegativeDelta { name: "delta_down", .. })
        ));
    }

    #[test]
    fn ramp_up_bounded_by_delta_up() {
        let limiter = DriverAwareLimiter;
        let applied = limiter.apply(300, 10, 0.0, &LIMITS);
        assert_eq!(applied, 14);
    }

    #[test]
    fn unwind_bounded_by_delta_down() {
        let limiter = DriverAwareLimiter;
        let applied = limiter.apply(0, 100, 0.0, &LIMITS);
        assert_eq!(applied, 90);
    }

    #[test]
    fn zero_crossing_capped_at_one_up_step() {
        let limiter = DriverAwareLimiter;
        // From +2, a hard reversal may not go below -delta_up.
        let applied = limiter.apply(-300, 2, 0.0, &LIMITS);
        assert_eq!(applied, -4);
    }

    #[test]
    fn negative_side_mirrors_positive() {
        let limiter = DriverAwareLimiter;
        let up = limiter.apply(300, 10, 0.0, &LIMITS);
        let down = limiter.apply(-300, -10, 0.0, &LIMITS);
        assert_eq!(up, -down);
    }

    #[test]
    fn driver_countertorque_shrinks_window() {
        let limiter = DriverAwareLimiter;
        // Strong opposing driver torque collapses the positive window to
        // zero; the command unwinds as fast as the slew limit allows.
        let applied = limiter.apply(200, 200, -400.0, &LIMITS);
        assert_eq!(applied, 190);
    }

    #[test]
    fn output_never_exceeds_ceiling() {
        let limiter = DriverAwareLimiter;
        let applied = limiter.apply(10_000, 299, 500.0, &LIMITS);
        assert!(applied <= LIMITS.steer_max);
        let applied = limiter.apply(-10_000, -299, -500.0, &LIMITS);
        assert!(applied >= -LIMITS.steer_max);
    }
}
