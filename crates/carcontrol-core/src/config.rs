//! Controller calibration parameters.
//!
//! Everything in here is platform calibration data, not algorithmic choice:
//! the records derive serde so the surrounding loader can feed them from
//! per-platform data files. Defaults are the reference platform's values,
//! so a `Default` session behaves like the reference vehicle.

use crate::error::ControllerError;
use crate::ControllerResult;
use carcontrol_limits::SteerLimits;
use carcontrol_scheduler::MessageCadences;
use serde::{Deserialize, Serialize};

/// Control tick period in seconds (100 Hz base rate).
pub const DT_CTRL: f64 = 0.01;

/// Full calibration record for one controller session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerParams {
    /// Steering torque limits for the rate limiter.
    pub steer: SteerLimits,
    /// Stuck-torque watchdog threshold in seconds: identical applied torque
    /// for longer than this triggers a one-unit nudge toward zero.
    pub steer_time_stuck_torque: f64,
    /// Uninterrupted-actuation alert threshold in seconds: continuous
    /// actuation for longer than this raises the soft-disable alert.
    pub steer_time_alert: f64,
    /// Steering power level commanded while lateral control is active.
    pub steering_power_max: u8,
    /// Power ramp-down step per steering frame during deactivation.
    pub steering_power_steps: u8,
    /// Acceleration command floor in m/s².
    pub accel_min: f64,
    /// Acceleration command ceiling in m/s².
    pub accel_max: f64,
    /// Below this speed a tracking command counts as starting, in m/s.
    pub v_ego_stopping: f64,
    /// Send cadences per message class.
    pub cadences: MessageCadences,
}

impl ControllerParams {
    /// Validate the whole record; construction fails closed on any error.
    pub fn validate(&self) -> ControllerResult {
        self.steer.validate()?;
        self.cadences.validate()?;
        if self.steer_time_stuck_torque <= 0.0 {
            return Err(ControllerError::InvalidThreshold {
                name: "steer_time_stuck_torque",
                value: self.steer_time_stuck_torque,
            });
        }
        if self.steer_time_alert <= 0.0 {
            return Err(ControllerError::InvalidThreshold {
                name: "steer_time_alert",
                value: self.steer_time_alert,
            });
        }
        if self.accel_min >= self.accel_max {
            return Err(ControllerError::AccelLimits {
                min: self.accel_min,
                max: self.accel_max,
            });
        }
        if self.steering_power_steps == 0 {
            return Err(ControllerError::ZeroPowerStep);
        }
        Ok(())
    }

    /// Stuck-torque threshold converted to frames of the base rate.
    ///
    /// The quotient truncates; the watchdogs compare with strict `>`, so a
    /// counter one past the truncated value trips the threshold. For the
    /// default 1.9 s this trips at 190 frames of identical torque.
    pub(crate) fn stuck_torque_frames(&self) -> u32 {
        (self.steer_time_stuck_torque / DT_CTRL) as u32
    }

    /// Alert threshold converted to frames of the base rate, truncating.
    pub(crate) fn alert_frames(&self) -> u32 {
        (self.steer_time_alert / DT_CTRL) as u32
    }
}

impl Default for ControllerParams {
    fn default() -> Self {
        Self {
            steer: SteerLimits::default(),
            steer_time_stuck_torque: 1.9,
            steer_time_alert: 330.0,
            steering_power_max: 100,
            steering_power_steps: 5,
            accel_min: -3.5,
            accel_max: 2.0,
            v_ego_stopping: 0.5,
            cadences: MessageCadences::default(),
        }
    }
}
