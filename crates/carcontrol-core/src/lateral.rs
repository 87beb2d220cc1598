//! Lateral command state machines.
//!
//! Two mutually exclusive variants, selected once per session by platform:
//!
//! - **Torque-actuated**: rate- and driver-limited torque with two
//!   ECU-imposed watchdogs. The rack refuses actuation if it sees the same
//!   torque for too long, or uninterrupted actuation for too long; a single
//!   disabled frame resets the latter, which is why output happening to be
//!   zero drops the request flag.
//! - **Curvature-actuated**: ISO-limited curvature with a steering power
//!   level. The power level must ramp to zero before the actuation request
//!   drops, otherwise the rack falls into a refused state.

use crate::config::ControllerParams;
use crate::state::ControllerState;
use carcontrol_limits::{SteerRateLimiter, limit_curvature};
use tracing::{debug, trace};

/// Result of one torque-variant steering frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorqueFrame {
    /// Applied steering torque in raw actuator units.
    pub apply_torque: i32,
    /// Actuation request flag.
    pub hca_enabled: bool,
}

/// Result of one curvature-variant steering frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureFrame {
    /// Applied path curvature in 1/m.
    pub apply_curvature: f64,
    /// Actuation request flag.
    pub hca_enabled: bool,
    /// Applied steering power level.
    pub power: u8,
}

/// Run one steering frame of the torque-actuated variant.
///
/// Owns every lateral state update for the frame: the applied-torque
/// history, the stuck-torque watchdog, the uninterrupted-actuation timer
/// and the soft-disable alert flag.
pub(crate) fn run_torque(
    params: &ControllerParams,
    limiter: &dyn SteerRateLimiter,
    state: &mut ControllerState,
    lat_active: bool,
    desired_steer: f64,
    driver_torque: f64,
    stuck_torque_frames: u32,
    alert_frames: u32,
) -> TorqueFrame {
    let steer_step = params.cadences.steer_step;

    let (mut apply_torque, hca_enabled) = if lat_active {
        let new_steer = (desired_steer * f64::from(params.steer.steer_max)).round() as i32;
        let mut apply =
            limiter.apply(new_steer, state.apply_torque_last, driver_torque, &params.steer);
        state.actuation_frames += steer_step;

        if state.apply_torque_last == apply {
            state.same_torque_frames += steer_step;
            if state.same_torque_frames > stuck_torque_frames {
                // Nudge one unit toward zero so the rack sees a change.
                apply -= if apply < 0 { -1 } else { 1 };
                state.same_torque_frames = 0;
                debug!(apply_torque = apply, "stuck-torque watchdog nudged output");
            }
        } else {
            state.same_torque_frames = 0;
        }

        (apply, apply != 0)
    } else {
        state.same_torque_frames = 0;
        (0, false)
    };

    if !hca_enabled {
        apply_torque = 0;
        state.actuation_frames = 0;
    }

    let alert = state.actuation_frames > alert_frames;
    if alert != state.soft_disable_alert {
        debug!(alert, "uninterrupted-actuation soft-disable alert changed");
    }
    state.soft_disable_alert = alert;
    state.apply_torque_last = apply_torque;

    TorqueFrame {
        apply_torque,
        hca_enabled,
    }
}

/// Run one steering frame of the curvature-actuated variant.
///
/// The desired curvature is first calibrated by the offset between the
/// vehicle's self-reported curvature and the control system's own estimate,
/// then passed through the ISO limiter with the steering-frame period as
/// the time step.
pub(crate) fn run_curvature(
    params: &ControllerParams,
    state: &mut ControllerState,
    lat_active: bool,
    desired_curvature: f64,
    current_curvature: f64,
    vehicle_curvature: f64,
    v_ego: f64,
    dt: f64,
) -> CurvatureFrame {
    let calibrated = desired_curvature + (vehicle_curvature - current_curvature);
    let mut apply_curvature = limit_curvature(v_ego, state.apply_curvature_last, dt, calibrated);

    let (hca_enabled, power) = if lat_active {
        (true, params.steering_power_max)
    } else if state.steering_power_last > 0 {
        // Keep actuation alive while power ramps down to zero.
        let next = state
            .steering_power_last
            .saturating_sub(params.steering_power_steps);
        trace!(power = next, "steering power ramping down");
        (true, next)
    } else {
        apply_curvature = 0.0;
        (false, 0)
    };

    state.apply_curvature_last = apply_curvature;
    state.steering_power_last = power;

    CurvatureFrame {
        apply_curvature,
        hca_enabled,
        power,
    }
}

/// Spoofed driver torque for the stock driver-monitoring subsystem.
///
/// Twice the applied torque, clamped to the actuator ceiling, is enough to
/// consistently reset the inactivity detection; actual driver input wins
/// whenever its magnitude is larger.
pub(crate) fn ea_spoof_torque(apply_torque: i32, driver_torque: f64, steer_max: i32) -> f64 {
    let ceiling = f64::from(steer_max);
    let simulated = f64::from(apply_torque) * 2.0;
    let simulated = simulated.clamp(-ceiling, ceiling);
    if driver_torque.abs() > simulated.abs() {
        driver_torque
    } else {
        simulated
    }
}
