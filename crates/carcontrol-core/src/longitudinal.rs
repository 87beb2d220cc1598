//! Longitudinal command synthesizer.
//!
//! Clamps the desired acceleration, classifies stopping/starting/override/
//! disabling conditions, and drives the bounded debounce counters that
//! smooth transition edges reported to the vehicle. The mapping of the
//! resulting condition summary to protocol codes is platform data behind
//! [`PlatformCodes`](crate::PlatformCodes).

use crate::config::ControllerParams;
use crate::platform::{LongStatus, Platform};
use crate::state::ControllerState;
use carcontrol_types::{DesiredCommand, LongControlState, VehicleState};
use tracing::warn;

/// Result of one acceleration frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelFrame {
    /// Clamped acceleration in m/s².
    pub accel: f64,
    /// Condition summary for the platform code composer.
    pub status: LongStatus,
}

/// Which engagement flag gates acceleration output on this platform.
fn active_gate(platform: Platform, cmd: &DesiredCommand) -> bool {
    match platform {
        Platform::CurvatureActuated => cmd.enabled,
        Platform::TorqueActuated { .. } => cmd.long_active,
    }
}

/// Run one acceleration frame: clamp, classify, debounce.
pub(crate) fn run(
    params: &ControllerParams,
    platform: Platform,
    state: &mut ControllerState,
    cmd: &DesiredCommand,
    vehicle: &VehicleState,
) -> AccelFrame {
    let stopping = cmd.long_control_state == LongControlState::Stopping;
    let starting = cmd.long_control_state == LongControlState::Tracking
        && (vehicle.esp_hold_confirmed || vehicle.v_ego < params.v_ego_stopping);

    let enabled = active_gate(platform, cmd);
    let accel = if enabled {
        cmd.accel.clamp(params.accel_min, params.accel_max)
    } else {
        0.0
    };
    state.accel_last = accel;

    let override_active = cmd.cruise.override_active || vehicle.gas_pressed;
    let override_begin = state.override_debounce.update(override_active);
    let disabling = state.disable_debounce.update(!enabled);

    if vehicle.acc_faulted {
        warn!("acceleration fault reported; composed status carries the fault");
    }

    AccelFrame {
        accel,
        status: LongStatus {
            cruise_available: vehicle.cruise_available,
            acc_faulted: vehicle.acc_faulted,
            enabled,
            starting,
            stopping,
            esp_hold_confirmed: vehicle.esp_hold_confirmed,
            override_active,
            override_begin,
            disabling,
        },
    }
}

/// Condition summary for HUD frames, read without advancing the debounce
/// counters.
pub(crate) fn status_snapshot(
    params: &ControllerParams,
    platform: Platform,
    state: &ControllerState,
    cmd: &DesiredCommand,
    vehicle: &VehicleState,
) -> LongStatus {
    let stopping = cmd.long_control_state == LongControlState::Stopping;
    let starting = cmd.long_control_state == LongControlState::Tracking
        && (vehicle.esp_hold_confirmed || vehicle.v_ego < params.v_ego_stopping);
    let enabled = active_gate(platform, cmd);
    let override_active = cmd.cruise.override_active || vehicle.gas_pressed;

    LongStatus {
        cruise_available: vehicle.cruise_available,
        acc_faulted: vehicle.acc_faulted,
        enabled,
        starting,
        stopping,
        esp_hold_confirmed: vehicle.esp_hold_confirmed,
        override_active,
        override_begin: state.override_debounce.would_lead(override_active),
        disabling: state.disable_debounce.would_lead(!enabled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcontrol_types::CruiseIntent;

    const PLATFORM: Platform = Platform::TorqueActuated { ea_spoof: false };

    fn active_cmd(accel: f64) -> DesiredCommand {
        DesiredCommand {
            accel,
            long_active: true,
            enabled: true,
            ..DesiredCommand::default()
        }
    }

    #[test]
    fn clamps_to_configured_limits() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();

        let frame = run(&params, PLATFORM, &mut state, &active_cmd(5.0), &VehicleState::default());
        assert_eq!(frame.accel, params.accel_max);

        let frame = run(&params, PLATFORM, &mut state, &active_cmd(-9.0), &VehicleState::default());
        assert_eq!(frame.accel, params.accel_min);
        assert_eq!(state.accel_last, params.accel_min);
    }

    #[test]
    fn inactive_forces_zero_accel() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();
        let cmd = DesiredCommand {
            accel: 1.5,
            long_active: false,
            ..DesiredCommand::default()
        };

        let frame = run(&params, PLATFORM, &mut state, &cmd, &VehicleState::default());
        assert_eq!(frame.accel, 0.0);
        assert!(!frame.status.enabled);
    }

    #[test]
    fn curvature_platform_gates_on_session_enabled() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();
        let cmd = DesiredCommand {
            accel: 1.0,
            long_active: false,
            enabled: true,
            ..DesiredCommand::default()
        };

        let frame = run(
            &params,
            Platform::CurvatureActuated,
            &mut state,
            &cmd,
            &VehicleState::default(),
        );
        assert_eq!(frame.accel, 1.0);
        assert!(frame.status.enabled);
    }

    #[test]
    fn stopping_and_starting_classification() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();

        let cmd = DesiredCommand {
            long_control_state: LongControlState::Stopping,
            long_active: true,
            ..DesiredCommand::default()
        };
        let frame = run(&params, PLATFORM, &mut state, &cmd, &VehicleState::default());
        assert!(frame.status.stopping);
        assert!(!frame.status.starting);

        // Tracking with a latched hold counts as starting.
        let vehicle = VehicleState {
            esp_hold_confirmed: true,
            v_ego: 5.0,
            ..VehicleState::default()
        };
        let frame = run(&params, PLATFORM, &mut state, &active_cmd(0.5), &vehicle);
        assert!(frame.status.starting);

        // Tracking below the stopping speed also counts as starting.
        let vehicle = VehicleState {
            v_ego: 0.2,
            ..VehicleState::default()
        };
        let frame = run(&params, PLATFORM, &mut state, &active_cmd(0.5), &vehicle);
        assert!(frame.status.starting);
    }

    #[test]
    fn override_edge_reference_trace() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();
        let cmd = DesiredCommand {
            long_active: true,
            cruise: CruiseIntent {
                override_active: true,
                ..CruiseIntent::default()
            },
            ..DesiredCommand::default()
        };

        let mut counts = Vec::new();
        let mut begins = Vec::new();
        for _ in 0..10 {
            let frame = run(&params, PLATFORM, &mut state, &cmd, &VehicleState::default());
            counts.push(state.override_debounce.count());
            begins.push(frame.status.override_begin);
        }
        assert_eq!(counts, vec![1, 2, 3, 4, 5, 5, 5, 5, 5, 5]);
        assert_eq!(
            begins,
            vec![true, true, true, true, false, false, false, false, false, false]
        );
    }

    #[test]
    fn gas_pedal_counts_as_override() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();
        let vehicle = VehicleState {
            gas_pressed: true,
            ..VehicleState::default()
        };
        let frame = run(&params, PLATFORM, &mut state, &active_cmd(0.5), &vehicle);
        assert!(frame.status.override_active);
        assert!(frame.status.override_begin);
    }

    #[test]
    fn disable_edge_counts_while_not_enabled() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();
        let disabled = DesiredCommand::default();

        for expected in [true, true, true, true, false] {
            let frame = run(&params, PLATFORM, &mut state, &disabled, &VehicleState::default());
            assert_eq!(frame.status.disabling, expected);
        }

        // Re-enabling resets the counter.
        let frame = run(&params, PLATFORM, &mut state, &active_cmd(0.5), &VehicleState::default());
        assert!(!frame.status.disabling);
        assert_eq!(state.disable_debounce.count(), 0);
    }

    #[test]
    fn snapshot_matches_run_without_advancing_counters() {
        let params = ControllerParams::default();
        let mut state = ControllerState::new();
        let cmd = active_cmd(0.5);
        let vehicle = VehicleState::default();

        let snapshot = status_snapshot(&params, PLATFORM, &state, &cmd, &vehicle);
        let frame = run(&params, PLATFORM, &mut state, &cmd, &vehicle);
        assert_eq!(snapshot, frame.status);
    }
}
