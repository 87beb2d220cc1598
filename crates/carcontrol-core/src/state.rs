//! Controller persistent state.

use crate::debounce::EdgeDebounce;

/// Persistent state for one controller session.
///
/// Created zeroed at session start, exclusively owned by one
/// [`CarController`](crate::CarController), mutated only by the per-tick
/// update, and discarded at session teardown. Fixed-size; nothing here is
/// allocated per cycle.
///
/// Invariants upheld by the update paths:
///
/// - `apply_torque_last`, `apply_curvature_last` and `accel_last` never
///   exceed the configured actuator limits after any update.
/// - `same_torque_frames` resets to zero whenever the applied torque
///   changes cycle-to-cycle.
/// - `actuation_frames` resets to zero on any cycle where actuation is
///   disabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    /// Steering torque applied on the previous steering frame.
    pub apply_torque_last: i32,
    /// Path curvature applied on the previous steering frame.
    pub apply_curvature_last: f64,
    /// Steering power level applied on the previous steering frame (0-100).
    pub steering_power_last: u8,
    /// Acceleration applied on the previous acceleration frame.
    pub accel_last: f64,
    /// Longitudinal override edge debounce (saturates at 5).
    pub override_debounce: EdgeDebounce,
    /// Longitudinal disable edge debounce (saturates at 5).
    pub disable_debounce: EdgeDebounce,
    /// Frames the applied torque has been unchanged.
    pub same_torque_frames: u32,
    /// Frames of uninterrupted steering actuation.
    pub actuation_frames: u32,
    /// The uninterrupted-actuation watchdog is approaching forced disable.
    pub soft_disable_alert: bool,
    /// Last observed stock cruise-button counter; `None` until the first
    /// cycle has run.
    pub last_button_counter: Option<u8>,
}

impl ControllerState {
    /// A zeroed state record, as at session start.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_neutral() {
        let state = ControllerState::new();
        assert_eq!(state.apply_torque_last, 0);
        assert_eq!(state.steering_power_last, 0);
        assert_eq!(state.last_button_counter, None);
        assert!(!state.soft_disable_alert);
        assert_eq!(state.override_debounce.count(), 0);
    }
}
