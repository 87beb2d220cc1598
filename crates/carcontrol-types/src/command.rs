//! Desired actuator command handed down by the upstream control policy.

use serde::{Deserialize, Serialize};

/// Longitudinal control state requested by the upstream policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LongControlState {
    /// Normal acceleration tracking.
    #[default]
    Tracking,
    /// Actively bringing the vehicle to a stop.
    Stopping,
}

/// Cruise-control intents forwarded from the upstream policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CruiseIntent {
    /// Request cancellation of the native cruise control.
    pub cancel: bool,
    /// Request resume of the native cruise control.
    pub resume: bool,
    /// Longitudinal control is being overridden by the driver.
    pub override_active: bool,
}

/// The unconstrained desired command for one control cycle.
///
/// Curvature and acceleration arrive already computed by the upstream
/// trajectory policy; this crate's consumers only constrain and relay them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesiredCommand {
    /// Desired path curvature in 1/m.
    pub curvature: f64,
    /// Desired steering effort, normalized to [-1, 1].
    pub steer: f64,
    /// Desired longitudinal acceleration in m/s².
    pub accel: f64,
    /// Requested longitudinal control state.
    pub long_control_state: LongControlState,
    /// Lateral control is active this cycle.
    pub lat_active: bool,
    /// Longitudinal control is active this cycle.
    pub long_active: bool,
    /// Overall session engagement flag.
    pub enabled: bool,
    /// The control system's own current curvature estimate in 1/m,
    /// used for drift compensation against the vehicle's self-report.
    pub current_curvature: f64,
    /// Native cruise-control intents.
    pub cruise: CruiseIntent,
}
