//! Platform selection and the per-platform code-composition seam.

use serde::{Deserialize, Serialize};

/// How the vehicle's steering rack is commanded.
///
/// Chosen once per session by vehicle platform; the two variants are never
/// mixed within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Rack accepts a signed torque command every steering frame.
    TorqueActuated {
        /// The platform carries a stock driver-monitoring subsystem whose
        /// inactivity detection must be placated with a torque spoof.
        ea_spoof: bool,
    },
    /// Rack accepts a limited curvature plus a power level, with companion
    /// keep-alive and status messages.
    CurvatureActuated,
}

/// Session-level configuration fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Steering actuation variant.
    pub platform: Platform,
    /// This session performs longitudinal control.
    pub longitudinal_enabled: bool,
    /// This session drives the vehicle's native cruise control through its
    /// stock button protocol.
    pub stock_cruise: bool,
}

/// Longitudinal condition summary handed to the platform code composer.
///
/// These are the raw branch conditions of the longitudinal state machine;
/// the mapping to protocol-specific mode/hold/HUD codes is platform data
/// behind [`PlatformCodes`], not core logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LongStatus {
    /// Native cruise control reports itself available.
    pub cruise_available: bool,
    /// Native longitudinal subsystem reports a fault.
    pub acc_faulted: bool,
    /// Longitudinal control is engaged this cycle.
    pub enabled: bool,
    /// A start-from-stop is being commanded.
    pub starting: bool,
    /// The vehicle is being brought to a stop.
    pub stopping: bool,
    /// Stability control has latched a full stop.
    pub esp_hold_confirmed: bool,
    /// The driver is overriding longitudinal control.
    pub override_active: bool,
    /// Leading edge of the override condition (first frames only).
    pub override_begin: bool,
    /// Leading edge of the disable condition (first frames only).
    pub disabling: bool,
}

/// Per-platform composition of protocol mode/hold/status codes.
///
/// One implementation per platform family, injected at session
/// construction. Implementations are pure lookups from the condition
/// summary to protocol codes.
pub trait PlatformCodes {
    /// Control-mode code for the acceleration command message.
    fn acc_control_value(&self, status: &LongStatus) -> u8;

    /// Hold-type code for the acceleration command message.
    fn acc_hold_type(&self, status: &LongStatus) -> u8;

    /// Status code for the adaptive-cruise HUD message.
    fn acc_hud_status(&self, status: &LongStatus) -> u8;
}
