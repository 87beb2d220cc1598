//! Abstract outbound bus messages.
//!
//! Each variant of [`OutboundMessage`] is one message class with its payload
//! record. The controller emits these in a fixed order each cycle; a
//! per-platform encoder collaborator turns them into bit-exact frames.

use crate::hud::HudAlert;
use crate::state::PassthroughBlock;
use serde::{Deserialize, Serialize};

/// Message-class tag, used for cadence bookkeeping and encoder dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageClass {
    /// Steering actuation command (HCA).
    Steering,
    /// Driver-monitoring torque spoof alongside the steering message.
    EpsSpoof,
    /// Fast keep-alive companion message (curvature platforms).
    KeepAlive,
    /// Slow status/HUD companion message (curvature platforms).
    StatusHud,
    /// Longitudinal acceleration command.
    AccAccel,
    /// Lane-departure-warning HUD message.
    LdwHud,
    /// Adaptive-cruise HUD message.
    AccHud,
    /// Stock cruise-control button message.
    CruiseButtons,
}

/// Steering actuation payload; form depends on how the platform's rack is
/// commanded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SteeringPayload {
    /// Torque-actuated rack: signed torque in raw actuator units.
    Torque {
        /// Applied steering torque, rate- and driver-limited.
        apply_torque: i32,
        /// Actuation request flag; false commands the rack to release.
        hca_enabled: bool,
    },
    /// Curvature-actuated rack: limited curvature plus a power level.
    Curvature {
        /// Applied path curvature in 1/m, safety-limited.
        apply_curvature: f64,
        /// Actuation request flag.
        hca_enabled: bool,
        /// Steering power level, 0-100.
        power: u8,
    },
}

/// Payload of the driver-monitoring torque spoof message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsSpoofPayload {
    /// Stock EPS signals, echoed unmodified.
    pub eps_stock: PassthroughBlock,
    /// Simulated driver torque presented to the monitoring subsystem.
    pub simulated_torque: f64,
}

/// Payload of the longitudinal acceleration command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelPayload {
    /// Clamped longitudinal acceleration in m/s².
    pub accel: f64,
    /// Platform-specific control-mode code.
    pub control_value: u8,
    /// Platform-specific hold-type code.
    pub hold_type: u8,
}

/// Payload of the lane-departure HUD message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdwHudPayload {
    /// Stock LDW signals, echoed unmodified.
    pub ldw_stock: PassthroughBlock,
    /// Lateral control is active.
    pub lat_active: bool,
    /// Driver is applying steering input.
    pub steering_pressed: bool,
    /// Selected alert.
    pub alert: HudAlert,
}

/// Payload of the adaptive-cruise HUD message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccHudPayload {
    /// Platform-specific ACC HUD status code.
    pub status_value: u8,
    /// Cruise set speed in km/h.
    pub set_speed_kph: f64,
    /// A lead vehicle is displayed.
    pub lead_visible: bool,
    /// Following-distance setting, in display bars.
    pub lead_distance_bars: u8,
    /// Stability-control full stop is latched.
    pub esp_hold_confirmed: bool,
}

/// Payload of the stock cruise-button pass-through message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonsPayload {
    /// Stock button signals, echoed unmodified.
    pub button_stock: PassthroughBlock,
    /// Cancel intent.
    pub cancel: bool,
    /// Resume intent.
    pub resume: bool,
}

/// One abstract outbound message, tagged by class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutboundMessage {
    /// Steering actuation command.
    Steering(SteeringPayload),
    /// Driver-monitoring torque spoof.
    EpsSpoof(EpsSpoofPayload),
    /// Fast keep-alive companion message.
    KeepAlive,
    /// Slow status/HUD companion message.
    StatusHud,
    /// Longitudinal acceleration command.
    AccAccel(AccelPayload),
    /// Lane-departure HUD message.
    LdwHud(LdwHudPayload),
    /// Adaptive-cruise HUD message.
    AccHud(AccHudPayload),
    /// Stock cruise-button message.
    CruiseButtons(ButtonsPayload),
}

impl OutboundMessage {
    /// The message class this payload belongs to.
    pub fn class(&self) -> MessageClass {
        match self {
            Self::Steering(_) => MessageClass::Steering,
            Self::EpsSpoof(_) => MessageClass::EpsSpoof,
            Self::KeepAlive => MessageClass::KeepAlive,
            Self::StatusHud => MessageClass::StatusHud,
            Self::AccAccel(_) => MessageClass::AccAccel,
            Self::LdwHud(_) => MessageClass::LdwHud,
            Self::AccHud(_) => MessageClass::AccHud,
            Self::CruiseButtons(_) => MessageClass::CruiseButtons,
        }
    }
}
