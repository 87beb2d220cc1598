//! Shared data model for the OpenCarControl actuation-command synthesizer.
//!
//! This crate defines the records that cross the per-tick boundary of the
//! car controller:
//!
//! - [`DesiredCommand`]: the upstream policy's desired lateral/longitudinal
//!   command for this cycle
//! - [`VehicleState`]: the decoded snapshot of current vehicle state
//! - [`HudRequest`]: display intents forwarded into HUD payloads
//! - [`OutboundMessage`]: the abstract outbound bus messages produced each
//!   cycle, one closed variant per message class
//! - [`ResolvedActuators`]: the safety-constrained command actually applied,
//!   reported back upstream
//!
//! # Design
//!
//! All records are plain owned data with no behavior beyond constructors and
//! small accessors. Bit-level encoding of [`OutboundMessage`] payloads into
//! raw frames is a per-platform concern and lives behind the encoder seam in
//! `carcontrol-core`; nothing in this crate inspects frame bytes.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod command;
pub mod hud;
pub mod message;
pub mod state;

pub use command::{CruiseIntent, DesiredCommand, LongControlState};
pub use hud::{HudAlert, HudRequest, VisualAlert};
pub use message::{
    AccHudPayload, AccelPayload, ButtonsPayload, EpsSpoofPayload, LdwHudPayload, MessageClass,
    OutboundMessage, SteeringPayload,
};
pub use state::{PassthroughBlock, VehicleState};

use serde::{Deserialize, Serialize};

/// Meters-per-second to kilometers-per-hour conversion factor.
pub const MS_TO_KPH: f64 = 3.6;

/// The safety-constrained actuator command actually applied this cycle.
///
/// Always derived from controller persistent state after the cycle's update,
/// never from the unclamped desired input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedActuators {
    /// Applied steering effort, normalized to the configured torque limit.
    pub steer: f64,
    /// Applied steering torque in raw actuator units.
    pub steer_output: i32,
    /// Applied path curvature in 1/m.
    pub curvature: f64,
    /// Applied longitudinal acceleration in m/s².
    pub accel: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_actuators_default_is_neutral() {
        let resolved = ResolvedActuators::default();
        assert_eq!(resolved.steer_output, 0);
        assert_eq!(resolved.steer, 0.0);
        assert_eq!(resolved.curvature, 0.0);
        assert_eq!(resolved.accel, 0.0);
    }

    #[test]
    fn ms_to_kph_round_trip() {
        let speed_ms = 27.5;
        assert!((speed_ms * MS_TO_KPH - 99.0).abs() < 1e-9);
    }
}
