//! Decoded vehicle state snapshot, read-only for the duration of one cycle.

use serde::{Deserialize, Serialize};

/// An opaque block of stock message signals.
///
/// Some outbound messages must echo signals from the vehicle's own stock
/// messages unmodified (EPS, lane-departure HUD, cruise buttons). The
/// decoder captures them as an opaque block; the controller clones the block
/// into the corresponding outbound payload without ever interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PassthroughBlock(pub Vec<u8>);

impl PassthroughBlock {
    /// An empty block, for platforms or tests without stock signals.
    pub fn empty() -> Self {
        Self(Vec::new())
    }
}

/// Snapshot of current vehicle state, decoded by an external collaborator.
///
/// The controller never mutates this; it is valid for exactly one cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleState {
    /// Current speed in m/s.
    pub v_ego: f64,
    /// Vehicle's self-reported current path curvature in 1/m.
    pub curvature: f64,
    /// Measured driver steering torque in raw actuator units.
    pub steering_torque: f64,
    /// Driver is applying meaningful steering input.
    pub steering_pressed: bool,
    /// Native cruise control reports itself available.
    pub cruise_available: bool,
    /// Native longitudinal subsystem reports a fault.
    pub acc_faulted: bool,
    /// Stability-control system has latched a full stop.
    pub esp_hold_confirmed: bool,
    /// Gas pedal is pressed.
    pub gas_pressed: bool,
    /// Monotonically incrementing counter from the stock cruise-button
    /// message; edge-detected to gate button pass-through.
    pub button_counter: u8,
    /// Stock EPS signals echoed into the EPS spoof message.
    pub eps_stock: PassthroughBlock,
    /// Stock lane-departure-warning signals echoed into the LDW HUD message.
    pub ldw_stock: PassthroughBlock,
    /// Stock cruise-button signals echoed into the button message.
    pub button_stock: PassthroughBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_block_is_opaque_payload() {
        let block = PassthroughBlock(vec![0xde, 0xad, 0xbe, 0xef]);
        let cloned = block.clone();
        assert_eq!(block, cloned);
        assert_eq!(PassthroughBlock::empty().0.len(), 0);
    }

    #[test]
    fn default_state_is_neutral() {
        let state = VehicleState::default();
        assert_eq!(state.v_ego, 0.0);
        assert!(!state.esp_hold_confirmed);
        assert_eq!(state.button_counter, 0);
    }
}
