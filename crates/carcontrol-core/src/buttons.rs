//! Stock cruise-control button pass-through.

use crate::state::ControllerState;
use carcontrol_types::{ButtonsPayload, CruiseIntent, VehicleState};

/// Forward cancel/resume intents through the stock button protocol.
///
/// Runs every cycle. A message is emitted only when the vehicle's reported
/// button counter differs from the last-seen value (so the injected frame
/// rides a fresh counter slot) and an intent is actually requested. The
/// caller records the current counter at the end of every cycle regardless.
pub(crate) fn run(
    stock_cruise: bool,
    state: &ControllerState,
    vehicle: &VehicleState,
    cruise: &CruiseIntent,
) -> Option<ButtonsPayload> {
    let counter_changed = state.last_button_counter != Some(vehicle.button_counter);
    let send_ready = stock_cruise && counter_changed;

    if send_ready && (cruise.cancel || cruise.resume) {
        Some(ButtonsPayload {
            button_stock: vehicle.button_stock.clone(),
            cancel: cruise.cancel,
            resume: cruise.resume,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcontrol_types::PassthroughBlock;

    fn vehicle_with_counter(counter: u8) -> VehicleState {
        VehicleState {
            button_counter: counter,
            button_stock: PassthroughBlock(vec![counter]),
            ..VehicleState::default()
        }
    }

    fn cancel_intent() -> CruiseIntent {
        CruiseIntent {
            cancel: true,
            ..CruiseIntent::default()
        }
    }

    #[test]
    fn first_cycle_counts_as_changed() {
        let state = ControllerState::new();
        let payload = run(true, &state, &vehicle_with_counter(7), &cancel_intent());
        assert!(payload.is_some());
    }

    #[test]
    fn unchanged_counter_blocks_send() {
        let mut state = ControllerState::new();
        state.last_button_counter = Some(7);
        let payload = run(true, &state, &vehicle_with_counter(7), &cancel_intent());
        assert!(payload.is_none());

        let payload = run(true, &state, &vehicle_with_counter(8), &cancel_intent());
        assert!(payload.is_some());
    }

    #[test]
    fn no_intent_no_message() {
        let state = ControllerState::new();
        let payload = run(
            true,
            &state,
            &vehicle_with_counter(3),
            &CruiseIntent::default(),
        );
        assert!(payload.is_none());
    }

    #[test]
    fn disabled_without_stock_cruise() {
        let state = ControllerState::new();
        let payload = run(false, &state, &vehicle_with_counter(3), &cancel_intent());
        assert!(payload.is_none());
    }

    #[test]
    fn payload_echoes_stock_block_and_intents() {
        let state = ControllerState::new();
        let intent = CruiseIntent {
            cancel: false,
            resume: true,
            override_active: false,
        };
        let payload = run(true, &state, &vehicle_with_counter(9), &intent);
        match payload {
            Some(payload) => {
                assert!(payload.resume);
                assert!(!payload.cancel);
                assert_eq!(payload.button_stock, PassthroughBlock(vec![9]));
            }
            None => panic!("expected a button message"),
        }
    }
}
