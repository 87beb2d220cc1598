//! The per-tick cycle driver.

use crate::buttons;
use crate::config::{ControllerParams, DT_CTRL};
use crate::lateral;
use crate::longitudinal;
use crate::platform::{Platform, PlatformCodes, SessionConfig};
use crate::state::ControllerState;
use crate::ControllerResult;
use carcontrol_limits::SteerRateLimiter;
use carcontrol_scheduler::FrameScheduler;
use carcontrol_types::{
    AccHudPayload, AccelPayload, DesiredCommand, EpsSpoofPayload, HudAlert, HudRequest,
    LdwHudPayload, MS_TO_KPH, OutboundMessage, ResolvedActuators, SteeringPayload, VehicleState,
    VisualAlert,
};
use tracing::trace;

/// One controller session: persistent state, calibration, and the injected
/// platform collaborators.
///
/// Single-threaded by construction: each tick is a strictly ordered read of
/// inputs, update of owned state, and production of output. A missed tick
/// simply means the next tick proceeds from the last persisted state, which
/// is always valid and clamped.
pub struct CarController {
    session: SessionConfig,
    params: ControllerParams,
    rate_limiter: Box<dyn SteerRateLimiter>,
    codes: Box<dyn PlatformCodes>,
    scheduler: FrameScheduler,
    state: ControllerState,
    stuck_torque_frames: u32,
    alert_frames: u32,
}

impl CarController {
    /// Build a controller session.
    ///
    /// Fails closed on invalid calibration: no tick may run with a zero
    /// cadence, inverted acceleration limits, or an unusable steering limit
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`](crate::ControllerError) when `params`
    /// fails validation.
    pub fn new(
        session: SessionConfig,
        params: ControllerParams,
        rate_limiter: Box<dyn SteerRateLimiter>,
        codes: Box<dyn PlatformCodes>,
    ) -> ControllerResult<Self> {
        params.validate()?;
        Ok(Self {
            session,
            params,
            rate_limiter,
            codes,
            scheduler: FrameScheduler::new(),
            state: ControllerState::new(),
            stuck_torque_frames: params.stuck_torque_frames(),
            alert_frames: params.alert_frames(),
        })
    }

    /// Run one control cycle.
    ///
    /// Produces the resolved actuator command (always read back from
    /// persistent state after this cycle's update) and the ordered outbound
    /// message list. Message order within a cycle is fixed: steering (and
    /// spoof) → keep-alive → status HUD → acceleration → LDW HUD → ACC HUD
    /// → stock buttons.
    pub fn update(
        &mut self,
        cmd: &DesiredCommand,
        vehicle: &VehicleState,
        hud: &HudRequest,
        _now_nanos: u64,
    ) -> (ResolvedActuators, Vec<OutboundMessage>) {
        let mut can_sends = Vec::new();
        let cadences = self.params.cadences;

        // Steering.
        if self.scheduler.is_send_frame(cadences.steer_step) {
            match self.session.platform {
                Platform::TorqueActuated { ea_spoof } => {
                    let frame = lateral::run_torque(
                        &self.params,
                        self.rate_limiter.as_ref(),
                        &mut self.state,
                        cmd.lat_active,
                        cmd.steer,
                        vehicle.steering_torque,
                        self.stuck_torque_frames,
                        self.alert_frames,
                    );
                    can_sends.push(OutboundMessage::Steering(SteeringPayload::Torque {
                        apply_torque: frame.apply_torque,
                        hca_enabled: frame.hca_enabled,
                    }));

                    if ea_spoof {
                        let simulated_torque = lateral::ea_spoof_torque(
                            frame.apply_torque,
                            vehicle.steering_torque,
                            self.params.steer.steer_max,
                        );
                        can_sends.push(OutboundMessage::EpsSpoof(EpsSpoofPayload {
                            eps_stock: vehicle.eps_stock.clone(),
                            simulated_torque,
                        }));
                    }
                }
                Platform::CurvatureActuated => {
                    let dt = DT_CTRL * f64::from(cadences.steer_step);
                    let frame = lateral::run_curvature(
                        &self.params,
                        &mut self.state,
                        cmd.lat_active,
                        cmd.curvature,
                        cmd.current_curvature,
                        vehicle.curvature,
                        vehicle.v_ego,
                        dt,
                    );
                    can_sends.push(OutboundMessage::Steering(SteeringPayload::Curvature {
                        apply_curvature: frame.apply_curvature,
                        hca_enabled: frame.hca_enabled,
                        power: frame.power,
                    }));
                }
            }
        }

        // Companion messages, every session cycle regardless of lateral
        // state.
        if self.session.platform == Platform::CurvatureActuated {
            if self.scheduler.is_send_frame(cadences.keep_alive_step) {
                can_sends.push(OutboundMessage::KeepAlive);
            }
            if self.scheduler.is_send_frame(cadences.status_hud_step) {
                can_sends.push(OutboundMessage::StatusHud);
            }
        }

        // Acceleration.
        if self.session.longitudinal_enabled && self.scheduler.is_send_frame(cadences.acc_step) {
            let frame = longitudinal::run(
                &self.params,
                self.session.platform,
                &mut self.state,
                cmd,
                vehicle,
            );
            can_sends.push(OutboundMessage::AccAccel(AccelPayload {
                accel: frame.accel,
                control_value: self.codes.acc_control_value(&frame.status),
                hold_type: self.codes.acc_hold_type(&frame.status),
            }));
        }

        // Lane-departure HUD.
        if self.scheduler.is_send_frame(cadences.ldw_step) {
            let alert = match hud.visual_alert {
                VisualAlert::SteerRequired | VisualAlert::Ldw => HudAlert::LaneAssistTakeOver,
                VisualAlert::None => HudAlert::None,
            };
            can_sends.push(OutboundMessage::LdwHud(LdwHudPayload {
                ldw_stock: vehicle.ldw_stock.clone(),
                lat_active: cmd.lat_active,
                steering_pressed: vehicle.steering_pressed,
                alert,
            }));
        }

        // Adaptive-cruise HUD.
        if self.session.longitudinal_enabled && self.scheduler.is_send_frame(cadences.acc_hud_step)
        {
            let status = longitudinal::status_snapshot(
                &self.params,
                self.session.platform,
                &self.state,
                cmd,
                vehicle,
            );
            can_sends.push(OutboundMessage::AccHud(AccHudPayload {
                status_value: self.codes.acc_hud_status(&status),
                set_speed_kph: hud.set_speed * MS_TO_KPH,
                lead_visible: hud.lead_visible,
                lead_distance_bars: hud.lead_distance_bars,
                esp_hold_confirmed: vehicle.esp_hold_confirmed,
            }));
        }

        // Stock buttons, every cycle.
        if let Some(payload) = buttons::run(
            self.session.stock_cruise,
            &self.state,
            vehicle,
            &cmd.cruise,
        ) {
            can_sends.push(OutboundMessage::CruiseButtons(payload));
        }

        let resolved = ResolvedActuators {
            steer: f64::from(self.state.apply_torque_last)
                / f64::from(self.params.steer.steer_max),
            steer_output: self.state.apply_torque_last,
            curvature: self.state.apply_curvature_last,
            accel: self.state.accel_last,
        };

        self.state.last_button_counter = Some(vehicle.button_counter);
        self.scheduler.advance();
        trace!(
            frame = self.scheduler.frame(),
            messages = can_sends.len(),
            "cycle complete"
        );

        (resolved, can_sends)
    }

    /// Current persistent state, for observation and tests.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Session configuration fixed at construction.
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    /// Calibration record fixed at construction.
    pub fn params(&self) -> &ControllerParams {
        &self.params
    }

    /// The uninterrupted-actuation watchdog is close to a forced disable.
    pub fn soft_disable_alert(&self) -> bool {
        self.state.soft_disable_alert
    }

    /// Frames completed since session start.
    pub fn frame(&self) -> u64 {
        self.scheduler.frame()
    }
}

impl std::fmt::Debug for CarController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarController")
            .field("session", &self.session)
            .field("frame", &self.scheduler.frame())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
