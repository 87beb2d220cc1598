//! Per-cycle actuation-command synthesizer for a vehicle driver-assistance
//! system.
//!
//! Given a desired lateral/longitudinal command and a decoded snapshot of
//! current vehicle state, [`CarController::update`] produces, once per
//! fixed-rate control tick:
//!
//! 1. a safety-constrained [`ResolvedActuators`] record reporting what was
//!    actually applied, and
//! 2. an ordered list of abstract [`OutboundMessage`]s to place on the bus.
//!
//! The core is the safety-limiting and state-machine logic: lateral
//! jerk/acceleration limits, the stuck-torque and uninterrupted-actuation
//! watchdogs imposed by the vehicle's own ECUs, and debounced transition
//! edges for override/disable. All of it must be reproducible across cycle
//! boundaries; persistent state lives in one exclusively owned
//! [`ControllerState`] record and is never shared.
//!
//! Bit-exact frame encoding, bus transport, signal decoding, and the policy
//! that decides whether control is active are external collaborators; the
//! platform seams are [`Platform`], [`PlatformCodes`], [`SteerRateLimiter`]
//! and [`FrameEncoder`].
//!
//! [`ResolvedActuators`]: carcontrol_types::ResolvedActuators
//! [`OutboundMessage`]: carcontrol_types::OutboundMessage
//! [`SteerRateLimiter`]: carcontrol_limits::SteerRateLimiter

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod buttons;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod encoder;
pub mod error;
pub mod lateral;
pub mod longitudinal;
pub mod platform;
pub mod prelude;
pub mod state;

pub use config::{ControllerParams, DT_CTRL};
pub use controller::CarController;
pub use debounce::EdgeDebounce;
pub use encoder::{FrameEncoder, RawFrame, encode_all};
pub use error::ControllerError;
pub use platform::{LongStatus, Platform, PlatformCodes, SessionConfig};
pub use state::ControllerState;

/// A specialized `Result` for controller construction and validation.
pub type ControllerResult<T = ()> = std::result::Result<T, ControllerError>;
