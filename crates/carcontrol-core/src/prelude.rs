//! Convenience re-exports for controller embedders.
//!
//! ```
//! use carcontrol_core::prelude::*;
//! ```

pub use crate::config::{ControllerParams, DT_CTRL};
pub use crate::controller::CarController;
pub use crate::encoder::{FrameEncoder, RawFrame, encode_all};
pub use crate::error::ControllerError;
pub use crate::platform::{LongStatus, Platform, PlatformCodes, SessionConfig};
pub use carcontrol_limits::{DriverAwareLimiter, SteerLimits, SteerRateLimiter, limit_curvature};
pub use carcontrol_scheduler::MessageCadences;
pub use carcontrol_types::{
    CruiseIntent, DesiredCommand, HudAlert, HudRequest, LongControlState, OutboundMessage,
    ResolvedActuators, SteeringPayload, VehicleState, VisualAlert,
};
