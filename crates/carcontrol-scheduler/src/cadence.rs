//! Per-message-class cadence configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cadence record failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CadenceError {
    /// Every cadence must be nonzero; a zero cadence can never send.
    #[error("message cadence `{name}` must be nonzero")]
    ZeroCadence {
        /// The offending field.
        name: &'static str,
    },
}

/// Send cadences per message class, in frames.
///
/// Cadences are independent integers; platform calibration data, not
/// algorithmic choices. Defaults are the reference platform's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCadences {
    /// Steering command (and spoof companion) cadence.
    pub steer_step: u32,
    /// Acceleration command cadence.
    pub acc_step: u32,
    /// Lane-departure HUD cadence.
    pub ldw_step: u32,
    /// Adaptive-cruise HUD cadence.
    pub acc_hud_step: u32,
    /// Fast keep-alive companion cadence (curvature platforms).
    pub keep_alive_step: u32,
    /// Slow status/HUD companion cadence (curvature platforms).
    pub status_hud_step: u32,
}

impl MessageCadences {
    /// Validate that every cadence is nonzero.
    pub fn validate(&self) -> Result<(), CadenceError> {
        let fields = [
            ("steer_step", self.steer_step),
            ("acc_step", self.acc_step),
            ("ldw_step", self.ldw_step),
            ("acc_hud_step", self.acc_hud_step),
            ("keep_alive_step", self.keep_alive_step),
            ("status_hud_step", self.status_hud_step),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(CadenceError::ZeroCadence { name });
            }
        }
        Ok(())
    }
}

impl Default for MessageCadences {
    fn default() -> Self {
        Self {
            steer_step: 2,
            acc_step: 2,
            ldw_step: 10,
            acc_hud_step: 6,
            keep_alive_step: 2,
            status_hud_step: 50,
        }
    }
}
