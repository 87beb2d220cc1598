//! HUD display intents forwarded into outbound HUD payloads.

use serde::{Deserialize, Serialize};

/// Visual alert requested by the upstream policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualAlert {
    /// No alert.
    #[default]
    None,
    /// Driver must take over steering.
    SteerRequired,
    /// Lane departure warning.
    Ldw,
}

/// Alert selected for the lane-departure HUD message.
///
/// The mapping from alert to the platform's display code is platform data
/// and happens in the per-platform encoder, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HudAlert {
    /// No alert displayed.
    #[default]
    None,
    /// Lane-assist takeover prompt.
    LaneAssistTakeOver,
}

/// HUD request for one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HudRequest {
    /// Requested visual alert.
    pub visual_alert: VisualAlert,
    /// Cruise set speed in m/s.
    pub set_speed: f64,
    /// A lead vehicle is currently tracked.
    pub lead_visible: bool,
    /// Following-distance setting, in display bars.
    pub lead_distance_bars: u8,
}
