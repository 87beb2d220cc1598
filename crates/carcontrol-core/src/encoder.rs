//! Per-platform frame encoder seam.
//!
//! The controller emits abstract [`OutboundMessage`]s; turning them into
//! bit-exact frames for a specific vehicle variant is an external encoder's
//! job. The core never inspects the resulting bytes.

use carcontrol_types::OutboundMessage;

/// An encoded bus frame, opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    /// Bus arbitration identifier.
    pub id: u32,
    /// Target bus index.
    pub bus: u8,
    /// Encoded frame bytes.
    pub data: Vec<u8>,
}

/// Capability seam for bit-exact message encoding, one implementation per
/// vehicle variant.
pub trait FrameEncoder {
    /// Encode one abstract message into a raw frame.
    fn encode(&self, message: &OutboundMessage) -> RawFrame;
}

/// Encode an ordered message list, preserving its order.
pub fn encode_all<E>(encoder: &E, messages: &[OutboundMessage]) -> Vec<RawFrame>
where
    E: FrameEncoder + ?Sized,
{
    messages.iter().map(|message| encoder.encode(message)).collect()
}
