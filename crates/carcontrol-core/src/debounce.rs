//! Saturating edge-debounce counter.

/// A saturating up/reset counter that smooths a boolean condition's edges
/// across several cycles.
///
/// While the condition holds the counter climbs by one per update and
/// saturates at [`EdgeDebounce::SATURATION`]; the first update where the
/// condition no longer holds resets it to zero. Downstream protocols that
/// refuse single-frame transitions consume the leading-edge flag returned
/// by [`update`](Self::update).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDebounce {
    count: u8,
}

impl EdgeDebounce {
    /// Counter ceiling; the leading edge is over once the counter reaches it.
    pub const SATURATION: u8 = 5;

    /// Advance the counter for this cycle's condition value.
    ///
    /// Returns true while the condition holds and the counter has not yet
    /// saturated, i.e. during the leading edge of the condition.
    pub fn update(&mut self, condition: bool) -> bool {
        self.count = if condition {
            self.count.saturating_add(1).min(Self::SATURATION)
        } else {
            0
        };
        condition && self.count < Self::SATURATION
    }

    /// Whether a hypothetical update with this condition would report a
    /// leading edge, without advancing the counter.
    pub fn would_lead(&self, condition: bool) -> bool {
        let next = if condition {
            self.count.saturating_add(1).min(Self::SATURATION)
        } else {
            0
        };
        condition && next < Self::SATURATION
    }

    /// Current counter value.
    #[inline]
    pub fn count(&self) -> u8 {
        self.count
    }
}
