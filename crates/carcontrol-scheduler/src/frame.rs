//! Monotonic frame counter with modulo cadence gating.

/// Owns the session's monotonically increasing cycle counter.
///
/// [`advance`](Self::advance) must be called exactly once per cycle-driver
/// invocation, after all per-cycle work completes; a message class with
/// cadence `n` sends iff `frame % n == 0`, so every class sends on frame 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameScheduler {
    frame: u64,
}

impl FrameScheduler {
    /// A scheduler at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame number.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether the current frame is a send frame for the given cadence.
    ///
    /// `cadence` must be nonzero; [`MessageCadences::validate`] enforces
    /// this before a controller is constructed.
    ///
    /// [`MessageCadences::validate`]: crate::MessageCadences::validate
    #[inline]
    pub fn is_send_frame(&self, cadence: u32) -> bool {
        self.frame % u64::from(cadence) == 0
    }

    /// Advance to the next frame.
    #[inline]
    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_advances_by_one() {
        let mut scheduler = FrameScheduler::new();
        assert_eq!(scheduler.frame(), 0);
        scheduler.advance();
        scheduler.advance();
        assert_eq!(scheduler.frame(), 2);
    }

    #[test]
    fn frame_zero_is_send_frame_for_every_cadence() {
        let scheduler = FrameScheduler::new();
        for cadence in [1, 2, 5, 10, 50, 100] {
            assert!(scheduler.is_send_frame(cadence));
        }
    }

    #[test]
    fn cadence_one_sends_every_frame() {
        let mut scheduler = FrameScheduler::new();
        for _ in 0..25 {
            assert!(scheduler.is_send_frame(1));
            scheduler.advance();
        }
    }

    #[test]
    fn cadence_fifty_sends_on_multiples_only() {
        let mut scheduler = FrameScheduler::new();
        let mut send_frames = Vec::new();
        for frame in 0..160 {
            if scheduler.is_send_frame(50) {
                send_frames.push(frame);
            }
            scheduler.advance();
        }
        assert_eq!(send_frames, vec![0, 50, 100, 150]);
    }

    #[test]
    fn independent_cadences_do_not_interact() {
        let mut scheduler = FrameScheduler::new();
        let mut steer = 0u32;
        let mut hud = 0u32;
        for _ in 0..100 {
            if scheduler.is_send_frame(2) {
                steer += 1;
            }
            if scheduler.is_send_frame(10) {
                hud += 1;
            }
            scheduler.advance();
        }
        assert_eq!(steer, 50);
        assert_eq!(hud, 10);
    }
}
