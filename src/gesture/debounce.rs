//! Dwell-time gesture debouncing
//!
//! Camera jitter and momentary misclassification must not destabilize the
//! mode machine, so a raw gesture only becomes "confirmed" after it has been
//! observed unchanged for a minimum hold time. Any change, even one frame
//! before the threshold, resets the clock.

use crate::config;
use crate::gesture::Gesture;

pub struct GestureDebouncer {
    last: Gesture,
    changed_at_ms: f64,
}

impl GestureDebouncer {
    pub fn new() -> Self {
        Self {
            last: Gesture::None,
            changed_at_ms: 0.0,
        }
    }

    /// Feed one frame's raw classification.
    ///
    /// Returns the confirmed gesture once the same raw value has been held
    /// for at least the confirmation window, and keeps returning it on every
    /// subsequent frame while it persists. `Gesture::None` flows through the
    /// same path; it confirms like any other value but matches no transition.
    pub fn observe(&mut self, raw: Gesture, now_ms: f64) -> Option<Gesture> {
        if raw != self.last {
            self.last = raw;
            self.changed_at_ms = now_ms;
            return None;
        }
        if now_ms - self.changed_at_ms >= config::GESTURE_CONFIRM_MS {
            Some(raw)
        } else {
            None
        }
    }

    /// Raw gesture currently being held (for the UI readout).
    pub fn current(&self) -> Gesture {
        self.last
    }
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirms_after_hold_time() {
        let mut d = GestureDebouncer::new();
        assert_eq!(d.observe(Gesture::Fist, 1000.0), None);
        assert_eq!(d.observe(Gesture::Fist, 1200.0), None);
        assert_eq!(d.observe(Gesture::Fist, 1299.0), None);
        assert_eq!(d.observe(Gesture::Fist, 1300.0), Some(Gesture::Fist));
        // Every later frame with the same raw gesture stays confirmed.
        assert_eq!(d.observe(Gesture::Fist, 1316.0), Some(Gesture::Fist));
    }

    #[test]
    fn change_resets_even_one_ms_before_threshold() {
        let mut d = GestureDebouncer::new();
        d.observe(Gesture::Palm, 0.0);
        assert_eq!(d.observe(Gesture::Palm, 299.0), None);
        // Flicker to fist right at the edge: palm's timer is gone.
        assert_eq!(d.observe(Gesture::Fist, 300.0), None);
        assert_eq!(d.observe(Gesture::Palm, 316.0), None);
        assert_eq!(d.observe(Gesture::Palm, 599.0), None);
        assert_eq!(d.observe(Gesture::Palm, 616.0), Some(Gesture::Palm));
    }

    #[test]
    fn alternating_gestures_never_confirm() {
        let mut d = GestureDebouncer::new();
        for i in 0..100 {
            let g = if i % 2 == 0 { Gesture::Fist } else { Gesture::Palm };
            assert_eq!(d.observe(g, i as f64 * 299.0), None);
        }
    }

    #[test]
    fn no_hand_confirms_none() {
        let mut d = GestureDebouncer::new();
        d.observe(Gesture::None, 0.0);
        // None confirms like any value; the transition table ignores it.
        assert_eq!(d.observe(Gesture::None, 400.0), Some(Gesture::None));
    }
}
