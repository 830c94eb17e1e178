//! Visual mode state machine
//!
//! One mode is active at all times. Confirmed gestures drive transitions
//! through a fixed table; everything else is a no-op. Transition-progress is
//! a normalized timer since the last transition, used for easing and as the
//! Implode exit guard so an explode/implode pair cannot bounce back
//! instantly.

use crate::config;
use crate::gesture::Gesture;

/// The single active high-level behavior of the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Follow,
    Explode,
    Implode,
    TextForm,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Follow => "follow",
            Mode::Explode => "explode",
            Mode::Implode => "implode",
            Mode::TextForm => "text",
        }
    }
}

/// A committed mode change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
}

/// Static transition table. Unlisted pairs are no-ops; `Gesture::None`
/// matches nothing. The Implode exit to Follow is gated on progress so a
/// confirmed fist held over from the Explode entry cannot fire immediately.
pub fn next_mode(mode: Mode, gesture: Gesture, progress: f32) -> Option<Mode> {
    match (mode, gesture) {
        (Mode::Idle, Gesture::Fist) => Some(Mode::Follow),
        (Mode::Follow, Gesture::Palm) => Some(Mode::Explode),
        (Mode::Follow, Gesture::Ilu) => Some(Mode::TextForm),
        (Mode::Explode, Gesture::Fist) => Some(Mode::Implode),
        (Mode::Implode, Gesture::Fist) if progress >= config::IMPLODE_EXIT_PROGRESS => {
            Some(Mode::Follow)
        }
        (Mode::Implode, Gesture::Palm) => Some(Mode::Explode),
        (Mode::Implode, Gesture::Ilu) => Some(Mode::TextForm),
        (Mode::TextForm, Gesture::Fist) => Some(Mode::Follow),
        (Mode::TextForm, Gesture::Palm) => Some(Mode::Explode),
        _ => None,
    }
}

pub struct ModeMachine {
    mode: Mode,
    previous: Mode,
    /// Normalized [0,1] time since the last transition.
    progress: f32,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            previous: Mode::Idle,
            progress: 0.0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[allow(dead_code)]
    pub fn previous(&self) -> Mode {
        self.previous
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advance transition-progress by one frame's wall time.
    pub fn advance(&mut self, dt_s: f32) {
        self.progress = (self.progress + dt_s * config::PROGRESS_RATE).min(1.0);
    }

    /// Apply a confirmed gesture. On a table hit the mode changes, progress
    /// resets, and the committed transition is returned so the caller can run
    /// its side effect (Explode seeds particle velocities).
    pub fn apply(&mut self, confirmed: Gesture) -> Option<Transition> {
        let to = next_mode(self.mode, confirmed, self.progress)?;
        let transition = Transition { from: self.mode, to };
        self.previous = self.mode;
        self.mode = to;
        self.progress = 0.0;
        Some(transition)
    }
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let m = ModeMachine::new();
        assert_eq!(m.mode(), Mode::Idle);
        assert_eq!(m.progress(), 0.0);
    }

    #[test]
    fn walks_the_full_table() {
        let mut m = ModeMachine::new();

        assert_eq!(
            m.apply(Gesture::Fist),
            Some(Transition { from: Mode::Idle, to: Mode::Follow })
        );
        assert_eq!(
            m.apply(Gesture::Palm),
            Some(Transition { from: Mode::Follow, to: Mode::Explode })
        );
        assert_eq!(
            m.apply(Gesture::Fist),
            Some(Transition { from: Mode::Explode, to: Mode::Implode })
        );

        // Implode -> Follow only after the guard clears.
        m.advance(2.0);
        assert_eq!(
            m.apply(Gesture::Fist),
            Some(Transition { from: Mode::Implode, to: Mode::Follow })
        );

        assert_eq!(m.apply(Gesture::Ilu).map(|t| t.to), Some(Mode::TextForm));
        assert_eq!(m.apply(Gesture::Palm).map(|t| t.to), Some(Mode::Explode));
    }

    #[test]
    fn implode_exit_blocked_below_guard() {
        let mut m = ModeMachine::new();
        m.apply(Gesture::Fist);
        m.apply(Gesture::Palm);
        m.apply(Gesture::Fist);
        assert_eq!(m.mode(), Mode::Implode);

        // 1 second at 0.8/s -> progress 0.8, still under the 0.9 guard.
        m.advance(1.0);
        assert_eq!(m.apply(Gesture::Fist), None);
        assert_eq!(m.mode(), Mode::Implode);

        m.advance(0.2);
        assert!(m.apply(Gesture::Fist).is_some());
        assert_eq!(m.mode(), Mode::Follow);
    }

    #[test]
    fn implode_palm_and_ilu_ignore_guard() {
        let mut m = ModeMachine::new();
        m.apply(Gesture::Fist);
        m.apply(Gesture::Palm);
        m.apply(Gesture::Fist);
        // No advance: progress is 0 and palm still fires.
        assert_eq!(m.apply(Gesture::Palm).map(|t| t.to), Some(Mode::Explode));
    }

    #[test]
    fn unlisted_pairs_are_noops() {
        let mut m = ModeMachine::new();
        assert_eq!(m.apply(Gesture::Palm), None);
        assert_eq!(m.apply(Gesture::Ilu), None);
        assert_eq!(m.apply(Gesture::Other), None);
        assert_eq!(m.apply(Gesture::None), None);
        assert_eq!(m.mode(), Mode::Idle);

        m.apply(Gesture::Fist);
        assert_eq!(m.apply(Gesture::Fist), None);
        assert_eq!(m.mode(), Mode::Follow);
    }

    #[test]
    fn progress_saturates_at_one() {
        let mut m = ModeMachine::new();
        m.advance(10.0);
        assert_eq!(m.progress(), 1.0);
    }

    #[test]
    fn transition_resets_progress() {
        let mut m = ModeMachine::new();
        m.advance(1.0);
        m.apply(Gesture::Fist);
        assert_eq!(m.progress(), 0.0);
    }
}
