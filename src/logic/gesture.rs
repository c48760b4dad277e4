//! Long-Press Download Gesture
//!
//! Each grid item owns a `LongPress` state machine:
//!
//! ```text
//! Idle ──press──▶ Pressing{deadline} ──tick(now ≥ deadline)──▶ Fired
//!   ▲                  │                                          │
//!   └──moved/released──┘◀────────────────moved/released───────────┘
//! ```
//!
//! The pending timer is the `deadline` carried by `Pressing`; leaving that
//! state in any way drops it, so a cancelled press can never fire late.
//! The context menu (secondary click) bypasses the machine entirely.

use std::time::{Duration, Instant};

/// Hold time before a press turns into a download
pub const LONG_PRESS: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressing { deadline: Instant },
    /// Download already triggered for the current press
    Fired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    Download,
}

/// Result of a secondary click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuOutcome {
    pub action: GestureAction,
    /// The platform's own context menu must not open
    pub suppress_default: bool,
}

/// Per-item long-press tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongPress {
    state: PressState,
    hold: Duration,
}

impl Default for LongPress {
    fn default() -> Self {
        Self::new(LONG_PRESS)
    }
}

impl LongPress {
    pub fn new(hold: Duration) -> Self {
        Self {
            state: PressState::Idle,
            hold,
        }
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    /// Deadline of the armed timer, if a press is in progress
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            PressState::Pressing { deadline } => Some(deadline),
            PressState::Idle | PressState::Fired => None,
        }
    }

    /// Touch start: arm (or re-arm) the timer
    pub fn press(&mut self, now: Instant) {
        self.state = PressState::Pressing {
            deadline: now + self.hold,
        };
    }

    /// Touch move: the user is scrolling, not holding
    pub fn moved(&mut self) {
        self.reset();
    }

    /// Touch end: a tap, or the end of an already fired press
    pub fn released(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        match self.state {
            PressState::Pressing { .. } => {
                tracing::trace!("long-press cancelled before deadline");
                self.state = PressState::Idle;
            }
            PressState::Fired => self.state = PressState::Idle,
            PressState::Idle => {}
        }
    }

    /// Advance the timer; returns the download action at most once per press
    pub fn tick(&mut self, now: Instant) -> Option<GestureAction> {
        match self.state {
            PressState::Pressing { deadline } if now >= deadline => {
                self.state = PressState::Fired;
                Some(GestureAction::Download)
            }
            _ => None,
        }
    }

    /// Secondary click: always downloads, whatever the touch state
    pub fn context_menu(&self) -> ContextMenuOutcome {
        ContextMenuOutcome {
            action: GestureAction::Download,
            suppress_default: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let lp = LongPress::default();
        assert_eq!(lp.state(), PressState::Idle);
        assert!(lp.deadline().is_none());
    }

    #[test]
    fn test_press_arms_deadline() {
        let now = Instant::now();
        let mut lp = LongPress::default();
        lp.press(now);
        assert_eq!(lp.deadline(), Some(now + LONG_PRESS));
    }

    #[test]
    fn test_tick_before_deadline_does_nothing() {
        let now = Instant::now();
        let mut lp = LongPress::default();
        lp.press(now);
        assert_eq!(lp.tick(now + Duration::from_millis(799)), None);
        assert!(matches!(lp.state(), PressState::Pressing { .. }));
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let now = Instant::now();
        let mut lp = LongPress::default();
        lp.press(now);
        assert_eq!(lp.tick(now + LONG_PRESS), Some(GestureAction::Download));
        assert_eq!(lp.tick(now + Duration::from_secs(5)), None);
        assert_eq!(lp.state(), PressState::Fired);
    }

    #[test]
    fn test_release_after_fire_returns_to_idle() {
        let now = Instant::now();
        let mut lp = LongPress::default();
        lp.press(now);
        lp.tick(now + LONG_PRESS);
        lp.released();
        assert_eq!(lp.state(), PressState::Idle);
    }

    #[test]
    fn test_repress_rearms() {
        let now = Instant::now();
        let mut lp = LongPress::default();
        lp.press(now);
        lp.press(now + Duration::from_millis(500));
        assert_eq!(lp.tick(now + Duration::from_millis(900)), None);
        assert_eq!(
            lp.tick(now + Duration::from_millis(1300)),
            Some(GestureAction::Download)
        );
    }

    #[test]
    fn test_custom_hold() {
        let now = Instant::now();
        let mut lp = LongPress::new(Duration::from_millis(100));
        lp.press(now);
        assert_eq!(lp.tick(now + Duration::from_millis(100)), Some(GestureAction::Download));
    }

    #[test]
    fn test_context_menu_does_not_touch_press_state() {
        let now = Instant::now();
        let mut lp = LongPress::default();
        lp.press(now);
        let outcome = lp.context_menu();
        assert_eq!(outcome.action, GestureAction::Download);
        assert!(outcome.suppress_default);
        assert!(matches!(lp.state(), PressState::Pressing { .. }));
    }
}
