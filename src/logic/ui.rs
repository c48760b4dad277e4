//! UI state transition logic
//!
//! Pure functions for focus cycling and frame timing.

use std::time::{Duration, Instant};

use crate::model::FocusPane;

/// Toasts disappear after this long
const TOAST_MS: u128 = 1500;

/// Default event poll timeout when nothing is pending
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Idle time before the selected image preview is fetched
const PREVIEW_IDLE: Duration = Duration::from_millis(300);

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_MS
}

/// Check whether the user has been idle long enough to load a preview
pub fn should_load_preview(idle: Duration) -> bool {
    idle >= PREVIEW_IDLE
}

/// Cycle focus: Folders → Subfolders (when shown) → Grid → Folders
///
/// # Examples
/// ```
/// use katui::logic::ui::next_focus;
/// use katui::model::FocusPane;
///
/// assert_eq!(next_focus(FocusPane::Folders, true), FocusPane::Subfolders);
/// assert_eq!(next_focus(FocusPane::Folders, false), FocusPane::Grid);
/// assert_eq!(next_focus(FocusPane::Grid, true), FocusPane::Folders);
/// ```
pub fn next_focus(current: FocusPane, subfolders_visible: bool) -> FocusPane {
    match current {
        FocusPane::Folders if subfolders_visible => FocusPane::Subfolders,
        FocusPane::Folders => FocusPane::Grid,
        FocusPane::Subfolders => FocusPane::Grid,
        FocusPane::Grid => FocusPane::Folders,
    }
}

/// Reverse of `next_focus`
pub fn prev_focus(current: FocusPane, subfolders_visible: bool) -> FocusPane {
    match current {
        FocusPane::Folders => FocusPane::Grid,
        FocusPane::Subfolders => FocusPane::Folders,
        FocusPane::Grid if subfolders_visible => FocusPane::Subfolders,
        FocusPane::Grid => FocusPane::Folders,
    }
}

/// Event poll timeout: shrink it so an armed long-press fires on time
pub fn poll_timeout(press_deadline: Option<Instant>, now: Instant) -> Duration {
    match press_deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
        None => IDLE_POLL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
    }

    #[test]
    fn test_preview_idle_threshold() {
        assert!(!should_load_preview(Duration::from_millis(299)));
        assert!(should_load_preview(Duration::from_millis(300)));
    }

    #[test]
    fn test_focus_skips_hidden_subfolders() {
        assert_eq!(prev_focus(FocusPane::Grid, false), FocusPane::Folders);
        assert_eq!(prev_focus(FocusPane::Grid, true), FocusPane::Subfolders);
        assert_eq!(next_focus(FocusPane::Subfolders, true), FocusPane::Grid);
    }

    #[test]
    fn test_poll_timeout_tracks_deadline() {
        let now = Instant::now();
        assert_eq!(poll_timeout(None, now), IDLE_POLL);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_millis(40)), now),
            Duration::from_millis(40)
        );
        assert_eq!(poll_timeout(Some(now + Duration::from_secs(2)), now), IDLE_POLL);
        assert_eq!(poll_timeout(Some(now), now + Duration::from_millis(5)), Duration::ZERO);
    }
}
