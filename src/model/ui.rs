//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! focus, list cursors, search input, toasts, and the screen areas recorded
//! at the last render for mouse hit-testing.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::types::FocusPane;

/// Screen areas from the last frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaneAreas {
    /// Inner area of the top folder list
    pub folders: Rect,
    /// Inner area of the subfolder list (zero-sized when hidden)
    pub subfolders: Rect,
    /// Inner area of the image grid
    pub grid: Rect,
    /// First visible row of each list
    pub folders_offset: usize,
    pub subfolders_offset: usize,
}

/// UI preferences and transient state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // FOCUS & CURSORS
    // ============================================
    pub focus: FocusPane,

    /// Cursor in the top folder list; 0 is the "select" entry
    pub folder_cursor: usize,

    /// Cursor in the subfolder list; 0 is the "select" entry
    pub subfolder_cursor: usize,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    pub areas: PaneAreas,

    /// Last keyboard or mouse input, used to delay preview fetches
    pub last_user_action: Instant,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            focus: FocusPane::Folders,
            folder_cursor: 0,
            subfolder_cursor: 0,
            vim_mode,
            search_mode: false,
            toast_message: None,
            areas: PaneAreas::default(),
            last_user_action: Instant::now(),
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn record_user_action(&mut self) {
        self.last_user_action = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_user_action.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert_eq!(model.focus, FocusPane::Folders);
        assert_eq!(model.folder_cursor, 0);
        assert!(!model.vim_mode);
        assert!(!model.search_mode);
        assert!(!model.should_quit);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast_message.is_none());
        assert!(!model.should_dismiss_toast());

        model.show_toast("Saved".to_string());
        assert!(model.toast_message.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }

    #[test]
    fn test_old_toast_is_dismissed() {
        let mut model = UiModel::new(false);
        let shown = Instant::now()
            .checked_sub(Duration::from_secs(5))
            .unwrap_or_else(Instant::now);
        model.toast_message = Some(("old".to_string(), shown));
        // Only meaningful when the clock allowed going back 5s
        if shown.elapsed() >= Duration::from_secs(5) {
            assert!(model.should_dismiss_toast());
        }
    }
}
