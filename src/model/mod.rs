//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **CatalogModel**: manifest data and request sequencing
//! - **Selection**: top folder, subfolder and search keyword
//! - **DisplayModel**: the rendered grid and its gestures
//! - **UiModel**: focus, cursors, toasts, screen areas
//!
//! No services live here: all I/O belongs to the runtime (`App`). Every
//! selection change goes through a method that recomputes the grid, so the
//! display is always derived from manifest + selection.

pub mod catalog;
pub mod display;
pub mod types;
pub mod ui;

use std::sync::Arc;
use std::time::Duration;

pub use catalog::{CatalogModel, LoadState};
pub use display::DisplayModel;
pub use types::*;
pub use ui::{PaneAreas, UiModel};

use crate::logic::filters::{compute_view, Placeholder, ViewContent};
use crate::logic::gesture::LONG_PRESS;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub catalog: CatalogModel,

    pub selection: Selection,

    pub display: DisplayModel,

    pub ui: UiModel,

    /// Hold time for the long-press download gesture
    pub long_press: Duration,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(catalog_dir: &str, vim_mode: bool) -> Self {
        Self::with_long_press(catalog_dir, vim_mode, LONG_PRESS)
    }

    pub fn with_long_press(catalog_dir: &str, vim_mode: bool, long_press: Duration) -> Self {
        Self {
            catalog: CatalogModel::new(catalog_dir),
            selection: Selection::default(),
            display: DisplayModel::default(),
            ui: UiModel::new(vim_mode),
            long_press,
        }
    }

    /// Rebuild the grid from the manifest and the current selection
    pub fn recompute(&mut self) {
        let mut view = compute_view(&self.catalog.manifest, &self.catalog.catalog_dir, &self.selection);

        match &self.catalog.load_state {
            LoadState::Failed { message } => {
                view.content = ViewContent::Placeholder(Placeholder::LoadFailed(message.clone()));
            }
            // Keep showing the previous manifest while a refresh is in flight
            LoadState::Idle | LoadState::Loading if self.catalog.loaded_at.is_none() => {
                view.content = ViewContent::Placeholder(Placeholder::Loading);
            }
            _ => {}
        }

        self.display.replace(view, self.long_press);
        self.sync_cursors();
    }

    // ============================================
    // SELECTION
    // ============================================

    /// Choose a top folder; the subfolder choice starts over
    pub fn select_top_folder(&mut self, folder: Option<String>) {
        if self.selection.top_folder == folder {
            return;
        }
        tracing::debug!(?folder, "top folder selected");
        self.set_selection(Selection {
            top_folder: folder,
            subfolder: None,
            ..self.selection.clone()
        });
    }

    /// Choose a subfolder; ignored while no top folder is selected
    pub fn select_subfolder(&mut self, choice: Option<SubfolderChoice>) {
        if self.selection.top_folder.is_none() {
            return;
        }
        tracing::debug!(?choice, "subfolder selected");
        self.set_selection(Selection {
            subfolder: choice,
            ..self.selection.clone()
        });
    }

    pub fn set_search_keyword(&mut self, keyword: String) {
        if self.selection.search_keyword == keyword {
            return;
        }
        self.set_selection(Selection {
            search_keyword: keyword,
            ..self.selection.clone()
        });
    }

    pub fn clear_search(&mut self) {
        self.set_search_keyword(String::new());
    }

    /// Replace the selection record as a whole and rebuild the grid
    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.recompute();
    }

    // ============================================
    // MANIFEST LOADS
    // ============================================

    /// Register a manifest request; returns its sequence number
    pub fn begin_manifest_load(&mut self) -> u64 {
        let had_failed = self.load_failed();
        let seq = self.catalog.begin_load();
        // A retry replaces the failure placeholder right away
        if self.catalog.loaded_at.is_none() || had_failed {
            self.recompute();
        }
        seq
    }

    /// Whether the last manifest request failed
    pub fn load_failed(&self) -> bool {
        matches!(self.catalog.load_state, LoadState::Failed { .. })
    }

    /// Apply a manifest response; stale responses leave the model untouched
    pub fn apply_manifest(&mut self, seq: u64, manifest: Arc<Vec<String>>, from_cache: bool) -> bool {
        if !self.catalog.apply_manifest(seq, manifest, from_cache) {
            return false;
        }

        // A reload may have dropped the selected folder
        if let Some(top) = &self.selection.top_folder {
            if !self.catalog.top_folders.contains(top) {
                tracing::info!(folder = %top, "selected folder no longer in manifest");
                self.selection = Selection {
                    top_folder: None,
                    subfolder: None,
                    ..self.selection.clone()
                };
            }
        }

        self.recompute();
        true
    }

    pub fn apply_manifest_error(&mut self, seq: u64, message: String) -> bool {
        if !self.catalog.apply_failure(seq, message) {
            return false;
        }
        self.recompute();
        true
    }

    // ============================================
    // UI HELPERS
    // ============================================

    pub fn subfolders_visible(&self) -> bool {
        self.display.subfolder_options.is_some()
    }

    /// Entries of the subfolder selector (empty when hidden)
    pub fn subfolder_options(&self) -> &[SubfolderChoice] {
        self.display.subfolder_options.as_deref().unwrap_or(&[])
    }

    /// Point the list cursors at the selected entries
    fn sync_cursors(&mut self) {
        self.ui.folder_cursor = self
            .selection
            .top_folder
            .as_ref()
            .and_then(|top| self.catalog.top_folders.iter().position(|f| f == top))
            .map_or(0, |idx| idx + 1);

        self.ui.subfolder_cursor = self
            .selection
            .subfolder
            .as_ref()
            .and_then(|choice| self.subfolder_options().iter().position(|c| c == choice))
            .map_or(0, |idx| idx + 1);

        if self.ui.focus == FocusPane::Subfolders && !self.subfolders_visible() {
            self.ui.focus = FocusPane::Folders;
        }
    }

    pub fn record_user_action(&mut self) {
        self.ui.record_user_action();
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
