//! Catalog orchestration methods
//!
//! Selection changes go through the model (which recomputes the grid) and
//! then, when the manifest cache is disabled, trigger a fresh manifest
//! request the way every navigation did before caching.

use std::time::Instant;

use crate::logic::gesture::GestureAction;
use crate::model::SubfolderChoice;
use crate::services::CatalogRequest;
use crate::App;

impl App {
    /// Ask the catalog service for the manifest
    pub(crate) fn request_manifest(&mut self, force: bool) {
        let seq = self.model.begin_manifest_load();
        tracing::debug!(seq, force, "requesting manifest");
        if self.catalog_tx.send(CatalogRequest::LoadManifest { seq, force }).is_err() {
            tracing::error!("catalog service is gone");
            self.model.apply_manifest_error(seq, "catalog service stopped".to_string());
        }
    }

    /// Drop the cached manifest and fetch it again
    pub(crate) fn reload_manifest(&mut self) {
        self.model.show_toast("Reloading catalog...".to_string());
        self.request_manifest(true);
    }

    /// Refetch on navigation when uncached, or to recover from a failed load
    fn after_selection_change(&mut self) {
        if !self.cache_manifest || self.model.load_failed() {
            self.request_manifest(true);
        }
    }

    pub(crate) fn select_top_folder(&mut self, folder: Option<String>) {
        if self.model.selection.top_folder == folder {
            return;
        }
        self.model.select_top_folder(folder);
        self.after_selection_change();
    }

    pub(crate) fn select_subfolder(&mut self, choice: Option<SubfolderChoice>) {
        if self.model.selection.subfolder == choice {
            return;
        }
        self.model.select_subfolder(choice);
        self.after_selection_change();
    }

    pub(crate) fn set_search_keyword(&mut self, keyword: String) {
        if self.model.selection.search_keyword == keyword {
            return;
        }
        self.model.set_search_keyword(keyword);
        self.after_selection_change();
    }

    /// Start downloading grid item `idx`
    pub(crate) fn download_item(&mut self, idx: usize) {
        let Some(item) = self.model.display.items.get(idx) else {
            return;
        };
        let request = CatalogRequest::Download {
            reference: item.reference.clone(),
            encoded_file_name: item.encoded_file_name.clone(),
        };
        let name = item.display_name.clone();

        tracing::info!(path = %item.path, "download requested");
        if self.catalog_tx.send(request).is_err() {
            self.model.show_toast("Error: catalog service stopped".to_string());
            return;
        }
        self.model.show_toast(format!("Downloading {}", name));
    }

    pub(crate) fn download_selected(&mut self) {
        if let Some(idx) = self.model.display.selected {
            self.download_item(idx);
        }
    }

    /// Fire a long-press whose hold time has elapsed
    pub fn tick_gestures(&mut self, now: Instant) {
        if let Some(idx) = self.model.display.tick(now) {
            tracing::debug!(idx, "long-press fired");
            self.download_item(idx);
        }
    }

    /// Secondary click on a grid item
    pub(crate) fn context_menu(&mut self, idx: usize) {
        let Some(outcome) = self.model.display.context_menu(idx) else {
            return;
        };
        // The terminal has no native context menu to suppress
        match outcome.action {
            GestureAction::Download => self.download_item(idx),
        }
    }
}
