//! Catalog Model
//!
//! Manifest data as last delivered by the catalog service, plus the
//! request sequencing that keeps a slow, stale response from overwriting a
//! newer one.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::logic::folder::list_top_folders;

/// Manifest load lifecycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

/// Manifest and derived top folder index
#[derive(Clone, Debug)]
pub struct CatalogModel {
    /// Expected name of path segment 1
    pub catalog_dir: String,

    pub manifest: Arc<Vec<String>>,

    /// Top folders in first-seen order
    pub top_folders: Vec<String>,

    pub load_state: LoadState,

    /// When the current manifest was delivered
    pub loaded_at: Option<DateTime<Local>>,

    /// Whether the current manifest came from the in-memory cache
    pub from_cache: bool,

    /// Sequence number of the newest manifest request
    latest_request: u64,
}

impl CatalogModel {
    pub fn new(catalog_dir: &str) -> Self {
        Self {
            catalog_dir: catalog_dir.to_string(),
            manifest: Arc::new(Vec::new()),
            top_folders: Vec::new(),
            load_state: LoadState::Idle,
            loaded_at: None,
            from_cache: false,
            latest_request: 0,
        }
    }

    /// Register a new manifest request and return its sequence number
    pub fn begin_load(&mut self) -> u64 {
        self.latest_request += 1;
        self.load_state = LoadState::Loading;
        self.latest_request
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_request
    }

    /// Accept a manifest; responses to superseded requests are dropped
    pub fn apply_manifest(&mut self, seq: u64, manifest: Arc<Vec<String>>, from_cache: bool) -> bool {
        if !self.is_current(seq) {
            tracing::debug!(seq, latest = self.latest_request, "dropping stale manifest response");
            return false;
        }

        self.top_folders = list_top_folders(&manifest, &self.catalog_dir);
        self.manifest = manifest;
        self.load_state = LoadState::Ready;
        self.loaded_at = Some(Local::now());
        self.from_cache = from_cache;
        true
    }

    /// Record a failed request; the previous manifest stays in memory
    pub fn apply_failure(&mut self, seq: u64, message: String) -> bool {
        if !self.is_current(seq) {
            tracing::debug!(seq, latest = self.latest_request, "dropping stale manifest failure");
            return false;
        }

        self.load_state = LoadState::Failed { message };
        true
    }
}
