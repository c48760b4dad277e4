//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - download: Local file naming for downloads
//! - errors: Fetch error type and classification
//! - filters: Manifest filters and the visible-view computation
//! - folder: Top folder index and folder structure resolution
//! - gesture: Long-press download state machine
//! - grid: Image grid geometry and selection movement
//! - path: Path segmentation, percent-encoding, size hints
//! - ui: Focus cycling and frame timing

pub mod download;
pub mod errors;
pub mod filters;
pub mod folder;
pub mod gesture;
pub mod grid;
pub mod path;
pub mod ui;
