//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::time::Duration;

use crate::logic::gesture::LongPress;
use crate::logic::path::{encode_file_name, encode_path, file_name, is_large_file};

/// Entry of the subfolder selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubfolderChoice {
    /// Images sitting directly under the top folder
    Direct,
    Named(String),
}

impl SubfolderChoice {
    pub fn label(&self) -> &str {
        match self {
            SubfolderChoice::Direct => "Direct images",
            SubfolderChoice::Named(name) => name,
        }
    }
}

/// What the user has chosen; the only input besides the manifest that
/// determines the visible set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub top_folder: Option<String>,
    pub subfolder: Option<SubfolderChoice>,
    /// Raw search field contents (may carry surrounding whitespace)
    pub search_keyword: String,
}

impl Selection {
    /// Trimmed keyword, `None` when the search field is blank
    pub fn active_keyword(&self) -> Option<&str> {
        let keyword = self.search_keyword.trim();
        (!keyword.is_empty()).then_some(keyword)
    }

    pub fn is_searching(&self) -> bool {
        self.active_keyword().is_some()
    }
}

/// Pane receiving keyboard navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPane {
    Folders,
    Subfolders,
    Grid,
}

/// One rendered grid entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageItem {
    /// Manifest path, unencoded
    pub path: String,
    /// Final segment, used as the label
    pub display_name: String,
    /// Path with every segment percent-encoded, relative to the base URL
    pub reference: String,
    /// Percent-encoded file name, decoded again when downloading
    pub encoded_file_name: String,
    /// Show the slow-load warning
    pub is_large: bool,
    pub press: LongPress,
}

impl ImageItem {
    pub fn from_path(path: &str, hold: Duration) -> Self {
        let name = file_name(path);
        Self {
            path: path.to_string(),
            display_name: name.to_string(),
            reference: encode_path(path),
            encoded_file_name: encode_file_name(name),
            is_large: is_large_file(name),
            press: LongPress::new(hold),
        }
    }
}
