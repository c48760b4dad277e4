//! Folder Indexing Logic
//!
//! Pure functions that derive the two-level folder hierarchy from the flat
//! manifest:
//! - `list_top_folders`: the first-level selector entries
//! - `resolve_folder`: direct images and subfolders of one top folder
//! - `FolderStructure::plan`: what the UI shows after a top folder is picked

use std::collections::HashSet;

use super::path::{in_catalog, segments};
use crate::model::SubfolderChoice;

/// Collect top-level folder names in first-seen order, without duplicates
///
/// # Examples
/// ```
/// use katui::logic::folder::list_top_folders;
///
/// let manifest = vec![
///     "root/卡图/B/1.png".to_string(),
///     "root/卡图/A/2.png".to_string(),
///     "root/卡图/B/sub/3.png".to_string(),
///     "root/other/C/4.png".to_string(),
/// ];
/// assert_eq!(list_top_folders(&manifest, "卡图"), vec!["B", "A"]);
/// ```
pub fn list_top_folders(manifest: &[String], catalog_dir: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut folders = Vec::new();

    for path in manifest {
        let parts = segments(path);
        if in_catalog(&parts, catalog_dir) && seen.insert(parts[2]) {
            folders.push(parts[2].to_string());
        }
    }

    folders
}

/// Contents of one top folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderStructure {
    /// Paths of images sitting directly under the top folder
    pub direct_images: Vec<String>,
    /// Subfolder names in first-seen order
    pub subfolders: Vec<String>,
}

/// What the grid shows right after a top folder is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderDisplay {
    Images(Vec<String>),
    ChooseSubfolder,
    Empty,
}

/// UI decision for a freshly selected top folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPlan {
    /// Subfolder selector entries, `None` when the selector is hidden
    pub subfolder_options: Option<Vec<SubfolderChoice>>,
    pub display: FolderDisplay,
}

impl FolderStructure {
    pub fn is_empty(&self) -> bool {
        self.direct_images.is_empty() && self.subfolders.is_empty()
    }

    /// Decide selector visibility and the default view
    ///
    /// - Subfolders present: show the selector. A "direct images" entry is
    ///   offered first when direct images exist, and those are rendered
    ///   immediately; otherwise the user is asked to choose a subfolder.
    /// - Only direct images: hide the selector and render them.
    /// - Nothing: hide the selector, report an empty folder.
    pub fn plan(&self) -> FolderPlan {
        if !self.subfolders.is_empty() {
            let mut options = Vec::with_capacity(self.subfolders.len() + 1);
            if !self.direct_images.is_empty() {
                options.push(SubfolderChoice::Direct);
            }
            options.extend(self.subfolders.iter().cloned().map(SubfolderChoice::Named));

            let display = if self.direct_images.is_empty() {
                FolderDisplay::ChooseSubfolder
            } else {
                FolderDisplay::Images(self.direct_images.clone())
            };

            FolderPlan {
                subfolder_options: Some(options),
                display,
            }
        } else if !self.direct_images.is_empty() {
            FolderPlan {
                subfolder_options: None,
                display: FolderDisplay::Images(self.direct_images.clone()),
            }
        } else {
            FolderPlan {
                subfolder_options: None,
                display: FolderDisplay::Empty,
            }
        }
    }
}

/// Split a top folder into direct images and subfolders
///
/// Paths with exactly four segments are direct images; longer paths
/// contribute their segment 3 as a subfolder name.
pub fn resolve_folder(manifest: &[String], catalog_dir: &str, top_folder: &str) -> FolderStructure {
    let mut structure = FolderStructure::default();
    let mut seen = HashSet::new();

    for path in manifest {
        let parts = segments(path);
        if !in_catalog(&parts, catalog_dir) || parts[2] != top_folder {
            continue;
        }

        if parts.len() == 4 {
            structure.direct_images.push(path.clone());
        } else if parts.len() > 4 && seen.insert(parts[3]) {
            structure.subfolders.push(parts[3].to_string());
        }
    }

    structure
}
