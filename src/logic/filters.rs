//! Image Set Filters
//!
//! Linear filters over the manifest plus `compute_view`, the single pure
//! function that turns (manifest, selection) into what the grid shows.

use super::folder::{list_top_folders, resolve_folder, FolderDisplay};
use super::path::{file_name, in_catalog, segments};
use crate::model::{Selection, SubfolderChoice};

/// Images sitting directly under `top_folder` (exactly four segments)
pub fn direct_images_of(manifest: &[String], catalog_dir: &str, top_folder: &str) -> Vec<String> {
    manifest
        .iter()
        .filter(|path| {
            let parts = segments(path);
            parts.len() == 4 && parts[1] == catalog_dir && parts[2] == top_folder
        })
        .cloned()
        .collect()
}

/// Images inside `top_folder/subfolder`
pub fn subfolder_images_of(
    manifest: &[String],
    catalog_dir: &str,
    top_folder: &str,
    subfolder: &str,
) -> Vec<String> {
    manifest
        .iter()
        .filter(|path| {
            let parts = segments(path);
            parts.len() > 3
                && parts[1] == catalog_dir
                && parts[2] == top_folder
                && parts[3] == subfolder
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring search over file names
///
/// Only the final segment is matched, and only for paths under the catalog
/// directory. Callers short-circuit an empty keyword to the folder view.
///
/// # Examples
/// ```
/// use katui::logic::filters::search_images;
///
/// let manifest = vec![
///     "root/卡图/A/x_LARGE.png".to_string(),
///     "root/卡图/A/b/y.png".to_string(),
///     "root/other/z.png".to_string(),
/// ];
/// assert_eq!(search_images(&manifest, "卡图", "large"), vec!["root/卡图/A/x_LARGE.png"]);
/// ```
pub fn search_images(manifest: &[String], catalog_dir: &str, keyword: &str) -> Vec<String> {
    let keyword = keyword.to_lowercase();

    manifest
        .iter()
        .filter(|path| {
            in_catalog(&segments(path), catalog_dir)
                && file_name(path).to_lowercase().contains(&keyword)
        })
        .cloned()
        .collect()
}

/// Non-image states of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Manifest request in flight
    Loading,
    /// Manifest could not be fetched or parsed
    LoadFailed(String),
    /// Manifest has no folder under the catalog directory
    NoFolders,
    /// No top folder chosen yet
    SelectFolder,
    /// Top folder has only subfolders
    ChooseSubfolder,
    /// Top folder (or chosen subfolder) has no images
    EmptyFolder,
    /// "Direct images" chosen but there are none
    NoDirectImages,
    /// Search matched nothing
    NoSearchResults,
}

impl Placeholder {
    pub fn message(&self) -> String {
        match self {
            Placeholder::Loading => "Loading...".to_string(),
            Placeholder::LoadFailed(reason) => format!("Failed to load catalog: {}", reason),
            Placeholder::NoFolders => "No folders found".to_string(),
            Placeholder::SelectFolder => "Select a folder first".to_string(),
            Placeholder::ChooseSubfolder => "Select a subfolder".to_string(),
            Placeholder::EmptyFolder => "No images in this folder".to_string(),
            Placeholder::NoDirectImages => "No direct images in this folder".to_string(),
            Placeholder::NoSearchResults => "No matching images found".to_string(),
        }
    }
}

/// Grid content: image paths or a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    Images(Vec<String>),
    Placeholder(Placeholder),
}

impl ViewContent {
    fn images_or(images: Vec<String>, empty: Placeholder) -> Self {
        if images.is_empty() {
            ViewContent::Placeholder(empty)
        } else {
            ViewContent::Images(images)
        }
    }
}

/// Everything the display needs for one update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    /// Subfolder selector entries, `None` when the selector is hidden
    pub subfolder_options: Option<Vec<SubfolderChoice>>,
    pub content: ViewContent,
}

/// Compute the visible view from the manifest and the current selection
///
/// A non-empty keyword overrides the folder view but leaves the selector
/// state untouched, so clearing it restores exactly the previous view.
pub fn compute_view(manifest: &[String], catalog_dir: &str, selection: &Selection) -> CatalogView {
    let plan = selection
        .top_folder
        .as_deref()
        .map(|top| resolve_folder(manifest, catalog_dir, top).plan());
    let subfolder_options = plan.as_ref().and_then(|p| p.subfolder_options.clone());

    let keyword = selection.active_keyword();
    if let Some(keyword) = keyword {
        let results = search_images(manifest, catalog_dir, keyword);
        return CatalogView {
            subfolder_options,
            content: ViewContent::images_or(results, Placeholder::NoSearchResults),
        };
    }

    let content = match (selection.top_folder.as_deref(), &selection.subfolder, plan) {
        (None, _, _) => {
            if list_top_folders(manifest, catalog_dir).is_empty() {
                ViewContent::Placeholder(Placeholder::NoFolders)
            } else {
                ViewContent::Placeholder(Placeholder::SelectFolder)
            }
        }
        (Some(top), Some(SubfolderChoice::Direct), _) => ViewContent::images_or(
            direct_images_of(manifest, catalog_dir, top),
            Placeholder::NoDirectImages,
        ),
        (Some(top), Some(SubfolderChoice::Named(sub)), _) => ViewContent::images_or(
            subfolder_images_of(manifest, catalog_dir, top, sub),
            Placeholder::EmptyFolder,
        ),
        (Some(_), None, Some(plan)) => match plan.display {
            FolderDisplay::Images(images) => ViewContent::Images(images),
            FolderDisplay::ChooseSubfolder => ViewContent::Placeholder(Placeholder::ChooseSubfolder),
            FolderDisplay::Empty => ViewContent::Placeholder(Placeholder::EmptyFolder),
        },
        (Some(_), None, None) => ViewContent::Placeholder(Placeholder::EmptyFolder),
    };

    CatalogView {
        subfolder_options,
        content,
    }
}
