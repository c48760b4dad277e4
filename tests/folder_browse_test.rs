//! Tests for folder and subfolder browsing
//!
//! Walks a small manifest through the selectors the way a user would:
//! pick a top folder, look at what the grid offers, drill into a subfolder
//! and back out via "Direct images".

use std::sync::Arc;

use katui::logic::filters::Placeholder;
use katui::model::{Model, SubfolderChoice};

fn manifest() -> Arc<Vec<String>> {
    Arc::new(
        [
            "images/卡图/怪兽/青眼白龙.jpg",
            "images/卡图/怪兽/黑魔导.jpg",
            "images/卡图/怪兽/融合/究极龙_hq.jpg",
            "images/卡图/怪兽/仪式/混沌战士.jpg",
            "images/卡图/魔法/sets/死者苏生.png",
            "images/卡图/陷阱",
            "images/其他/怪兽/not-a-card.jpg",
            "readme.txt",
        ]
        .iter()
        .map(|p| p.to_string())
        .collect(),
    )
}

fn loaded() -> Model {
    let mut model = Model::new("卡图", false);
    let seq = model.begin_manifest_load();
    assert!(model.apply_manifest(seq, manifest(), false));
    model
}

fn names(model: &Model) -> Vec<&str> {
    model.display.items.iter().map(|i| i.display_name.as_str()).collect()
}

#[test]
fn test_top_folders_in_first_seen_order() {
    let model = loaded();
    // A bare "root/卡图/陷阱" entry still names a folder
    assert_eq!(model.catalog.top_folders, vec!["怪兽", "魔法", "陷阱"]);
    assert_eq!(model.display.placeholder, Some(Placeholder::SelectFolder));
}

#[test]
fn test_mixed_folder_shows_direct_images_and_selector() {
    let mut model = loaded();
    model.select_top_folder(Some("怪兽".to_string()));

    assert_eq!(names(&model), vec!["青眼白龙.jpg", "黑魔导.jpg"]);
    assert_eq!(
        model.subfolder_options(),
        &[
            SubfolderChoice::Direct,
            SubfolderChoice::Named("融合".to_string()),
            SubfolderChoice::Named("仪式".to_string()),
        ]
    );
}

#[test]
fn test_drill_into_subfolder_and_back() {
    let mut model = loaded();
    model.select_top_folder(Some("怪兽".to_string()));

    model.select_subfolder(Some(SubfolderChoice::Named("融合".to_string())));
    assert_eq!(names(&model), vec!["究极龙_hq.jpg"]);
    assert!(model.display.items[0].is_large);

    model.select_subfolder(Some(SubfolderChoice::Direct));
    assert_eq!(names(&model), vec!["青眼白龙.jpg", "黑魔导.jpg"]);
}

#[test]
fn test_subfolder_only_folder_asks_for_choice() {
    let mut model = loaded();
    model.select_top_folder(Some("魔法".to_string()));

    assert!(model.display.items.is_empty());
    assert_eq!(model.display.placeholder, Some(Placeholder::ChooseSubfolder));
    assert_eq!(model.subfolder_options(), &[SubfolderChoice::Named("sets".to_string())]);
}

#[test]
fn test_folder_without_images() {
    let mut model = loaded();
    model.select_top_folder(Some("陷阱".to_string()));

    assert!(!model.subfolders_visible());
    assert_eq!(model.display.placeholder, Some(Placeholder::EmptyFolder));
}

#[test]
fn test_references_are_percent_encoded() {
    let mut model = loaded();
    model.select_top_folder(Some("怪兽".to_string()));

    let item = &model.display.items[0];
    assert_eq!(item.path, "images/卡图/怪兽/青眼白龙.jpg");
    assert!(!item.reference.contains('卡'));
    assert!(item.reference.starts_with("images/%E5%8D%A1%E5%9B%BE/"));
    assert_eq!(item.reference.matches('/').count(), 3);
}

#[test]
fn test_manifest_without_catalog_folders() {
    let mut model = Model::new("卡图", false);
    let seq = model.begin_manifest_load();
    model.apply_manifest(seq, Arc::new(vec!["a/b/c.png".to_string()]), false);

    assert!(model.catalog.top_folders.is_empty());
    assert_eq!(model.display.placeholder, Some(Placeholder::NoFolders));
}
