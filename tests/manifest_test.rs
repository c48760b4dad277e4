//! Tests for manifest parsing and load sequencing
//!
//! Bug guarded against: a slow first request finishing after a forced
//! reload would overwrite the newer manifest. Every request carries a
//! sequence number and only the newest one is applied.

use std::sync::Arc;

use katui::api::{parse_manifest, CatalogClient};
use katui::logic::errors::{describe_failure, FetchError};
use katui::logic::filters::Placeholder;
use katui::model::{LoadState, Model};

fn paths(items: &[&str]) -> Arc<Vec<String>> {
    Arc::new(items.iter().map(|p| p.to_string()).collect())
}

#[test]
fn test_parse_manifest_array_of_strings() {
    let body = r#"["a/卡图/A/1.png", "a/卡图/B/s/2.png"]"#;
    let manifest = parse_manifest(body.as_bytes()).expect("valid manifest");
    assert_eq!(manifest, vec!["a/卡图/A/1.png", "a/卡图/B/s/2.png"]);
}

#[test]
fn test_parse_manifest_rejects_other_shapes() {
    assert!(matches!(parse_manifest(b"{\"paths\": []}"), Err(FetchError::Parse(_))));
    assert!(matches!(parse_manifest(b"[1, 2]"), Err(FetchError::Parse(_))));
    assert!(matches!(parse_manifest(b"not json"), Err(FetchError::Parse(_))));
}

#[test]
fn test_stale_response_is_dropped() {
    let mut model = Model::new("卡图", false);
    let first = model.begin_manifest_load();
    let second = model.begin_manifest_load();

    assert!(model.apply_manifest(second, paths(&["r/卡图/New/1.png"]), false));
    assert!(!model.apply_manifest(first, paths(&["r/卡图/Old/1.png"]), false));

    assert_eq!(model.catalog.top_folders, vec!["New"]);
}

#[test]
fn test_stale_failure_is_dropped() {
    let mut model = Model::new("卡图", false);
    let first = model.begin_manifest_load();
    let second = model.begin_manifest_load();

    assert!(model.apply_manifest(second, paths(&["r/卡图/A/1.png"]), false));
    assert!(!model.apply_manifest_error(first, "timeout".to_string()));
    assert_eq!(model.catalog.load_state, LoadState::Ready);
}

#[test]
fn test_http_404_becomes_failure_placeholder() {
    let mut model = Model::new("卡图", false);
    let seq = model.begin_manifest_load();

    let error = FetchError::Status {
        status: 404,
        url: "https://cards.example/data/newimages2.json".to_string(),
    };
    model.apply_manifest_error(seq, describe_failure(&error));

    assert_eq!(
        model.display.placeholder,
        Some(Placeholder::LoadFailed("manifest not found (HTTP 404)".to_string()))
    );
    assert!(model.display.items.is_empty());
}

#[test]
fn test_client_resolves_encoded_references() {
    let client = CatalogClient::new("https://cards.example/app", "data/newimages2.json").expect("valid url");

    assert_eq!(
        client.manifest_url().expect("manifest url").as_str(),
        "https://cards.example/app/data/newimages2.json"
    );
    assert_eq!(
        client.resolve("r/%E5%8D%A1%E5%9B%BE/A/1.png").expect("image url").as_str(),
        "https://cards.example/app/r/%E5%8D%A1%E5%9B%BE/A/1.png"
    );
}
