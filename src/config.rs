use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::DEFAULT_MANIFEST_PATH;
use crate::logic::path::DEFAULT_CATALOG_DIR;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub cache_manifest: bool,
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_manifest_path() -> String {
    DEFAULT_MANIFEST_PATH.to_string()
}

fn default_catalog_dir() -> String {
    DEFAULT_CATALOG_DIR.to_string()
}

fn default_true() -> bool {
    true
}

fn default_long_press_ms() -> u64 {
    800
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

impl Config {
    /// Defaults for everything but the base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            manifest_path: default_manifest_path(),
            catalog_dir: default_catalog_dir(),
            download_dir: None,
            cache_manifest: true,
            long_press_ms: default_long_press_ms(),
            image_preview_enabled: true,
            image_protocol: default_image_protocol(),
            vim_mode: false,
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse config")
    }

    /// Download directory, falling back to the platform one, then ./downloads
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("downloads"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_yaml("base_url: https://cards.example.com/").unwrap();
        assert_eq!(config.manifest_path, "data/newimages2.json");
        assert_eq!(config.catalog_dir, "卡图");
        assert!(config.cache_manifest);
        assert_eq!(config.long_press_ms, 800);
        assert!(config.image_preview_enabled);
        assert_eq!(config.image_protocol, "auto");
        assert!(!config.vim_mode);
        assert!(config.download_dir.is_none());
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
base_url: http://localhost:8080
manifest_path: manifest.json
catalog_dir: cards
download_dir: /tmp/cards
cache_manifest: false
long_press_ms: 500
image_preview_enabled: false
image_protocol: halfblocks
vim_mode: true
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.catalog_dir, "cards");
        assert!(!config.cache_manifest);
        assert_eq!(config.long_press_ms, 500);
        assert_eq!(config.resolved_download_dir(), PathBuf::from("/tmp/cards"));
        assert!(config.vim_mode);
    }

    #[test]
    fn test_base_url_is_required() {
        assert!(Config::from_yaml("vim_mode: true").is_err());
    }

    #[test]
    fn test_with_base_url_matches_yaml_defaults() {
        let built = Config::with_base_url("http://h/");
        let parsed = Config::from_yaml("base_url: http://h/").unwrap();
        assert_eq!(built.manifest_path, parsed.manifest_path);
        assert_eq!(built.long_press_ms, parsed.long_press_ms);
        assert_eq!(built.image_protocol, parsed.image_protocol);
    }
}
