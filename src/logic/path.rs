//! Catalog Path Utilities
//!
//! Manifest entries are slash-delimited relative paths with a fixed shape:
//!
//! ```text
//! <root>/<catalog_dir>/<folder>/<file>
//! <root>/<catalog_dir>/<folder>/<subfolder>/<file>
//! ```
//!
//! Everything here works on plain `&str` segments; nothing touches the
//! filesystem.

use std::borrow::Cow;

/// Name of the fixed directory expected at segment 1
pub const DEFAULT_CATALOG_DIR: &str = "卡图";

/// File names longer than this (in characters) get the slow-load warning
const LARGE_NAME_CHARS: usize = 20;

/// Substrings that mark a high-resolution file
const LARGE_MARKERS: [&str; 2] = ["_large", "_hq"];

/// Split a manifest path into its segments
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

/// Check whether already-split segments sit under the catalog directory
///
/// Requires at least three segments (root, catalog dir, folder) and
/// segment 1 equal to `catalog_dir`.
///
/// # Examples
/// ```
/// use katui::logic::path::{in_catalog, segments};
///
/// assert!(in_catalog(&segments("root/卡图/A/x.png"), "卡图"));
/// assert!(!in_catalog(&segments("root/other/A/x.png"), "卡图"));
/// assert!(!in_catalog(&segments("root/卡图"), "卡图"));
/// ```
pub fn in_catalog(parts: &[&str], catalog_dir: &str) -> bool {
    parts.len() > 2 && parts[1] == catalog_dir
}

/// Final path segment (the leaf file name)
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Percent-encode every segment independently and re-join with `/`
///
/// Keeps the hierarchy intact while making non-ASCII and reserved
/// characters safe inside a URL.
///
/// # Examples
/// ```
/// use katui::logic::path::encode_path;
///
/// assert_eq!(encode_path("root/卡图/A b/x#1.png"), "root/%E5%8D%A1%E5%9B%BE/A%20b/x%231.png");
/// ```
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment))
        .collect::<Vec<Cow<'_, str>>>()
        .join("/")
}

/// Percent-encode a single file name
pub fn encode_file_name(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// Decode a percent-encoded file name
///
/// Malformed input (invalid UTF-8 after decoding) is returned unchanged.
pub fn decode_file_name(encoded: &str) -> String {
    match urlencoding::decode(encoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => encoded.to_string(),
    }
}

/// Whether a file name should carry the "large file" display hint
///
/// Purely cosmetic: long names and the `_large` / `_hq` markers usually
/// mean high-resolution scans that load slowly.
pub fn is_large_file(name: &str) -> bool {
    name.chars().count() > LARGE_NAME_CHARS || LARGE_MARKERS.iter().any(|m| name.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_split_on_slash() {
        assert_eq!(segments("root/卡图/A/x.png"), vec!["root", "卡图", "A", "x.png"]);
        assert_eq!(segments("single"), vec!["single"]);
    }

    #[test]
    fn test_in_catalog_requires_three_segments() {
        assert!(in_catalog(&["root", "卡图", "A"], DEFAULT_CATALOG_DIR));
        assert!(!in_catalog(&["root", "卡图"], DEFAULT_CATALOG_DIR));
    }

    #[test]
    fn test_in_catalog_custom_dir() {
        assert!(in_catalog(&segments("./cards/A/x.png"), "cards"));
        assert!(!in_catalog(&segments("./cards/A/x.png"), DEFAULT_CATALOG_DIR));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("root/卡图/A/b/y.png"), "y.png");
        assert_eq!(file_name("y.png"), "y.png");
        assert_eq!(file_name("root/卡图/A/"), "");
    }

    #[test]
    fn test_encode_path_keeps_separators() {
        let encoded = encode_path("root/卡图/A/b/y.png");
        assert_eq!(encoded.matches('/').count(), 4);
        assert!(encoded.starts_with("root/%E5%8D%A1%E5%9B%BE/"));
        assert!(encoded.ends_with("/A/b/y.png"));
    }

    #[test]
    fn test_encode_path_reserved_characters() {
        assert_eq!(encode_path("r/卡图/A/a?b&c.png"), "r/%E5%8D%A1%E5%9B%BE/A/a%3Fb%26c.png");
    }

    #[test]
    fn test_file_name_round_trip() {
        for name in ["青眼白龙.png", "x y#1?.jpg", "100%_hq.png", "a&b=c+d.webp", "plain.png"] {
            assert_eq!(decode_file_name(&encode_file_name(name)), name);
        }
    }

    #[test]
    fn test_decode_invalid_utf8_returns_input() {
        assert_eq!(decode_file_name("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn test_is_large_file_by_length() {
        assert!(is_large_file("abcdefghijklmnopqrstu.png"));
        assert!(!is_large_file("short.png"));
        // 20 characters exactly is not large
        assert!(!is_large_file("abcdefghijklmnop.png"));
    }

    #[test]
    fn test_is_large_file_counts_characters_not_bytes() {
        // 10 CJK characters + ".png" = 14 characters, 34 bytes
        assert!(!is_large_file("一二三四五六七八九十.png"));
    }

    #[test]
    fn test_is_large_file_by_marker() {
        assert!(is_large_file("x_large.png"));
        assert!(is_large_file("y_hq.jpg"));
        // Markers are case-sensitive
        assert!(!is_large_file("x_LARGE.png"));
    }
}
