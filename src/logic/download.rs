//! Download naming
//!
//! Turns the percent-encoded file name stored on a grid item into a safe
//! local name, plus the numbered alternatives tried when it is taken.

use super::path::decode_file_name;

/// Name used when the decoded file name is empty
const FALLBACK_NAME: &str = "image";

/// Upper bound on " (n)" suffixes tried before giving up
pub const MAX_DUPLICATES: u32 = 999;

/// Decode the stored file name into the suggested local name
///
/// Path separators are replaced so the file always lands directly inside
/// the download directory.
///
/// # Examples
/// ```
/// use katui::logic::download::suggested_file_name;
///
/// assert_eq!(suggested_file_name("%E9%9D%92%E7%9C%BC.png"), "青眼.png");
/// assert_eq!(suggested_file_name("a%2Fb.png"), "a_b.png");
/// ```
pub fn suggested_file_name(encoded: &str) -> String {
    let decoded = decode_file_name(encoded);
    let cleaned: String = decoded
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();

    match cleaned.trim() {
        "" | "." | ".." => FALLBACK_NAME.to_string(),
        name => name.to_string(),
    }
}

/// Split `name.ext` into stem and extension (dotfiles have no extension)
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => (&name[..pos], Some(&name[pos + 1..])),
        _ => (name, None),
    }
}

/// Candidate `n` for a download named `name`: the name itself for 0,
/// `stem (n).ext` after that
///
/// # Examples
/// ```
/// use katui::logic::download::numbered_name;
///
/// assert_eq!(numbered_name("card.png", 0), "card.png");
/// assert_eq!(numbered_name("card.png", 2), "card (2).png");
/// ```
pub fn numbered_name(name: &str, n: u32) -> String {
    if n == 0 {
        return name.to_string();
    }
    match split_extension(name) {
        (stem, Some(ext)) => format!("{} ({}).{}", stem, n, ext),
        (stem, None) => format!("{} ({})", stem, n),
    }
}

/// Names to try in order until one can be created
pub fn candidate_names(name: &str) -> impl Iterator<Item = String> + '_ {
    (0..=MAX_DUPLICATES).map(move |n| numbered_name(name, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_name_round_trips_reserved_characters() {
        let encoded = crate::logic::path::encode_file_name("x y#1?&.png");
        assert_eq!(suggested_file_name(&encoded), "x y#1?&.png");
    }

    #[test]
    fn test_suggested_name_fallbacks() {
        assert_eq!(suggested_file_name(""), "image");
        assert_eq!(suggested_file_name(".."), "image");
        assert_eq!(suggested_file_name("%20%20"), "image");
    }

    #[test]
    fn test_suggested_name_strips_backslash() {
        assert_eq!(suggested_file_name("a%5Cb.png"), "a_b.png");
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("card.png"), ("card", Some("png")));
        assert_eq!(split_extension("a.b.jpg"), ("a.b", Some("jpg")));
        assert_eq!(split_extension(".hidden"), (".hidden", None));
        assert_eq!(split_extension("noext"), ("noext", None));
        assert_eq!(split_extension("trailing."), ("trailing.", None));
    }

    #[test]
    fn test_numbered_name_without_extension() {
        assert_eq!(numbered_name("card", 1), "card (1)");
        assert_eq!(numbered_name(".hidden", 1), ".hidden (1)");
    }

    #[test]
    fn test_candidate_names_start_with_original() {
        let names: Vec<String> = candidate_names("card.png").take(3).collect();
        assert_eq!(names, vec!["card.png", "card (1).png", "card (2).png"]);
        assert_eq!(candidate_names("card.png").count(), MAX_DUPLICATES as usize + 1);
    }
}
