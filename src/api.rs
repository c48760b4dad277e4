use std::time::Duration;

use reqwest::{Client, Url};

use crate::logic::errors::FetchError;

/// Relative location of the manifest under the base URL
pub const DEFAULT_MANIFEST_PATH: &str = "data/newimages2.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Parse a manifest body: a JSON array of path strings
///
/// # Examples
/// ```
/// use katui::api::parse_manifest;
///
/// let paths = parse_manifest(r#"["root/卡图/A/1.png"]"#.as_bytes()).unwrap();
/// assert_eq!(paths, vec!["root/卡图/A/1.png"]);
/// assert!(parse_manifest(r#"{"paths": []}"#.as_bytes()).is_err());
/// ```
pub fn parse_manifest(body: &[u8]) -> Result<Vec<String>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

/// HTTP client for the catalog host
#[derive(Clone, Debug)]
pub struct CatalogClient {
    base_url: Url,
    manifest_path: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: &str, manifest_path: &str) -> Result<Self, FetchError> {
        // Url::join replaces the last segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url,
            manifest_path: manifest_path.trim_start_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a percent-encoded reference against the base URL
    pub fn resolve(&self, reference: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(reference.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", reference, e)))
    }

    pub fn manifest_url(&self) -> Result<Url, FetchError> {
        self.resolve(&self.manifest_path)
    }

    /// GET a resource, failing on any non-success status
    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    pub async fn fetch_manifest(&self) -> Result<Vec<String>, FetchError> {
        let url = self.manifest_url()?;
        tracing::debug!(%url, "fetching manifest");
        let body = self.get_bytes(url).await?;
        let manifest = parse_manifest(&body)?;
        tracing::info!(entries = manifest.len(), "manifest loaded");
        Ok(manifest)
    }

    /// Fetch an image by its percent-encoded reference
    pub async fn fetch_bytes(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.resolve(reference)?;
        tracing::debug!(%url, "fetching image");
        self.get_bytes(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::errors::{classify_error, ErrorType};

    #[test]
    fn test_parse_manifest_rejects_wrong_shape() {
        let err = parse_manifest(b"[1, 2]").unwrap_err();
        assert_eq!(classify_error(&err), ErrorType::InvalidManifest);
        assert!(parse_manifest(b"not json").is_err());
        assert_eq!(parse_manifest(b"[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_base_url_without_trailing_slash_keeps_path() {
        let client = CatalogClient::new("https://cards.example.com/site", DEFAULT_MANIFEST_PATH).unwrap();
        assert_eq!(
            client.manifest_url().unwrap().as_str(),
            "https://cards.example.com/site/data/newimages2.json"
        );
    }

    #[test]
    fn test_resolve_encoded_reference() {
        let client = CatalogClient::new("https://cards.example.com/", DEFAULT_MANIFEST_PATH).unwrap();
        let url = client.resolve("root/%E5%8D%A1%E5%9B%BE/A/a%20b.png").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cards.example.com/root/%E5%8D%A1%E5%9B%BE/A/a%20b.png"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = CatalogClient::new("not a url", DEFAULT_MANIFEST_PATH).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
