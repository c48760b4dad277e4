use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use crate::api::CatalogClient;
use crate::logic::download::{candidate_names, suggested_file_name};
use crate::logic::errors::FetchError;

/// Requests handled by the catalog service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// Load the manifest; `force` bypasses the in-memory copy
    LoadManifest { seq: u64, force: bool },

    /// Fetch an image and save it under the download directory
    Download {
        reference: String,
        encoded_file_name: String,
    },
}

/// Responses sent back to the UI task
#[derive(Debug)]
pub enum CatalogResponse {
    ManifestResult {
        seq: u64,
        manifest: Result<Arc<Vec<String>>, FetchError>,
        from_cache: bool,
    },
    DownloadResult {
        file_name: String,
        saved: Result<PathBuf>,
    },
}

/// Load-once manifest cache, invalidated on demand
#[derive(Debug, Default)]
pub struct ManifestCache {
    manifest: Option<Arc<Vec<String>>>,
}

impl ManifestCache {
    pub fn get(&self) -> Option<Arc<Vec<String>>> {
        self.manifest.clone()
    }

    pub fn store(&mut self, manifest: Arc<Vec<String>>) {
        self.manifest = Some(manifest);
    }

    pub fn invalidate(&mut self) {
        if self.manifest.take().is_some() {
            tracing::debug!("manifest cache invalidated");
        }
    }
}

/// Background worker owning the HTTP client and the manifest cache
pub struct CatalogService {
    client: CatalogClient,
    cache: ManifestCache,
    download_dir: PathBuf,
    response_tx: mpsc::UnboundedSender<CatalogResponse>,
}

impl CatalogService {
    pub fn new(
        client: CatalogClient,
        download_dir: PathBuf,
        response_tx: mpsc::UnboundedSender<CatalogResponse>,
    ) -> Self {
        Self {
            client,
            cache: ManifestCache::default(),
            download_dir,
            response_tx,
        }
    }

    async fn handle(&mut self, request: CatalogRequest) {
        match request {
            CatalogRequest::LoadManifest { seq, force } => {
                let response = self.load_manifest(seq, force).await;
                let _ = self.response_tx.send(response);
            }
            CatalogRequest::Download {
                reference,
                encoded_file_name,
            } => {
                // Downloads run concurrently; the service keeps serving requests
                let client = self.client.clone();
                let dir = self.download_dir.clone();
                let response_tx = self.response_tx.clone();
                tokio::spawn(async move {
                    let file_name = suggested_file_name(&encoded_file_name);
                    let saved = download_image(&client, &reference, &dir, &file_name).await;
                    match &saved {
                        Ok(path) => tracing::info!(path = %path.display(), "download saved"),
                        Err(e) => tracing::warn!(%reference, "download failed: {:#}", e),
                    }
                    let _ = response_tx.send(CatalogResponse::DownloadResult { file_name, saved });
                });
            }
        }
    }

    async fn load_manifest(&mut self, seq: u64, force: bool) -> CatalogResponse {
        if force {
            self.cache.invalidate();
        } else if let Some(manifest) = self.cache.get() {
            tracing::debug!(seq, "manifest served from cache");
            return CatalogResponse::ManifestResult {
                seq,
                manifest: Ok(manifest),
                from_cache: true,
            };
        }

        let manifest = self.client.fetch_manifest().await.map(Arc::new);
        match &manifest {
            Ok(manifest) => self.cache.store(Arc::clone(manifest)),
            Err(e) => tracing::warn!(seq, "manifest load failed: {}", e),
        }

        CatalogResponse::ManifestResult {
            seq,
            manifest,
            from_cache: false,
        }
    }
}

/// Fetch an image and write it to a collision-free path under `dir`
async fn download_image(client: &CatalogClient, reference: &str, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let bytes = client
        .fetch_bytes(reference)
        .await
        .with_context(|| format!("Failed to fetch {}", file_name))?;

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    save_unique(dir, file_name, &bytes).await
}

/// Write `bytes` under the first candidate name that does not exist yet
///
/// Each candidate is claimed with `create_new`, so concurrent downloads of
/// the same name never share a file.
async fn save_unique(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    for name in candidate_names(file_name) {
        let target = dir.join(name);
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e).with_context(|| format!("Failed to create {}", target.display())),
        };

        file.write_all(bytes)
            .await
            .with_context(|| format!("Failed to write {}", target.display()))?;
        file.flush()
            .await
            .with_context(|| format!("Failed to write {}", target.display()))?;
        return Ok(target);
    }

    anyhow::bail!("No free file name for {} in {}", file_name, dir.display())
}

/// Spawn the catalog service worker
pub fn spawn_catalog_service(
    client: CatalogClient,
    download_dir: PathBuf,
) -> (
    mpsc::UnboundedSender<CatalogRequest>,
    mpsc::UnboundedReceiver<CatalogResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<CatalogRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<CatalogResponse>();

    tokio::spawn(async move {
        let mut service = CatalogService::new(client, download_dir, response_tx);
        while let Some(request) = request_rx.recv().await {
            service.handle(request).await;
        }
        tracing::debug!("catalog service stopped");
    });

    (request_tx, response_rx)
}
