//! Catalog Response Handler
//!
//! Applies manifest loads and download results from the catalog service.

use crate::logic::errors::describe_failure;
use crate::services::CatalogResponse;
use crate::App;

/// Handle a response from the catalog service
///
/// Manifest responses carry the sequence number of their request; the
/// model ignores any that a newer request has superseded.
pub fn handle_catalog_response(app: &mut App, response: CatalogResponse) {
    match response {
        CatalogResponse::ManifestResult {
            seq,
            manifest,
            from_cache,
        } => match manifest {
            Ok(manifest) => {
                if app.model.apply_manifest(seq, manifest, from_cache) {
                    tracing::debug!(
                        seq,
                        from_cache,
                        folders = app.model.catalog.top_folders.len(),
                        "manifest applied"
                    );
                }
            }
            Err(e) => {
                let message = describe_failure(&e);
                if app.model.apply_manifest_error(seq, message) {
                    tracing::warn!(seq, "showing manifest failure: {}", e);
                }
            }
        },
        CatalogResponse::DownloadResult { file_name, saved } => match saved {
            Ok(path) => {
                app.model.show_toast(format!("Saved {}", path.display()));
            }
            Err(e) => {
                tracing::error!("download of {} failed: {:#}", file_name, e);
                app.model
                    .show_toast(format!("Error: could not save {}: {}", file_name, e.root_cause()));
            }
        },
    }
}
