//! App Orchestration
//!
//! `App` is the runtime half of the Elm-style split: it owns the pure
//! `Model` plus everything that performs I/O (service channels, the HTTP
//! client, the terminal image picker). Methods are grouped by domain:
//!
//! - catalog: manifest requests, selection changes, downloads, gestures
//! - preview: background image preview loading
//!
//! Input and service handlers live in src/handlers/, rendering in src/ui/.

pub(crate) mod catalog;
pub(crate) mod preview;

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::api::CatalogClient;
use crate::config::Config;
use crate::model::Model;
use crate::services::{spawn_catalog_service, CatalogRequest, CatalogResponse};

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        metadata: ImageMetadata,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { metadata } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("metadata", metadata)
                .finish(),
        }
    }
}

pub struct App {
    pub model: Model,

    pub(crate) client: CatalogClient,
    pub(crate) catalog_tx: mpsc::UnboundedSender<CatalogRequest>,
    pub(crate) catalog_rx: mpsc::UnboundedReceiver<CatalogResponse>,

    pub(crate) image_picker: Option<ratatui_image::picker::Picker>,
    pub(crate) image_update_tx: mpsc::UnboundedSender<(String, ImagePreviewState)>,
    pub(crate) image_update_rx: mpsc::UnboundedReceiver<(String, ImagePreviewState)>,

    /// Preview of the selected item, keyed by its reference
    pub(crate) preview: Option<(String, ImagePreviewState)>,

    /// Keep the manifest between navigation actions
    pub(crate) cache_manifest: bool,
}

impl App {
    /// Build the runtime and issue the initial manifest request
    ///
    /// Must run inside a tokio runtime: the catalog service is spawned here.
    pub fn new(config: &Config) -> Result<Self> {
        let client = CatalogClient::new(&config.base_url, &config.manifest_path)
            .with_context(|| format!("Invalid base URL: {}", config.base_url))?;

        let download_dir = config.resolved_download_dir();
        tracing::info!(
            base_url = %client.base_url(),
            download_dir = %download_dir.display(),
            cache = config.cache_manifest,
            "starting catalog browser"
        );

        let (catalog_tx, catalog_rx) = spawn_catalog_service(client.clone(), download_dir);
        let (image_update_tx, image_update_rx) = mpsc::unbounded_channel();

        let image_picker = if config.image_preview_enabled {
            Some(preview::init_image_picker(&config.image_protocol))
        } else {
            tracing::info!("image preview disabled in config");
            None
        };

        let model = Model::with_long_press(
            &config.catalog_dir,
            config.vim_mode,
            Duration::from_millis(config.long_press_ms),
        );

        let mut app = App {
            model,
            client,
            catalog_tx,
            catalog_rx,
            image_picker,
            image_update_tx,
            image_update_rx,
            preview: None,
            cache_manifest: config.cache_manifest,
        };

        app.request_manifest(false);
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.model.ui.should_quit
    }

    /// Drain finished service work without blocking
    pub fn process_responses(&mut self) {
        while let Ok(response) = self.catalog_rx.try_recv() {
            crate::handlers::handle_catalog_response(self, response);
        }

        while let Ok((reference, state)) = self.image_update_rx.try_recv() {
            self.apply_preview_update(reference, state);
        }
    }
}
