//! Image preview methods
//!
//! The selected grid item is fetched and decoded in the background once
//! the user has been idle for a moment, then rendered with whichever
//! terminal graphics protocol the picker detected.

use ratatui_image::picker::{Picker, ProtocolType};

use super::{ImageMetadata, ImagePreviewState};
use crate::api::CatalogClient;
use crate::App;

/// Largest image body the preview will decode
const MAX_PREVIEW_BYTES: usize = 20 * 1024 * 1024;

/// Query the terminal for graphics support, honouring a forced protocol
pub(crate) fn init_image_picker(protocol: &str) -> Picker {
    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("image preview: failed to detect terminal: {}", e);
            Picker::from_fontsize((8, 16))
        }
    };

    let font_size = picker.font_size();
    tracing::debug!("image font size: {}x{}", font_size.0, font_size.1);

    match protocol.to_lowercase().as_str() {
        "auto" => tracing::debug!("image preview: auto-detected protocol"),
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => tracing::warn!("image preview: unknown protocol '{}', using auto-detect", unknown),
    }

    picker
}

impl App {
    /// Start loading the preview for the selected item when idle
    pub fn maybe_load_preview(&mut self) {
        let Some(picker) = self.image_picker.clone() else {
            return;
        };
        if !crate::logic::ui::should_load_preview(self.model.ui.idle_for()) {
            return;
        }
        let Some(item) = self.model.display.selected_item() else {
            self.preview = None;
            return;
        };
        if self
            .preview
            .as_ref()
            .is_some_and(|(reference, _)| reference == &item.reference)
        {
            return;
        }

        let reference = item.reference.clone();
        self.preview = Some((reference.clone(), ImagePreviewState::Loading));

        let client = self.client.clone();
        let image_tx = self.image_update_tx.clone();
        tokio::spawn(async move {
            tracing::debug!(%reference, "loading preview");
            let state = match load_image_preview(&client, &reference, picker).await {
                Ok((protocol, metadata)) => ImagePreviewState::Ready { protocol, metadata },
                Err(metadata) => {
                    tracing::debug!(%reference, ?metadata, "preview failed");
                    ImagePreviewState::Failed { metadata }
                }
            };
            let _ = image_tx.send((reference, state));
        });
    }

    /// Accept a finished preview if it still belongs to the selection
    pub(crate) fn apply_preview_update(&mut self, reference: String, state: ImagePreviewState) {
        match &self.preview {
            Some((current, _)) if *current == reference => {
                self.preview = Some((reference, state));
            }
            _ => tracing::trace!(%reference, "dropping preview for deselected item"),
        }
    }
}

async fn load_image_preview(
    client: &CatalogClient,
    reference: &str,
    picker: Picker,
) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata), ImageMetadata> {
    let bytes = client.fetch_bytes(reference).await.map_err(|e| ImageMetadata {
        dimensions: None,
        format: Some(format!("Fetch error: {}", e)),
        file_size: 0,
    })?;

    let file_size = bytes.len() as u64;
    if bytes.len() > MAX_PREVIEW_BYTES {
        return Err(ImageMetadata {
            dimensions: None,
            format: Some("Too large".to_string()),
            file_size,
        });
    }

    let img = match tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await {
        Ok(Ok(img)) => img,
        Ok(Err(e)) => {
            return Err(ImageMetadata {
                dimensions: None,
                format: Some(format!("Load error: {}", e)),
                file_size,
            });
        }
        Err(e) => {
            return Err(ImageMetadata {
                dimensions: None,
                format: Some(format!("Task error: {}", e)),
                file_size,
            });
        }
    };

    let dimensions = (img.width(), img.height());
    let format = match img.color() {
        image::ColorType::L8 => "Grayscale 8-bit",
        image::ColorType::La8 => "Grayscale+Alpha 8-bit",
        image::ColorType::Rgb8 => "RGB 8-bit",
        image::ColorType::Rgba8 => "RGBA 8-bit",
        image::ColorType::L16 => "Grayscale 16-bit",
        image::ColorType::La16 => "Grayscale+Alpha 16-bit",
        image::ColorType::Rgb16 => "RGB 16-bit",
        image::ColorType::Rgba16 => "RGBA 16-bit",
        _ => "Other",
    };

    // Pre-downscale to roughly what a large terminal can show
    let font_size = picker.font_size();
    let max_width = 120 * font_size.0 as u32 * 5 / 4;
    let max_height = 60 * font_size.1 as u32 * 5 / 4;

    let img = if img.width() > max_width || img.height() > max_height {
        let scale = (img.width() as f32 / max_width as f32).max(img.height() as f32 / max_height as f32);
        let filter = if scale > 4.0 {
            image::imageops::FilterType::Triangle
        } else if scale > 2.0 {
            image::imageops::FilterType::CatmullRom
        } else {
            image::imageops::FilterType::Lanczos3
        };
        tracing::debug!("pre-downscaling {}x{} by {:.2}x ({:?})", img.width(), img.height(), scale, filter);
        img.resize(max_width, max_height, filter)
    } else {
        img
    };

    let protocol = picker.new_resize_protocol(img);

    Ok((
        protocol,
        ImageMetadata {
            dimensions: Some(dimensions),
            format: Some(format.to_string()),
            file_size,
        },
    ))
}
