//! Image preview pane

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use crate::app::{ImageMetadata, ImagePreviewState};
use crate::utils::format_bytes;

fn metadata_line(metadata: &ImageMetadata) -> String {
    let mut parts = Vec::new();
    if let Some((w, h)) = metadata.dimensions {
        parts.push(format!("{}x{}", w, h));
    }
    if let Some(format) = &metadata.format {
        parts.push(format.clone());
    }
    if metadata.file_size > 0 {
        parts.push(format_bytes(metadata.file_size));
    }
    parts.join(" | ")
}

fn render_message(f: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the preview of `selected_reference`
///
/// A preview that belongs to another item is treated as pending.
pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    preview: Option<&mut (String, ImagePreviewState)>,
    selected_reference: Option<&str>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(reference) = selected_reference else {
        render_message(f, inner, "No image selected", Color::DarkGray);
        return;
    };

    let state = match preview {
        Some((key, state)) if key.as_str() == reference => state,
        _ => {
            render_message(f, inner, "Waiting...", Color::DarkGray);
            return;
        }
    };

    match state {
        ImagePreviewState::Loading => render_message(f, inner, "Loading preview...", Color::Cyan),
        ImagePreviewState::Failed { metadata } => {
            let text = format!("Preview unavailable\n{}", metadata_line(metadata));
            render_message(f, inner, &text, Color::Red);
        }
        ImagePreviewState::Ready { protocol, metadata } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);

            let image = StatefulImage::default();
            f.render_stateful_widget(image, chunks[0], protocol);

            let info = Paragraph::new(Line::from(metadata_line(metadata)))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(info, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_line() {
        let metadata = ImageMetadata {
            dimensions: Some((421, 614)),
            format: Some("RGB 8-bit".to_string()),
            file_size: 2048,
        };
        assert_eq!(metadata_line(&metadata), "421x614 | RGB 8-bit | 2.00 KB");

        let failed = ImageMetadata {
            dimensions: None,
            format: Some("Too large".to_string()),
            file_size: 0,
        };
        assert_eq!(metadata_line(&failed), "Too large");
    }
}
