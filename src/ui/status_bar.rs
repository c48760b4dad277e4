use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{LoadState, Model};

/// Status text segments (extracted for testability)
pub fn status_segments(model: &Model) -> Vec<String> {
    let mut segments = Vec::new();

    let location = match (&model.selection.top_folder, &model.selection.subfolder) {
        _ if model.selection.is_searching() => {
            format!("Search: {}", model.selection.active_keyword().unwrap_or_default())
        }
        (Some(top), Some(sub)) => format!("{} / {}", top, sub.label()),
        (Some(top), None) => top.clone(),
        (None, _) => "No folder".to_string(),
    };
    segments.push(location);

    let count = model.display.items.len();
    let large = model.display.large_count();
    segments.push(if large > 0 {
        format!("{} images ({} large)", count, large)
    } else {
        format!("{} images", count)
    });

    if let Some(item) = model.display.selected_item() {
        segments.push(item.path.clone());
    }

    let load = match (&model.catalog.load_state, model.catalog.loaded_at) {
        (LoadState::Loading, _) => "Loading manifest...".to_string(),
        (LoadState::Failed { .. }, _) => "Manifest failed (r to retry)".to_string(),
        (_, Some(at)) => format!(
            "{} paths, loaded {}{}",
            model.catalog.manifest.len(),
            at.format("%H:%M:%S"),
            if model.catalog.from_cache { " (cached)" } else { "" }
        ),
        (_, None) => "Not loaded".to_string(),
    };
    segments.push(load);

    segments
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let mut spans = Vec::new();
    for (idx, segment) in status_segments(model).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::raw(segment));
    }

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_status_before_load() {
        let mut model = Model::new("卡图", false);
        model.begin_manifest_load();
        let segments = status_segments(&model);
        assert_eq!(segments[0], "No folder");
        assert_eq!(segments[1], "0 images");
        assert_eq!(segments.last().unwrap(), "Loading manifest...");
    }

    #[test]
    fn test_status_with_selection() {
        let mut model = Model::new("卡图", false);
        let seq = model.begin_manifest_load();
        model.apply_manifest(
            seq,
            Arc::new(vec!["r/卡图/A/1.png".to_string(), "r/卡图/A/22_large.png".to_string()]),
            true,
        );
        model.select_top_folder(Some("A".to_string()));

        let segments = status_segments(&model);
        assert_eq!(segments[0], "A");
        assert_eq!(segments[1], "2 images (1 large)");
        assert_eq!(segments[2], "r/卡图/A/1.png");
        assert!(segments[3].starts_with("2 paths, loaded "));
        assert!(segments[3].ends_with("(cached)"));
    }
}
