use ratatui::{layout::Rect, Frame};

use super::{grid, layout, legend, preview, search, selectors, status_bar, toast};
use crate::model::{FocusPane, Model, PaneAreas};
use crate::App;

/// Grid title for the current selection
fn grid_title(model: &Model) -> String {
    let count = model.display.items.len();
    if let Some(keyword) = model.selection.active_keyword() {
        return format!("Search \"{}\" ({})", keyword, count);
    }
    match (&model.selection.top_folder, &model.selection.subfolder) {
        (Some(top), Some(sub)) => format!("{} / {} ({})", top, sub.label(), count),
        (Some(top), None) => format!("{} ({})", top, count),
        (None, _) => "Images".to_string(),
    }
}

/// Main render function - orchestrates all UI rendering
///
/// Records the pane areas in the model for mouse hit-testing.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &mut app.model;

    let legend_height = legend::calculate_legend_height(
        size.width,
        model.ui.vim_mode,
        model.ui.focus,
        model.ui.search_mode,
        model.selection.is_searching(),
    );
    let layout_info = layout::calculate_layout(
        size,
        model.subfolders_visible(),
        app.image_picker.is_some(),
        legend_height,
    );

    search::render_search_input(
        f,
        layout_info.search_area,
        &model.selection.search_keyword,
        model.ui.search_mode,
        model.selection.is_searching().then_some(model.display.items.len()),
        model.ui.vim_mode,
    );

    let (folders_inner, folders_offset) = selectors::render_folder_selector(
        f,
        layout_info.folders_area,
        &model.catalog.top_folders,
        model.ui.folder_cursor,
        model.ui.focus == FocusPane::Folders,
    );

    let (subfolders_inner, subfolders_offset) = match layout_info.subfolders_area {
        Some(area) => selectors::render_subfolder_selector(
            f,
            area,
            model.subfolder_options(),
            model.ui.subfolder_cursor,
            model.ui.focus == FocusPane::Subfolders,
        ),
        None => (Rect::default(), 0),
    };

    let title = grid_title(model);
    let grid_inner = grid::render_grid(
        f,
        layout_info.grid_area,
        &mut model.display,
        &title,
        model.ui.focus == FocusPane::Grid,
    );

    model.ui.areas = PaneAreas {
        folders: folders_inner,
        subfolders: subfolders_inner,
        grid: grid_inner,
        folders_offset,
        subfolders_offset,
    };

    if let Some(preview_area) = layout_info.preview_area {
        let selected = model.display.selected_item().map(|item| item.reference.as_str());
        preview::render_preview(f, preview_area, app.preview.as_mut(), selected);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.ui.focus,
        model.ui.search_mode,
        model.selection.is_searching(),
    );

    status_bar::render_status_bar(f, layout_info.status_area, model);

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
