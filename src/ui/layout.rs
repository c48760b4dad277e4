use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the folder/subfolder selector column
const SELECTOR_WIDTH: u16 = 28;

/// Minimum content width before the preview pane is shown
const PREVIEW_MIN_WIDTH: u16 = 100;

/// Grid keeps at least one cell plus borders
const CELL_MIN_GRID: u16 = crate::logic::grid::CELL_WIDTH + 2;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search input area (always visible)
    pub search_area: Rect,
    /// Top folder selector
    pub folders_area: Rect,
    /// Subfolder selector (only when the folder has subfolders)
    pub subfolders_area: Option<Rect>,
    /// Image grid
    pub grid_area: Rect,
    /// Image preview (if enabled and there is room)
    pub preview_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    subfolders_visible: bool,
    preview_enabled: bool,
    legend_height: u16,
) -> LayoutInfo {
    // Search (top) + content + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search input
            Constraint::Min(4),                // Selectors + grid + preview
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];
    let show_preview = preview_enabled && content_area.width >= PREVIEW_MIN_WIDTH;

    let constraints: Vec<Constraint> = if show_preview {
        vec![
            Constraint::Length(SELECTOR_WIDTH),
            Constraint::Min(CELL_MIN_GRID),
            Constraint::Percentage(35),
        ]
    } else {
        vec![Constraint::Length(SELECTOR_WIDTH), Constraint::Min(CELL_MIN_GRID)]
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(content_area);

    let (folders_area, subfolders_area) = if subfolders_visible {
        let selectors = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);
        (selectors[0], Some(selectors[1]))
    } else {
        (columns[0], None)
    };

    LayoutInfo {
        search_area: main_chunks[0],
        folders_area,
        subfolders_area,
        grid_area: columns[1],
        preview_area: show_preview.then(|| columns[2]),
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}
