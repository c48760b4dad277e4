//! Image grid
//!
//! Fixed-size cells, one per image: the file name and, for large files, a
//! red slow-load warning. A pressed cell changes colour while the
//! long-press is armed and again once it has fired.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::logic::filters::Placeholder;
use crate::logic::gesture::PressState;
use crate::logic::grid::{columns_for_width, rows_for_height, scroll_to_selection, CELL_HEIGHT, CELL_WIDTH};
use crate::model::{DisplayModel, ImageItem};
use crate::utils::truncate_to_width;

pub const LARGE_WARNING: &str = "large file, slow to load";

/// Text lines of one grid cell
pub fn cell_lines(item: &ImageItem, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(truncate_to_width(&item.display_name, width))];
    if item.is_large {
        lines.push(Line::from(Span::styled(
            truncate_to_width(LARGE_WARNING, width),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

fn cell_border_style(item: &ImageItem, selected: bool) -> Style {
    match item.press.state() {
        PressState::Pressing { .. } => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        PressState::Fired => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        PressState::Idle if selected => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        PressState::Idle => Style::default().fg(Color::DarkGray),
    }
}

fn render_placeholder(f: &mut Frame, inner: Rect, placeholder: &Placeholder) {
    let color = match placeholder {
        Placeholder::LoadFailed(_) => Color::Red,
        Placeholder::Loading => Color::Cyan,
        _ => Color::Gray,
    };
    // Vertically centre the message
    let pad = inner.height.saturating_sub(1) / 2;
    let area = Rect {
        y: inner.y + pad,
        height: inner.height - pad,
        ..inner
    };
    let paragraph = Paragraph::new(placeholder.message())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the grid; returns its inner area for mouse hit-testing
///
/// Also stores the column count and scroll row in `display`, so keyboard
/// movement and hit-testing see the geometry that was drawn.
pub fn render_grid(f: &mut Frame, area: Rect, display: &mut DisplayModel, title: &str, is_focused: bool) -> Rect {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(placeholder) = &display.placeholder {
        render_placeholder(f, inner, placeholder);
        return inner;
    }

    let columns = columns_for_width(inner.width);
    let visible_rows = rows_for_height(inner.height);
    display.columns = columns;
    display.first_row = scroll_to_selection(display.selected, columns, visible_rows, display.first_row);

    let first = display.first_row * columns;
    let last = (first + visible_rows * columns).min(display.items.len());

    for idx in first..last {
        let offset = idx - first;
        let (row, col) = ((offset / columns) as u16, (offset % columns) as u16);
        let cell = Rect {
            x: inner.x + col * CELL_WIDTH,
            y: inner.y + row * CELL_HEIGHT,
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        }
        .intersection(inner);
        if cell.is_empty() {
            continue;
        }

        let item = &display.items[idx];
        let selected = display.selected == Some(idx);
        let cell_block = Block::default()
            .borders(Borders::ALL)
            .border_style(cell_border_style(item, selected));
        let text_width = cell.width.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(cell_lines(item, text_width)).block(cell_block);
        f.render_widget(paragraph, cell);
    }

    inner
}
