//! Folder and subfolder selectors
//!
//! Both lists start with an empty "select" entry, so cursor 0 means
//! nothing is chosen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::SubfolderChoice;

/// Render one selector and return its inner area and scroll offset
fn render_selector(
    f: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
    entries: Vec<Line<'_>>,
    cursor: usize,
    is_focused: bool,
) -> (Rect, usize) {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        placeholder.to_string(),
        Style::default().fg(Color::DarkGray),
    )))];
    items.extend(entries.into_iter().map(ListItem::new));

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(if is_focused { Color::Cyan } else { Color::Gray })
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(cursor));
    f.render_stateful_widget(list, area, &mut state);

    (inner, state.offset())
}

pub fn render_folder_selector(
    f: &mut Frame,
    area: Rect,
    folders: &[String],
    cursor: usize,
    is_focused: bool,
) -> (Rect, usize) {
    let entries = folders.iter().map(|name| Line::from(name.as_str())).collect();
    let title = format!("Folders ({})", folders.len());
    render_selector(f, area, &title, "(select a folder)", entries, cursor, is_focused)
}

pub fn render_subfolder_selector(
    f: &mut Frame,
    area: Rect,
    options: &[SubfolderChoice],
    cursor: usize,
    is_focused: bool,
) -> (Rect, usize) {
    let entries = options
        .iter()
        .map(|choice| match choice {
            SubfolderChoice::Direct => Line::from(Span::styled(
                choice.label().to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            SubfolderChoice::Named(name) => Line::from(name.as_str()),
        })
        .collect();
    render_selector(f, area, "Subfolders", "(select a subfolder)", entries, cursor, is_focused)
}
