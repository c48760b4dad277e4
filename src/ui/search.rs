//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title of the search box for the current input state
pub fn search_title(query: &str, active: bool, match_count: Option<usize>, vim_mode: bool) -> String {
    let searching = !query.trim().is_empty();
    if active {
        match match_count {
            Some(count) if searching => format!(" Search ({} matches) - Enter to accept, Esc to cancel ", count),
            _ => " Search file names - Esc to cancel ".to_string(),
        }
    } else if searching {
        // Search accepted (Enter pressed) - show match count
        match match_count {
            Some(count) => format!(" Search ({} matches) - Esc to clear ", count),
            None => " Search - Esc to clear ".to_string(),
        }
    } else {
        // No search query - show trigger key
        let search_key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Search ({}) ", search_key)
    }
}

/// Render search input box
///
/// # Arguments
/// - `query`: Current search keyword (raw)
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Number of matching images (None while nothing is searched)
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: Option<usize>,
    vim_mode: bool,
) {
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(query, active, match_count, vim_mode))
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Name: "),
            Span::raw(query),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Name: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(paragraph, area);
}
