use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::FocusPane;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, focus: FocusPane, search_mode: bool, has_search_query: bool) -> Vec<Span<'static>> {
    if search_mode {
        return vec![
            Span::raw("Type to filter by file name  "),
            key("Enter"),
            Span::raw(":Accept  "),
            key("Esc"),
            Span::raw(":Cancel  "),
            key("^C"),
            Span::raw(":Quit"),
        ];
    }

    let mut hotkey_spans = vec![key("Tab"), Span::raw(":Pane  ")];

    match focus {
        FocusPane::Folders | FocusPane::Subfolders => {
            hotkey_spans.extend(vec![
                key(if vim_mode { "j/k" } else { "↑/↓" }),
                Span::raw(":Choose  "),
            ]);
        }
        FocusPane::Grid => {
            hotkey_spans.extend(vec![
                key(if vim_mode { "hjkl" } else { "←↑↓→" }),
                Span::raw(":Move  "),
            ]);
            if vim_mode {
                hotkey_spans.extend(vec![key("g/G"), Span::raw(":First/Last  ")]);
            }
            hotkey_spans.extend(vec![
                key("Hold click"),
                Span::raw(":Download  "),
                key("Right click"),
                Span::raw(":Download  "),
            ]);
        }
    }

    hotkey_spans.extend(vec![key("d"), Span::raw(":Download  ")]);

    if has_search_query {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
    }

    hotkey_spans.extend(vec![key("r"), Span::raw(":Reload  "), key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    focus: FocusPane,
    search_mode: bool,
    has_search_query: bool,
) {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, focus, search_mode, has_search_query));
    let legend = Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    focus: FocusPane,
    search_mode: bool,
    has_search_query: bool,
) -> u16 {
    // Count lines without the block; line_count() ignores borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, focus, search_mode, has_search_query));
    let paragraph_for_counting = Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
