//! Keyboard Input Handler
//!
//! Search input takes every printable key while active; otherwise keys
//! act on the focused pane (top folders, subfolders, image grid).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::grid::{step_list, GridMove};
use crate::logic::ui::{next_focus, prev_focus};
use crate::model::FocusPane;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Update last user action timestamp for idle detection
    app.model.record_user_action();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return;
    }

    let vim_mode = app.model.ui.vim_mode;
    let subfolders_visible = app.model.subfolders_visible();

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.search_mode = true;
        }
        KeyCode::Char('/') => {
            app.model.ui.search_mode = true;
        }
        KeyCode::Esc => {
            if app.model.selection.is_searching() {
                app.set_search_keyword(String::new());
            }
        }
        KeyCode::Tab => {
            app.model.ui.focus = next_focus(app.model.ui.focus, subfolders_visible);
        }
        KeyCode::BackTab => {
            app.model.ui.focus = prev_focus(app.model.ui.focus, subfolders_visible);
        }
        KeyCode::Char('r') => {
            app.reload_manifest();
        }
        KeyCode::Char('d') => {
            app.download_selected();
        }
        _ => match app.model.ui.focus {
            FocusPane::Folders | FocusPane::Subfolders => handle_list_key(app, key, vim_mode),
            FocusPane::Grid => handle_grid_key(app, key, vim_mode),
        },
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Cancel: leave input and restore the folder view
            app.model.ui.search_mode = false;
            app.set_search_keyword(String::new());
        }
        KeyCode::Enter => {
            // Accept: keep the results, give keys back to the panes
            app.model.ui.search_mode = false;
            if app.model.selection.is_searching() {
                app.model.ui.focus = FocusPane::Grid;
            }
        }
        KeyCode::Backspace => {
            let mut keyword = app.model.selection.search_keyword.clone();
            keyword.pop();
            app.set_search_keyword(keyword);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut keyword = app.model.selection.search_keyword.clone();
            keyword.push(c);
            app.set_search_keyword(keyword);
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, vim_mode: bool) {
    match key.code {
        KeyCode::Down => step_selector(app, true),
        KeyCode::Up => step_selector(app, false),
        KeyCode::Char('j') if vim_mode => step_selector(app, true),
        KeyCode::Char('k') if vim_mode => step_selector(app, false),
        KeyCode::Enter | KeyCode::Right => {
            app.model.ui.focus = next_focus(app.model.ui.focus, app.model.subfolders_visible());
        }
        KeyCode::Char('l') if vim_mode => {
            app.model.ui.focus = next_focus(app.model.ui.focus, app.model.subfolders_visible());
        }
        KeyCode::Left if app.model.ui.focus == FocusPane::Subfolders => {
            app.model.ui.focus = FocusPane::Folders;
        }
        KeyCode::Char('h') if vim_mode && app.model.ui.focus == FocusPane::Subfolders => {
            app.model.ui.focus = FocusPane::Folders;
        }
        _ => {}
    }
}

/// Move the focused selector one entry and apply it immediately
///
/// Entry 0 of each selector is the empty "select" entry.
fn step_selector(app: &mut App, forward: bool) {
    match app.model.ui.focus {
        FocusPane::Folders => {
            let len = app.model.catalog.top_folders.len() + 1;
            let cursor = step_list(Some(app.model.ui.folder_cursor), len, forward).unwrap_or(0);
            let folder = cursor
                .checked_sub(1)
                .and_then(|idx| app.model.catalog.top_folders.get(idx).cloned());
            app.select_top_folder(folder);
            app.model.ui.folder_cursor = cursor;
        }
        FocusPane::Subfolders => {
            let len = app.model.subfolder_options().len() + 1;
            let cursor = step_list(Some(app.model.ui.subfolder_cursor), len, forward).unwrap_or(0);
            let choice = cursor
                .checked_sub(1)
                .and_then(|idx| app.model.subfolder_options().get(idx).cloned());
            app.select_subfolder(choice);
            app.model.ui.subfolder_cursor = cursor;
        }
        FocusPane::Grid => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent, vim_mode: bool) {
    let dir = match key.code {
        KeyCode::Left => GridMove::Left,
        KeyCode::Right => GridMove::Right,
        KeyCode::Up => GridMove::Up,
        KeyCode::Down => GridMove::Down,
        KeyCode::Home => GridMove::First,
        KeyCode::End => GridMove::Last,
        KeyCode::Char('h') if vim_mode => GridMove::Left,
        KeyCode::Char('l') if vim_mode => GridMove::Right,
        KeyCode::Char('k') if vim_mode => GridMove::Up,
        KeyCode::Char('j') if vim_mode => GridMove::Down,
        KeyCode::Char('g') if vim_mode => GridMove::First,
        KeyCode::Char('G') if vim_mode => GridMove::Last,
        KeyCode::Enter => {
            app.download_selected();
            return;
        }
        _ => return,
    };
    app.model.display.move_selection(dir);
}
