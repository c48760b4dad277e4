//! Mouse Input Handler
//!
//! Terminal mouse events stand in for touch: left button down starts a
//! press, a drag cancels it, button up ends it, and a right click is the
//! context menu. Hit-testing uses the pane areas recorded at the last render.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::logic::grid::{hit_test, GridMove};
use crate::model::FocusPane;
use crate::App;

/// Handle a mouse event received at `now`
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    app.model.record_user_action();
    let areas = app.model.ui.areas;
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.grid.contains(pos) {
                app.model.ui.focus = FocusPane::Grid;
                match grid_item_at(app, areas.grid, pos) {
                    Some(idx) => app.model.display.press(idx, now),
                    None => app.model.display.press_released(),
                }
            } else if areas.folders.contains(pos) {
                app.model.ui.focus = FocusPane::Folders;
                let cursor = list_row(areas.folders, areas.folders_offset, pos);
                if cursor <= app.model.catalog.top_folders.len() {
                    let folder = cursor
                        .checked_sub(1)
                        .and_then(|idx| app.model.catalog.top_folders.get(idx).cloned());
                    app.select_top_folder(folder);
                }
            } else if areas.subfolders.contains(pos) {
                app.model.ui.focus = FocusPane::Subfolders;
                let cursor = list_row(areas.subfolders, areas.subfolders_offset, pos);
                if cursor <= app.model.subfolder_options().len() {
                    let choice = cursor
                        .checked_sub(1)
                        .and_then(|idx| app.model.subfolder_options().get(idx).cloned());
                    app.select_subfolder(choice);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.model.display.press_moved();
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.model.display.press_released();
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if areas.grid.contains(pos) {
                if let Some(idx) = grid_item_at(app, areas.grid, pos) {
                    app.model.ui.focus = FocusPane::Grid;
                    app.context_menu(idx);
                }
            }
        }
        MouseEventKind::ScrollDown if areas.grid.contains(pos) => {
            app.model.display.move_selection(GridMove::Down);
        }
        MouseEventKind::ScrollUp if areas.grid.contains(pos) => {
            app.model.display.move_selection(GridMove::Up);
        }
        _ => {}
    }
}

fn grid_item_at(app: &App, grid: Rect, pos: Position) -> Option<usize> {
    let display = &app.model.display;
    hit_test(
        pos.x - grid.x,
        pos.y - grid.y,
        display.columns,
        display.first_row,
        display.items.len(),
    )
}

/// List entry under `pos`, accounting for scrolling
fn list_row(area: Rect, offset: usize, pos: Position) -> usize {
    offset + (pos.y - area.y) as usize
}
