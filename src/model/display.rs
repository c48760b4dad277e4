//! Display Model
//!
//! The rendered grid: items built from the last computed view, the grid
//! selection, and which item (if any) is being long-pressed.

use std::time::{Duration, Instant};

use super::types::{ImageItem, SubfolderChoice};
use crate::logic::filters::{CatalogView, Placeholder, ViewContent};
use crate::logic::gesture::{ContextMenuOutcome, GestureAction};
use crate::logic::grid::{self, GridMove};

/// Current grid content
#[derive(Clone, Debug)]
pub struct DisplayModel {
    /// Subfolder selector entries, `None` when the selector is hidden
    pub subfolder_options: Option<Vec<SubfolderChoice>>,

    /// Rendered images (empty when a placeholder is shown)
    pub items: Vec<ImageItem>,

    pub placeholder: Option<Placeholder>,

    pub selected: Option<usize>,

    /// First visible grid row
    pub first_row: usize,

    /// Column count used at the last render
    pub columns: usize,

    /// Item holding an armed or fired long-press
    pub active_press: Option<usize>,
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self {
            subfolder_options: None,
            items: Vec::new(),
            placeholder: Some(Placeholder::Loading),
            selected: None,
            first_row: 0,
            columns: 1,
            active_press: None,
        }
    }
}

impl DisplayModel {
    /// Replace the grid with a freshly computed view
    ///
    /// Every item gets a new long-press tracker; nothing from the previous
    /// render survives.
    pub fn replace(&mut self, view: CatalogView, hold: Duration) {
        self.subfolder_options = view.subfolder_options;
        match view.content {
            ViewContent::Images(paths) => {
                self.items = paths.iter().map(|p| ImageItem::from_path(p, hold)).collect();
                self.placeholder = None;
            }
            ViewContent::Placeholder(placeholder) => {
                self.items.clear();
                self.placeholder = Some(placeholder);
            }
        }
        self.selected = if self.items.is_empty() { None } else { Some(0) };
        self.first_row = 0;
        self.active_press = None;
    }

    pub fn selected_item(&self) -> Option<&ImageItem> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    pub fn large_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_large).count()
    }

    pub fn move_selection(&mut self, dir: GridMove) {
        self.selected = grid::move_selection(self.selected, self.items.len(), self.columns, dir);
    }

    /// Touch start on `idx`; also selects it
    pub fn press(&mut self, idx: usize, now: Instant) {
        if idx >= self.items.len() {
            return;
        }
        if let Some(prev) = self.active_press.filter(|&prev| prev != idx) {
            if let Some(item) = self.items.get_mut(prev) {
                item.press.released();
            }
        }
        self.items[idx].press.press(now);
        self.active_press = Some(idx);
        self.selected = Some(idx);
    }

    /// Touch move on the pressed item
    pub fn press_moved(&mut self) {
        if let Some(item) = self.active_press.take().and_then(|idx| self.items.get_mut(idx)) {
            item.press.moved();
        }
    }

    /// Touch end on the pressed item
    pub fn press_released(&mut self) {
        if let Some(item) = self.active_press.take().and_then(|idx| self.items.get_mut(idx)) {
            item.press.released();
        }
    }

    /// Deadline of the armed long-press, if any
    pub fn press_deadline(&self) -> Option<Instant> {
        self.active_press
            .and_then(|idx| self.items.get(idx))
            .and_then(|item| item.press.deadline())
    }

    /// Advance the armed long-press; returns the item to download
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let idx = self.active_press?;
        let item = self.items.get_mut(idx)?;
        match item.press.tick(now) {
            Some(GestureAction::Download) => Some(idx),
            None => None,
        }
    }

    /// Secondary click on `idx`
    pub fn context_menu(&mut self, idx: usize) -> Option<ContextMenuOutcome> {
        let outcome = self.items.get(idx)?.press.context_menu();
        self.selected = Some(idx);
        Some(outcome)
    }
}
