//! Image Grid Geometry
//!
//! Pure functions for laying items out in fixed-size cells, moving the
//! selection around the grid, and mapping terminal cells back to items.

/// Width of one grid cell in terminal columns (including borders)
pub const CELL_WIDTH: u16 = 26;

/// Height of one grid cell: border, name, size hint, border
pub const CELL_HEIGHT: u16 = 4;

/// Direction of a selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Number of columns that fit in `width` (at least one)
///
/// # Examples
/// ```
/// use katui::logic::grid::columns_for_width;
///
/// assert_eq!(columns_for_width(10), 1);
/// assert_eq!(columns_for_width(52), 2);
/// assert_eq!(columns_for_width(80), 3);
/// ```
pub fn columns_for_width(width: u16) -> usize {
    ((width / CELL_WIDTH) as usize).max(1)
}

/// Number of complete rows that fit in `height` (at least one)
pub fn rows_for_height(height: u16) -> usize {
    ((height / CELL_HEIGHT) as usize).max(1)
}

/// Move the selection inside a grid of `len` items laid out in `columns`
///
/// Left/Right step through items linearly and stop at the ends; Up/Down
/// jump a whole row, landing on the last item when the row below is short.
pub fn move_selection(current: Option<usize>, len: usize, columns: usize, dir: GridMove) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);
    let last = len - 1;

    let Some(idx) = current else {
        return Some(match dir {
            GridMove::Last => last,
            _ => 0,
        });
    };
    let idx = idx.min(last);

    Some(match dir {
        GridMove::Left => idx.saturating_sub(1),
        GridMove::Right => (idx + 1).min(last),
        GridMove::Up => {
            if idx >= columns {
                idx - columns
            } else {
                idx
            }
        }
        GridMove::Down => {
            if idx + columns <= last {
                idx + columns
            } else if idx / columns < last / columns {
                last
            } else {
                idx
            }
        }
        GridMove::First => 0,
        GridMove::Last => last,
    })
}

/// Keep the selected row inside the visible window
///
/// Returns the new first visible row.
pub fn scroll_to_selection(selected: Option<usize>, columns: usize, visible_rows: usize, first_row: usize) -> usize {
    let Some(idx) = selected else {
        return first_row;
    };
    let row = idx / columns.max(1);
    let visible_rows = visible_rows.max(1);

    if row < first_row {
        row
    } else if row >= first_row + visible_rows {
        row + 1 - visible_rows
    } else {
        first_row
    }
}

/// Map a cell offset inside the grid area to an item index
///
/// `dx`/`dy` are relative to the grid's inner top-left corner.
pub fn hit_test(dx: u16, dy: u16, columns: usize, first_row: usize, len: usize) -> Option<usize> {
    let col = (dx / CELL_WIDTH) as usize;
    if col >= columns {
        return None;
    }
    let row = first_row + (dy / CELL_HEIGHT) as usize;
    let idx = row * columns + col;
    (idx < len).then_some(idx)
}

/// Step through a plain list, wrapping at both ends
pub fn step_list(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) if i + 1 >= len => 0,
        (Some(i), true) => i + 1,
        (Some(0), false) => len - 1,
        (Some(i), false) => (i - 1).min(len - 1),
    })
}
