// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (search, selectors, grid, preview, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - selectors: Top folder and subfolder lists
// - grid: Image grid with per-cell gesture feedback
// - preview: Selected image preview via terminal graphics
// - search: Renders search input box with query and match count
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - toast: Renders toast notifications (brief pop-up messages)

pub mod grid;
pub mod layout;
pub mod legend;
pub mod preview;
pub mod render;
pub mod search;
pub mod selectors;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
