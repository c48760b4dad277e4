//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - catalog: responses from the background catalog service
//! - keyboard: user keyboard input
//! - mouse: clicks, presses and drags (touch gestures)
//!
//! Handlers take `&mut App`, update the model and queue service requests.

pub mod catalog;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use catalog::handle_catalog_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
