//! Reusable TUI widgets.

pub mod screenshot_button;
pub mod send_button;

pub use screenshot_button::{draw_screenshot_button, screenshot_hint, screenshot_label};
pub use send_button::{draw_send_button, send_label};
