// Custom Dioxus hooks
pub mod listener;
pub mod scroll;
pub mod viewport;

pub use listener::WindowListener;
pub use scroll::{Crossing, ThresholdTracker, use_scroll_threshold};
pub use viewport::{Breakpoint, use_breakpoint, viewport_width};
