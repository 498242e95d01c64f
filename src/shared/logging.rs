//! Structured logging for the portfolio page.
//!
//! Thin helpers over `tracing` so UI transitions log consistent fields.

use crate::shared::hooks::Breakpoint;

/// Operations worth tracing in a page this small
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    BreakpointChange,
    ChromeMount,
    NavbarPin,
    SidebarToggle,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::BreakpointChange => "breakpoint_change",
            LogOperation::ChromeMount => "chrome_mount",
            LogOperation::NavbarPin => "navbar_pin",
            LogOperation::SidebarToggle => "sidebar_toggle",
        }
    }
}

/// Log a viewport reclassification after a resize event
pub fn log_breakpoint_change(from: Breakpoint, to: Breakpoint) {
    tracing::debug!(
        operation = LogOperation::BreakpointChange.as_str(),
        from = from.as_str(),
        to = to.as_str(),
        "Viewport breakpoint changed"
    );
}

/// Log which chrome variant got mounted
pub fn log_chrome_mounted(kind: &'static str) {
    tracing::info!(
        operation = LogOperation::ChromeMount.as_str(),
        chrome = kind,
        "Chrome mounted"
    );
}

/// Log a navbar pin/unpin transition on the desktop chrome
pub fn log_navbar_pinned(pinned: bool) {
    tracing::debug!(
        operation = LogOperation::NavbarPin.as_str(),
        pinned = pinned,
        "Navbar pin state changed"
    );
}

/// Log the mobile sidebar opening or closing
pub fn log_sidebar_toggled(open: bool) {
    tracing::debug!(
        operation = LogOperation::SidebarToggle.as_str(),
        open = open,
        "Sidebar toggled"
    );
}
