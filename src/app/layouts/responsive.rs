use dioxus::prelude::*;

use crate::app::layouts::{DesktopChrome, MobileChrome};
use crate::shared::hooks::{Breakpoint, use_breakpoint};

/// Which chrome variant wraps the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeKind {
    Desktop,
    Mobile,
}

/// Chrome selection is a pure function of the breakpoint: the mobile band
/// gets the sidebar chrome, tablet and computer get the desktop chrome.
pub fn chrome_for(breakpoint: Breakpoint) -> ChromeKind {
    if breakpoint.is_mobile() {
        ChromeKind::Mobile
    } else {
        ChromeKind::Desktop
    }
}

/// Mounts exactly one chrome variant around the page body, swapping it when
/// a resize moves the viewport across the mobile boundary. The previous
/// chrome unmounts first, which releases its scroll listener.
#[component]
pub fn ResponsiveChrome(children: Element) -> Element {
    let breakpoint = use_breakpoint();

    match chrome_for(breakpoint()) {
        ChromeKind::Desktop => rsx! {
            DesktopChrome { {children} }
        },
        ChromeKind::Mobile => rsx! {
            MobileChrome { {children} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_widths_get_the_mobile_chrome() {
        for width in [0.0, 320.0, 480.0, 767.0] {
            assert_eq!(
                chrome_for(Breakpoint::classify(width)),
                ChromeKind::Mobile,
                "width {width}"
            );
        }
    }

    #[test]
    fn tablet_and_computer_widths_get_the_desktop_chrome() {
        for width in [768.0, 1023.0, 1024.0, 1920.0] {
            assert_eq!(
                chrome_for(Breakpoint::classify(width)),
                ChromeKind::Desktop,
                "width {width}"
            );
        }
    }
}
