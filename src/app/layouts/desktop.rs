use dioxus::prelude::*;

use crate::app::components::{HomepageHeading, MenuItems};
use crate::shared::hooks::use_scroll_threshold;
use crate::shared::logging;

// Banner height; scrolling past its bottom pins the menu to the top
const BANNER_MIN_HEIGHT_PX: f64 = 700.0;

/// Desktop chrome: full-height banner with the menu bar and hero heading.
///
/// Owns a single `fixed` flag. The scroll observer fires once per threshold
/// crossing, so each setter only runs on an actual transition.
#[component]
pub fn DesktopChrome(children: Element) -> Element {
    let mut fixed = use_signal(|| false);

    use_hook(|| logging::log_chrome_mounted("desktop"));

    use_scroll_threshold(
        BANNER_MIN_HEIGHT_PX,
        move || {
            logging::log_navbar_pinned(true);
            fixed.set(true);
        },
        move || {
            logging::log_navbar_pinned(false);
            fixed.set(false);
        },
    );

    let menu_class = if fixed() {
        "menu menu--fixed"
    } else {
        "menu menu--inverted menu--pointing"
    };

    rsx! {
        div { class: "chrome chrome--desktop",
            section { class: "masthead",
                nav { class: "{menu_class}",
                    MenuItems {}
                }
                HomepageHeading {}
            }
            {children}
        }
    }
}
