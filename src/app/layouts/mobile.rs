use dioxus::prelude::*;

use crate::app::components::{HomepageHeading, MenuItems};
use crate::shared::logging;

/// Mobile chrome: compact banner with a slide-in navigation sidebar.
///
/// Owns a single `sidebar_opened` flag: the menu toggle opens the panel,
/// tapping the overlay outside it dismisses it.
#[component]
pub fn MobileChrome(children: Element) -> Element {
    let mut sidebar_opened = use_signal(|| false);

    use_hook(|| logging::log_chrome_mounted("mobile"));

    rsx! {
        div { class: "chrome chrome--mobile",
            if sidebar_opened() {
                // Tap outside the panel dismisses it
                div {
                    class: "sidebar__overlay",
                    onclick: move |_| {
                        logging::log_sidebar_toggled(false);
                        sidebar_opened.set(false);
                    },
                }
                aside { class: "sidebar",
                    MenuItems {}
                }
            }
            section { class: "masthead masthead--mobile",
                nav { class: "menu menu--inverted",
                    button {
                        class: "menu__toggle",
                        onclick: move |_| {
                            logging::log_sidebar_toggled(true);
                            sidebar_opened.set(true);
                        },
                        "☰"
                    }
                }
                HomepageHeading { mobile: true }
            }
            {children}
        }
    }
}
