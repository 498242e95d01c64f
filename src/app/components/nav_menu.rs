use dioxus::prelude::*;

use crate::domain::models::NAV_ENTRIES;

/// The shared navigation list, rendered inside the desktop menu bar and the
/// mobile sidebar. The "Home" entry has no destination and stays active.
#[component]
pub fn MenuItems() -> Element {
    rsx! {
        div { class: "menu__items",
            for entry in NAV_ENTRIES {
                if let Some(href) = entry.target {
                    a {
                        class: "menu__item",
                        href: href,
                        target: if entry.same_tab { None } else { Some("_blank") },
                        rel: if entry.same_tab { None } else { Some("noopener") },
                        "{entry.label}"
                    }
                } else {
                    a { class: "menu__item menu__item--active", "{entry.label}" }
                }
            }
        }
    }
}
