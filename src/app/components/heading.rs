use dioxus::prelude::*;

use crate::domain::models::PROFILE;

/// Hero heading: name and tagline over the banner.
///
/// `mobile` only selects the compact font sizes; the component holds no
/// state and has no side effects.
#[component]
pub fn HomepageHeading(#[props(default = false)] mobile: bool) -> Element {
    let (h1_size, h1_margin) = if mobile { ("2em", "1.5em") } else { ("4em", "3em") };
    let (h2_size, h2_margin) = if mobile { ("1.5em", "0.5em") } else { ("1.7em", "1.5em") };

    rsx! {
        div { class: "hero",
            h1 {
                class: "hero__name",
                style: "font-size: {h1_size}; font-weight: normal; margin-top: {h1_margin}; margin-bottom: 0;",
                "{PROFILE.name}"
            }
            h2 {
                class: "hero__tagline",
                style: "font-size: {h2_size}; font-weight: normal; margin-top: {h2_margin};",
                "{PROFILE.tagline}"
            }
        }
    }
}
