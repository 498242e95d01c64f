use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::ProjectShowcase;
use crate::app::layouts::ResponsiveChrome;
use crate::domain::models::PROFILE;

#[component]
pub fn App() -> Element {
    // Use asset!() so the bundled CSS is fingerprinted and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_effect(|| {
        tracing::info!("Portfolio app initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        ResponsiveChrome {
            AboutSection {}
            SiteFooter {}
        }
    }
}

/// About segment: bio paragraphs, profile photo and the project showcase.
#[component]
fn AboutSection() -> Element {
    rsx! {
        section { class: "segment segment--about",
            div { class: "grid",
                div { class: "grid__column grid__column--text",
                    h3 { class: "section-heading",
                        "Currently A Software Engineer at Shopee Singapore"
                    }
                    p { class: "section-copy",
                        "I have years of experience building scalable, distributed system for VNG and Shopee. "
                        "I help companies and organization build simple software solutions."
                    }
                    h3 { class: "section-heading", "I Value Knowledge and Experience" }
                    p { class: "section-copy",
                        "Always striving to be the best version of myself, I seek out new opportunities, "
                        "new environments and new challenges, try to be humble and learn from the best."
                    }
                }
                div { class: "grid__column grid__column--photo",
                    img {
                        class: "portrait",
                        src: PROFILE.photo,
                        alt: "{PROFILE.short_name}",
                    }
                }
            }
            div { class: "showcase",
                ProjectShowcase {}
            }
        }
    }
}

/// Footer: contact links, services list, name and role.
#[component]
fn SiteFooter() -> Element {
    let mailto = format!("mailto: {}", PROFILE.email);
    let tel = format!("tel: {}", PROFILE.phone);

    rsx! {
        footer { class: "segment segment--footer",
            div { class: "grid grid--footer",
                div { class: "grid__column",
                    h4 { class: "footer-heading", "About" }
                    ul { class: "link-list",
                        li {
                            a { href: mailto, "Email" }
                        }
                        li {
                            a { href: tel, "Phone" }
                        }
                    }
                }
                div { class: "grid__column",
                    h4 { class: "footer-heading", "Services" }
                    ul { class: "link-list",
                        for service in PROFILE.services {
                            li {
                                a { "{service}" }
                            }
                        }
                    }
                }
                div { class: "grid__column grid__column--wide",
                    h4 { class: "footer-heading", "{PROFILE.short_name}" }
                    p { "{PROFILE.role}" }
                }
            }
        }
    }
}
