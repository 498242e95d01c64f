use dioxus::prelude::*;

use crate::domain::models::{PROJECTS, Project};

/// The two-card project showcase.
#[component]
pub fn ProjectShowcase() -> Element {
    rsx! {
        div { class: "cards",
            for project in PROJECTS {
                ProjectCard { project }
            }
        }
    }
}

/// One project card: linked title opening the hosted demo, meta line below.
#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card__content",
                a {
                    class: "card__header",
                    href: project.link,
                    target: "_blank",
                    rel: "noopener",
                    "{project.title}"
                }
                div { class: "card__meta", "{project.subtitle}" }
            }
        }
    }
}
