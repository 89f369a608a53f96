//! Full project write-up shown over the work section.

use dioxus::prelude::*;
use folio_core::ui::ModalState;
use folio_core::Palette;

use crate::site::use_site;
use crate::theme::use_theme;

#[component]
pub fn ProjectModal(project_id: u32, modal: Signal<ModalState>) -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let catalog = &site.content.projects;

    let Some(details) = catalog.details(project_id) else {
        tracing::warn!(project_id, "No details for project");
        return rsx! {};
    };
    let category = catalog
        .summary(project_id)
        .map(|s| s.category.as_str())
        .unwrap_or_default();
    let muted = Palette::tint(palette.foreground, "b3");
    let mut modal = modal;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| modal.write().close(),
            div {
                class: "modal-dialog",
                style: "background-color: {palette.background_alt}; color: {palette.foreground};",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    div {
                        span { class: "modal-category", style: "color: {palette.accent};", "{category}" }
                        h3 { "{details.title}" }
                    }
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| modal.write().close(),
                        "✕"
                    }
                }

                div {
                    class: "modal-body",
                    p { class: "modal-overview", style: "color: {muted};", "{details.overview}" }

                    div {
                        class: "modal-columns",
                        div {
                            h4 { "The Problem" }
                            p { style: "color: {muted};", "{details.problem}" }
                        }
                        div {
                            h4 { "The Solution" }
                            p { style: "color: {muted};", "{details.solution}" }
                        }
                    }

                    DetailList { title: "What I Built", items: details.what_i_built.clone() }
                    DetailList { title: "Key Features", items: details.key_features.clone() }
                    DetailList { title: "Technical Highlights", items: details.technical_highlights.clone() }
                    DetailList { title: "Impact & Results", items: details.impact_results.clone() }

                    div {
                        class: "modal-section",
                        h4 { "Technologies" }
                        div {
                            class: "tech-tags",
                            for tech in details.technologies_used.iter() {
                                span {
                                    key: "{tech}",
                                    class: "tech-tag",
                                    style: "color: {palette.accent}; border-color: {palette.accent};",
                                    "{tech}"
                                }
                            }
                        }
                    }

                    div {
                        class: "modal-section",
                        h4 { "My Role" }
                        p { style: "color: {muted};", "{details.my_role}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailList(title: String, items: Vec<String>) -> Element {
    let palette = use_theme().snapshot().render_palette();
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-section",
            h4 { "{title}" }
            ul {
                class: "detail-list",
                for (i, item) in items.iter().enumerate() {
                    li {
                        key: "{i}",
                        span { class: "detail-bullet", style: "background-color: {palette.accent};" }
                        "{item}"
                    }
                }
            }
        }
    }
}
