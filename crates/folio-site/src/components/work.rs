//! Work showcase: one auto-rotating carousel per category.

use dioxus::core::Task;
use dioxus::prelude::*;
use folio_core::content::{ImageSide, ProjectSummary};
use folio_core::ui::timing::CAROUSEL_INTERVAL;
use folio_core::ui::{ModalState, Rotation};
use folio_core::Palette;
use tokio::time::sleep;

use crate::site::use_site;
use crate::theme::use_theme;

use super::ProjectModal;

#[component]
pub fn WorkSection() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let modal = use_signal(ModalState::default);
    let groups = site.content.projects.grouped();
    let title_color = Palette::tint(palette.foreground, "90");
    let subtitle_color = Palette::tint(palette.foreground, "70");

    rsx! {
        section {
            id: "work",
            class: "work",
            style: "background-color: {palette.background};",

            div {
                class: "section-intro centered",
                h2 {
                    class: "work-title",
                    style: "color: {title_color};",
                    "My "
                    span { class: "gradient-text", style: "background-image: {palette.text_gradient};", "Work" }
                }
                p {
                    class: "section-subtitle",
                    style: "color: {subtitle_color};",
                    "A showcase of my projects across different categories, each crafted with attention to detail and purpose"
                }
            }

            div {
                class: "work-categories",
                for group in groups {
                    CategoryCarousel {
                        key: "{group.title}",
                        title: group.title.to_string(),
                        projects: group.projects.into_iter().cloned().collect::<Vec<_>>(),
                        image_side: group.image_side,
                        modal,
                    }
                }
            }

            if let Some(id) = modal().project_id() {
                ProjectModal { project_id: id, modal }
            }
        }
    }
}

#[component]
fn CategoryCarousel(
    title: String,
    projects: Vec<ProjectSummary>,
    image_side: ImageSide,
    modal: Signal<ModalState>,
) -> Element {
    let palette = use_theme().snapshot().render_palette();
    let len = projects.len();
    let mut rotation = use_signal(move || Rotation::new(len));
    let site = use_site();

    let mut countdown = use_signal(|| None::<Task>);

    // One-shot countdown, re-armed on every index or hover change
    use_effect(move || {
        let state = rotation();
        if let Some(task) = countdown.write().take() {
            task.cancel();
        }
        if !state.is_running() {
            return;
        }
        let generation = state.generation();
        let task = spawn(async move {
            sleep(site.delay(CAROUSEL_INTERVAL)).await;
            rotation.write().advance(generation);
        });
        countdown.set(Some(task));
    });

    let current = rotation().index();
    let Some(project) = projects.get(current).cloned() else {
        return rsx! {};
    };
    let layout = match image_side {
        ImageSide::Left => "carousel carousel-image-left",
        ImageSide::Right => "carousel carousel-image-right",
    };
    let muted = Palette::tint(palette.foreground, "70");
    let project_id = project.id;
    let number = format!("{:02}", project.id);

    rsx! {
        div {
            class: "work-category",
            onmouseenter: move |_| rotation.write().set_paused(true),
            onmouseleave: move |_| rotation.write().set_paused(false),

            div {
                class: "category-title",
                h3 { style: "color: {palette.foreground};", "{title}" }
                div { class: "category-underline", style: "background-color: {palette.accent};" }
            }

            div {
                class: "{layout}",
                div {
                    class: "project-visual",
                    style: "background: {palette.background_gradient};",
                    div {
                        key: "{project.id}",
                        class: "project-visual-inner fade-in",
                        span { class: "project-visual-number", style: "color: {palette.foreground};", "{number}" }
                    }
                    div {
                        class: "carousel-dots",
                        for i in 0..len {
                            button {
                                key: "{i}",
                                class: if i == current { "carousel-dot carousel-dot-active" } else { "carousel-dot" },
                                "aria-label": "{dot_label(i)}",
                                onclick: move |_| rotation.write().jump(i),
                            }
                        }
                    }
                }

                div {
                    key: "{project.id}",
                    class: "project-copy fade-up",
                    h4 { style: "color: {palette.foreground};", "{project.title}" }
                    p { style: "color: {muted};", "{project.short_description}" }
                    div {
                        class: "tech-tags",
                        for tech in project.technologies.iter() {
                            span {
                                key: "{tech}",
                                class: "tech-tag",
                                style: "color: {palette.accent}; border-color: {palette.accent};",
                                "{tech}"
                            }
                        }
                    }
                    button {
                        class: "details-button",
                        style: "color: {palette.foreground}; border-color: {palette.button_border};",
                        onclick: move |_| {
                            let mut modal = modal;
                            tracing::debug!(project = project_id, "Opening project details");
                            modal.write().open(project_id);
                        },
                        "View details"
                    }
                }
            }
        }
    }
}

fn dot_label(index: usize) -> String {
    format!("Show project {}", index + 1)
}
