//! Services: a paged list of numbered cards with a detail panel for the
//! selected one.

use dioxus::prelude::*;
use folio_core::content::Service;
use folio_core::ui::Pager;
use folio_core::Palette;

use crate::site::use_site;
use crate::theme::use_theme;

use super::icons::service_glyph;

#[component]
pub fn ServicesSection() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let services = &site.content.services;
    let len = services.len();
    let mut pager = use_signal(move || Pager::new(len, Pager::SERVICES_PER_PAGE));

    let current = pager();
    let heading_color = Palette::tint(palette.foreground, "90");
    let muted = Palette::tint(palette.foreground, "70");
    let pattern = format!(
        "background-image: radial-gradient(circle at 1px 1px, {} 1px, transparent 0);",
        palette.accent
    );
    let page_label = format!("{} / {}", current.page() + 1, current.total_pages());
    let dots: Vec<(usize, String)> = (0..current.total_pages())
        .map(|page| {
            let color = if page == current.page() {
                palette.accent.to_string()
            } else {
                Palette::tint(palette.foreground, "20")
            };
            (page, color)
        })
        .collect();
    let active = services.get(current.active()).cloned();
    let visible: Vec<(usize, Service)> = current
        .visible()
        .filter_map(|i| services.get(i).cloned().map(|s| (i, s)))
        .collect();

    rsx! {
        section {
            id: "services",
            class: "services",
            style: "background-color: {palette.background_alt};",

            div { class: "services-pattern", style: "{pattern}" }

            div {
                class: "section-intro centered",
                h2 {
                    class: "services-title",
                    style: "color: {heading_color};",
                    "Services That "
                    span { class: "gradient-text", style: "background-image: {palette.text_gradient};", "Deliver" }
                }
                p {
                    class: "section-subtitle",
                    style: "color: {muted};",
                    "From concept to launch, everything you need to ship a product people enjoy using"
                }
            }

            div {
                class: "services-body",
                div {
                    class: "services-list",
                    for (index, service) in visible {
                        ServiceCard {
                            key: "{service.id}",
                            service,
                            active: index == current.active(),
                            onselect: move |_| {
                                pager.write().select(index);
                            },
                        }
                    }
                }

                if let Some(service) = active {
                    ServiceDetail { key: "{service.id}", service }
                }
            }

            div {
                class: "services-pager",
                button {
                    class: "pager-button",
                    style: "color: {palette.foreground}; border-color: {palette.button_border};",
                    disabled: !current.can_go_left(),
                    "aria-label": "Previous services",
                    onclick: move |_| {
                        if pager.write().go_left() {
                            tracing::debug!(page = pager.peek().page(), "Services page changed");
                        }
                    },
                    "←"
                }
                span { class: "pager-label", style: "color: {muted};", "{page_label}" }
                button {
                    class: "pager-button",
                    style: "color: {palette.foreground}; border-color: {palette.button_border};",
                    disabled: !current.can_go_right(),
                    "aria-label": "Next services",
                    onclick: move |_| {
                        if pager.write().go_right() {
                            tracing::debug!(page = pager.peek().page(), "Services page changed");
                        }
                    },
                    "→"
                }
            }

            div {
                class: "page-dots",
                for (page, color) in dots {
                    button {
                        key: "{page}",
                        class: "page-dot",
                        style: "background-color: {color};",
                        "aria-label": "{page_dot_label(page)}",
                        onclick: move |_| {
                            if pager.write().go_to(page) {
                                tracing::debug!(page, "Services page changed");
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service, active: bool, onselect: EventHandler<()>) -> Element {
    let palette = use_theme().snapshot().render_palette();
    let muted = Palette::tint(palette.foreground, "60");
    let border = if active {
        palette.accent.to_string()
    } else {
        Palette::tint(palette.foreground, "20")
    };
    let title_style = service.font_style.css();

    rsx! {
        button {
            class: if active { "service-card service-card-active" } else { "service-card" },
            style: "color: {palette.foreground}; border-color: {border};",
            onclick: move |_| onselect.call(()),
            onmouseenter: move |_| onselect.call(()),

            span { class: "service-number", style: "color: {muted};", "{service.number}" }
            span { class: "service-icon", style: "color: {palette.accent};", "{service_glyph(&service.icon)}" }
            div {
                class: "service-heading",
                h3 { class: "service-title", style: "{title_style}", "{service.title}" }
                p { class: "service-subtitle", style: "color: {muted};", "{service.subtitle}" }
            }
        }
    }
}

#[component]
fn ServiceDetail(service: Service) -> Element {
    let palette = use_theme().snapshot().render_palette();
    let muted = Palette::tint(palette.foreground, "80");
    let title_style = service.font_style.css();
    let facts: Vec<(&'static str, String)> = [
        ("Tech", service.tech.clone()),
        ("Clients", service.client_type.clone()),
        ("Result", service.result.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect();

    rsx! {
        article {
            class: "service-detail fade-up",
            style: "background-color: {palette.background}; color: {palette.foreground};",

            div {
                class: "service-detail-header",
                span { class: "service-detail-icon", style: "color: {palette.accent};", "{service_glyph(&service.icon)}" }
                span { class: "service-number", style: "color: {muted};", "{service.number}" }
            }
            h3 { class: "service-detail-title", style: "{title_style}", "{service.title}" }
            p { class: "service-detail-description", style: "color: {muted};", "{service.description}" }

            ul {
                class: "service-features",
                for feature in service.features.iter() {
                    li {
                        key: "{feature}",
                        span { class: "feature-dot", style: "background-color: {palette.accent};" }
                        "{feature}"
                    }
                }
            }

            if !facts.is_empty() {
                dl {
                    class: "service-facts",
                    for (label, value) in facts {
                        div {
                            key: "{label}",
                            class: "service-fact",
                            dt { style: "color: {muted};", "{label}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}

fn page_dot_label(page: usize) -> String {
    format!("Go to services page {}", page + 1)
}
