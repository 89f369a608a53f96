//! Call-to-action band between the skills and contact sections.

use dioxus::prelude::*;
use folio_core::{Palette, ThemeName};

use crate::links;
use crate::site::use_site;
use crate::theme::use_theme;

#[component]
pub fn CtaSection() -> Element {
    let site = use_site();
    let snapshot = use_theme().snapshot();
    let palette = snapshot.render_palette();
    let cta = &site.content.profile.cta;
    let body_color = Palette::tint(palette.foreground, "90");

    // Solid buttons on the dark neutral themes, gradient elsewhere
    let primary_style = match snapshot.name {
        ThemeName::Default | ThemeName::Velvet => format!(
            "background-color: {}; color: {};",
            palette.foreground, palette.background
        ),
        _ => format!(
            "background-image: {}; color: #ffffff; text-shadow: 0 1px 2px rgba(0, 0, 0, 0.3);",
            palette.text_gradient
        ),
    };
    let primary_href = cta.primary_href.clone();
    let secondary_href = cta.secondary_href.clone();

    rsx! {
        section {
            class: "cta",
            style: "background-color: {palette.background_alt};",

            div {
                class: "cta-inner fade-up",
                span { class: "cta-eyebrow", style: "color: {palette.accent};", "{cta.eyebrow}" }
                h2 {
                    class: "cta-heading",
                    style: "color: {palette.foreground};",
                    "{cta.heading} "
                    span {
                        class: "gradient-text cta-emphasis",
                        style: "background-image: {palette.text_gradient};",
                        "{cta.heading_emphasis}"
                    }
                    " {cta.heading_tail}"
                }
                p { class: "cta-body", style: "color: {body_color};", "{cta.body}" }
                div { class: "cta-line grow-x", style: "background-color: {palette.accent};" }

                div {
                    class: "cta-buttons",
                    button {
                        class: "cta-button cta-primary",
                        style: "{primary_style}",
                        onclick: move |_| links::follow(&primary_href),
                        "{cta.primary_label} ↗"
                    }
                    button {
                        class: "cta-button cta-secondary",
                        style: "color: {palette.foreground}; border-color: {palette.button_border};",
                        onclick: move |_| links::follow(&secondary_href),
                        "{cta.secondary_label}"
                    }
                }
            }
        }
    }
}
