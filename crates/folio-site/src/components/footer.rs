use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::Palette;

use crate::links;
use crate::site::use_site;
use crate::theme::use_theme;

use super::icons::social_glyph;

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let profile = &site.content.profile;
    let year = chrono::Local::now().year();
    let copyright = format!("© {} {}", year, profile.display_name().to_uppercase());
    let faint = Palette::tint(palette.foreground, "50");
    let back_to_top_ring = Palette::tint(palette.accent, "20");
    let mailto = profile.mailto();

    rsx! {
        footer {
            class: "footer",
            style: "background-color: {palette.background_alt};",

            h1 {
                class: "footer-name reveal-up",
                "aria-label": "{profile.display_name()}",
                span { style: "color: {palette.foreground};", "{profile.first_name} " }
                span { class: "gradient-text", style: "background-image: {palette.text_gradient};", "{profile.last_name}" }
            }

            div {
                class: "footer-columns",
                div {
                    class: "footer-contact",
                    p {
                        style: "color: {palette.foreground};",
                        "READY TO CREATE SOMETHING EXTRAORDINARY TOGETHER? DROP ME A LINE AND LET'S DISCUSS YOUR NEXT PROJECT."
                    }
                    button {
                        class: "footer-email",
                        onclick: move |_| links::open_external(&mailto),
                        span { class: "gradient-text", style: "background-image: {palette.text_gradient};", "{profile.email}" }
                        span { class: "footer-email-arrow", style: "color: {palette.accent};", "↗" }
                    }
                    div {
                        class: "status",
                        span { class: "status-dot pulse", style: "background-color: {palette.accent};" }
                        span { style: "color: {palette.foreground};", "AVAILABLE FOR NEW PROJECTS" }
                    }
                }

                div {
                    class: "footer-socials",
                    h3 { style: "color: {palette.foreground};", "FIND ME ON:" }
                    div {
                        class: "footer-social-links",
                        for social in profile.socials.iter() {
                            button {
                                key: "{social.name}",
                                class: "footer-social",
                                style: "color: {palette.foreground};",
                                onclick: {
                                    let url = social.url.clone();
                                    move |_| links::open_external(&url)
                                },
                                span { class: "footer-social-icon", style: "color: {palette.accent};", "{social_glyph(&social.name)}" }
                                span { "{social.name}" }
                                span { class: "footer-social-underline", style: "background-color: {palette.accent};" }
                            }
                        }
                    }
                }
            }

            div { class: "footer-divider grow-x", style: "background-color: {palette.accent};" }

            div {
                class: "footer-bottom",
                p { class: "copyright", style: "color: {faint};", "{copyright}" }
                button {
                    class: "back-to-top",
                    style: "color: {palette.foreground};",
                    onclick: move |_| links::follow("#top"),
                    span { "BACK TO TOP" }
                    span { class: "back-to-top-icon", style: "background-color: {back_to_top_ring};", "↑" }
                }
            }
        }
    }
}
