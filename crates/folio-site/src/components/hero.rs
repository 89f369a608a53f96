//! Landing section with the staggered name reveal.

use dioxus::prelude::*;
use folio_core::ui::timing::word_delay;
use folio_core::Palette;

use crate::links;
use crate::site::use_site;
use crate::theme::use_theme;

const FIRST_WORD_DELAY: f32 = 0.6;

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let palette = use_theme().snapshot().render_palette();
    let profile = &site.content.profile;
    let hero = &profile.hero;

    let muted = Palette::tint(palette.foreground, "70");
    let faint = Palette::tint(palette.foreground, "90");
    let badge_color = Palette::tint(palette.foreground, "80");
    let word_count = hero.greeting_words.len();
    let last_name_delay = word_delay(FIRST_WORD_DELAY, word_count);

    rsx! {
        section {
            id: "top",
            class: "hero",
            style: "background-color: {palette.background};",

            div { class: "hero-gradient fade-in", style: "background: {palette.background_gradient};" }

            div {
                class: "hero-content",
                h2 {
                    class: "hero-eyebrow fade-up",
                    style: "color: {faint};",
                    "{hero.eyebrow} "
                    span { class: "hero-eyebrow-emphasis", style: "color: {palette.foreground};", "{hero.eyebrow_emphasis}" }
                }

                h1 {
                    class: "hero-title",
                    style: "color: {muted};",
                    for (i, word) in hero.greeting_words.iter().enumerate() {
                        span {
                            key: "{i}",
                            class: "hero-word reveal-up",
                            style: "animation-delay: {word_delay(FIRST_WORD_DELAY, i)};",
                            "{word}"
                        }
                    }
                    span {
                        class: "hero-word gradient-text reveal-up",
                        style: "background-image: {palette.text_gradient}; animation-delay: {last_name_delay};",
                        "{profile.last_name}"
                    }
                }

                p { class: "hero-bio fade-up delay-3", style: "color: {muted};", "{hero.bio}" }

                button {
                    class: "hero-cta fade-up delay-4",
                    style: "border-color: {palette.button_border}; color: {palette.foreground};",
                    onclick: move |_| links::follow("#contact"),
                    "{hero.cta_label}"
                }

                p {
                    class: "hero-badges fade-up delay-5",
                    style: "color: {badge_color};",
                    for badge in hero.badges.iter() {
                        span {
                            key: "{badge}",
                            "{badge}"
                            span { class: "hero-badge-sep", "|" }
                        }
                    }
                    span {
                        class: "hero-status",
                        span { class: "status-dot pulse", style: "background-color: {palette.accent};" }
                        "{hero.status}"
                    }
                }
            }
        }
    }
}
